//! Ports (trait boundaries) for external dependencies.
//!
//! Value estimates and their storage are supplied from outside the rule
//! engine; these traits are the seams adapters plug into.

pub mod repository;
pub mod value_table;

pub use repository::ValueTableRepository;
pub use value_table::ValueTable;
