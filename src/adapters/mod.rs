//! Adapters implementing domain ports.
//!
//! Table containers implement [`ValueTable`](crate::ports::ValueTable);
//! repositories implement
//! [`ValueTableRepository`](crate::ports::ValueTableRepository).

pub mod json_repository;
pub mod msgpack_repository;
pub mod value_tables;

pub use json_repository::JsonRepository;
pub use msgpack_repository::MsgPackRepository;
pub use value_tables::{DenseValueTable, SparseValueTable, StoredValueTable};
