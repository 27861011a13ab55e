//! Repository port for value table persistence.

use std::path::Path;

use crate::{Result, adapters::StoredValueTable};

/// Port for loading and saving value tables.
///
/// The engine only reads tables; where they come from (files, memory,
/// a database) is decided by the adapter.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use tictactoe_engine::{adapters::JsonRepository, ports::ValueTableRepository};
///
/// let repo = JsonRepository::new();
/// let vx = repo.load(Path::new("vx.json"))?;
/// # Ok::<(), tictactoe_engine::Error>(())
/// ```
pub trait ValueTableRepository {
    /// Save a table to persistent storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be written or serialization fails.
    fn save(&self, table: &StoredValueTable, path: &Path) -> Result<()>;

    /// Load a table from persistent storage.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file does not exist or cannot be read
    /// - The contents are neither a dense array of 3^9 numbers nor a map
    ///   from state codes to numbers
    fn load(&self, path: &Path) -> Result<StoredValueTable>;
}
