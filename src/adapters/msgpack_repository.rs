//! MessagePack implementation of the value table repository.
//!
//! Compact binary storage through rmp_serde; a dense table is roughly a
//! quarter of its JSON size.

use std::{fs::File, path::Path};

use crate::{
    Result, adapters::StoredValueTable, error::Error, ports::ValueTableRepository,
};

/// MessagePack-based value table repository.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use tictactoe_engine::adapters::{DenseValueTable, MsgPackRepository};
/// use tictactoe_engine::ports::ValueTableRepository;
///
/// let repo = MsgPackRepository;
/// repo.save(&DenseValueTable::zeros().into(), Path::new("vx.msgpack"))?;
/// let loaded = repo.load(Path::new("vx.msgpack"))?;
/// # Ok::<(), tictactoe_engine::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MsgPackRepository;

impl MsgPackRepository {
    pub fn new() -> Self {
        Self
    }
}

impl ValueTableRepository for MsgPackRepository {
    fn save(&self, table: &StoredValueTable, path: &Path) -> Result<()> {
        let mut file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create file {path:?}"),
            source,
        })?;

        rmp_serde::encode::write(&mut file, table).map_err(|e| Error::SerializationContext {
            operation: "serialize value table to MessagePack".to_string(),
            message: e.to_string(),
        })?;

        Ok(())
    }

    fn load(&self, path: &Path) -> Result<StoredValueTable> {
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open file {path:?}"),
            source,
        })?;

        rmp_serde::decode::from_read(&file).map_err(|e| Error::InvalidValueTable {
            message: format!("{path:?}: {e}"),
        })
    }
}
