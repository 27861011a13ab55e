//! JSON implementation of the value table repository.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    Result, adapters::StoredValueTable, error::Error, ports::ValueTableRepository,
};

/// JSON-backed value table repository.
///
/// Dense tables are stored as a plain array, so a table exported from a
/// numeric array (`tolist()` and a JSON dump) loads unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRepository;

impl JsonRepository {
    pub fn new() -> Self {
        Self
    }
}

impl ValueTableRepository for JsonRepository {
    /// Refuses tables holding NaN or infinite values before touching the
    /// file; `serde_json` would write them as `null` and the file could not
    /// be loaded back.
    fn save(&self, table: &StoredValueTable, path: &Path) -> Result<()> {
        if let Some((code, value)) = table.first_non_finite() {
            return Err(Error::InvalidValueTable {
                message: format!("{path:?}: entry {code} is {value}, which JSON cannot store"),
            });
        }

        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create file {path:?}"),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, table)?;
        writer.flush()?;
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<StoredValueTable> {
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open file {path:?}"),
            source,
        })?;

        serde_json::from_reader(BufReader::new(file)).map_err(|e| Error::InvalidValueTable {
            message: format!("{path:?}: {e}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::{
        adapters::{DenseValueTable, SparseValueTable},
        ports::ValueTable,
        types::StateCode,
    };

    #[test]
    fn test_json_roundtrip_sparse() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("vo.json");
        let code = StateCode::new(42).unwrap();

        let repo = JsonRepository::new();
        let table: StoredValueTable = SparseValueTable::new().with(code, 0.9).into();
        repo.save(&table, &path).expect("Failed to save");

        let loaded = repo.load(&path).expect("Failed to load");
        assert_eq!(loaded.value(code), 0.9);
    }

    #[test]
    fn test_json_roundtrip_dense() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("vx.json");

        let mut dense = DenseValueTable::zeros();
        dense.set(StateCode::new(81).unwrap(), 1.0);
        let repo = JsonRepository::new();
        repo.save(&dense.clone().into(), &path).expect("Failed to save");

        let loaded = repo.load(&path).expect("Failed to load");
        assert_eq!(loaded, StoredValueTable::Dense(dense));
    }

    #[test]
    fn test_save_refuses_non_finite_entries() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("vx.json");

        let mut dense = DenseValueTable::zeros();
        dense.set(StateCode::new(5).unwrap(), f64::NAN);
        dense.set(StateCode::new(81).unwrap(), 1.0);
        let repo = JsonRepository::new();

        let result = repo.save(&dense.into(), &path);
        assert!(matches!(result, Err(Error::InvalidValueTable { .. })));
        assert!(!path.exists());

        let sparse: StoredValueTable = SparseValueTable::new()
            .with(StateCode::new(7).unwrap(), f64::INFINITY)
            .into();
        assert!(repo.save(&sparse, &path).is_err());
    }

    #[test]
    fn test_load_nonexistent_returns_error() {
        let repo = JsonRepository::new();
        let result = repo.load(Path::new("/tmp/nonexistent_value_table_12345.json"));
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_load_malformed_returns_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("bad.json");
        std::fs::write(&path, "[1.0, 2.0, 3.0]").unwrap();

        let result = JsonRepository::new().load(&path);
        assert!(matches!(result, Err(Error::InvalidValueTable { .. })));
    }
}
