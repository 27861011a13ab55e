//! Concrete value table containers.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    error::Error,
    ports::ValueTable,
    types::{STATE_SPACE, StateCode},
};

/// Array-backed table with one entry per state code.
///
/// This is the layout a trainer exports: index `i` holds the value of the
/// board whose state code is `i`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct DenseValueTable {
    values: Vec<f64>,
}

impl DenseValueTable {
    /// Wrap a full array of 3^9 values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidValueTable`] if the length is not 3^9.
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if values.len() != STATE_SPACE as usize {
            return Err(Error::InvalidValueTable {
                message: format!(
                    "dense table has {} entries, expected {STATE_SPACE}",
                    values.len()
                ),
            });
        }
        Ok(Self { values })
    }

    /// A table of all zeros.
    pub fn zeros() -> Self {
        Self {
            values: vec![0.0; STATE_SPACE as usize],
        }
    }

    /// Overwrite one entry.
    pub fn set(&mut self, code: StateCode, value: f64) {
        self.values[code.index()] = value;
    }
}

impl TryFrom<Vec<f64>> for DenseValueTable {
    type Error = Error;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::new(values)
    }
}

impl From<DenseValueTable> for Vec<f64> {
    fn from(table: DenseValueTable) -> Self {
        table.values
    }
}

impl ValueTable for DenseValueTable {
    fn get(&self, code: StateCode) -> Option<f64> {
        self.values.as_slice().get(code.index()).copied()
    }
}

/// Map-backed table holding only the states that were visited.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SparseValueTable {
    values: HashMap<StateCode, f64>,
}

impl SparseValueTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, code: StateCode, value: f64) -> Self {
        self.values.insert(code, value);
        self
    }
}

impl FromIterator<(StateCode, f64)> for SparseValueTable {
    fn from_iter<I: IntoIterator<Item = (StateCode, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl ValueTable for SparseValueTable {
    fn get(&self, code: StateCode) -> Option<f64> {
        self.values.get(&code).copied()
    }
}

/// Either table layout, as read from or written to storage.
///
/// Serialized untagged: a dense table is a plain array of numbers, a sparse
/// table a map from state code to number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredValueTable {
    Dense(DenseValueTable),
    Sparse(SparseValueTable),
}

impl StoredValueTable {
    /// Lowest state code holding a NaN or infinite value, if any.
    ///
    /// JSON has no encoding for these, so text storage refuses them.
    pub fn first_non_finite(&self) -> Option<(StateCode, f64)> {
        match self {
            StoredValueTable::Dense(table) => table
                .values
                .iter()
                .enumerate()
                .find(|(_, value)| !value.is_finite())
                .map(|(index, &value)| (StateCode::from_raw(index as u32), value)),
            StoredValueTable::Sparse(table) => table
                .values
                .iter()
                .filter(|(_, value)| !value.is_finite())
                .min_by_key(|(code, _)| **code)
                .map(|(&code, &value)| (code, value)),
        }
    }
}

impl ValueTable for StoredValueTable {
    fn get(&self, code: StateCode) -> Option<f64> {
        match self {
            StoredValueTable::Dense(table) => table.get(code),
            StoredValueTable::Sparse(table) => table.get(code),
        }
    }
}

impl From<DenseValueTable> for StoredValueTable {
    fn from(table: DenseValueTable) -> Self {
        StoredValueTable::Dense(table)
    }
}

impl From<SparseValueTable> for StoredValueTable {
    fn from(table: SparseValueTable) -> Self {
        StoredValueTable::Sparse(table)
    }
}
