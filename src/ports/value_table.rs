//! Value table port - read-only state value estimates

use std::{collections::HashMap, sync::Arc};

use crate::types::StateCode;

/// Read-only mapping from state code to a value estimate for one player.
///
/// Tables are never mutated by the engine and may be shared between
/// threads; each selector only reads from its table.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use tictactoe_engine::{ports::ValueTable, tictactoe::Board};
///
/// let center = Board::from_string("....X....")?.encode();
/// let table: HashMap<_, _> = [(center, 1.0)].into_iter().collect();
///
/// assert_eq!(table.value(center), 1.0);
/// assert_eq!(table.value(Board::new().encode()), 0.0);
/// # Ok::<(), tictactoe_engine::Error>(())
/// ```
pub trait ValueTable: Send + Sync {
    /// Stored estimate for `code`, if the table has one.
    fn get(&self, code: StateCode) -> Option<f64>;

    /// Estimate for `code`, with missing and NaN entries read as `0.0`.
    fn value(&self, code: StateCode) -> f64 {
        match self.get(code) {
            Some(value) if !value.is_nan() => value,
            _ => 0.0,
        }
    }
}

impl ValueTable for [f64] {
    fn get(&self, code: StateCode) -> Option<f64> {
        <[f64]>::get(self, code.index()).copied()
    }
}

impl ValueTable for Vec<f64> {
    fn get(&self, code: StateCode) -> Option<f64> {
        self.as_slice().get(code.index()).copied()
    }
}

impl<S: std::hash::BuildHasher + Send + Sync> ValueTable for HashMap<StateCode, f64, S> {
    fn get(&self, code: StateCode) -> Option<f64> {
        HashMap::get(self, &code).copied()
    }
}

impl<T: ValueTable + ?Sized> ValueTable for &T {
    fn get(&self, code: StateCode) -> Option<f64> {
        (**self).get(code)
    }
}

impl<T: ValueTable + ?Sized> ValueTable for Box<T> {
    fn get(&self, code: StateCode) -> Option<f64> {
        (**self).get(code)
    }
}

impl<T: ValueTable + ?Sized> ValueTable for Arc<T> {
    fn get(&self, code: StateCode) -> Option<f64> {
        (**self).get(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(value: u32) -> StateCode {
        StateCode::new(value).unwrap()
    }

    #[test]
    fn test_slice_lookup() {
        let values = vec![0.5, -1.0];
        assert_eq!(values.value(code(0)), 0.5);
        assert_eq!(values.value(code(1)), -1.0);
        // Past the end reads as missing
        assert_eq!(values.get(code(2)), None);
        assert_eq!(values.value(code(2)), 0.0);
    }

    #[test]
    fn test_nan_reads_as_zero() {
        let values = vec![f64::NAN];
        assert_eq!(values.value(code(0)), 0.0);
    }

    #[test]
    fn test_shared_table() {
        let table: Arc<dyn ValueTable> = Arc::new(vec![0.25]);
        let clone = Arc::clone(&table);
        assert_eq!(clone.value(code(0)), 0.25);
    }
}
