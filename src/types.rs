//! Newtype wrappers for board coordinates and state codes.

use std::fmt;

use serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, Visitor},
};

/// Number of distinct state codes (3^9).
pub const STATE_SPACE: u32 = 19_683;

/// A cell coordinate on the 3x3 board.
///
/// Serializes as a `[row, col]` pair, matching the move tuple the request
/// layer returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    /// Create a new coordinate, validating it's within board bounds.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidCoord`] if either component is >= 3.
    pub fn new(row: usize, col: usize) -> Result<Self, crate::Error> {
        if row < 3 && col < 3 {
            Ok(Coord { row, col })
        } else {
            Err(crate::Error::InvalidCoord { row, col })
        }
    }

    /// Only for components already known to be in bounds.
    pub(crate) const fn at(row: usize, col: usize) -> Self {
        debug_assert!(row < 3 && col < 3);
        Coord { row, col }
    }

    /// Build a coordinate from a row-major index (0-8).
    pub fn from_index(index: usize) -> Result<Self, crate::Error> {
        if index < 9 {
            Ok(Coord {
                row: index / 3,
                col: index % 3,
            })
        } else {
            Err(crate::Error::InvalidCoord {
                row: index / 3,
                col: index % 3,
            })
        }
    }

    /// All nine coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..9).map(|index| Coord::at(index / 3, index % 3))
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Row-major index (0-8).
    pub fn index(&self) -> usize {
        self.row * 3 + self.col
    }
}

impl TryFrom<(usize, usize)> for Coord {
    type Error = crate::Error;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Coord::new(row, col)
    }
}

impl From<Coord> for (usize, usize) {
    fn from(coord: Coord) -> Self {
        (coord.row, coord.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Canonical base-3 encoding of a board, in `[0, 3^9)`.
///
/// Used only as a lookup key into value tables.
///
/// Deserializes from an integer or a decimal string, so codes can be map
/// keys in JSON as well as in MessagePack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "u32")]
pub struct StateCode(u32);

impl StateCode {
    /// Wrap a raw code, validating it's below 3^9.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidStateCode`] for codes >= 3^9.
    pub fn new(value: u32) -> Result<Self, crate::Error> {
        if value < STATE_SPACE {
            Ok(StateCode(value))
        } else {
            Err(crate::Error::InvalidStateCode {
                code: value,
                limit: STATE_SPACE,
            })
        }
    }

    /// Only for codes produced by [`crate::tictactoe::Board::encode`].
    pub(crate) const fn from_raw(value: u32) -> Self {
        StateCode(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Index into a dense table.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<u32> for StateCode {
    type Error = crate::Error;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        StateCode::new(value)
    }
}

impl<'de> Deserialize<'de> for StateCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Clone, Copy)]
        struct CodeVisitor;

        impl Visitor<'_> for CodeVisitor {
            type Value = StateCode;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a state code below {STATE_SPACE}")
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<StateCode, E> {
                u32::try_from(value)
                    .ok()
                    .and_then(|v| StateCode::new(v).ok())
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Unsigned(value), &self))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<StateCode, E> {
                u64::try_from(value)
                    .map_err(|_| E::invalid_value(de::Unexpected::Signed(value), &self))
                    .and_then(|v| self.visit_u64(v))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<StateCode, E> {
                value
                    .parse::<u64>()
                    .map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))
                    .and_then(|v| self.visit_u64(v))
            }
        }

        deserializer.deserialize_any(CodeVisitor)
    }
}

impl From<StateCode> for u32 {
    fn from(code: StateCode) -> Self {
        code.0
    }
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
