//! Board representation, state codes and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    error::BoardViolation,
    types::{Coord, STATE_SPACE, StateCode},
};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '-' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// Numeric symbol used in request grids: `0` empty, `-1` X, `1` O.
    pub fn to_symbol(self) -> i64 {
        match self {
            Cell::Empty => 0,
            Cell::X => -1,
            Cell::O => 1,
        }
    }

    pub fn from_symbol(symbol: i64) -> Option<Cell> {
        match symbol {
            0 => Some(Cell::Empty),
            -1 => Some(Cell::X),
            1 => Some(Cell::O),
            _ => None,
        }
    }

    /// Base-3 digit of this cell in a state code.
    fn digit(self) -> u32 {
        match self {
            Cell::Empty => 0,
            Cell::X => 1,
            Cell::O => 2,
        }
    }
}

/// A player in the game. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

impl FromStr for Player {
    type Err = crate::Error;

    /// Parse a player token (`x` or `o`, case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Player::X),
            "o" => Ok(Player::O),
            _ => Err(crate::Error::InvalidPlayer {
                player: s.to_string(),
            }),
        }
    }
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceCount {
    pub x: usize,
    pub o: usize,
    pub empty: usize,
}

/// A 3x3 grid of cells stored row-major.
///
/// A `Board` by itself carries no validity guarantee: it is whatever was
/// written into it. The state machine is what enforces the game rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    pub cells: [Cell; 9],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Build a board from a request grid of numeric symbols.
    ///
    /// Only shape and symbols are checked here; game-rule validation happens
    /// in [`Board::validate`].
    ///
    /// # Errors
    ///
    /// Returns the first [`BoardViolation`] found scanning rows in order.
    pub fn from_grid<R: AsRef<[i64]>>(grid: &[R]) -> Result<Self, BoardViolation> {
        if grid.len() != 3 {
            return Err(BoardViolation::RowCount { got: grid.len() });
        }

        let mut cells = [Cell::Empty; 9];
        for (row, values) in grid.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != 3 {
                return Err(BoardViolation::ColumnCount {
                    row,
                    got: values.len(),
                });
            }
            for (col, &symbol) in values.iter().enumerate() {
                cells[row * 3 + col] = Cell::from_symbol(symbol).ok_or(
                    BoardViolation::UnknownSymbol { row, col, symbol },
                )?;
            }
        }

        Ok(Board { cells })
    }

    /// Render the board as a request grid of numeric symbols.
    pub fn to_grid(&self) -> Vec<Vec<i64>> {
        self.cells
            .chunks(3)
            .map(|row| row.iter().map(|cell| cell.to_symbol()).collect())
            .collect()
    }

    /// Create a board from a 9-character string such as `"XO..X...."`.
    ///
    /// Whitespace is filtered out, so rows may be separated by newlines or
    /// spaces.
    ///
    /// # Errors
    ///
    /// Returns an error if there are not exactly 9 cells or a character is
    /// not a recognized cell.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    /// Count pieces on the board.
    pub fn piece_count(&self) -> PieceCount {
        let mut count = PieceCount {
            x: 0,
            o: 0,
            empty: 0,
        };
        for cell in &self.cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => count.empty += 1,
            }
        }
        count
    }

    /// Player whose turn it is, derived from the piece counts.
    ///
    /// X moves when the counts are equal, O when X is ahead. Only meaningful
    /// for boards that passed [`Board::validate`].
    pub fn side_to_move(&self) -> Player {
        let count = self.piece_count();
        if count.x > count.o {
            Player::O
        } else {
            Player::X
        }
    }

    /// Get cell at a coordinate
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.index()]
    }

    pub(crate) fn set(&mut self, coord: Coord, cell: Cell) {
        self.cells[coord.index()] = cell;
    }

    /// Check if a coordinate is empty
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.get(coord) == Cell::Empty
    }

    /// Check if no empty cell remains
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Get all empty coordinates in row-major order
    pub fn empty_coords(&self) -> Vec<Coord> {
        Coord::all().filter(|&coord| self.is_empty(coord)).collect()
    }

    /// Encode the board as a base-3 state code.
    ///
    /// Cell `k` (row-major) contributes `digit * 3^k`, so the top-left cell
    /// is the least significant digit.
    pub fn encode(&self) -> StateCode {
        let code = self
            .cells
            .iter()
            .rev()
            .fold(0u32, |acc, cell| acc * 3 + cell.digit());
        StateCode::from_raw(code)
    }

    /// Decode a state code back into a board.
    ///
    /// Any code below 3^9 decodes; turn counts are not checked.
    pub fn decode(code: StateCode) -> Result<Self, crate::Error> {
        let mut remaining = code.value();
        if remaining >= STATE_SPACE {
            return Err(crate::Error::InvalidStateCode {
                code: remaining,
                limit: STATE_SPACE,
            });
        }

        let mut cells = [Cell::Empty; 9];
        for cell in &mut cells {
            *cell = match remaining % 3 {
                0 => Cell::Empty,
                1 => Cell::X,
                _ => Cell::O,
            };
            remaining /= 3;
        }
        Ok(Board { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
