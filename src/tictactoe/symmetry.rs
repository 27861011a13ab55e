//! D4 symmetry group operations on boards and coordinates

use serde::{Deserialize, Serialize};

use super::board::{Board, Cell};
use crate::types::Coord;

/// D4 symmetry transformation (dihedral group of the square)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct D4Transform {
    /// Rotation in degrees (0, 90, 180, 270)
    pub rotation: u16,
    /// Whether to mirror left-right before rotating
    pub reflection: bool,
}

impl D4Transform {
    /// Create identity transform
    pub fn identity() -> Self {
        D4Transform {
            rotation: 0,
            reflection: false,
        }
    }

    /// Get all 8 D4 transforms
    pub fn all() -> [D4Transform; 8] {
        let mut transforms = [Self::identity(); 8];
        for (i, rotation) in [0, 90, 180, 270].into_iter().enumerate() {
            transforms[2 * i] = D4Transform {
                rotation,
                reflection: false,
            };
            transforms[2 * i + 1] = D4Transform {
                rotation,
                reflection: true,
            };
        }
        transforms
    }

    /// Apply transform to a coordinate
    pub fn transform_coord(&self, coord: Coord) -> Coord {
        let (mut row, mut col) = (coord.row(), coord.col());

        if self.reflection {
            col = 2 - col;
        }

        // Clockwise quarter turns
        for _ in 0..(self.rotation / 90) {
            let new_row = col;
            let new_col = 2 - row;
            row = new_row;
            col = new_col;
        }

        Coord::at(row, col)
    }

    /// Get the inverse transform
    pub fn inverse(&self) -> D4Transform {
        if self.reflection {
            // reflect-then-rotate compositions are involutions
            *self
        } else {
            D4Transform {
                rotation: (360 - self.rotation) % 360,
                reflection: false,
            }
        }
    }

    /// Apply transform to a board
    pub fn apply(&self, board: &Board) -> Board {
        let mut cells = [Cell::Empty; 9];
        for coord in Coord::all() {
            cells[self.transform_coord(coord).index()] = board.get(coord);
        }
        Board { cells }
    }
}

impl Board {
    /// Apply a D4 transform to the board
    pub fn transform(&self, t: &D4Transform) -> Self {
        t.apply(self)
    }
}
