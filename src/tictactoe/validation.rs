//! Board state validation logic

use super::{
    board::Board,
    lines::LineAnalyzer,
};
use crate::error::BoardViolation;

impl Board {
    /// Check the board against the turn-count and double-win rules.
    ///
    /// X moves first, so X's count must equal O's or exceed it by one, and
    /// at most one player may hold a completed line.
    ///
    /// # Errors
    ///
    /// Returns the first [`BoardViolation`] found.
    pub fn validate(&self) -> Result<(), BoardViolation> {
        let count = self.piece_count();
        if !(count.x == count.o || count.x == count.o + 1) {
            return Err(BoardViolation::PieceCounts {
                x_count: count.x,
                o_count: count.o,
            });
        }

        if LineAnalyzer::scan(&self.cells).is_double_win() {
            return Err(BoardViolation::DoubleWin);
        }

        Ok(())
    }

    /// Check if the board state is valid according to the game rules
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}
