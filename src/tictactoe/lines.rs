//! Winning line analysis

use super::{Cell, Player};

/// Winning line indices on the 3x3 board (row-major)
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Outcome of a full scan over all eight lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineScan {
    pub x_wins: bool,
    pub o_wins: bool,
}

impl LineScan {
    /// The single winner, if exactly one player has a line.
    pub fn winner(&self) -> Option<Player> {
        match (self.x_wins, self.o_wins) {
            (true, false) => Some(Player::X),
            (false, true) => Some(Player::O),
            _ => None,
        }
    }

    pub fn is_double_win(&self) -> bool {
        self.x_wins && self.o_wins
    }
}

/// Utility for analyzing winning lines
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a player has three in a row
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        Self::completed_lines(cells, player).next().is_some()
    }

    /// Lines fully occupied by the player
    pub fn completed_lines(
        cells: &[Cell; 9],
        player: Player,
    ) -> impl Iterator<Item = &'static [usize; 3]> + '_ {
        let target = player.to_cell();
        let lines: &'static [[usize; 3]; 8] = &WINNING_LINES;
        lines
            .iter()
            .filter(move |line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// Scan every line for both players
    pub fn scan(cells: &[Cell; 9]) -> LineScan {
        LineScan {
            x_wins: Self::has_won(cells, Player::X),
            o_wins: Self::has_won(cells, Player::O),
        }
    }
}
