//! Board state machine: the live board plus its derived terminal status

use tracing::{debug, instrument, warn};

use super::{
    board::{Board, Player},
    lines::LineAnalyzer,
};
use crate::{
    error::{Error, MoveViolation, Result},
    types::{Coord, StateCode},
};

/// Owns one board and keeps `ended`/`winner` in step with it.
///
/// The derived fields are recomputed from the whole board after every
/// mutation. A fresh machine reports `ended == false` only because its board
/// is empty; load the real board with [`set_state`](Self::set_state) before
/// asking about the game.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardStateMachine {
    board: Board,
    ended: bool,
    winner: Option<Player>,
}

impl BoardStateMachine {
    /// Create a machine holding an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the board
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Replace the board with a request grid of numeric symbols.
    ///
    /// On error the previous board and derived fields are untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBoardState`] for a grid that is not 3x3,
    /// contains an unknown symbol, breaks the turn-count rule or shows a
    /// completed line for both players.
    #[instrument(level = "debug", skip(self, grid))]
    pub fn set_state<R: AsRef<[i64]>>(&mut self, grid: &[R]) -> Result<()> {
        let board = Board::from_grid(grid).inspect_err(|violation| {
            warn!(%violation, "rejected board grid");
        })?;
        self.set_board(board)
    }

    /// Replace the board with an already parsed [`Board`].
    ///
    /// Same validation and atomicity as [`set_state`](Self::set_state).
    pub fn set_board(&mut self, board: Board) -> Result<()> {
        board.validate().inspect_err(|violation| {
            warn!(%violation, board = %board, "rejected board");
        })?;
        *self = Self::from_valid_board(board);
        debug!(ended = self.ended, winner = ?self.winner, "board loaded");
        Ok(())
    }

    /// Empty coordinates in row-major order, or none once the game has ended
    pub fn legal_moves(&self) -> Vec<Coord> {
        if self.ended {
            return Vec::new();
        }
        self.board.empty_coords()
    }

    /// Place `player`'s mark at `coord`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalMove`] if the game has ended, the cell is
    /// occupied, or `player` is not the side to move. Nothing is changed on
    /// error.
    #[instrument(level = "debug", skip_all, fields(coord = %coord, player = %player))]
    pub fn apply_move(&mut self, coord: Coord, player: Player) -> Result<()> {
        let reason = if self.ended {
            Some(MoveViolation::GameOver)
        } else if !self.board.is_empty(coord) {
            Some(MoveViolation::Occupied)
        } else if player != self.side_to_move() {
            Some(MoveViolation::WrongTurn {
                expected: self.side_to_move(),
                got: player,
            })
        } else {
            None
        };

        if let Some(reason) = reason {
            return Err(Error::IllegalMove {
                coord: Some(coord),
                reason,
            });
        }

        self.board.set(coord, player.to_cell());
        self.recompute();
        Ok(())
    }

    /// Successor machine after the side to move plays `coord`.
    ///
    /// `self` is left untouched.
    pub fn candidate(&self, coord: Coord) -> Result<BoardStateMachine> {
        let mut next = self.clone();
        next.apply_move(coord, self.side_to_move())?;
        Ok(next)
    }

    /// Whether the game is over (a winner exists or the board is full)
    pub fn ended(&self) -> bool {
        self.ended
    }

    /// The winner; `None` while ongoing or after a draw
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose turn it is, from the piece counts
    pub fn side_to_move(&self) -> Player {
        self.board.side_to_move()
    }

    /// State code of the current board
    pub fn encode(&self) -> StateCode {
        self.board.encode()
    }

    fn from_valid_board(board: Board) -> Self {
        let mut machine = BoardStateMachine {
            board,
            ended: false,
            winner: None,
        };
        machine.recompute();
        machine
    }

    /// Full rescan of all eight lines
    fn recompute(&mut self) {
        let scan = LineAnalyzer::scan(&self.board.cells);
        self.winner = scan.winner();
        self.ended = self.winner.is_some() || self.board.is_full();
    }
}

impl TryFrom<Board> for BoardStateMachine {
    type Error = Error;

    fn try_from(board: Board) -> Result<Self> {
        board.validate().map_err(Error::InvalidBoardState)?;
        Ok(Self::from_valid_board(board))
    }
}
