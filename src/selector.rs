//! Greedy move selection guided by a state value table
//!
//! For each legal move the selector builds the successor position, looks up
//! its state code in the player's table and plays the move with the highest
//! value. Each player's table already encodes that player's preferences, so
//! both sides maximize and the selector never flips signs.

use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    error::{Error, MoveViolation, Result},
    ports::ValueTable,
    tictactoe::{BoardStateMachine, Player},
    types::{Coord, StateCode},
};

/// A legal move with the value of the position it leads to
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CandidateValue {
    pub coord: Coord,
    pub code: StateCode,
    pub value: f64,
}

/// Plays one mark using that mark's value table.
#[derive(Debug, Clone)]
pub struct ValueGuidedSelector<T> {
    player: Player,
    table: T,
}

impl<T: ValueTable> ValueGuidedSelector<T> {
    pub fn new(player: Player, table: T) -> Self {
        Self { player, table }
    }

    /// Value every legal move without touching `machine`.
    ///
    /// Candidates come back in the row-major order of
    /// [`BoardStateMachine::legal_moves`].
    ///
    /// # Errors
    ///
    /// - [`Error::NoLegalMove`] if the game has ended or no cell is free
    /// - [`Error::IllegalMove`] if it is not this selector's turn
    pub fn evaluate(&self, machine: &BoardStateMachine) -> Result<Vec<CandidateValue>> {
        let legal_moves = machine.legal_moves();
        if machine.ended() || legal_moves.is_empty() {
            return Err(Error::NoLegalMove);
        }

        let to_move = machine.side_to_move();
        if to_move != self.player {
            return Err(Error::IllegalMove {
                coord: None,
                reason: MoveViolation::WrongTurn {
                    expected: to_move,
                    got: self.player,
                },
            });
        }

        legal_moves
            .into_iter()
            .map(|coord| {
                let code = machine.candidate(coord)?.encode();
                let value = self.table.value(code);
                debug!(%coord, %code, value, "candidate");
                Ok(CandidateValue { coord, code, value })
            })
            .collect()
    }

    /// Pick the best candidate without applying it.
    ///
    /// Ties go to the first candidate in row-major order.
    pub fn select(&self, machine: &BoardStateMachine) -> Result<CandidateValue> {
        let candidates = self.evaluate(machine)?;
        candidates
            .into_iter()
            .reduce(|best, candidate| {
                if candidate.value > best.value {
                    candidate
                } else {
                    best
                }
            })
            .ok_or(Error::NoLegalMove)
    }

    /// Choose a move, play it on `machine`, and return its coordinate.
    ///
    /// # Errors
    ///
    /// Same as [`evaluate`](Self::evaluate); `machine` is unchanged on error.
    ///
    /// # Panics
    ///
    /// If the chosen move is refused by `machine`. The move came from the
    /// same machine's legal moves, so a refusal is a bug in the selector.
    #[instrument(level = "debug", skip_all, fields(player = %self.player))]
    pub fn take_action(&self, machine: &mut BoardStateMachine) -> Result<Coord> {
        let best = self.select(machine)?;

        if let Err(err) = machine.apply_move(best.coord, self.player) {
            panic!(
                "internal consistency violation: selected move {} was refused: {err}",
                best.coord
            );
        }

        debug!(coord = %best.coord, value = best.value, "move applied");
        Ok(best.coord)
    }
}
