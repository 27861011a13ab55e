//! Tic-Tac-Toe rule engine with a value-table guided move advisor
//!
//! This crate provides:
//! - A board state machine that validates boards, enumerates legal moves
//!   and detects wins and draws
//! - A greedy selector that plays the move leading to the highest-valued
//!   state in a per-player value table
//! - Dense and sparse value tables with JSON and MessagePack storage
//! - A request-level advisor and the `advisor` command-line tool

pub mod adapters;
pub mod advisor;
pub mod cli;
pub mod error;
pub mod ports;
pub mod selector;
pub mod tictactoe;
pub mod types;

pub use advisor::{Advisor, MoveRecommendation, MoveRequest, ValuePair, check_state};
pub use error::{BoardViolation, Error, MoveViolation, Result};
pub use selector::{CandidateValue, ValueGuidedSelector};
pub use tictactoe::{Board, BoardStateMachine, Cell, GameStatus, Player};
pub use types::{Coord, STATE_SPACE, StateCode};
