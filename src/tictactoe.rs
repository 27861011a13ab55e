//! Tic-Tac-Toe rule engine

pub mod board;
pub mod game;
pub mod lines;
pub mod machine;
pub mod symmetry;
pub mod validation;

pub use board::{Board, Cell, PieceCount, Player};
pub use game::GameStatus;
pub use lines::{LineAnalyzer, LineScan, WINNING_LINES};
pub use machine::BoardStateMachine;
pub use symmetry::D4Transform;
