//! Game status reporting

use std::fmt;

use serde::Serialize;

use super::{board::Player, machine::BoardStateMachine};

/// Status of a loaded board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum GameStatus {
    Ongoing,
    Won(Player),
    Draw,
}

impl From<&BoardStateMachine> for GameStatus {
    fn from(machine: &BoardStateMachine) -> Self {
        match (machine.ended(), machine.winner()) {
            (false, _) => GameStatus::Ongoing,
            (true, Some(winner)) => GameStatus::Won(winner),
            (true, None) => GameStatus::Draw,
        }
    }
}

impl BoardStateMachine {
    /// Current status derived from `ended`/`winner`
    pub fn status(&self) -> GameStatus {
        GameStatus::from(self)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::Won(Player::X) => write!(f, "x wins"),
            GameStatus::Won(Player::O) => write!(f, "o wins"),
            GameStatus::Draw => write!(f, "draw"),
        }
    }
}

impl From<GameStatus> for String {
    fn from(status: GameStatus) -> Self {
        status.to_string()
    }
}
