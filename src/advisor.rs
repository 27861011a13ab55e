//! Request-level entry points: recommend a move, report a board's status
//!
//! Every call builds a fresh [`BoardStateMachine`] from the supplied board;
//! nothing about a game is remembered between calls.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::{
    Result,
    ports::ValueTable,
    selector::{CandidateValue, ValueGuidedSelector},
    tictactoe::{BoardStateMachine, GameStatus, Player},
    types::Coord,
};

/// A board plus the player who wants a move
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    /// 3x3 grid of `0` (empty), `-1` (X) and `1` (O)
    pub board: Vec<Vec<i64>>,
    pub current_player: Player,
}

/// The chosen move and the board after playing it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecommendation {
    pub next_move: Coord,
    pub board: Vec<Vec<i64>>,
}

/// One value table per player
#[derive(Debug, Clone)]
pub struct ValuePair<T> {
    pub x: T,
    pub o: T,
}

impl<T> ValuePair<T> {
    pub fn new(x: T, o: T) -> Self {
        Self { x, o }
    }

    pub fn for_player(&self, player: Player) -> &T {
        match player {
            Player::X => &self.x,
            Player::O => &self.o,
        }
    }
}

/// Recommends moves from a pair of value tables.
///
/// Holds only the read-only tables, so one advisor can serve any number of
/// requests, including from several threads at once.
#[derive(Debug, Clone)]
pub struct Advisor<T> {
    tables: ValuePair<T>,
}

impl<T: ValueTable> Advisor<T> {
    pub fn new(tables: ValuePair<T>) -> Self {
        Self { tables }
    }

    fn selector(&self, player: Player) -> ValueGuidedSelector<&T> {
        ValueGuidedSelector::new(player, self.tables.for_player(player))
    }

    /// Pick and play the best move for `request.current_player`.
    ///
    /// The terminal check happens after the board is loaded, never on the
    /// blank machine.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidBoardState`](crate::Error::InvalidBoardState) for a malformed board
    /// - [`Error::NoLegalMove`](crate::Error::NoLegalMove) if the game is already over
    /// - [`Error::IllegalMove`](crate::Error::IllegalMove) if it is not `current_player`'s turn
    #[instrument(level = "info", skip_all, fields(player = %request.current_player))]
    pub fn recommend(&self, request: &MoveRequest) -> Result<MoveRecommendation> {
        let mut machine = load(&request.board)?;
        let next_move = self
            .selector(request.current_player)
            .take_action(&mut machine)?;

        info!(next_move = %next_move, status = %machine.status(), "recommended move");
        Ok(MoveRecommendation {
            next_move,
            board: machine.board().to_grid(),
        })
    }

    /// Every candidate move with its value, without choosing one.
    pub fn explain(&self, request: &MoveRequest) -> Result<Vec<CandidateValue>> {
        let machine = load(&request.board)?;
        self.selector(request.current_player).evaluate(&machine)
    }
}

/// Status of a board: ongoing, won by one side, or drawn.
///
/// # Errors
///
/// Returns [`Error::InvalidBoardState`](crate::Error::InvalidBoardState) for
/// a malformed board.
pub fn check_state<R: AsRef<[i64]>>(grid: &[R]) -> Result<GameStatus> {
    Ok(load(grid)?.status())
}

fn load<R: AsRef<[i64]>>(grid: &[R]) -> Result<BoardStateMachine> {
    let mut machine = BoardStateMachine::new();
    machine.set_state(grid)?;
    Ok(machine)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, adapters::SparseValueTable, tictactoe::Board};

    fn advisor() -> Advisor<SparseValueTable> {
        let x_center = Board::from_string("....X....").unwrap().encode();
        let o_corner = Board::from_string("....X...O").unwrap().encode();
        Advisor::new(ValuePair::new(
            SparseValueTable::new().with(x_center, 1.0),
            SparseValueTable::new().with(o_corner, 0.6),
        ))
    }

    #[test]
    fn test_recommend_uses_current_players_table() {
        let advisor = advisor();
        let request = MoveRequest {
            board: vec![vec![0; 3]; 3],
            current_player: Player::X,
        };
        let rec = advisor.recommend(&request).unwrap();
        assert_eq!(rec.next_move, Coord::new(1, 1).unwrap());
        assert_eq!(rec.board, vec![vec![0, 0, 0], vec![0, -1, 0], vec![0, 0, 0]]);

        let reply = MoveRequest {
            board: rec.board,
            current_player: Player::O,
        };
        let rec = advisor.recommend(&reply).unwrap();
        assert_eq!(rec.next_move, Coord::new(2, 2).unwrap());
    }

    #[test]
    fn test_recommend_on_finished_game() {
        let request = MoveRequest {
            board: vec![vec![-1, -1, -1], vec![1, 1, 0], vec![0, 0, 0]],
            current_player: Player::O,
        };
        assert!(matches!(
            advisor().recommend(&request),
            Err(Error::NoLegalMove)
        ));
    }

    #[test]
    fn test_recommend_out_of_turn() {
        let request = MoveRequest {
            board: vec![vec![0; 3]; 3],
            current_player: Player::O,
        };
        assert!(matches!(
            advisor().recommend(&request),
            Err(Error::IllegalMove { .. })
        ));
    }

    #[test]
    fn test_request_json_shape() {
        let request: MoveRequest = serde_json::from_str(
            r#"{"board": [[0, 0, 0], [0, -1, 0], [0, 0, 0]], "current_player": "o"}"#,
        )
        .unwrap();
        assert_eq!(request.current_player, Player::O);

        let rec = MoveRecommendation {
            next_move: Coord::new(0, 2).unwrap(),
            board: vec![vec![0, 0, 1], vec![0, -1, 0], vec![0, 0, 0]],
        };
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["next_move"], serde_json::json!([0, 2]));
    }

    #[test]
    fn test_check_state() {
        assert_eq!(
            check_state(&[[0i64, 0, 0], [0, 0, 0], [0, 0, 0]]).unwrap(),
            GameStatus::Ongoing
        );
        assert_eq!(
            check_state(&[[1i64, 1, 1], [-1, -1, 0], [-1, 0, 0]]).unwrap(),
            GameStatus::Won(Player::O)
        );
        assert!(matches!(
            check_state(&[[0i64, 0, 0], [0, 0, 0]]),
            Err(Error::InvalidBoardState(_))
        ));
    }
}
