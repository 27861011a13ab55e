//! Value-guided selection against the rule engine

mod common;

use common::{coord, machine, reachable_position};
use proptest::prelude::*;
use tictactoe_engine::{
    Board, BoardStateMachine, Cell, Error, Player, ValueGuidedSelector,
    adapters::{DenseValueTable, SparseValueTable},
    types::StateCode,
};

fn code(board: &str) -> StateCode {
    Board::from_string(board).unwrap().encode()
}

#[test]
fn test_center_scenario() {
    let table = SparseValueTable::new().with(code("....X...."), 1.0);
    let selector = ValueGuidedSelector::new(Player::X, table);

    let mut m = BoardStateMachine::new();
    assert_eq!(selector.take_action(&mut m).unwrap(), coord(1, 1));
    assert_eq!(m.board().get(coord(1, 1)), Cell::X);
    assert_eq!(m.side_to_move(), Player::O);
}

#[test]
fn test_five_candidates_regardless_of_table() {
    let m = machine("XX.OO....");
    let expected = vec![coord(0, 2), coord(1, 2), coord(2, 0), coord(2, 1), coord(2, 2)];

    for table in [
        SparseValueTable::new(),
        SparseValueTable::new().with(code("XX.OO...X"), 3.0),
        SparseValueTable::new().with(code("XXXOO...."), -1.0),
    ] {
        let selector = ValueGuidedSelector::new(Player::X, table);
        let coords: Vec<_> = selector
            .evaluate(&m)
            .unwrap()
            .into_iter()
            .map(|c| c.coord)
            .collect();
        assert_eq!(coords, expected);
    }
}

#[test]
fn test_takes_the_win_when_valued() {
    let mut m = machine("XX.OO....");
    let table = SparseValueTable::new().with(code("XXXOO...."), 1.0);
    let selector = ValueGuidedSelector::new(Player::X, table);

    assert_eq!(selector.take_action(&mut m).unwrap(), coord(0, 2));
    assert!(m.ended());
    assert_eq!(m.winner(), Some(Player::X));
}

#[test]
fn test_draw_board_has_no_legal_move() {
    let mut m = machine("XOXXOOOXX");
    let selector = ValueGuidedSelector::new(Player::O, SparseValueTable::new());
    assert!(matches!(selector.take_action(&mut m), Err(Error::NoLegalMove)));
}

#[test]
fn test_dense_table_lookup() {
    let mut table = DenseValueTable::zeros();
    table.set(code("X...O...X"), 0.9);
    table.set(code("XX..O...."), 0.4);

    let selector = ValueGuidedSelector::new(Player::X, table);
    let m = machine("X...O....");
    assert_eq!(selector.select(&m).unwrap().coord, coord(2, 2));
}

#[test]
fn test_nan_entries_read_as_zero() {
    let table = SparseValueTable::new()
        .with(code("X........"), f64::NAN)
        .with(code(".X......."), -0.5);
    let selector = ValueGuidedSelector::new(Player::X, table);

    // (0,0) is NaN and reads as 0, which beats (0,1) and ties the rest
    let best = selector.select(&BoardStateMachine::new()).unwrap();
    assert_eq!(best.coord, coord(0, 0));
    assert_eq!(best.value, 0.0);
}

#[test]
fn test_self_play_from_one_table_pair() {
    // Both sides with empty tables always take the first free cell
    let x = ValueGuidedSelector::new(Player::X, SparseValueTable::new());
    let o = ValueGuidedSelector::new(Player::O, SparseValueTable::new());

    let mut m = BoardStateMachine::new();
    while !m.ended() {
        match m.side_to_move() {
            Player::X => x.take_action(&mut m).unwrap(),
            Player::O => o.take_action(&mut m).unwrap(),
        };
    }
    // X O X / O X O / X . . : X completes the anti-diagonal
    assert_eq!(m.board(), &Board::from_string("XOXOXOX..").unwrap());
    assert_eq!(m.winner(), Some(Player::X));
}

proptest! {
    // The chosen cell was empty and the machine advanced by one stone
    #[test]
    fn never_selects_occupied_cell(position in reachable_position(), seed in any::<u64>()) {
        let player = position.side_to_move();
        let table: SparseValueTable = (0..tictactoe_engine::STATE_SPACE)
            .step_by(7)
            .map(|raw| {
                let value = ((u64::from(raw) ^ seed) % 100) as f64 / 100.0;
                (StateCode::new(raw).unwrap(), value)
            })
            .collect();
        let selector = ValueGuidedSelector::new(player, table);

        let mut m = position.clone();
        match selector.take_action(&mut m) {
            Ok(chosen) => {
                prop_assert!(!position.ended());
                prop_assert!(position.board().is_empty(chosen));
                prop_assert_eq!(m.board().get(chosen), player.to_cell());
                prop_assert_eq!(
                    m.board().piece_count().empty + 1,
                    position.board().piece_count().empty
                );
            }
            Err(err) => {
                prop_assert!(matches!(err, Error::NoLegalMove));
                prop_assert!(position.ended());
                prop_assert_eq!(&m, &position);
            }
        }
    }

    // Equivalent machine copies always get the same move
    #[test]
    fn selection_is_deterministic(position in reachable_position()) {
        prop_assume!(!position.ended());
        let table = SparseValueTable::new()
            .with(code("....X...."), 0.5)
            .with(code("X...O...."), 0.5);
        let selector = ValueGuidedSelector::new(position.side_to_move(), table);

        let mut first = position.clone();
        let mut second = position.clone();
        prop_assert_eq!(
            selector.take_action(&mut first).unwrap(),
            selector.take_action(&mut second).unwrap()
        );
        prop_assert_eq!(first, second);
    }
}
