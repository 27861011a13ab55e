//! Shared helpers for the integration tests.

#![allow(dead_code)]

use proptest::prelude::*;
use rand::{Rng, SeedableRng, rngs::StdRng};
use tictactoe_engine::{Board, BoardStateMachine, Coord};

pub fn coord(row: usize, col: usize) -> Coord {
    Coord::new(row, col).unwrap()
}

pub fn machine(board: &str) -> BoardStateMachine {
    let mut machine = BoardStateMachine::new();
    machine.set_board(Board::from_string(board).unwrap()).unwrap();
    machine
}

/// Play uniformly random legal moves until the game ends or `max_plies`
/// moves have been made.
pub fn random_playout(seed: u64, max_plies: usize) -> BoardStateMachine {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut machine = BoardStateMachine::new();
    for _ in 0..max_plies {
        let moves = machine.legal_moves();
        if moves.is_empty() {
            break;
        }
        let coord = moves[rng.random_range(0..moves.len())];
        let player = machine.side_to_move();
        machine.apply_move(coord, player).unwrap();
    }
    machine
}

/// Strategy: a position reachable by legal play.
pub fn reachable_position() -> impl Strategy<Value = BoardStateMachine> {
    (any::<u64>(), 0..=9usize).prop_map(|(seed, plies)| random_playout(seed, plies))
}
