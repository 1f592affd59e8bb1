//! Destination sets for highlighting and full move lists.
//!
//! Both functions probe every square with `is_move_legal`, so they report
//! exactly what the controller would accept, quirks included.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_move_legal;

/// Every square the piece on `from` may move to. Empty when `from` is empty.
pub fn legal_destinations(game_state: &GameState, from: Square) -> SquareSet {
    let mut destinations = 0u64;

    for to in 0..64u8 {
        if is_move_legal(game_state, from, to) {
            destinations |= square_bit(to);
        }
    }

    destinations
}

/// All `(from, to)` pairs available to the side to move, in square order.
pub fn legal_moves_for_side(game_state: &GameState) -> Vec<(Square, Square)> {
    let own = game_state.board.occupancy_by_color(game_state.side_to_move);
    let mut moves = Vec::<(Square, Square)>::with_capacity(64);

    for from in squares_in(own) {
        for to in squares_in(legal_destinations(game_state, from)) {
            moves.push((from, to));
        }
    }

    moves
}
