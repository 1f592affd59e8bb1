//! Pawn movement rules.
//!
//! White pawns advance toward row 0 and start on row 6; black pawns advance
//! toward row 7 and start on row 1. Captures are diagonal and need an occupied
//! target. No promotion and no en passant.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{BLACK_PAWN_ROW, WHITE_PAWN_ROW};
use crate::game_state::chess_types::*;

pub const WHITE_PAWN_CAPTURES: [u64; 64] = generate_white_pawn_captures();
pub const BLACK_PAWN_CAPTURES: [u64; 64] = generate_black_pawn_captures();

#[inline]
pub const fn pawn_captures(color: Color, square: Square) -> u64 {
    match color {
        Color::White => WHITE_PAWN_CAPTURES[square as usize],
        Color::Black => BLACK_PAWN_CAPTURES[square as usize],
    }
}

/// Row delta of one forward step.
#[inline]
pub const fn forward_step(color: Color) -> i8 {
    match color {
        Color::White => -1,
        Color::Black => 1,
    }
}

#[inline]
pub const fn start_row(color: Color) -> u8 {
    match color {
        Color::White => WHITE_PAWN_ROW,
        Color::Black => BLACK_PAWN_ROW,
    }
}

pub fn is_pawn_move_legal(board: &Board, color: Color, from: Square, to: Square) -> bool {
    let forward = forward_step(color);
    let row_delta = row_of(to) as i8 - row_of(from) as i8;
    let same_col = col_of(from) == col_of(to);
    let target_empty = board.is_empty(to);

    if same_col && row_delta == forward && target_empty {
        return true;
    }

    if same_col && row_of(from) == start_row(color) && row_delta == 2 * forward && target_empty {
        let intermediate = square_at((row_of(from) as i8 + forward) as u8, col_of(from));
        if board.is_empty(intermediate) {
            return true;
        }
    }

    pawn_captures(color, from) & square_bit(to) != 0 && !target_empty
}

const fn generate_white_pawn_captures() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = sq / 8;
        let col = sq % 8;
        let mut captures = 0u64;

        if row > 0 {
            if col > 0 {
                captures |= 1u64 << (sq - 9);
            }
            if col < 7 {
                captures |= 1u64 << (sq - 7);
            }
        }

        table[sq] = captures;
        sq += 1;
    }

    table
}

const fn generate_black_pawn_captures() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = sq / 8;
        let col = sq % 8;
        let mut captures = 0u64;

        if row < 7 {
            if col > 0 {
                captures |= 1u64 << (sq + 7);
            }
            if col < 7 {
                captures |= 1u64 << (sq + 9);
            }
        }

        table[sq] = captures;
        sq += 1;
    }

    table
}
