//! Squares strictly between two aligned squares.
//!
//! `BETWEEN[from][to]` holds the squares a slider crosses on its way from
//! `from` to `to`, endpoints excluded. The entry is empty when the squares do
//! not share a row, column, or diagonal, and when `from == to`.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{squares_in, Square};

pub const BETWEEN: [[u64; 64]; 64] = generate_between_table();

#[inline]
pub const fn squares_between(from: Square, to: Square) -> u64 {
    BETWEEN[from as usize][to as usize]
}

/// True when nothing stands strictly between `from` and `to`. Vacuously true
/// for `from == to`.
#[inline]
pub fn is_path_clear(board: &Board, from: Square, to: Square) -> bool {
    squares_in(squares_between(from, to)).all(|sq| board.is_empty(sq))
}

const fn generate_between_table() -> [[u64; 64]; 64] {
    let mut table = [[0u64; 64]; 64];
    let mut from = 0usize;

    while from < 64 {
        let mut to = 0usize;
        while to < 64 {
            table[from][to] = trace_between_const(from as i32, to as i32);
            to += 1;
        }
        from += 1;
    }

    table
}

const fn trace_between_const(from: i32, to: i32) -> u64 {
    let from_row = from / 8;
    let from_col = from % 8;
    let to_row = to / 8;
    let to_col = to % 8;
    let d_row = to_row - from_row;
    let d_col = to_col - from_col;

    let aligned = d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs();
    if !aligned || from == to {
        return 0;
    }

    let row_step = d_row.signum();
    let col_step = d_col.signum();
    let mut row = from_row + row_step;
    let mut col = from_col + col_step;
    let mut between = 0u64;

    while row != to_row || col != to_col {
        between |= 1u64 << (row * 8 + col);
        row += row_step;
        col += col_step;
    }

    between
}
