use crate::game_state::board::Board;
use crate::game_state::chess_types::{col_of, row_of, Square};
use crate::moves::square_lines::is_path_clear;

/// Strict diagonal with a clear path. `from == to` passes with a (0,0) delta.
#[inline]
pub fn is_bishop_move_legal(board: &Board, from: Square, to: Square) -> bool {
    let d_row = row_of(from).abs_diff(row_of(to));
    let d_col = col_of(from).abs_diff(col_of(to));

    d_row == d_col && is_path_clear(board, from, to)
}
