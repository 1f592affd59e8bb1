use crate::game_state::board::Board;
use crate::game_state::chess_types::{col_of, row_of, Square};
use crate::moves::square_lines::is_path_clear;

/// Same row or same column with a clear path. `from == to` passes: it shares
/// both and there is nothing between.
#[inline]
pub fn is_rook_move_legal(board: &Board, from: Square, to: Square) -> bool {
    let same_row = row_of(from) == row_of(to);
    let same_col = col_of(from) == col_of(to);

    (same_row || same_col) && is_path_clear(board, from, to)
}
