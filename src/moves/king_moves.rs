//! King step table.
//!
//! The rule accepts any square at most one row and one column away, which
//! includes the king's own square. No castling and no check safety.

use crate::game_state::chess_types::{square_bit, Square};

pub const KING_STEPS: [u64; 64] = generate_king_steps();

#[inline]
pub const fn is_king_move_legal(from: Square, to: Square) -> bool {
    from == to || KING_STEPS[from as usize] & square_bit(to) != 0
}

const fn generate_king_steps() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as i32;
        let col = (sq % 8) as i32;
        let mut steps = 0u64;

        steps |= set_if_valid(row - 1, col - 1);
        steps |= set_if_valid(row - 1, col);
        steps |= set_if_valid(row - 1, col + 1);
        steps |= set_if_valid(row, col - 1);
        steps |= set_if_valid(row, col + 1);
        steps |= set_if_valid(row + 1, col - 1);
        steps |= set_if_valid(row + 1, col);
        steps |= set_if_valid(row + 1, col + 1);

        table[sq] = steps;
        sq += 1;
    }

    table
}

const fn set_if_valid(row: i32, col: i32) -> u64 {
    if row < 0 || row > 7 || col < 0 || col > 7 {
        return 0;
    }

    1u64 << ((row as usize) * 8 + (col as usize))
}

#[cfg(test)]
mod tests {
    use super::{is_king_move_legal, KING_STEPS};
    use crate::game_state::chess_types::square_at;

    #[test]
    fn king_steps_from_corner_has_three_targets() {
        let h1 = square_at(7, 7);
        assert_eq!(KING_STEPS[h1 as usize].count_ones(), 3);
        assert!(is_king_move_legal(h1, square_at(6, 6)));
        assert!(!is_king_move_legal(h1, square_at(5, 7)));
    }

    #[test]
    fn king_may_stay_on_its_own_square() {
        let e1 = square_at(7, 4);
        assert!(is_king_move_legal(e1, e1));
    }
}
