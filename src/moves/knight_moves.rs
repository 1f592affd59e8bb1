use crate::game_state::chess_types::{square_bit, Square};

pub const KNIGHT_JUMPS: [u64; 64] = generate_knight_jumps();

/// Knights jump, so occupancy never matters here.
#[inline]
pub const fn is_knight_move_legal(from: Square, to: Square) -> bool {
    KNIGHT_JUMPS[from as usize] & square_bit(to) != 0
}

const fn generate_knight_jumps() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as i32;
        let col = (sq % 8) as i32;
        let mut jumps = 0u64;

        jumps |= set_if_valid(row + 2, col + 1);
        jumps |= set_if_valid(row + 1, col + 2);
        jumps |= set_if_valid(row - 1, col + 2);
        jumps |= set_if_valid(row - 2, col + 1);
        jumps |= set_if_valid(row - 2, col - 1);
        jumps |= set_if_valid(row - 1, col - 2);
        jumps |= set_if_valid(row + 1, col - 2);
        jumps |= set_if_valid(row + 2, col - 1);

        table[sq] = jumps;
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
