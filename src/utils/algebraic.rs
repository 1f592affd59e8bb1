//! Square name conversions.
//!
//! Column 0..7 maps to files `a..h` and row 0..7 maps to ranks `8..1`, so the
//! white pieces start on ranks 1 and 2 as usual.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{col_of, row_of, square_at, Square};

/// Convert a square name (for example: "e2") to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let col = file - b'a';
    let row = 7 - (rank - b'1');
    Ok(square_at(row, col))
}

/// Convert a square index (`0..=63`) to its name (for example: "e2").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + col_of(square));
    let rank_char = char::from(b'8' - row_of(square));
    format!("{file_char}{rank_char}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_king_start_is_e1() {
        assert_eq!(algebraic_to_square("e1"), Ok(square_at(7, 4)));
        assert_eq!(square_to_algebraic(square_at(7, 4)), "e1");
    }

    #[test]
    fn corners_map_to_expected_rows() {
        assert_eq!(algebraic_to_square("a8"), Ok(0));
        assert_eq!(algebraic_to_square("h1"), Ok(63));
        assert_eq!(algebraic_to_square("E2"), Ok(square_at(6, 4)));
        assert_eq!(square_to_algebraic(0), "a8");
    }

    #[test]
    fn invalid_names_are_rejected() {
        for bad in ["", "e", "e9", "i1", "e10", "11"] {
            assert_eq!(
                algebraic_to_square(bad),
                Err(ChessErrors::InvalidAlgebraicString(bad.to_owned()))
            );
        }
    }
}
