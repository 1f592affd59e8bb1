//! Move legality dispatcher.
//!
//! Screens the generic conditions (empty source, friendly target) and hands
//! the geometry to the per-piece rule in `crate::moves`. The side to move is
//! carried in `GameState` but no rule consults it; callers gate by turn when
//! a piece is selected.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::bishop_moves::is_bishop_move_legal;
use crate::moves::king_moves::is_king_move_legal;
use crate::moves::knight_moves::is_knight_move_legal;
use crate::moves::pawn_moves::is_pawn_move_legal;
use crate::moves::queen_moves::is_queen_move_legal;
use crate::moves::rook_moves::is_rook_move_legal;

/// Whether the piece on `from` may move to `to`.
///
/// Captures of any enemy piece are allowed, kings included, and nothing
/// stops a side from leaving its own king attacked. `from == to` is accepted
/// for rooks, bishops, queens and kings (empty path, zero delta) and
/// rejected for pawns and knights. Off-board indices are never legal.
pub fn is_move_legal(game_state: &GameState, from: Square, to: Square) -> bool {
    if from > 63 || to > 63 {
        return false;
    }
    let board = &game_state.board;

    let Some(piece) = board.piece_at(from) else {
        return false;
    };

    // A piece's own square is not a friendly target.
    if from != to {
        if let Some(target) = board.piece_at(to) {
            if target.color == piece.color {
                return false;
            }
        }
    }

    match piece.kind {
        PieceKind::Pawn => is_pawn_move_legal(board, piece.color, from, to),
        PieceKind::Rook => is_rook_move_legal(board, from, to),
        PieceKind::Knight => is_knight_move_legal(from, to),
        PieceKind::Bishop => is_bishop_move_legal(board, from, to),
        PieceKind::Queen => is_queen_move_legal(board, from, to),
        PieceKind::King => is_king_move_legal(from, to),
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::is_move_legal;
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;
    use crate::moves::square_lines::squares_between;
    use crate::utils::layout_parser::parse_layout;

    fn random_game_state(rng: &mut StdRng, fill: f64) -> GameState {
        let mut game_state = GameState::new_empty();
        for sq in 0..64u8 {
            if rng.random_bool(fill) {
                let kind = PieceKind::ALL[rng.random_range(0..PieceKind::ALL.len())];
                let color = if rng.random_bool(0.5) {
                    Color::White
                } else {
                    Color::Black
                };
                game_state.board.put_piece(sq, Some(Piece::new(kind, color)));
            }
        }
        game_state
    }

    #[test]
    fn empty_source_is_never_legal() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let game_state = random_game_state(&mut rng, 0.4);
            for from in 0..64u8 {
                if !game_state.board.is_empty(from) {
                    continue;
                }
                for to in 0..64u8 {
                    assert!(!is_move_legal(&game_state, from, to));
                }
            }
        }
    }

    #[test]
    fn friendly_target_is_never_legal() {
        let mut rng = StdRng::seed_from_u64(23);
        for _ in 0..50 {
            let game_state = random_game_state(&mut rng, 0.5);
            for from in 0..64u8 {
                let Some(piece) = game_state.board.piece_at(from) else {
                    continue;
                };
                for to in 0..64u8 {
                    if from == to {
                        continue;
                    }
                    if let Some(target) = game_state.board.piece_at(to) {
                        if target.color == piece.color {
                            assert!(!is_move_legal(&game_state, from, to));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn sliders_are_blocked_by_any_piece_between() {
        let mut rng = StdRng::seed_from_u64(37);
        for _ in 0..50 {
            let game_state = random_game_state(&mut rng, 0.3);
            for from in 0..64u8 {
                let Some(piece) = game_state.board.piece_at(from) else {
                    continue;
                };
                if !matches!(
                    piece.kind,
                    PieceKind::Rook | PieceKind::Bishop | PieceKind::Queen
                ) {
                    continue;
                }
                for to in 0..64u8 {
                    let blocked = squares_in(squares_between(from, to))
                        .any(|sq| !game_state.board.is_empty(sq));
                    if blocked {
                        assert!(!is_move_legal(&game_state, from, to));
                    }
                }
            }
        }
    }

    #[test]
    fn knight_jumps_over_a_crowded_neighbourhood() {
        let game_state =
            parse_layout("8/8/2PPP3/2PnP3/2PPP3/8/8/8 w").expect("layout should parse");
        let d5 = square_at(3, 3);

        assert!(is_move_legal(&game_state, d5, square_at(1, 2)));
        assert!(is_move_legal(&game_state, d5, square_at(5, 4)));
        assert!(is_move_legal(&game_state, d5, square_at(4, 1)));
        assert!(!is_move_legal(&game_state, d5, square_at(2, 3)));
    }

    #[test]
    fn same_square_is_legal_for_sliders_and_king_only() {
        let game_state =
            parse_layout("8/8/8/8/8/8/pnbrqk2/8 w").expect("layout should parse");
        let expectations = [
            (square_at(6, 0), false),
            (square_at(6, 1), false),
            (square_at(6, 2), true),
            (square_at(6, 3), true),
            (square_at(6, 4), true),
            (square_at(6, 5), true),
        ];

        for (sq, expected) in expectations {
            assert_eq!(is_move_legal(&game_state, sq, sq), expected, "square {sq}");
        }
    }

    #[test]
    fn same_square_asymmetry_holds_for_black_pieces_too() {
        let game_state =
            parse_layout("8/PNBRQK2/8/8/8/8/8/8 b").expect("layout should parse");
        let verdicts: Vec<bool> = (0..6u8)
            .map(|col| {
                let sq = square_at(1, col);
                is_move_legal(&game_state, sq, sq)
            })
            .collect();

        assert_eq!(verdicts, vec![false, false, true, true, true, true]);
    }

    #[test]
    fn king_can_be_captured_and_can_walk_into_attack() {
        let game_state = parse_layout("6R1/8/8/3K4/8/8/8/3r3k w").expect("layout should parse");
        let d1 = square_at(7, 3);
        let d5 = square_at(3, 3);
        let h1 = square_at(7, 7);

        assert!(is_move_legal(&game_state, d1, d5));
        // g1 is covered by the black rook on g8; the king may still step there.
        assert!(is_move_legal(&game_state, h1, square_at(7, 6)));
    }

    #[test]
    fn turn_is_not_consulted_by_the_rules() {
        let mut game_state = GameState::new_game();
        let e7 = square_at(1, 4);
        let e5 = square_at(3, 4);

        assert_eq!(game_state.side_to_move, Color::White);
        assert!(is_move_legal(&game_state, e7, e5));
        game_state.side_to_move = Color::Black;
        assert!(is_move_legal(&game_state, e7, e5));
    }

    #[test]
    fn off_board_squares_are_never_legal() {
        let game_state = GameState::new_game();
        let white_rook = square_at(7, 0);

        assert!(!is_move_legal(&game_state, 64, white_rook));
        assert!(!is_move_legal(&game_state, white_rook, 64));
        assert!(!is_move_legal(&game_state, white_rook, u8::MAX));
        assert!(is_move_legal(&game_state, white_rook, white_rook));
    }

    #[test]
    fn back_rank_rook_cannot_cross_its_own_pieces() {
        let game_state = GameState::new_game();
        assert!(!is_move_legal(&game_state, square_at(7, 0), square_at(7, 7)));
        assert!(!is_move_legal(&game_state, square_at(7, 0), square_at(5, 0)));
    }
}
