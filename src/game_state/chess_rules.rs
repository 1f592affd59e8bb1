//! Canonical setup constants.
//!
//! The starting layout uses the crate's board layout format, so lowercase
//! letters are white and uppercase letters are black.

use crate::game_state::chess_types::PieceKind;

/// Standard starting position in board layout notation, row 0 first.
pub const STARTING_LAYOUT: &str = "RNBQKBNR/PPPPPPPP/8/8/8/8/pppppppp/rnbqkbnr w";

/// Back rank piece order from column 0 to column 7, identical for both sides.
pub const BACK_RANK_ORDER: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const BLACK_BACK_ROW: u8 = 0;
pub const BLACK_PAWN_ROW: u8 = 1;
pub const WHITE_PAWN_ROW: u8 = 6;
pub const WHITE_BACK_ROW: u8 = 7;
