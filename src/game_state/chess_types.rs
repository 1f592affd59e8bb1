//! Core value types shared by the board, the rules, and the controller.
//!
//! Colors and piece kinds are closed enums. The letter-case convention used by
//! board layouts lives in the layout codec, never here.

pub use crate::game_state::board::Board;
pub use crate::game_state::game_state::GameState;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Capitalized name, as shown in the status line.
    pub const fn display_name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];
}

/// Occupant of a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }
}

/// Square index `row * 8 + col` (`0..=63`). Row 0 is the top of the board,
/// where black's back rank starts.
pub type Square = u8;

/// Set of squares, bit `i` set for square index `i`.
pub type SquareSet = u64;

#[inline]
pub const fn square_at(row: u8, col: u8) -> Square {
    row * 8 + col
}

#[inline]
pub const fn row_of(square: Square) -> u8 {
    square / 8
}

#[inline]
pub const fn col_of(square: Square) -> u8 {
    square % 8
}

#[inline]
pub const fn square_bit(square: Square) -> SquareSet {
    1u64 << square
}

/// Iterate the squares of a set in ascending index order.
pub fn squares_in(set: SquareSet) -> impl Iterator<Item = Square> {
    let mut remaining = set;
    std::iter::from_fn(move || {
        if remaining == 0 {
            return None;
        }
        let square = remaining.trailing_zeros() as Square;
        remaining &= remaining - 1;
        Some(square)
    })
}
