//! 8×8 grid of square contents.
//!
//! The board answers "what occupies this square" and offers one mutation
//! primitive. It never validates moves; that is the rules' job.

use crate::game_state::chess_rules::{
    BACK_RANK_ORDER, BLACK_BACK_ROW, BLACK_PAWN_ROW, WHITE_BACK_ROW, WHITE_PAWN_ROW,
};
use crate::game_state::chess_types::*;

/// Row-major mailbox board indexed by `Square`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self {
            squares: [None; 64],
        }
    }
}

impl Board {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard starting setup: black on rows 0-1, white on rows 6-7.
    pub fn new_game() -> Self {
        let mut board = Self::new_empty();

        for (col, kind) in BACK_RANK_ORDER.iter().copied().enumerate() {
            let col = col as u8;
            board.put_piece(
                square_at(BLACK_BACK_ROW, col),
                Some(Piece::new(kind, Color::Black)),
            );
            board.put_piece(
                square_at(BLACK_PAWN_ROW, col),
                Some(Piece::new(PieceKind::Pawn, Color::Black)),
            );
            board.put_piece(
                square_at(WHITE_PAWN_ROW, col),
                Some(Piece::new(PieceKind::Pawn, Color::White)),
            );
            board.put_piece(
                square_at(WHITE_BACK_ROW, col),
                Some(Piece::new(kind, Color::White)),
            );
        }

        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square as usize]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.squares[square as usize].is_none()
    }

    #[inline]
    pub fn put_piece(&mut self, square: Square, content: Option<Piece>) {
        self.squares[square as usize] = content;
    }

    /// Lift the content of `from` and drop it on `to`, leaving `from` empty.
    /// Returns whatever `to` held before (the captured piece, if any).
    ///
    /// `move_piece(s, s)` puts the piece back where it was and captures
    /// nothing.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Option<Piece> {
        let moving = self.squares[from as usize].take();
        std::mem::replace(&mut self.squares[to as usize], moving)
    }

    pub fn occupancy_by_color(&self, color: Color) -> SquareSet {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, content)| matches!(content, Some(piece) if piece.color == color))
            .fold(0u64, |acc, (sq, _)| acc | (1u64 << sq))
    }

    pub fn piece_count(&self) -> usize {
        self.squares.iter().filter(|content| content.is_some()).count()
    }

    /// Grid copy indexed `[row][col]` for renderers.
    pub fn snapshot(&self) -> [[Option<Piece>; 8]; 8] {
        let mut grid = [[None; 8]; 8];
        for (sq, content) in self.squares.iter().enumerate() {
            grid[sq / 8][sq % 8] = *content;
        }
        grid
    }
}
