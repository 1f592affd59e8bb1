//! Board plus side to move.
//!
//! `GameState` is the explicit, owned replacement for process-wide board and
//! turn variables. Controllers hold one each, so independent games never share
//! state.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::utils::layout_generator::generate_layout;
use crate::utils::layout_parser::parse_layout;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: Board::new_empty(),
            side_to_move: Color::White,
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn new_game() -> Self {
        Self {
            board: Board::new_game(),
            side_to_move: Color::White,
        }
    }

    #[inline]
    pub fn from_layout(layout: &str) -> Result<Self, ChessErrors> {
        parse_layout(layout)
    }

    #[inline]
    pub fn get_layout(&self) -> String {
        generate_layout(self)
    }

    /// Move the piece on `from` to `to` and pass the turn. No legality check.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Option<Piece> {
        let captured = self.board.move_piece(from, to);
        self.side_to_move = self.side_to_move.opposite();
        captured
    }
}
