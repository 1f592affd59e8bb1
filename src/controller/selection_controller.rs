//! Click-driven turn and selection state machine.
//!
//! A controller is either idle or holds one selected square. The first click
//! on a piece of the side to move selects it and computes the highlight set;
//! the next click, wherever it lands, attempts the move and returns to idle.
//! Renderers read the board, turn, selection, and highlights back after
//! every click.

use tracing::{debug, trace};

use crate::chess_errors::ChessErrors;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_move_legal;
use crate::move_generation::legal_move_generator::legal_destinations;

/// What a single click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// An own piece was picked up; `destinations` is the new highlight set.
    Selected {
        square: Square,
        destinations: SquareSet,
    },
    /// Idle click on an empty square or an enemy piece. Nothing changed.
    Ignored { square: Square },
    /// Legal move applied and the turn passed.
    Moved {
        from: Square,
        to: Square,
        captured: Option<Piece>,
    },
    /// Illegal destination. Selection dropped, board and turn untouched.
    Deselected { from: Square, to: Square },
}

#[derive(Debug, Clone)]
pub struct SelectionController {
    game_state: GameState,
    selected: Option<Square>,
    highlighted: SquareSet,
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::from_game_state(GameState::new_game())
    }
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_game_state(game_state: GameState) -> Self {
        Self {
            game_state,
            selected: None,
            highlighted: 0,
        }
    }

    /// Click entry point for renderers working in `(row, col)` coordinates.
    ///
    /// Coordinates outside `0..=7` are rejected and leave the state as it was,
    /// selection included.
    pub fn on_square_clicked(&mut self, row: u8, col: u8) -> Result<ClickOutcome, ChessErrors> {
        if row > 7 || col > 7 {
            return Err(ChessErrors::InvalidRowOrCol { row, col });
        }
        self.click_square(square_at(row, col))
    }

    /// Click entry point for callers holding a square index. Indices past 63
    /// are rejected like out-of-range coordinates.
    pub fn click_square(&mut self, square: Square) -> Result<ClickOutcome, ChessErrors> {
        if square > 63 {
            return Err(ChessErrors::InvalidSquareIndex(square));
        }
        Ok(match self.selected.take() {
            Some(from) => self.attempt_move(from, square),
            None => self.try_select(square),
        })
    }

    /// Drop the current selection without attempting a move.
    pub fn clear_selection(&mut self) {
        if let Some(square) = self.selected.take() {
            trace!(square, "selection cleared");
        }
        self.highlighted = 0;
    }

    fn try_select(&mut self, square: Square) -> ClickOutcome {
        match self.game_state.board.piece_at(square) {
            Some(piece) if piece.color == self.game_state.side_to_move => {
                let destinations = legal_destinations(&self.game_state, square);
                self.selected = Some(square);
                self.highlighted = destinations;
                debug!(
                    square,
                    ?piece,
                    destinations = destinations.count_ones(),
                    "piece selected"
                );
                ClickOutcome::Selected {
                    square,
                    destinations,
                }
            }
            _ => {
                trace!(square, "click ignored");
                ClickOutcome::Ignored { square }
            }
        }
    }

    fn attempt_move(&mut self, from: Square, to: Square) -> ClickOutcome {
        self.highlighted = 0;

        if !is_move_legal(&self.game_state, from, to) {
            debug!(from, to, "illegal move, selection cleared");
            return ClickOutcome::Deselected { from, to };
        }

        let mover = self.game_state.side_to_move;
        let captured = self.game_state.apply_move(from, to);
        debug!(from, to, ?mover, ?captured, "move applied");

        ClickOutcome::Moved { from, to, captured }
    }

    /// Back to the starting position with nothing selected.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Replace the position, dropping any selection.
    pub fn load_game_state(&mut self, game_state: GameState) {
        *self = Self::from_game_state(game_state);
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn board_snapshot(&self) -> [[Option<Piece>; 8]; 8] {
        self.game_state.board.snapshot()
    }

    pub fn current_turn(&self) -> Color {
        self.game_state.side_to_move
    }

    pub fn selected_square(&self) -> Option<Square> {
        self.selected
    }

    /// Highlight set of the current selection; empty while idle.
    pub fn highlighted_squares(&self) -> SquareSet {
        self.highlighted
    }

    pub fn status_text(&self) -> String {
        format!("{}'s Turn", self.current_turn().display_name())
    }
}
