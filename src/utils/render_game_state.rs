//! Terminal-oriented board renderer.
//!
//! Draws row 0 at the top with file letters and rank digits around the grid.
//! Selection and highlight markers come from the controller's query surface.

use crate::controller::selection_controller::SelectionController;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::layout_generator::piece_to_layout_char;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphStyle {
    /// Chess symbols: filled for black, outlined for white.
    #[default]
    Unicode,
    /// Layout letters, lowercase white and uppercase black.
    Letters,
}

const EMPTY_LIGHT_GLYPH: char = '·';
const EMPTY_DARK_GLYPH: char = ':';
const HIGHLIGHT_GLYPH: char = '*';

/// `(row + col)` even is a light square.
#[inline]
pub const fn is_light_square(square: Square) -> bool {
    (row_of(square) + col_of(square)) % 2 == 0
}

#[inline]
const fn empty_glyph(square: Square) -> char {
    if is_light_square(square) {
        EMPTY_LIGHT_GLYPH
    } else {
        EMPTY_DARK_GLYPH
    }
}

/// Render the bare board of a game state.
pub fn render_game_state(game_state: &GameState, style: GlyphStyle) -> String {
    render_with_markers(game_state, style, None, 0)
}

/// Render the controller's board with its selection and highlights, followed
/// by the status line.
pub fn render_controller(controller: &SelectionController, style: GlyphStyle) -> String {
    let mut out = render_with_markers(
        controller.game_state(),
        style,
        controller.selected_square(),
        controller.highlighted_squares(),
    );
    out.push('\n');
    out.push_str(&controller.status_text());
    out
}

fn render_with_markers(
    game_state: &GameState,
    style: GlyphStyle,
    selected: Option<Square>,
    highlighted: SquareSet,
) -> String {
    let mut out = String::new();

    out.push_str("   a  b  c  d  e  f  g  h\n");

    for row in 0..8u8 {
        let rank_char = char::from(b'8' - row);
        out.push(rank_char);
        out.push(' ');

        for col in 0..8u8 {
            let sq = square_at(row, col);
            let glyph = game_state.board.piece_at(sq).map(|piece| piece_glyph(piece, style));
            let is_highlighted = highlighted & square_bit(sq) != 0;

            let (open, body, close) = if selected == Some(sq) {
                ('[', glyph.unwrap_or(empty_glyph(sq)), ']')
            } else if is_highlighted {
                match glyph {
                    Some(ch) => ('(', ch, ')'),
                    None => (' ', HIGHLIGHT_GLYPH, ' '),
                }
            } else {
                (' ', glyph.unwrap_or(empty_glyph(sq)), ' ')
            };

            out.push(open);
            out.push(body);
            out.push(close);
        }

        out.push(' ');
        out.push(rank_char);
        out.push('\n');
    }

    out.push_str("   a  b  c  d  e  f  g  h");

    out
}

pub fn piece_glyph(piece: Piece, style: GlyphStyle) -> char {
    match style {
        GlyphStyle::Letters => piece_to_layout_char(piece),
        GlyphStyle::Unicode => piece_to_unicode(piece),
    }
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_board_renders_black_on_top_in_letters() {
        let text = render_game_state(&GameState::new_game(), GlyphStyle::Letters);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], "8  R  N  B  Q  K  B  N  R  8");
        assert_eq!(lines[5], "4  ·  :  ·  :  ·  :  ·  :  4");
        assert_eq!(lines[6], "3  :  ·  :  ·  :  ·  :  ·  3");
        assert_eq!(lines[8], "1  r  n  b  q  k  b  n  r  1");
    }

    #[test]
    fn unicode_glyphs_follow_color() {
        assert_eq!(
            piece_glyph(Piece::new(PieceKind::King, Color::White), GlyphStyle::Unicode),
            '♔'
        );
        assert_eq!(
            piece_glyph(Piece::new(PieceKind::Rook, Color::Black), GlyphStyle::Unicode),
            '♜'
        );
    }

    #[test]
    fn selection_and_highlights_are_marked() {
        let mut controller = SelectionController::new();
        controller
            .on_square_clicked(7, 1)
            .expect("coordinates are on the board");

        let text = render_controller(&controller, GlyphStyle::Letters);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[3 + 3], "3  *  ·  *  ·  :  ·  :  ·  3");
        assert_eq!(lines[8], "1  r [n] b  q  k  b  n  r  1");
        assert_eq!(lines[10], "White's Turn");
    }

    #[test]
    fn square_shading_alternates() {
        assert!(is_light_square(square_at(0, 0)));
        assert!(!is_light_square(square_at(0, 1)));
        assert!(is_light_square(square_at(7, 7)));
    }

    #[test]
    fn selected_empty_square_keeps_its_shade() {
        let mut game_state = GameState::new_empty();
        let rook_square = square_at(4, 1);
        game_state
            .board
            .put_piece(rook_square, Some(Piece::new(PieceKind::Rook, Color::White)));

        let text = render_with_markers(&game_state, GlyphStyle::Letters, Some(square_at(4, 0)), 0);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[5], "4 [·] r  ·  :  ·  :  ·  :  4");
    }
}
