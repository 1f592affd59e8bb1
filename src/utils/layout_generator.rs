use crate::game_state::{chess_types::*, game_state::GameState};

pub fn generate_layout(game_state: &GameState) -> String {
    let rows = generate_rows_field(game_state);
    let side_to_move = match game_state.side_to_move {
        Color::White => "w",
        Color::Black => "b",
    };

    format!("{} {}", rows, side_to_move)
}

fn generate_rows_field(game_state: &GameState) -> String {
    let mut out = String::new();

    for row in 0..8u8 {
        let mut empty_count = 0u8;

        for col in 0..8u8 {
            match game_state.board.piece_at(square_at(row, col)) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece_to_layout_char(piece));
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row < 7 {
            out.push('/');
        }
    }

    out
}

/// Encode one piece as a layout letter: lowercase for white, uppercase for black.
pub fn piece_to_layout_char(piece: Piece) -> char {
    let base = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };

    match piece.color {
        Color::White => base,
        Color::Black => base.to_ascii_uppercase(),
    }
}
