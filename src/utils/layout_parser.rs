//! Board layout text to `GameState` parser.
//!
//! A layout has two whitespace-separated fields: eight `/`-separated rows
//! (row 0 first) and the side to move (`w` or `b`). Inside a row, letters are
//! pieces and digits are runs of empty squares. Lowercase letters are white
//! and uppercase letters are black.

use crate::chess_errors::ChessErrors;
use crate::game_state::{chess_types::*, game_state::GameState};

pub fn parse_layout(layout: &str) -> Result<GameState, ChessErrors> {
    let mut parts = layout.split_whitespace();

    let rows_part = parts
        .next()
        .ok_or_else(|| ChessErrors::InvalidLayoutForm("missing rows field".to_owned()))?;
    let side_part = parts
        .next()
        .ok_or_else(|| ChessErrors::InvalidLayoutForm("missing side-to-move field".to_owned()))?;

    if parts.next().is_some() {
        return Err(ChessErrors::InvalidLayoutForm(
            "layout has extra trailing fields".to_owned(),
        ));
    }

    let mut game_state = GameState::new_empty();
    parse_rows(rows_part, &mut game_state)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;

    Ok(game_state)
}

fn parse_rows(rows_part: &str, game_state: &mut GameState) -> Result<(), ChessErrors> {
    let rows: Vec<&str> = rows_part.split('/').collect();
    if rows.len() != 8 {
        return Err(ChessErrors::InvalidLayoutForm(format!(
            "expected 8 rows, found {}",
            rows.len()
        )));
    }

    for (row, row_str) in rows.iter().enumerate() {
        let mut col = 0usize;

        for ch in row_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidLayoutToken(ch));
                }
                col += empty_count as usize;
                if col > 8 {
                    return Err(ChessErrors::InvalidLayoutForm(format!(
                        "row {row} has more than 8 squares"
                    )));
                }
                continue;
            }

            let piece = piece_from_layout_char(ch).ok_or(ChessErrors::InvalidLayoutToken(ch))?;

            if col >= 8 {
                return Err(ChessErrors::InvalidLayoutForm(format!(
                    "row {row} has more than 8 squares"
                )));
            }

            game_state
                .board
                .put_piece(square_at(row as u8, col as u8), Some(piece));
            col += 1;
        }

        if col != 8 {
            return Err(ChessErrors::InvalidLayoutForm(format!(
                "row {row} does not sum to 8 squares"
            )));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, ChessErrors> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(ChessErrors::InvalidSideToMove(side_part.to_owned())),
    }
}

/// Decode one layout letter. Lowercase is white, uppercase is black.
pub fn piece_from_layout_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_lowercase() {
        Color::White
    } else if ch.is_ascii_uppercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(kind, color))
}
