//! Crate root module declarations for the click chess rules engine.
//!
//! Exposes the board model, per-piece movement rules, the legality
//! dispatcher, the click-driven selection controller, and the text utilities
//! (layout codec, square names, rendering, session config) used by the
//! terminal front end.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod square_lines;
}

pub mod move_generation {
    pub mod legal_move_checks;
    pub mod legal_move_generator;
}

pub mod controller {
    pub mod selection_controller;
}

pub mod terminal {
    pub mod terminal_loop;
}

pub mod utils {
    pub mod algebraic;
    pub mod layout_generator;
    pub mod layout_parser;
    pub mod render_game_state;
    pub mod session_config;
}
