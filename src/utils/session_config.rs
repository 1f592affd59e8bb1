//! Session settings for the terminal front end.
//!
//! Read from environment variables:
//! - `CLICK_CHESS_GLYPHS`: `unicode` (default) or `letters`.
//! - `CLICK_CHESS_LAYOUT`: optional starting board layout.

use crate::chess_errors::ChessErrors;
use crate::game_state::game_state::GameState;
use crate::utils::render_game_state::GlyphStyle;

pub const GLYPHS_ENV: &str = "CLICK_CHESS_GLYPHS";
pub const LAYOUT_ENV: &str = "CLICK_CHESS_LAYOUT";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionConfig {
    pub glyphs: GlyphStyle,
    pub start_position: Option<GameState>,
}

impl SessionConfig {
    pub fn from_env() -> Result<Self, ChessErrors> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or blank keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ChessErrors>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(GLYPHS_ENV).filter(|v| !v.trim().is_empty()) {
            config.glyphs = parse_glyph_style(&value)?;
        }

        if let Some(value) = lookup(LAYOUT_ENV).filter(|v| !v.trim().is_empty()) {
            config.start_position = Some(GameState::from_layout(&value)?);
        }

        Ok(config)
    }

    pub fn initial_game_state(&self) -> GameState {
        self.start_position.clone().unwrap_or_else(GameState::new_game)
    }
}

fn parse_glyph_style(value: &str) -> Result<GlyphStyle, ChessErrors> {
    match value.trim() {
        v if v.eq_ignore_ascii_case("unicode") => Ok(GlyphStyle::Unicode),
        v if v.eq_ignore_ascii_case("letters") => Ok(GlyphStyle::Letters),
        _ => Err(ChessErrors::InvalidConfigValue {
            key: GLYPHS_ENV.to_owned(),
            value: value.to_owned(),
        }),
    }
}
