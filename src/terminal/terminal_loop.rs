//! Line-oriented terminal front end.
//!
//! Plays the renderer role: turns typed commands into square clicks on a
//! `SelectionController` and prints the board back after each change.

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::chess_errors::ChessErrors;
use crate::controller::selection_controller::{ClickOutcome, SelectionController};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};
use crate::utils::render_game_state::{render_controller, GlyphStyle};
use crate::utils::session_config::SessionConfig;

const HELP_TEXT: &str = "\
commands:
  click <row> <col> | click <square>   click one square (row 0 is the top)
  move <from> <to>                     select and move in one go, e.g. move e2 e4
  board                                show the board and whose turn it is
  status                               show whose turn it is
  layout                               print the current board layout
  load <rows> <w|b>                    load a board layout
  new                                  start a new game
  help                                 show this text
  quit                                 leave";

pub fn run_stdio_loop(config: &SessionConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = TerminalSession::new(config);

    writeln!(stdout, "{}", render_controller(&session.controller, session.glyphs))?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = session.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct TerminalSession {
    controller: SelectionController,
    glyphs: GlyphStyle,
}

impl TerminalSession {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            controller: SelectionController::from_game_state(config.initial_game_state()),
            glyphs: config.glyphs,
        }
    }

    pub fn controller(&self) -> &SelectionController {
        &self.controller
    }

    /// Run one command line. Returns `Ok(true)` when the session should end.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();
        debug!(cmd, ?args, "terminal command");

        let result = match cmd {
            "click" => self.handle_click(&args, out),
            "move" => self.handle_move(&args, out),
            "board" => {
                self.print_board(out)?;
                Ok(())
            }
            "status" => {
                writeln!(out, "{}", self.controller.status_text())?;
                Ok(())
            }
            "layout" => {
                writeln!(out, "{}", self.controller.game_state().get_layout())?;
                Ok(())
            }
            "load" => self.handle_load(&args, out),
            "new" => {
                self.controller.reset();
                self.print_board(out)?;
                Ok(())
            }
            "help" => {
                writeln!(out, "{HELP_TEXT}")?;
                Ok(())
            }
            "quit" | "exit" => return Ok(true),
            _ => {
                writeln!(out, "error: unknown command '{cmd}' (try 'help')")?;
                Ok(())
            }
        };

        if let Err(err) = result {
            warn!(%err, cmd, "command failed");
            writeln!(out, "error: {err}")?;
        }

        Ok(false)
    }

    fn handle_click(&mut self, args: &[&str], out: &mut impl Write) -> Result<(), CommandError> {
        let outcome = match args {
            [square] => self.controller.click_square(algebraic_to_square(square)?)?,
            [row, col] => {
                let row = parse_coordinate(row)?;
                let col = parse_coordinate(col)?;
                self.controller.on_square_clicked(row, col)?
            }
            _ => return Err(CommandError::Usage("click <row> <col> | click <square>")),
        };

        self.report_outcome(outcome, out)?;
        Ok(())
    }

    fn handle_move(&mut self, args: &[&str], out: &mut impl Write) -> Result<(), CommandError> {
        let [from, to] = args else {
            return Err(CommandError::Usage("move <from> <to>"));
        };
        let from = algebraic_to_square(from)?;
        let to = algebraic_to_square(to)?;

        // A pending click selection must not turn `from` into a destination.
        self.controller.clear_selection();

        match self.controller.click_square(from)? {
            ClickOutcome::Selected { .. } => {
                let outcome = self.controller.click_square(to)?;
                self.report_outcome(outcome, out)?;
            }
            outcome => self.report_outcome(outcome, out)?,
        }
        Ok(())
    }

    fn handle_load(&mut self, args: &[&str], out: &mut impl Write) -> Result<(), CommandError> {
        if args.is_empty() {
            return Err(CommandError::Usage("load <rows> <w|b>"));
        }
        let game_state = GameState::from_layout(&args.join(" "))?;
        self.controller.load_game_state(game_state);
        self.print_board(out)?;
        Ok(())
    }

    fn report_outcome(&self, outcome: ClickOutcome, out: &mut impl Write) -> io::Result<()> {
        match outcome {
            ClickOutcome::Selected {
                square,
                destinations,
            } => {
                let names: Vec<String> = squares_in(destinations).map(square_to_algebraic).collect();
                writeln!(
                    out,
                    "selected {}: {}",
                    square_to_algebraic(square),
                    if names.is_empty() {
                        "no legal moves".to_owned()
                    } else {
                        names.join(" ")
                    }
                )?;
                self.print_board(out)
            }
            ClickOutcome::Ignored { square } => writeln!(
                out,
                "nothing to select on {} for {}",
                square_to_algebraic(square),
                self.controller.current_turn().display_name()
            ),
            ClickOutcome::Moved { from, to, captured } => {
                match captured {
                    Some(_) => writeln!(
                        out,
                        "moved {} -> {} (capture)",
                        square_to_algebraic(from),
                        square_to_algebraic(to)
                    )?,
                    None => writeln!(
                        out,
                        "moved {} -> {}",
                        square_to_algebraic(from),
                        square_to_algebraic(to)
                    )?,
                }
                self.print_board(out)
            }
            ClickOutcome::Deselected { from, to } => writeln!(
                out,
                "illegal move {} -> {}, selection cleared",
                square_to_algebraic(from),
                square_to_algebraic(to)
            ),
        }
    }

    fn print_board(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}", render_controller(&self.controller, self.glyphs))
    }
}

fn parse_coordinate(token: &str) -> Result<u8, CommandError> {
    token
        .parse::<u8>()
        .map_err(|_| CommandError::BadCoordinate(token.to_owned()))
}

/// Failures of a single command; reported to the user, never fatal.
#[derive(Debug, thiserror::Error)]
enum CommandError {
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("'{0}' is not a row or column number")]
    BadCoordinate(String),
    #[error(transparent)]
    Chess(#[from] ChessErrors),
    #[error(transparent)]
    Io(#[from] io::Error),
}
