use std::error::Error;
use std::io;

use tracing_subscriber::EnvFilter;

use click_chess::terminal::terminal_loop::run_stdio_loop;
use click_chess::utils::session_config::SessionConfig;

fn main() -> Result<(), Box<dyn Error>> {
    // Logs go to stderr so the board on stdout stays readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = SessionConfig::from_env()?;
    tracing::info!(
        glyphs = ?config.glyphs,
        custom_start = config.start_position.is_some(),
        "session starting"
    );

    run_stdio_loop(&config)?;
    Ok(())
}
