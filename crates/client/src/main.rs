//! Rogue client binary.
//!
//! Reads one command per line from standard input and prints the events it
//! produced plus a status line. Logging goes to stderr and is filtered with
//! `RUST_LOG`.
//!
//! # Examples
//!
//! ```bash
//! ROGUE_SEED=42 cargo run -p rogue-client
//! ROGUE_CONFIG=crates/game/content/data/game.toml cargo run -p rogue-client
//! ```

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use rogue_client::input::HELP;
use rogue_client::{ClientConfig, Input, parse_input, view};
use runtime::Session;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(io::stderr)
        .init();

    let config = ClientConfig::from_env();
    tracing::debug!(?config, "client configuration");

    let mut builder = Session::builder();
    if let Some(seed) = config.seed {
        builder = builder.seed(seed);
    }
    if let Some(path) = &config.config_path {
        builder = builder.config_file(path);
    }
    let mut session = builder.build().context("Failed to start a session")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for event in session.state().log.iter() {
        writeln!(out, "{}", view::format_event(event))?;
    }
    writeln!(out, "{}", view::status_line(session.state()))?;
    writeln!(out, "{HELP}")?;
    out.flush()?;

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read input")?;
        let command = match parse_input(&line) {
            Input::Command(command) => command,
            Input::Help => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            Input::Quit => break,
            Input::Unknown => {
                writeln!(out, "Unknown command {:?}. Type ? for help.", line.trim())?;
                continue;
            }
        };

        match session.execute(command) {
            Ok(report) => {
                for event in &report.events {
                    writeln!(out, "{}", view::format_event(event))?;
                }
                writeln!(out, "{}", view::status_line(session.state()))?;
                if report.is_game_over() {
                    break;
                }
            }
            Err(err) if err.is_game_over() => break,
            Err(err) => return Err(err).context("Command failed"),
        }
        out.flush()?;
    }

    out.flush()?;
    Ok(())
}
