//! Rewind - console entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use rewind::{Input, Reply, Session, Settings, View, render, replay};
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_SETTINGS: &str = "rewind.toml";

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::resolve(cli.config.as_deref(), Path::new(DEFAULT_SETTINGS))
        .context("Failed to load settings")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play => run_interactive(settings),
        Command::Replay { moves, jump, json } => run_replay(settings, &moves, jump, json),
    }
}

/// Reads commands from stdin until `quit` or end of input.
fn run_interactive(settings: Settings) -> Result<()> {
    info!("Starting interactive session");
    let mut session = Session::new(settings);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    writeln!(stdout, "{}\n\n{}", session.screen(), rewind::HELP)?;

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }

        let reply = match line.parse::<Input>() {
            Ok(input) => session.handle(input),
            Err(err) => {
                debug!(%err, "Unparseable input");
                Reply::Print(err.to_string())
            }
        };

        match reply {
            Reply::Print(text) => writeln!(stdout, "{}\n", text)?,
            Reply::Quiet => {}
            Reply::Quit => break,
        }
        stdout.flush()?;
    }

    info!("Session ended");
    Ok(())
}

/// Plays a scripted sequence and prints the final view.
fn run_replay(settings: Settings, moves: &[usize], jump: Option<usize>, json: bool) -> Result<()> {
    let replay = replay(moves, jump).context("Replay failed")?;

    for (index, reason) in &replay.rejected {
        eprintln!("move {} ignored: {}", index, reason);
    }

    if json {
        let view = View::capture(&replay.engine);
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{}", render(&replay.engine, &settings));
    }
    Ok(())
}
