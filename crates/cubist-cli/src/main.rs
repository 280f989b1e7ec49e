//! cubist - terminal front end for the cube engine
//!
//! Usage:
//!   cubist show <facelets>
//!   cubist assemble <capture.json>
//!   cubist quads <facelets>
//!   cubist play <facelets> <solution.json>

mod commands;
mod config;

use config::{print_usage, CliConfig, Command, COLOR_ENV};
use cubist_facelets::NetStyle;
use std::io::{self, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr; stdout carries command output only.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cubist=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let color_env = std::env::var(COLOR_ENV).ok();
    let config = match CliConfig::parse(std::env::args().skip(1), color_env.as_deref()) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("Error: {message}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };
    let style = NetStyle {
        ansi: config.color,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match config.command {
        Command::Show { facelets } => commands::show(&facelets, style, &mut out)?,
        Command::Assemble { captures } => {
            let state = commands::assemble_file(&captures)?;
            writeln!(out, "{state}")?;
        }
        Command::Quads { facelets } => commands::quads(&facelets, &mut out)?,
        Command::Play { facelets, solution } => {
            tracing::info!("keys: n next, p previous, q quit");
            commands::play(&facelets, &solution, style, io::stdin().lock(), &mut out)?
        }
        Command::Help => print_usage(),
    }
    Ok(())
}
