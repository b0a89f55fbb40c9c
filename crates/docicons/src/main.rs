//! docicons CLI - inline icons for documentation sites.
//!
//! Provides commands for:
//! - `resolve`: Resolve `prefix:name` identifiers to inline SVG
//! - `sets`: List the configured icon set prefixes and their bundle files
//! - `menu`: Resolve every icon in a mega-menu definition and emit JSON

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{MenuArgs, ResolveArgs, SetsArgs};
use output::Output;

/// docicons - inline icons for documentation sites.
#[derive(Parser)]
#[command(name = "docicons", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve icon identifiers to inline SVG.
    Resolve(ResolveArgs),
    /// List configured icon sets.
    Sets(SetsArgs),
    /// Resolve icons in a menu definition.
    Menu(MenuArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::Resolve(args) => args.common.verbose,
            Self::Sets(args) => args.common.verbose,
            Self::Menu(args) => args.common.verbose,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables DEBUG level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.command.verbose() {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Resolve(args) => args.execute(),
        Commands::Sets(args) => args.execute(),
        Commands::Menu(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
