//! Command-line interface for school-docs
//!
//! Provides `bytes`, `check`, `render` and `generate` subcommands.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod bytes;
mod check;
mod generate;
mod render;
mod utils;

pub use utils::{load_document, parse_document};

/// Render school documents for printing and check NEIS byte limits
#[derive(Parser)]
#[command(name = "school-docs")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Count NEIS bytes of a text and optionally enforce a limit
    Bytes(bytes::BytesArgs),

    /// Check a saved document's text fields against byte limits
    Check(check::CheckArgs),

    /// Render a saved document as a printable HTML page
    Render(render::RenderArgs),

    /// Generate text with Gemini or GPT
    Generate(generate::GenerateArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Bytes(args) => bytes::run(args),
        Commands::Check(args) => check::run(args),
        Commands::Render(args) => render::run(args),
        Commands::Generate(args) => generate::run(args),
    }
}

/// Logs go to stderr; stdout carries only command output.
fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::from_default_env().add_directive(level.into());
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
