//! Folio CLI.
//!
//! Provides commands for:
//! - `render`: Render a route of the site as a page document or JSON
//! - `nav`: Print the primary menu for a locale
//! - `news`: Fetch and print the normalized news feed

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{NavArgs, NewsArgs, RenderArgs};
use error::CliError;
use output::Output;

/// Folio - hash-routed content site engine.
#[derive(Parser)]
#[command(name = "folio", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a route (`#id` or `#id/detail`, or a full site URL).
    Render(RenderArgs),
    /// Print the primary menu.
    Nav(NavArgs),
    /// Fetch and print the news feed as JSON.
    News(NewsArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Commands::Render(args) => args.site.verbose,
            Commands::Nav(args) => args.site.verbose,
            Commands::News(args) => args.site.verbose,
        }
    }

    async fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Render(args) => args.execute().await,
            Commands::Nav(args) => args.execute().await,
            Commands::News(args) => args.execute().await,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.command.verbose() {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = tokio::runtime::Runtime::new()
        .map_err(CliError::from)
        .and_then(|rt| rt.block_on(cli.command.execute()));

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
