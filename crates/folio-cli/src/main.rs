use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about = "A terminal portfolio viewer")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a profile TOML file (overrides the configured profile)
    #[arg(short, long)]
    profile: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI (default)
    Run {
        /// Path to a profile TOML file
        #[arg(short, long)]
        profile: Option<PathBuf>,
    },
    /// Write a starter config and profile to ~/.config/folio/
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },
    /// Validate a profile file and print a summary
    Check {
        /// Profile to check (defaults to the configured profile)
        path: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Initialize logging. Log lines go to stderr so they never corrupt
    // the alternate screen.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = Arc::new(AppConfig::load()?);

    match cli.command {
        Some(Commands::Run { profile }) => commands::run::run(config, profile.or(cli.profile)),
        None => commands::run::run(config, cli.profile),
        Some(Commands::Init { force }) => commands::init::run(force),
        Some(Commands::Check { path }) => commands::check::run(&config, path.or(cli.profile)),
    }
}
