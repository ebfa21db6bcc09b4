//! readalong command-line entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use readalong::cli::{Cli, Commands, ConfigCommands};

/// Environment variable holding the log filter.
const LOG_ENV: &str = "READALONG_LOG";

fn main() -> Result<()> {
    let cli = Cli::parse();

    // READALONG_LOG wins over --verbose. Logs go to stderr so JSON output
    // on stdout stays clean.
    let env_filter = std::env::var(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            "readalong=debug".to_string()
        } else {
            "readalong=warn".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Play(args) => commands::play::handle(args),
        Commands::Segments(args) => commands::segments::handle(args),
        Commands::Simulate(args) => commands::simulate::handle(args),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Init { force } => commands::config::handle_init(force),
            ConfigCommands::Path => commands::config::handle_path(),
        },
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
