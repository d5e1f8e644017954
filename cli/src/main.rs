//! # ScreenFlow Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the ScreenFlow CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to appropriate command handlers
//!
//! ## Architecture
//!
//! The application follows a modular command structure:
//! - Each top-level command (`extract`, `diagram`) is defined as a variant in the `Commands` enum
//! - Commands are mapped to handler functions in their respective modules
//! - All errors are propagated to this level for consistent handling
//!
//! ## Examples
//!
//! Basic ScreenFlow usage:
//!
//! ```bash
//! # Get help
//! screenflow --help
//!
//! # Regenerate definitions and flow doc from the journey map, verbosely
//! screenflow -vv extract
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Route to appropriate command handler
//! 4. Format and display any errors that occur
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

// Declare the top-level modules of the CLI crate.
mod commands; // Handles specific command logic (extract, diagram).
mod common; // Contains shared utilities (fs).
mod core; // Core infrastructure (errors, config, scanner, generators).

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "screenflow",
    about = "ScreenFlow: screen-map extraction and flow-diagram generation",
    long_about = "Extract the screens map from a journey-map source file, regenerate the\n\
                  typed screen-definitions module, and render a Markdown flow document\n\
                  with a Mermaid diagram of the screen graph.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    #[command(alias = "e")]
    Extract(commands::extract::ExtractArgs),
    #[command(alias = "d")]
    Diagram(commands::diagram::DiagramArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Use anyhow::Result directly
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Extract(args) => commands::extract::handle_extract(args).await,
        Commands::Diagram(args) => commands::diagram::handle_diagram(args).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

// --- Basic Integration Tests ---
#[cfg(test)]
mod tests {
    use assert_cmd::Command;
    use predicates::prelude::*;
    fn screenflow_cmd() -> Command {
        Command::cargo_bin("screenflow").expect("Failed to find screenflow binary for testing")
    }
    #[test]
    fn test_main_help_flag() {
        screenflow_cmd().arg("--help").assert().success();
    }
    #[test]
    fn test_main_version_flag() {
        screenflow_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}
