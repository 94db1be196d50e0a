//! Interval Timer CLI - workout/rest countdown for the terminal
//!
//! Alternates between a workout interval and a rest interval until stopped:
//! - Countdown with progress bar, redrawn every second
//! - Bell and alert line at each transition
//! - `start` / `stop` / `status` / `quit` typed while running

use anyhow::Result;
use clap::{CommandFactory, Parser};

use interval_timer::cli::{run, Cli, Commands, Output};

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_tracing(cli.verbose);

    // Execute command
    if let Err(e) = execute(cli).await {
        Output::show_error(&e.to_string());
        std::process::exit(1);
    }

    // A pending stdin read cannot be cancelled; exit instead of letting
    // runtime shutdown wait for it.
    std::process::exit(0);
}

/// Initializes the tracing subscriber for logging.
///
/// Logs go to stderr so that stdout only carries timer output.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

/// Executes the CLI command.
async fn execute(cli: Cli) -> Result<()> {
    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Run(args)) => {
            run(args).await?;
        }
        Some(Commands::Completions { shell }) => {
            generate_completions(shell);
        }
        None => {
            // No command provided, show help
            Cli::command().print_help()?;
        }
    }

    Ok(())
}

/// Generates shell completion scripts.
fn generate_completions(shell: clap_complete::Shell) {
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}

// ============================================================================
// Tests
// ============================================================================
