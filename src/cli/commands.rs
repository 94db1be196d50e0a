//! Command definitions for the Interval Timer CLI.
//!
//! Uses clap derive macro for argument parsing.

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::types::{DEFAULT_REST_SECONDS, DEFAULT_WORKOUT_SECONDS};

// ============================================================================
// CLI Structure
// ============================================================================

/// Interval Timer CLI - workout/rest countdown for the terminal
#[derive(Parser, Debug)]
#[command(
    name = "interval-timer",
    version,
    about = "Workout/rest interval timer",
    long_about = "Alternates between a workout countdown and a rest countdown until stopped,\n\
                  ringing the terminal bell at every transition.",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

// ============================================================================
// Subcommands
// ============================================================================

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start the timer and read console commands until quit or Ctrl-C
    Run(RunArgs),

    /// Generate shell completion scripts
    Completions {
        /// Shell type for completion script
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ============================================================================
// Run Command Arguments
// ============================================================================

/// Output format for timer events.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human readable countdown and alerts
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Arguments for the run command
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Workout duration in seconds
    #[arg(
        short,
        long,
        default_value_t = i64::from(DEFAULT_WORKOUT_SECONDS),
        allow_negative_numbers = true
    )]
    pub workout: i64,

    /// Rest duration in seconds
    #[arg(
        short,
        long,
        default_value_t = i64::from(DEFAULT_REST_SECONDS),
        allow_negative_numbers = true
    )]
    pub rest: i64,

    /// Output format for countdown updates and alerts
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Do not ring the terminal bell on phase transitions
    #[arg(long)]
    pub no_bell: bool,

    /// Reject `start` while a run is in progress instead of ignoring it
    #[arg(long)]
    pub strict: bool,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            workout: i64::from(DEFAULT_WORKOUT_SECONDS),
            rest: i64::from(DEFAULT_REST_SECONDS),
            format: OutputFormat::Text,
            no_bell: false,
            strict: false,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
