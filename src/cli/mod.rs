//! CLI module for the Interval Timer.
//!
//! This module provides the command-line interface:
//! - `commands`: Command definitions using clap derive
//! - `app`: The interactive `run` command
//! - `console`: Parsing of console commands typed while running
//! - `render`: Terminal and JSON display/notifier implementations
//! - `output`: Command acknowledgements and error display

pub mod app;
pub mod commands;
pub mod console;
pub mod output;
pub mod render;

pub use app::run;
pub use commands::{Cli, Commands, OutputFormat, RunArgs};
pub use console::ConsoleCommand;
pub use output::Output;
pub use render::{JsonDisplay, JsonNotifier, TerminalDisplay, TerminalNotifier};
