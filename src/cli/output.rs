//! Output helpers for the Interval Timer CLI.
//!
//! This module provides formatted output for:
//! - Command acknowledgements (start/stop)
//! - Status display
//! - Error messages
//!
//! In JSON mode stdout carries only JSON, so acknowledgements go to stderr.

use crate::display::format_time;
use crate::timer::StartOutcome;
use crate::types::TimerSnapshot;

use super::commands::OutputFormat;

/// Console output for command results.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    fn message(&self, text: &str) {
        match self.format {
            OutputFormat::Text => println!("{}", text),
            OutputFormat::Json => eprintln!("{}", text),
        }
    }

    /// Shows the result of a start request.
    pub fn show_start(&self, outcome: StartOutcome, workout_seconds: i64, rest_seconds: i64) {
        match outcome {
            StartOutcome::Started => {
                self.message(&Self::start_message(workout_seconds, rest_seconds))
            }
            StartOutcome::Ignored => self.message("Timer is already running; type 'stop' first"),
        }
    }

    /// Shows the result of a stop request.
    pub fn show_stop(&self, stopped: bool) {
        if !stopped {
            self.message("Timer is not running");
        }
    }

    /// Shows the current timer status.
    pub fn show_status(&self, snapshot: &TimerSnapshot) {
        match self.format {
            OutputFormat::Text => println!("{}", Self::status_text(snapshot)),
            OutputFormat::Json => match serde_json::to_string(snapshot) {
                Ok(json) => println!("{}", json),
                Err(e) => Self::show_error(&e.to_string()),
            },
        }
    }

    /// Shows the list of console commands.
    pub fn show_help(&self, help: &str) {
        self.message(help);
    }

    /// Shows an error message.
    pub fn show_error(message: &str) {
        eprintln!("Error: {}", message);
    }

    fn start_message(workout_seconds: i64, rest_seconds: i64) -> String {
        format!(
            "Started: workout {}s, rest {}s (type 'stop' to end, 'quit' to exit)",
            workout_seconds, rest_seconds
        )
    }

    fn status_text(snapshot: &TimerSnapshot) -> String {
        if !snapshot.phase.is_active() {
            return "Status: idle".to_string();
        }
        format!(
            "Status: {} {} remaining ({}%)",
            snapshot.phase.as_str(),
            format_time(snapshot.remaining_seconds),
            snapshot.progress_percent
        )
    }
}
