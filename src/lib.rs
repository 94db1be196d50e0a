//! Interval Timer Library
//!
//! This library provides the core functionality for the Interval Timer CLI.
//! It includes:
//! - Workout/rest state machine with stale-tick protection
//! - Single-owner tick driver built on tokio
//! - Display and notifier collaborator traits with mock implementations
//! - CLI command parsing and terminal rendering

pub mod cli;
pub mod display;
pub mod notifier;
pub mod timer;
pub mod types;

// Re-export commonly used types for convenience
pub use types::{IntervalConfig, PhaseAlert, TimeUpdate, TimerPhase, TimerSnapshot, TimerState};

pub use display::{Display, MockDisplay};
pub use notifier::{MockNotifier, Notifier};
pub use timer::{
    IntervalTimer, StartOutcome, TimerError, TimerHandle, TimerOptions, TimerService,
};
