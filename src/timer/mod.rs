//! Timer module for the Interval Timer.
//!
//! This module contains the core timer functionality:
//! - `engine`: Workout/rest state machine
//! - `service`: Single-owner tick driver and its command handle
//! - `error`: Errors reported at the command boundary

pub mod engine;
pub mod error;
pub mod service;

pub use engine::{IntervalTimer, StartOutcome, TimerOptions};
pub use error::TimerError;
pub use service::{TimerHandle, TimerService, TICK_PERIOD};
