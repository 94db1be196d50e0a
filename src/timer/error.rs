//! Timer error types.
//!
//! All errors are reported at the command boundary (`start`) or by the
//! handle when the tick driver is gone. State is never changed on error.

use thiserror::Error;

use crate::types::TimerPhase;

/// Errors that can occur when controlling the interval timer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimerError {
    /// A workout or rest duration is not a positive number of seconds.
    #[error("Invalid duration: workout={workout}s, rest={rest}s (both must be positive)")]
    InvalidDuration {
        /// Requested workout duration
        workout: i64,
        /// Requested rest duration
        rest: i64,
    },

    /// Start was requested while a run is in progress (strict mode only).
    #[error("Timer is already running ({})", phase.as_str())]
    InvalidState {
        /// Phase the timer was in
        phase: TimerPhase,
    },

    /// The tick driver task has exited.
    #[error("Timer service is not running")]
    ServiceUnavailable,
}

impl TimerError {
    /// Returns true if this error was caused by caller input.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidDuration { .. })
    }

    /// Returns a user-friendly suggestion for resolving this error.
    #[must_use]
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::InvalidDuration { .. } => "Enter a workout and rest time of at least 1 second",
            Self::InvalidState { .. } => "Stop the current run before starting a new one",
            Self::ServiceUnavailable => "Restart the application",
        }
    }
}
