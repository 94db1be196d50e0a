//! Core data types for the Interval Timer.
//!
//! This module defines the data structures used for:
//! - Timer phase and countdown state
//! - Interval configuration with validation
//! - Events handed to the display and notifier collaborators

use serde::{Deserialize, Serialize};

use crate::timer::TimerError;

// ============================================================================
// TimerPhase
// ============================================================================

/// Represents the current phase of the timer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerPhase {
    /// Timer is not running
    #[default]
    Idle,
    /// Counting down a workout interval
    Workout,
    /// Counting down a rest interval
    Rest,
}

impl TimerPhase {
    /// Returns the string representation of the phase.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerPhase::Idle => "idle",
            TimerPhase::Workout => "workout",
            TimerPhase::Rest => "rest",
        }
    }

    /// Returns the label shown in front of the countdown.
    pub fn label(&self) -> &'static str {
        match self {
            TimerPhase::Idle => "Idle",
            TimerPhase::Workout => "Workout",
            TimerPhase::Rest => "Rest",
        }
    }

    /// Returns true if the timer is actively counting down.
    pub fn is_active(&self) -> bool {
        matches!(self, TimerPhase::Workout | TimerPhase::Rest)
    }

    /// Returns the phase that follows this one on expiry.
    ///
    /// `Idle` has no successor; it is left only through `start`.
    pub fn next(&self) -> Option<TimerPhase> {
        match self {
            TimerPhase::Idle => None,
            TimerPhase::Workout => Some(TimerPhase::Rest),
            TimerPhase::Rest => Some(TimerPhase::Workout),
        }
    }
}

// ============================================================================
// IntervalConfig
// ============================================================================

/// Default workout duration in seconds.
pub const DEFAULT_WORKOUT_SECONDS: u32 = 30;

/// Default rest duration in seconds.
pub const DEFAULT_REST_SECONDS: u32 = 10;

/// Workout and rest durations for one run of the timer.
///
/// Both values are at least one second; construct through [`IntervalConfig::new`]
/// to validate caller input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalConfig {
    /// Workout duration in seconds
    pub workout_seconds: u32,
    /// Rest duration in seconds
    pub rest_seconds: u32,
}

impl Default for IntervalConfig {
    fn default() -> Self {
        Self {
            workout_seconds: DEFAULT_WORKOUT_SECONDS,
            rest_seconds: DEFAULT_REST_SECONDS,
        }
    }
}

impl IntervalConfig {
    /// Builds a configuration from raw caller input.
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::InvalidDuration`] if either value is not a
    /// positive number of seconds that fits in `u32`.
    pub fn new(workout_seconds: i64, rest_seconds: i64) -> Result<Self, TimerError> {
        let invalid = || TimerError::InvalidDuration {
            workout: workout_seconds,
            rest: rest_seconds,
        };

        if workout_seconds <= 0 || rest_seconds <= 0 {
            return Err(invalid());
        }

        let workout_seconds = u32::try_from(workout_seconds).map_err(|_| invalid())?;
        let rest_seconds = u32::try_from(rest_seconds).map_err(|_| invalid())?;

        Ok(Self {
            workout_seconds,
            rest_seconds,
        })
    }

    /// Returns the configured duration of the given phase (0 for `Idle`).
    pub fn duration_for(&self, phase: TimerPhase) -> u32 {
        match phase {
            TimerPhase::Idle => 0,
            TimerPhase::Workout => self.workout_seconds,
            TimerPhase::Rest => self.rest_seconds,
        }
    }
}

// ============================================================================
// TimerState
// ============================================================================

/// Countdown state of the timer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimerState {
    /// Current phase of the timer
    pub phase: TimerPhase,
    /// Remaining seconds in the current phase
    pub remaining_seconds: u32,
    /// Durations of the current run (`None` before the first start)
    pub config: Option<IntervalConfig>,
}

impl TimerState {
    /// Creates a new TimerState in idle state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a run with the given durations, entering the workout phase.
    pub fn start_workout(&mut self, config: IntervalConfig) {
        self.config = Some(config);
        self.enter(TimerPhase::Workout);
    }

    /// Moves to the phase that follows the current one.
    ///
    /// Returns the phase that just finished, or `None` when idle.
    pub fn advance(&mut self) -> Option<TimerPhase> {
        let finished = self.phase;
        let next = finished.next()?;
        self.enter(next);
        Some(finished)
    }

    fn enter(&mut self, phase: TimerPhase) {
        self.phase = phase;
        self.remaining_seconds = self
            .config
            .map(|config| config.duration_for(phase))
            .unwrap_or(0);
    }

    /// Stops the timer and resets the countdown.
    ///
    /// The durations of the last run are kept so a later start can reuse them.
    pub fn stop(&mut self) {
        self.phase = TimerPhase::Idle;
        self.remaining_seconds = 0;
    }

    /// Decrements the timer by one second.
    ///
    /// Returns true if the current phase has expired (reached 0).
    pub fn tick(&mut self) -> bool {
        if self.remaining_seconds > 0 {
            self.remaining_seconds -= 1;
        }
        self.remaining_seconds == 0
    }

    /// Returns true if the timer is actively running.
    pub fn is_running(&self) -> bool {
        self.phase.is_active()
    }

    /// Duration of the current phase in seconds (0 when idle).
    pub fn current_duration(&self) -> u32 {
        self.config
            .map(|config| config.duration_for(self.phase))
            .unwrap_or(0)
    }

    /// Percentage of the current phase that has elapsed, rounded down.
    pub fn progress_percent(&self) -> u8 {
        progress_percent(self.current_duration(), self.remaining_seconds)
    }

    /// Builds the display event for the current countdown value.
    pub fn time_update(&self) -> TimeUpdate {
        TimeUpdate {
            phase: self.phase,
            remaining_seconds: self.remaining_seconds,
            progress_percent: self.progress_percent(),
        }
    }

    /// Builds a read-only snapshot of the state.
    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            phase: self.phase,
            remaining_seconds: self.remaining_seconds,
            progress_percent: self.progress_percent(),
            workout_seconds: self.config.map(|c| c.workout_seconds),
            rest_seconds: self.config.map(|c| c.rest_seconds),
        }
    }
}

/// Computes `floor((duration - remaining) * 100 / duration)`.
///
/// A zero duration (idle) yields 0.
pub fn progress_percent(duration: u32, remaining: u32) -> u8 {
    if duration == 0 {
        return 0;
    }
    let elapsed = u64::from(duration.saturating_sub(remaining));
    // elapsed <= duration, so the quotient is at most 100
    (elapsed * 100 / u64::from(duration)) as u8
}

// ============================================================================
// Collaborator Events
// ============================================================================

/// A countdown update for the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeUpdate {
    /// Phase being counted down
    pub phase: TimerPhase,
    /// Seconds left in the phase
    #[serde(rename = "remainingSeconds")]
    pub remaining_seconds: u32,
    /// Elapsed share of the phase, 0-100
    #[serde(rename = "progressPercent")]
    pub progress_percent: u8,
}

/// Title of the alert raised when a workout interval ends.
pub const WORKOUT_COMPLETE_TITLE: &str = "Workout Complete";

/// Message of the alert raised when a workout interval ends.
pub const WORKOUT_COMPLETE_MESSAGE: &str = "Get ready for rest!";

/// Title of the alert raised when a rest interval ends.
pub const REST_COMPLETE_TITLE: &str = "Rest Complete";

/// Message of the alert raised when a rest interval ends.
pub const REST_COMPLETE_MESSAGE: &str = "Get ready for the next set!";

/// Alert text handed to the notifier when a phase finishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseAlert {
    /// Alert title
    pub title: String,
    /// Alert body
    pub message: String,
}

impl PhaseAlert {
    /// Returns the alert for the phase that just finished.
    pub fn for_finished(phase: TimerPhase) -> Option<Self> {
        let (title, message) = match phase {
            TimerPhase::Idle => return None,
            TimerPhase::Workout => (WORKOUT_COMPLETE_TITLE, WORKOUT_COMPLETE_MESSAGE),
            TimerPhase::Rest => (REST_COMPLETE_TITLE, REST_COMPLETE_MESSAGE),
        };
        Some(Self {
            title: title.to_string(),
            message: message.to_string(),
        })
    }
}

/// Read-only view of the timer for rendering and status queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    /// Current phase
    pub phase: TimerPhase,
    /// Remaining seconds in the current phase
    #[serde(rename = "remainingSeconds")]
    pub remaining_seconds: u32,
    /// Elapsed share of the current phase
    #[serde(rename = "progressPercent")]
    pub progress_percent: u8,
    /// Workout duration of the current or last run
    #[serde(rename = "workoutSeconds", skip_serializing_if = "Option::is_none")]
    pub workout_seconds: Option<u32>,
    /// Rest duration of the current or last run
    #[serde(rename = "restSeconds", skip_serializing_if = "Option::is_none")]
    pub rest_seconds: Option<u32>,
}

// ============================================================================
// Tests
// ============================================================================
