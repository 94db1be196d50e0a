//! Interval timer state machine.
//!
//! This module provides the core timer functionality:
//! - State transitions (Idle → Workout ⇄ Rest → Idle)
//! - One-second countdown driven by externally delivered ticks
//! - Stale tick rejection through a generation counter
//! - Display and notifier callbacks on every update and transition

use tracing::{debug, info, warn};

use super::error::TimerError;
use crate::display::Display;
use crate::notifier::Notifier;
use crate::types::{IntervalConfig, PhaseAlert, TimerPhase, TimerSnapshot, TimerState};

// ============================================================================
// TimerOptions
// ============================================================================

/// Behavior switches for the interval timer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimerOptions {
    /// Report `start` while running as [`TimerError::InvalidState`]
    /// instead of ignoring it.
    pub strict_start: bool,
}

/// Result of a successful `start` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// A new run began in the workout phase.
    Started,
    /// The timer was already running; nothing changed.
    Ignored,
}

// ============================================================================
// IntervalTimer
// ============================================================================

/// Workout/rest alternator.
///
/// The timer does not own a clock. A driver (see [`super::TimerService`])
/// calls [`IntervalTimer::on_tick`] once per second with the generation it
/// was armed for; ticks from an earlier generation are dropped.
pub struct IntervalTimer<D, N> {
    state: TimerState,
    generation: u64,
    options: TimerOptions,
    display: D,
    notifier: N,
}

impl<D: Display, N: Notifier> IntervalTimer<D, N> {
    /// Creates an idle timer reporting to the given collaborators.
    pub fn new(display: D, notifier: N) -> Self {
        Self::with_options(display, notifier, TimerOptions::default())
    }

    /// Creates an idle timer with explicit options.
    pub fn with_options(display: D, notifier: N, options: TimerOptions) -> Self {
        Self {
            state: TimerState::new(),
            generation: 0,
            options,
            display,
            notifier,
        }
    }

    /// Starts a new run with the given durations in seconds.
    ///
    /// The display receives the initial workout value immediately.
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::InvalidDuration`] if either duration is not
    /// positive, and [`TimerError::InvalidState`] if the timer is running
    /// and strict start is enabled. The state is unchanged on error.
    pub fn start(
        &mut self,
        workout_seconds: i64,
        rest_seconds: i64,
    ) -> Result<StartOutcome, TimerError> {
        let config = IntervalConfig::new(workout_seconds, rest_seconds).inspect_err(|e| {
            warn!("Rejected start request: {}", e);
        })?;

        if self.state.is_running() {
            if self.options.strict_start {
                return Err(TimerError::InvalidState {
                    phase: self.state.phase,
                });
            }
            debug!(
                "Start ignored, timer already in {} phase",
                self.state.phase.as_str()
            );
            return Ok(StartOutcome::Ignored);
        }

        self.generation = self.generation.wrapping_add(1);
        self.state.start_workout(config);

        info!(
            workout_seconds = config.workout_seconds,
            rest_seconds = config.rest_seconds,
            generation = self.generation,
            "Interval timer started"
        );

        self.display.on_time_updated(&self.state.time_update());

        Ok(StartOutcome::Started)
    }

    /// Stops the current run and resets the countdown.
    ///
    /// Returns true if a run was stopped; calling this while idle does nothing.
    pub fn stop(&mut self) -> bool {
        if !self.state.is_running() {
            return false;
        }

        self.generation = self.generation.wrapping_add(1);
        let phase = self.state.phase;
        self.state.stop();

        info!(phase = phase.as_str(), "Interval timer stopped");

        self.display.on_completed();
        true
    }

    /// Advances the countdown by one second.
    ///
    /// Returns false if the tick was discarded because the timer is idle or
    /// `generation` no longer matches the current run.
    pub fn on_tick(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.state.is_running() {
            debug!(
                tick_generation = generation,
                current_generation = self.generation,
                "Discarding stale tick"
            );
            return false;
        }

        let expired = self.state.tick();
        debug!(
            phase = self.state.phase.as_str(),
            remaining = self.state.remaining_seconds,
            "Tick"
        );
        self.display.on_time_updated(&self.state.time_update());

        if expired {
            self.handle_phase_complete();
        }

        true
    }

    /// Switches to the next phase and raises the matching alert.
    fn handle_phase_complete(&mut self) {
        let Some(finished) = self.state.advance() else {
            return;
        };

        info!(
            finished = finished.as_str(),
            next = self.state.phase.as_str(),
            "Phase completed"
        );

        if let Some(alert) = PhaseAlert::for_finished(finished) {
            self.notifier.on_phase_completed(&alert);
        }

        self.display.on_time_updated(&self.state.time_update());
    }

    /// Generation of the current run; ticks must carry this value.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Current phase.
    pub fn phase(&self) -> TimerPhase {
        self.state.phase
    }

    /// Seconds left in the current phase.
    pub fn remaining_seconds(&self) -> u32 {
        self.state.remaining_seconds
    }

    /// Returns true while a run is in progress.
    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Returns a reference to the current timer state.
    pub fn state(&self) -> &TimerState {
        &self.state
    }

    /// Builds a snapshot of the current state.
    pub fn snapshot(&self) -> TimerSnapshot {
        self.state.snapshot()
    }

    /// Returns the display collaborator.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Returns the notifier collaborator.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}

// ============================================================================
// Tests
// ============================================================================
