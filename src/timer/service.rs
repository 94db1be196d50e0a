//! Tick driver for the interval timer.
//!
//! [`TimerService`] owns the [`IntervalTimer`] and is the only place its
//! state is mutated. Commands from any number of [`TimerHandle`]s and ticks
//! from a single `tokio::time::Interval` are serialized by one `select!`
//! loop. The ticker is rebuilt on every successful start and dropped on stop,
//! so two tick sources never coexist.

use tokio::sync::{mpsc, oneshot};
use tokio::time::{interval_at, Duration, Instant, Interval, MissedTickBehavior};
use tracing::{debug, info};

use super::engine::{IntervalTimer, StartOutcome};
use super::error::TimerError;
use crate::display::Display;
use crate::notifier::Notifier;
use crate::types::TimerSnapshot;

/// Period between countdown ticks.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

// ============================================================================
// Commands
// ============================================================================

/// Requests sent from a handle to the service task.
#[derive(Debug)]
enum TimerCommand {
    Start {
        workout_seconds: i64,
        rest_seconds: i64,
        reply: oneshot::Sender<Result<StartOutcome, TimerError>>,
    },
    Stop {
        reply: oneshot::Sender<bool>,
    },
    Snapshot {
        reply: oneshot::Sender<TimerSnapshot>,
    },
    Shutdown,
}

/// A ticker bound to the run it was armed for.
struct ArmedTicker {
    interval: Interval,
    generation: u64,
}

impl ArmedTicker {
    /// Arms a ticker whose first tick fires one period from now.
    fn arm(generation: u64) -> Self {
        let mut interval = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self {
            interval,
            generation,
        }
    }
}

/// Waits for the next tick, or forever when no ticker is armed.
async fn next_tick(ticker: &mut Option<ArmedTicker>) -> u64 {
    match ticker {
        Some(armed) => {
            armed.interval.tick().await;
            armed.generation
        }
        None => std::future::pending().await,
    }
}

// ============================================================================
// TimerService
// ============================================================================

/// Single-owner task driving an [`IntervalTimer`].
pub struct TimerService<D, N> {
    timer: IntervalTimer<D, N>,
    commands: mpsc::UnboundedReceiver<TimerCommand>,
    ticker: Option<ArmedTicker>,
}

impl<D: Display, N: Notifier> TimerService<D, N> {
    /// Wraps a timer and returns the service together with its first handle.
    pub fn new(timer: IntervalTimer<D, N>) -> (Self, TimerHandle) {
        let (tx, rx) = mpsc::unbounded_channel();
        let service = Self {
            timer,
            commands: rx,
            ticker: None,
        };
        (service, TimerHandle { commands: tx })
    }

    /// Runs the command/tick loop.
    ///
    /// Returns the timer once [`TimerHandle::shutdown`] is called or every
    /// handle has been dropped. A running timer is stopped before returning.
    pub async fn run(mut self) -> IntervalTimer<D, N> {
        debug!("Timer service started");

        loop {
            tokio::select! {
                command = self.commands.recv() => {
                    match command {
                        Some(command) => {
                            if !self.handle_command(command) {
                                break;
                            }
                        }
                        None => break,
                    }
                }
                generation = next_tick(&mut self.ticker), if self.ticker.is_some() => {
                    self.timer.on_tick(generation);
                }
            }
        }

        self.ticker = None;
        self.timer.stop();
        info!("Timer service shut down");

        self.timer
    }

    /// Applies one command. Returns false when the loop should exit.
    fn handle_command(&mut self, command: TimerCommand) -> bool {
        match command {
            TimerCommand::Start {
                workout_seconds,
                rest_seconds,
                reply,
            } => {
                let result = self.timer.start(workout_seconds, rest_seconds);
                if let Ok(StartOutcome::Started) = result {
                    self.ticker = None;
                    self.ticker = Some(ArmedTicker::arm(self.timer.generation()));
                }
                let _ = reply.send(result);
            }
            TimerCommand::Stop { reply } => {
                self.ticker = None;
                let stopped = self.timer.stop();
                let _ = reply.send(stopped);
            }
            TimerCommand::Snapshot { reply } => {
                let _ = reply.send(self.timer.snapshot());
            }
            TimerCommand::Shutdown => return false,
        }
        true
    }
}

// ============================================================================
// TimerHandle
// ============================================================================

/// Cloneable command surface for a running [`TimerService`].
#[derive(Debug, Clone)]
pub struct TimerHandle {
    commands: mpsc::UnboundedSender<TimerCommand>,
}

impl TimerHandle {
    /// Starts a run with the given durations in seconds.
    ///
    /// # Errors
    ///
    /// Returns the timer's validation error, or
    /// [`TimerError::ServiceUnavailable`] if the service has exited.
    pub async fn start(
        &self,
        workout_seconds: i64,
        rest_seconds: i64,
    ) -> Result<StartOutcome, TimerError> {
        let (reply, rx) = oneshot::channel();
        self.send(TimerCommand::Start {
            workout_seconds,
            rest_seconds,
            reply,
        })?;
        rx.await.map_err(|_| TimerError::ServiceUnavailable)?
    }

    /// Stops the current run. Returns true if a run was stopped.
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::ServiceUnavailable`] if the service has exited.
    pub async fn stop(&self) -> Result<bool, TimerError> {
        let (reply, rx) = oneshot::channel();
        self.send(TimerCommand::Stop { reply })?;
        rx.await.map_err(|_| TimerError::ServiceUnavailable)
    }

    /// Returns the current timer state.
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::ServiceUnavailable`] if the service has exited.
    pub async fn snapshot(&self) -> Result<TimerSnapshot, TimerError> {
        let (reply, rx) = oneshot::channel();
        self.send(TimerCommand::Snapshot { reply })?;
        rx.await.map_err(|_| TimerError::ServiceUnavailable)
    }

    /// Asks the service loop to exit.
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::ServiceUnavailable`] if the service has already exited.
    pub fn shutdown(&self) -> Result<(), TimerError> {
        self.send(TimerCommand::Shutdown)
    }

    fn send(&self, command: TimerCommand) -> Result<(), TimerError> {
        self.commands
            .send(command)
            .map_err(|_| TimerError::ServiceUnavailable)
    }
}

// ============================================================================
// Tests
// ============================================================================
