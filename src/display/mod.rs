//! Display collaborator for the Interval Timer.
//!
//! The timer reports every countdown change through the [`Display`] trait
//! and signals the end of a run with [`Display::on_completed`]. Rendering is
//! left to the implementation; see `cli::render` for the terminal ones.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::types::TimeUpdate;

/// Receiver of countdown updates.
///
/// Implementations are called on the timer's task and must return quickly.
pub trait Display {
    /// Called after every change of the countdown, including the initial
    /// value of a phase.
    fn on_time_updated(&self, update: &TimeUpdate);

    /// Called when a run ends and both countdowns are back at zero.
    fn on_completed(&self);
}

impl<T: Display + ?Sized> Display for Box<T> {
    fn on_time_updated(&self, update: &TimeUpdate) {
        (**self).on_time_updated(update)
    }

    fn on_completed(&self) {
        (**self).on_completed()
    }
}

/// Formats seconds as zero-padded `MM:SS`.
pub fn format_time(total_seconds: u32) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}", minutes, seconds)
}

/// Renders a fixed-width progress bar such as `[#####.....]`.
pub fn progress_bar(percent: u8, width: usize) -> String {
    let percent = usize::from(percent.min(100));
    let filled = percent * width / 100;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(width - filled))
}

/// Mock display for testing.
///
/// Clones share the same recording, so a clone can be handed to the timer
/// while the test keeps another to inspect.
#[derive(Debug, Clone, Default)]
pub struct MockDisplay {
    updates: Arc<Mutex<Vec<TimeUpdate>>>,
    completed: Arc<AtomicUsize>,
}

impl MockDisplay {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn updates(&self) -> Vec<TimeUpdate> {
        self.updates.lock().unwrap().clone()
    }

    #[must_use]
    pub fn update_count(&self) -> usize {
        self.updates.lock().unwrap().len()
    }

    #[must_use]
    pub fn last_update(&self) -> Option<TimeUpdate> {
        self.updates.lock().unwrap().last().copied()
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }

    pub fn clear_recorded(&self) {
        self.updates.lock().unwrap().clear();
        self.completed.store(0, Ordering::SeqCst);
    }
}

impl Display for MockDisplay {
    fn on_time_updated(&self, update: &TimeUpdate) {
        self.updates.lock().unwrap().push(*update);
    }

    fn on_completed(&self) {
        self.completed.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TimerPhase;

    mod format_time_tests {
        use super::*;

        #[test]
        fn test_format_time_zero() {
            assert_eq!(format_time(0), "00:00");
        }

        #[test]
        fn test_format_time_seconds_only() {
            assert_eq!(format_time(45), "00:45");
        }

        #[test]
        fn test_format_time_mixed() {
            assert_eq!(format_time(90), "01:30");
        }

        #[test]
        fn test_format_time_large() {
            assert_eq!(format_time(120 * 60 + 59), "120:59");
        }
    }

    mod progress_bar_tests {
        use super::*;

        #[test]
        fn test_empty_and_full() {
            assert_eq!(progress_bar(0, 10), "[..........]");
            assert_eq!(progress_bar(100, 10), "[##########]");
        }

        #[test]
        fn test_partial_rounds_down() {
            assert_eq!(progress_bar(55, 10), "[#####.....]");
            assert_eq!(progress_bar(9, 10), "[..........]");
        }

        #[test]
        fn test_clamps_over_100() {
            assert_eq!(progress_bar(250, 4), "[####]");
        }
    }

    mod mock_display_tests {
        use super::*;

        #[test]
        fn test_records_through_clone() {
            let display = MockDisplay::new();
            let shared = display.clone();

            shared.on_time_updated(&TimeUpdate {
                phase: TimerPhase::Rest,
                remaining_seconds: 4,
                progress_percent: 20,
            });
            shared.on_completed();

            assert_eq!(display.update_count(), 1);
            assert_eq!(display.last_update().unwrap().remaining_seconds, 4);
            assert_eq!(display.completed_count(), 1);

            display.clear_recorded();
            assert_eq!(shared.update_count(), 0);
            assert_eq!(shared.completed_count(), 0);
        }

        #[test]
        fn test_boxed_display_forwards() {
            let display = MockDisplay::new();
            let boxed: Box<dyn Display + Send> = Box::new(display.clone());

            boxed.on_completed();

            assert_eq!(display.completed_count(), 1);
        }
    }
}
