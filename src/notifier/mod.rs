//! Notifier collaborator for the Interval Timer.
//!
//! The timer raises exactly one alert per phase transition: "Workout
//! Complete" when a workout ends and "Rest Complete" when a rest ends. How
//! the alert reaches the user (sound, vibration, a visible message) is up to
//! the implementation.

use std::sync::{Arc, Mutex};

use crate::types::PhaseAlert;

/// Receiver of phase-transition alerts.
pub trait Notifier {
    /// Called once each time a workout or rest interval finishes.
    fn on_phase_completed(&self, alert: &PhaseAlert);
}

impl<T: Notifier + ?Sized> Notifier for Box<T> {
    fn on_phase_completed(&self, alert: &PhaseAlert) {
        (**self).on_phase_completed(alert)
    }
}

/// Mock notifier for testing.
#[derive(Debug, Clone, Default)]
pub struct MockNotifier {
    alerts: Arc<Mutex<Vec<PhaseAlert>>>,
}

impl MockNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn alerts(&self) -> Vec<PhaseAlert> {
        self.alerts.lock().unwrap().clone()
    }

    #[must_use]
    pub fn alert_count(&self) -> usize {
        self.alerts.lock().unwrap().len()
    }

    #[must_use]
    pub fn titles(&self) -> Vec<String> {
        self.alerts
            .lock()
            .unwrap()
            .iter()
            .map(|alert| alert.title.clone())
            .collect()
    }

    pub fn clear_recorded(&self) {
        self.alerts.lock().unwrap().clear();
    }
}

impl Notifier for MockNotifier {
    fn on_phase_completed(&self, alert: &PhaseAlert) {
        self.alerts.lock().unwrap().push(alert.clone());
    }
}
