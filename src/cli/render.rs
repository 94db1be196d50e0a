//! Terminal collaborators for the Interval Timer CLI.
//!
//! - `TerminalDisplay` / `TerminalNotifier`: human readable countdown and
//!   alerts, redrawn in place when stdout is a terminal
//! - `JsonDisplay` / `JsonNotifier`: one JSON object per event for scripts

use std::io::{self, IsTerminal, Write};
use std::sync::{Mutex, PoisonError};

use serde::Serialize;
use tracing::warn;

use crate::display::{format_time, progress_bar, Display};
use crate::notifier::Notifier;
use crate::types::{PhaseAlert, TimeUpdate, WORKOUT_COMPLETE_TITLE};

/// Width of the text progress bar, in characters.
pub const BAR_WIDTH: usize = 20;

/// Terminal bell character.
const BELL: &str = "\x07";

/// Carriage return followed by "erase line".
const CLEAR_LINE: &str = "\r\x1b[2K";

fn write_out<W: Write>(out: &Mutex<W>, text: &str) {
    let mut out = out.lock().unwrap_or_else(PoisonError::into_inner);
    if let Err(e) = out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
        warn!("Failed to write timer output: {}", e);
    }
}

/// Formats one countdown line, e.g. `Workout: 00:30 [#####...............]  25%`.
pub fn format_update(update: &TimeUpdate) -> String {
    format!(
        "{}: {} {} {:>3}%",
        update.phase.label(),
        format_time(update.remaining_seconds),
        progress_bar(update.progress_percent, BAR_WIDTH),
        update.progress_percent
    )
}

/// Formats the line shown once a run has ended.
pub fn format_completed() -> String {
    format!(
        "{} {} 100%",
        WORKOUT_COMPLETE_TITLE,
        progress_bar(100, BAR_WIDTH)
    )
}

// ============================================================================
// Text output
// ============================================================================

/// Countdown display for a terminal.
///
/// In inline mode each update overwrites the current line; otherwise every
/// update is printed on its own line.
pub struct TerminalDisplay<W: Write> {
    out: Mutex<W>,
    inline: bool,
}

impl TerminalDisplay<io::Stdout> {
    /// Creates a display on stdout, inline when stdout is a terminal.
    pub fn stdout() -> Self {
        let inline = io::stdout().is_terminal();
        Self::new(io::stdout(), inline)
    }
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W, inline: bool) -> Self {
        Self {
            out: Mutex::new(out),
            inline,
        }
    }

    /// Consumes the display and returns the writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write> Display for TerminalDisplay<W> {
    fn on_time_updated(&self, update: &TimeUpdate) {
        let line = format_update(update);
        if self.inline {
            write_out(&self.out, &format!("{}{}", CLEAR_LINE, line));
        } else {
            write_out(&self.out, &format!("{}\n", line));
        }
    }

    fn on_completed(&self) {
        let prefix = if self.inline { CLEAR_LINE } else { "" };
        write_out(&self.out, &format!("{}{}\n", prefix, format_completed()));
    }
}

/// Alert output for a terminal: optional bell plus a `>> title: message` line.
pub struct TerminalNotifier<W: Write> {
    out: Mutex<W>,
    bell: bool,
    inline: bool,
}

impl TerminalNotifier<io::Stdout> {
    /// Creates a notifier on stdout, inline when stdout is a terminal.
    pub fn stdout(bell: bool) -> Self {
        let inline = io::stdout().is_terminal();
        Self::new(io::stdout(), bell, inline)
    }
}

impl<W: Write> TerminalNotifier<W> {
    pub fn new(out: W, bell: bool, inline: bool) -> Self {
        Self {
            out: Mutex::new(out),
            bell,
            inline,
        }
    }

    /// Consumes the notifier and returns the writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write> Notifier for TerminalNotifier<W> {
    fn on_phase_completed(&self, alert: &PhaseAlert) {
        let prefix = if self.inline { CLEAR_LINE } else { "" };
        let bell = if self.bell { BELL } else { "" };
        write_out(
            &self.out,
            &format!("{}{}>> {}: {}\n", prefix, bell, alert.title, alert.message),
        );
    }
}

// ============================================================================
// JSON output
// ============================================================================

/// Event record written by the JSON collaborators.
#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum JsonEvent<'a> {
    /// Countdown changed
    TimeUpdated(&'a TimeUpdate),
    /// Run ended
    Completed,
    /// Phase finished
    PhaseCompleted(&'a PhaseAlert),
}

fn write_json<W: Write>(out: &Mutex<W>, event: &JsonEvent<'_>) {
    match serde_json::to_string(event) {
        Ok(json) => write_out(out, &format!("{}\n", json)),
        Err(e) => warn!("Failed to serialize timer event: {}", e),
    }
}

/// Display writing JSON lines.
pub struct JsonDisplay<W: Write> {
    out: Mutex<W>,
}

impl<W: Write> JsonDisplay<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Consumes the display and returns the writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write> Display for JsonDisplay<W> {
    fn on_time_updated(&self, update: &TimeUpdate) {
        write_json(&self.out, &JsonEvent::TimeUpdated(update));
    }

    fn on_completed(&self) {
        write_json(&self.out, &JsonEvent::Completed);
    }
}

/// Notifier writing JSON lines.
pub struct JsonNotifier<W: Write> {
    out: Mutex<W>,
}

impl<W: Write> JsonNotifier<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Consumes the notifier and returns the writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write> Notifier for JsonNotifier<W> {
    fn on_phase_completed(&self, alert: &PhaseAlert) {
        write_json(&self.out, &JsonEvent::PhaseCompleted(alert));
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TimerPhase;

    fn update(phase: TimerPhase, remaining_seconds: u32, progress_percent: u8) -> TimeUpdate {
        TimeUpdate {
            phase,
            remaining_seconds,
            progress_percent,
        }
    }

    fn output(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    mod text_tests {
        use super::*;

        #[test]
        fn test_format_update() {
            let line = format_update(&update(TimerPhase::Workout, 90, 50));
            assert_eq!(line, "Workout: 01:30 [##########..........]  50%");
        }

        #[test]
        fn test_format_update_rest() {
            let line = format_update(&update(TimerPhase::Rest, 0, 100));
            assert_eq!(line, "Rest: 00:00 [####################] 100%");
        }

        #[test]
        fn test_line_mode_prints_each_update() {
            let display = TerminalDisplay::new(Vec::new(), false);
            display.on_time_updated(&update(TimerPhase::Workout, 2, 0));
            display.on_time_updated(&update(TimerPhase::Workout, 1, 50));

            let text = output(display.into_inner());
            assert_eq!(text.lines().count(), 2);
            assert!(text.starts_with("Workout: 00:02"));
            assert!(!text.contains(CLEAR_LINE));
        }

        #[test]
        fn test_inline_mode_redraws_line() {
            let display = TerminalDisplay::new(Vec::new(), true);
            display.on_time_updated(&update(TimerPhase::Rest, 5, 0));

            let text = output(display.into_inner());
            assert!(text.starts_with(CLEAR_LINE));
            assert!(!text.ends_with('\n'));
        }

        #[test]
        fn test_completed_line() {
            let display = TerminalDisplay::new(Vec::new(), false);
            display.on_completed();

            let text = output(display.into_inner());
            assert_eq!(text, "Workout Complete [####################] 100%\n");
        }

        #[test]
        fn test_notifier_with_bell() {
            let notifier = TerminalNotifier::new(Vec::new(), true, false);
            notifier.on_phase_completed(&PhaseAlert::for_finished(TimerPhase::Workout).unwrap());

            let text = output(notifier.into_inner());
            assert_eq!(text, "\x07>> Workout Complete: Get ready for rest!\n");
        }

        #[test]
        fn test_notifier_without_bell() {
            let notifier = TerminalNotifier::new(Vec::new(), false, false);
            notifier.on_phase_completed(&PhaseAlert::for_finished(TimerPhase::Rest).unwrap());

            let text = output(notifier.into_inner());
            assert_eq!(text, ">> Rest Complete: Get ready for the next set!\n");
        }
    }

    mod json_tests {
        use super::*;

        #[test]
        fn test_time_updated_event() {
            let display = JsonDisplay::new(Vec::new());
            display.on_time_updated(&update(TimerPhase::Workout, 29, 3));

            let text = output(display.into_inner());
            let value: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
            assert_eq!(value["event"], "time_updated");
            assert_eq!(value["phase"], "workout");
            assert_eq!(value["remainingSeconds"], 29);
            assert_eq!(value["progressPercent"], 3);
        }

        #[test]
        fn test_completed_event() {
            let display = JsonDisplay::new(Vec::new());
            display.on_completed();

            assert_eq!(output(display.into_inner()), "{\"event\":\"completed\"}\n");
        }

        #[test]
        fn test_phase_completed_event() {
            let notifier = JsonNotifier::new(Vec::new());
            notifier.on_phase_completed(&PhaseAlert::for_finished(TimerPhase::Rest).unwrap());

            let text = output(notifier.into_inner());
            let value: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
            assert_eq!(value["event"], "phase_completed");
            assert_eq!(value["title"], "Rest Complete");
            assert_eq!(value["message"], "Get ready for the next set!");
        }
    }
}
