//! Console commands read from stdin while the timer runs.
//!
//! One command per line:
//! - `start` restarts with the last durations, `start <workout> <rest>` with new ones
//! - `stop` ends the current run
//! - `status` prints the current state
//! - `help` lists the commands
//! - `quit` / `exit` leaves the program

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Start a run; `None` reuses the previous durations
    Start(Option<(i64, i64)>),
    /// Stop the current run
    Stop,
    /// Show the current state
    Status,
    /// List the commands
    Help,
    /// Exit the program
    Quit,
}

/// Help text for the console.
pub const CONSOLE_HELP: &str = "Commands: start [WORKOUT REST] | stop | status | help | quit";

impl ConsoleCommand {
    /// Parses one input line.
    ///
    /// Returns `Ok(None)` for a blank line.
    ///
    /// # Errors
    ///
    /// Returns a message describing the problem for unknown commands or
    /// malformed arguments.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let command = match (name.to_ascii_lowercase().as_str(), args.as_slice()) {
            ("start", []) => Self::Start(None),
            ("start", [workout, rest]) => {
                Self::Start(Some((parse_seconds(workout)?, parse_seconds(rest)?)))
            }
            ("start", _) => return Err("Usage: start [WORKOUT REST]".to_string()),
            ("stop", []) => Self::Stop,
            ("status", []) => Self::Status,
            ("help" | "?", []) => Self::Help,
            ("quit" | "exit", []) => Self::Quit,
            ("stop" | "status" | "help" | "?" | "quit" | "exit", _) => {
                return Err(format!("'{}' takes no arguments", name))
            }
            _ => return Err(format!("Unknown command: {}", name)),
        };

        Ok(Some(command))
    }
}

fn parse_seconds(word: &str) -> Result<i64, String> {
    word.parse::<i64>()
        .map_err(|_| format!("Not a number of seconds: {}", word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line() {
        assert_eq!(ConsoleCommand::parse(""), Ok(None));
        assert_eq!(ConsoleCommand::parse("   \t"), Ok(None));
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!(ConsoleCommand::parse("stop"), Ok(Some(ConsoleCommand::Stop)));
        assert_eq!(
            ConsoleCommand::parse("status"),
            Ok(Some(ConsoleCommand::Status))
        );
        assert_eq!(ConsoleCommand::parse("?"), Ok(Some(ConsoleCommand::Help)));
        assert_eq!(ConsoleCommand::parse("exit"), Ok(Some(ConsoleCommand::Quit)));
        assert_eq!(
            ConsoleCommand::parse("  QUIT  "),
            Ok(Some(ConsoleCommand::Quit))
        );
    }

    #[test]
    fn test_start_without_durations() {
        assert_eq!(
            ConsoleCommand::parse("start"),
            Ok(Some(ConsoleCommand::Start(None)))
        );
    }

    #[test]
    fn test_start_with_durations() {
        assert_eq!(
            ConsoleCommand::parse("start 45 15"),
            Ok(Some(ConsoleCommand::Start(Some((45, 15)))))
        );
    }

    #[test]
    fn test_start_keeps_non_positive_for_validation() {
        assert_eq!(
            ConsoleCommand::parse("start 0 -2"),
            Ok(Some(ConsoleCommand::Start(Some((0, -2)))))
        );
    }

    #[test]
    fn test_start_bad_arguments() {
        assert!(ConsoleCommand::parse("start 10").is_err());
        assert!(ConsoleCommand::parse("start ten 5")
            .unwrap_err()
            .contains("Not a number"));
    }

    #[test]
    fn test_extra_arguments_rejected() {
        assert!(ConsoleCommand::parse("stop now")
            .unwrap_err()
            .contains("takes no arguments"));
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            ConsoleCommand::parse("pause"),
            Err("Unknown command: pause".to_string())
        );
    }
}
