//! The `run` command: a single-screen interval timer on the terminal.
//!
//! Spawns the [`TimerService`], starts the first run, then serves console
//! commands from stdin until `quit` or Ctrl-C. Once stdin is closed the timer
//! keeps running until Ctrl-C.

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use crate::display::Display;
use crate::notifier::Notifier;
use crate::timer::{
    IntervalTimer, StartOutcome, TimerError, TimerHandle, TimerOptions, TimerService,
};
use crate::types::IntervalConfig;

use super::commands::{OutputFormat, RunArgs};
use super::console::{ConsoleCommand, CONSOLE_HELP};
use super::output::Output;
use super::render::{JsonDisplay, JsonNotifier, TerminalDisplay, TerminalNotifier};

type BoxedDisplay = Box<dyn Display + Send>;
type BoxedNotifier = Box<dyn Notifier + Send>;

/// Builds the display and notifier for the requested output format.
fn collaborators(args: &RunArgs) -> (BoxedDisplay, BoxedNotifier) {
    match args.format {
        OutputFormat::Text => {
            let display: BoxedDisplay = Box::new(TerminalDisplay::stdout());
            let notifier: BoxedNotifier = Box::new(TerminalNotifier::stdout(!args.no_bell));
            (display, notifier)
        }
        OutputFormat::Json => {
            let display: BoxedDisplay = Box::new(JsonDisplay::new(std::io::stdout()));
            let notifier: BoxedNotifier = Box::new(JsonNotifier::new(std::io::stdout()));
            (display, notifier)
        }
    }
}

/// Runs the timer until the user quits.
///
/// # Errors
///
/// Returns an error if the initial durations are invalid, console input
/// cannot be read, or the timer service stops unexpectedly.
pub async fn run(args: RunArgs) -> Result<()> {
    let config = IntervalConfig::new(args.workout, args.rest)?;
    let output = Output::new(args.format);

    let (display, notifier) = collaborators(&args);
    let options = TimerOptions {
        strict_start: args.strict,
    };
    let timer = IntervalTimer::with_options(display, notifier, options);
    let (service, handle) = TimerService::new(timer);
    let service_task = tokio::spawn(service.run());

    let mut durations = (
        i64::from(config.workout_seconds),
        i64::from(config.rest_seconds),
    );
    let outcome = handle.start(durations.0, durations.1).await?;
    output.show_start(outcome, durations.0, durations.1);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    loop {
        tokio::select! {
            signal = tokio::signal::ctrl_c() => {
                signal.context("Failed to listen for Ctrl-C")?;
                info!("Interrupted");
                break;
            }
            line = lines.next_line(), if stdin_open => {
                match line.context("Failed to read console input")? {
                    Some(line) => {
                        if !dispatch(&line, &handle, &output, &mut durations).await? {
                            break;
                        }
                    }
                    None => {
                        debug!("Console input closed");
                        stdin_open = false;
                    }
                }
            }
        }
    }

    handle.stop().await?;
    handle.shutdown()?;
    service_task.await.context("Timer service task failed")?;

    Ok(())
}

/// Applies one console line. Returns false when the user asked to quit.
async fn dispatch(
    line: &str,
    handle: &TimerHandle,
    output: &Output,
    durations: &mut (i64, i64),
) -> Result<bool> {
    let command = match ConsoleCommand::parse(line) {
        Ok(Some(command)) => command,
        Ok(None) => return Ok(true),
        Err(message) => {
            Output::show_error(&message);
            return Ok(true);
        }
    };

    match command {
        ConsoleCommand::Start(requested) => {
            let (workout, rest) = requested.unwrap_or(*durations);
            match handle.start(workout, rest).await {
                Ok(outcome) => {
                    if outcome == StartOutcome::Started {
                        *durations = (workout, rest);
                    }
                    output.show_start(outcome, workout, rest);
                }
                Err(TimerError::ServiceUnavailable) => {
                    return Err(TimerError::ServiceUnavailable.into())
                }
                Err(e) => Output::show_error(&format!("{}. {}", e, e.suggestion())),
            }
        }
        ConsoleCommand::Stop => output.show_stop(handle.stop().await?),
        ConsoleCommand::Status => output.show_status(&handle.snapshot().await?),
        ConsoleCommand::Help => output.show_help(CONSOLE_HELP),
        ConsoleCommand::Quit => return Ok(false),
    }

    Ok(true)
}
