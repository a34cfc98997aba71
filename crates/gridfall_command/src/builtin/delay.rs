//! The delay command.

use gridfall_foundation::{Error, Result};

use crate::command::{Command, CommandMeta};
use crate::session::Session;

/// Shortest delay authored content may request, in milliseconds.
const MIN_DELAY_MS: u64 = 50;

/// Pauses the output for a moment.
///
/// Registered as a system command; content also constructs preset-duration
/// instances programmatically for authored pacing.
pub struct DelayCommand {
    meta: CommandMeta,
    duration: Option<u64>,
}

impl DelayCommand {
    /// Creates the registered singleton, which takes its duration from its
    /// argument.
    ///
    /// # Errors
    ///
    /// Fails when the type name violates the naming convention.
    pub fn new() -> Result<Self> {
        Ok(Self {
            meta: CommandMeta::derived::<Self>()?.system(),
            duration: None,
        })
    }

    /// Creates a preset-duration instance for authored pacing. Never
    /// registered.
    ///
    /// # Errors
    ///
    /// Fails when the duration is under the 50 ms minimum.
    pub fn with_duration(ms: u64) -> Result<Self> {
        if ms < MIN_DELAY_MS {
            return Err(Error::invalid_delay(ms));
        }
        Ok(Self {
            meta: CommandMeta::derived::<Self>()?.system().manual(),
            duration: Some(ms),
        })
    }
}

impl Command for DelayCommand {
    fn meta(&self) -> &CommandMeta {
        &self.meta
    }

    fn help(&self) -> String {
        "Delays the output/input for a certain amount of time.\n\
         Usage: delay {milliseconds}"
            .to_string()
    }

    fn execute(&self, session: &mut Session, args: &[String]) -> Result<()> {
        let mut ms = self.duration.unwrap_or(0);

        if args.len() > 1 {
            match args[1].parse::<u64>() {
                Ok(value) => ms = value,
                Err(_) => {
                    session
                        .output()
                        .write(&format!("The argument '{}' is not a number.\n", args[1]));
                    return Ok(());
                }
            }
        }

        session.output().delay(ms);
        Ok(())
    }
}
