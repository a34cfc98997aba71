//! The message command.
//!
//! Registered as a system command for authored content, and doubling as
//! the synthetic notice the dispatcher substitutes for empty or unknown
//! input.

use gridfall_foundation::Result;

use crate::command::{Command, CommandMeta};
use crate::session::Session;

/// Displays a text message.
pub struct MessageCommand {
    meta: CommandMeta,
    text: Option<String>,
}

impl MessageCommand {
    /// Creates the registered singleton, which echoes its arguments.
    ///
    /// # Errors
    ///
    /// Never fails; the signature matches the factory table.
    pub fn new() -> Result<Self> {
        Ok(Self {
            meta: CommandMeta::named("message").system(),
            text: None,
        })
    }

    /// Creates a synthetic notice carrying preset text. Never registered;
    /// the dispatcher and content code construct these on demand.
    #[must_use]
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            meta: CommandMeta::named("message").system().manual(),
            text: Some(text.into()),
        }
    }
}

impl Command for MessageCommand {
    fn meta(&self) -> &CommandMeta {
        &self.meta
    }

    fn help(&self) -> String {
        "Displays a message.\nUsage: message \"{text to display}\"".to_string()
    }

    fn execute(&self, session: &mut Session, args: &[String]) -> Result<()> {
        if let Some(text) = &self.text {
            session.output().write_line(text);
        } else {
            let joined = args.iter().skip(1).cloned().collect::<Vec<_>>().join(" ");
            session.output().write_line(&joined);
        }
        Ok(())
    }
}
