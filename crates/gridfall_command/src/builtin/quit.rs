//! The quit command.

use gridfall_foundation::Result;

use crate::command::{Command, CommandMeta};
use crate::session::Session;

/// Ends the run.
pub struct QuitCommand {
    meta: CommandMeta,
}

impl QuitCommand {
    /// Creates the singleton instance.
    ///
    /// # Errors
    ///
    /// Fails when the type name violates the naming convention.
    pub fn new() -> Result<Self> {
        Ok(Self {
            meta: CommandMeta::derived::<Self>()?,
        })
    }
}

impl Command for QuitCommand {
    fn meta(&self) -> &CommandMeta {
        &self.meta
    }

    fn help(&self) -> String {
        "Quits the game.".to_string()
    }

    fn execute(&self, session: &mut Session, _args: &[String]) -> Result<()> {
        session.stop();
        Ok(())
    }
}
