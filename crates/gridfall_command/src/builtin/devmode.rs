//! The developer-mode toggle command.

use gridfall_foundation::Result;

use crate::command::{Command, CommandMeta};
use crate::session::Session;

/// Toggles developer mode.
///
/// Itself a system command, so it only shows up in the help listing once
/// someone who already knows about it has switched it on.
pub struct DevModeCommand {
    meta: CommandMeta,
}

impl DevModeCommand {
    /// Creates the singleton instance.
    ///
    /// # Errors
    ///
    /// Fails when the type name violates the naming convention.
    pub fn new() -> Result<Self> {
        Ok(Self {
            meta: CommandMeta::derived::<Self>()?.system(),
        })
    }
}

impl Command for DevModeCommand {
    fn meta(&self) -> &CommandMeta {
        &self.meta
    }

    fn help(&self) -> String {
        "Toggles developer mode, revealing system commands and selector assumptions.".to_string()
    }

    fn execute(&self, session: &mut Session, _args: &[String]) -> Result<()> {
        let enabled = session.toggle_dev_mode();
        session.output().write(&format!(
            "Developer mode {}.\n",
            if enabled { "enabled" } else { "disabled" }
        ));
        Ok(())
    }
}
