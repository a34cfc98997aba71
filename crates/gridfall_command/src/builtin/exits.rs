//! The exits command.

use gridfall_foundation::Result;

use crate::command::{Command, CommandMeta};
use crate::session::Session;

/// Displays the visible exits of the current location.
pub struct ExitsCommand {
    meta: CommandMeta,
}

impl ExitsCommand {
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

impl Command for ExitsCommand {
    fn meta(&self) -> &CommandMeta {
        &self.meta
    }

    fn help(&self) -> String {
        "Displays all the possible exits of the current location.".to_string()
    }

    fn execute(&self, session: &mut Session, _args: &[String]) -> Result<()> {
        let Session {
            world,
            player,
            output,
            ..
        } = session;
        let out = output.as_mut();

        let exits = world.visible_exits(player.current_room());
        if exits.is_empty() {
            out.write("No exits found.\n");
            return Ok(());
        }

        out.write_line("The following exits are available:");
        for (direction, portal) in exits {
            let target = world
                .entity(portal)
                .portal_target()
                .map_or("nowhere", |room| world.entity(room).name());
            out.write_fmt(format_args!("{direction} => {target}\n"));
        }
        Ok(())
    }
}
