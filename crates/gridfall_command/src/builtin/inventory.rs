//! The inventory command.

use gridfall_foundation::Result;

use crate::command::{Command, CommandMeta};
use crate::session::Session;

/// Shows what the player is carrying.
pub struct InventoryCommand {
    meta: CommandMeta,
}

impl InventoryCommand {
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

impl Command for InventoryCommand {
    fn meta(&self) -> &CommandMeta {
        &self.meta
    }

    fn help(&self) -> String {
        "Shows what you are carrying.".to_string()
    }

    fn execute(&self, session: &mut Session, _args: &[String]) -> Result<()> {
        let Session {
            world,
            player,
            output,
            ..
        } = session;
        world.display_description(player.inventory(), output.as_mut());
        Ok(())
    }
}
