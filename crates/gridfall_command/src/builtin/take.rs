//! The take command.

use gridfall_foundation::Result;

use crate::command::{Command, CommandMeta};
use crate::session::Session;

/// Picks up an item and stows it in the inventory.
pub struct TakeCommand {
    meta: CommandMeta,
}

impl TakeCommand {
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

impl Command for TakeCommand {
    fn meta(&self) -> &CommandMeta {
        &self.meta
    }

    fn help(&self) -> String {
        "Picks up an item and stows it in your inventory.\n\
         Usage: take [container-name] {item-name}"
            .to_string()
    }

    fn execute(&self, session: &mut Session, args: &[String]) -> Result<()> {
        if args.len() <= 1 {
            session.output().write("Take what?\n");
            return Ok(());
        }

        let dev_mode = session.dev_mode;
        let Session {
            world,
            player,
            output,
            ..
        } = session;
        let out = output.as_mut();
        let room = player.current_room();

        let Some(target) = world.locate_entity(room, &args[1..], out, dev_mode) else {
            return Ok(());
        };
        if !world.entity(target).is_takeable() {
            out.write("You cannot take that.\n");
            return Ok(());
        }
        let Some(parent) = world.parent_of(target) else {
            out.write("You cannot take that.\n");
            return Ok(());
        };

        world.pickup_entity(target, player.entity(), parent, player.inventory(), out)?;
        Ok(())
    }
}
