//! The look command.

use gridfall_foundation::Result;

use crate::command::{Command, CommandMeta};
use crate::session::Session;

/// Examines the surroundings, or a specific (possibly nested) item.
pub struct LookCommand {
    meta: CommandMeta,
}

impl LookCommand {
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

impl Command for LookCommand {
    fn meta(&self) -> &CommandMeta {
        &self.meta
    }

    fn help(&self) -> String {
        "Look or examine an item or surroundings.\n\
         Usage: look [container-name] [item-name]"
            .to_string()
    }

    fn execute(&self, session: &mut Session, args: &[String]) -> Result<()> {
        let dev_mode = session.dev_mode;
        let Session {
            world,
            player,
            output,
            ..
        } = session;
        let out = output.as_mut();
        let room = player.current_room();

        let target = if args.len() > 1 {
            match world.locate_entity(room, &args[1..], out, dev_mode) {
                Some(found) => found,
                None => return Ok(()),
            }
        } else {
            room
        };

        world.display_description(target, out);
        Ok(())
    }
}
