//! The open and close commands.

use gridfall_foundation::Result;

use crate::command::{Command, CommandMeta};
use crate::session::Session;

/// Locates the argument entity and runs the open/close protocol against
/// it. Both verbs share everything but their notice texts.
fn toggle(session: &mut Session, args: &[String], open: bool) -> Result<()> {
    if args.len() <= 1 {
        session
            .output()
            .write(if open { "Open what?\n" } else { "Close what?\n" });
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

    if world.entity(target).is_openable() {
        world.open_entity(target, player.entity(), open, out);
    } else {
        out.write(if open {
            "That cannot be opened.\n"
        } else {
            "That cannot be closed.\n"
        });
    }
    Ok(())
}

/// Opens the specified item.
pub struct OpenCommand {
    meta: CommandMeta,
}

impl OpenCommand {
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

impl Command for OpenCommand {
    fn meta(&self) -> &CommandMeta {
        &self.meta
    }

    fn help(&self) -> String {
        "Opens the specified item.".to_string()
    }

    fn execute(&self, session: &mut Session, args: &[String]) -> Result<()> {
        toggle(session, args, true)
    }
}

/// Closes the specified item.
pub struct CloseCommand {
    meta: CommandMeta,
}

impl CloseCommand {
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

impl Command for CloseCommand {
    fn meta(&self) -> &CommandMeta {
        &self.meta
    }

    fn help(&self) -> String {
        "Closes the specified item.".to_string()
    }

    fn execute(&self, session: &mut Session, args: &[String]) -> Result<()> {
        toggle(session, args, false)
    }
}
