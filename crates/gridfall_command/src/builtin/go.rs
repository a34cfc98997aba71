//! The go command.

use gridfall_foundation::{Direction, Result};

use crate::command::{Command, CommandMeta};
use crate::session::Session;

/// Moves the player in a direction.
pub struct GoCommand {
    meta: CommandMeta,
}

impl GoCommand {
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

/// Resolves the argument to a direction: first as a direction-name prefix,
/// then as a visible portal whose entity name starts with the word
/// (ambiguity counts as no match). Falls back to the `None` sentinel so
/// that an unresolvable word flows through the ordinary
/// "you cannot go that way" path.
fn resolve_direction(session: &Session, word: &str) -> Direction {
    if let Some(direction) = Direction::parse_prefix(word) {
        return direction;
    }

    let wanted = word.to_lowercase();
    let room = session.player().current_room();
    let mut hits = session
        .world()
        .visible_exits(room)
        .into_iter()
        .filter(|&(_, portal)| {
            session
                .world()
                .entity(portal)
                .name()
                .to_lowercase()
                .starts_with(&wanted)
        });
    match (hits.next(), hits.next()) {
        (Some((direction, _)), None) => direction,
        _ => Direction::None,
    }
}

impl Command for GoCommand {
    fn meta(&self) -> &CommandMeta {
        &self.meta
    }

    fn help(&self) -> String {
        "Travel to another location.\n\
         Usage: go {direction}\n\
         See the command 'exits' for the valid directions from where you stand."
            .to_string()
    }

    fn execute(&self, session: &mut Session, args: &[String]) -> Result<()> {
        if args.len() <= 1 {
            session.output().write_line("Got nowhere to go.");
            return Ok(());
        }

        let direction = resolve_direction(session, &args[1]);

        let Session {
            world,
            player,
            output,
            ..
        } = session;
        player.move_dir(world, direction, output.as_mut());
        Ok(())
    }
}
