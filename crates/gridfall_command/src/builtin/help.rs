//! The help command.

use std::rc::Rc;

use gridfall_foundation::Result;
use rand::seq::SliceRandom;

use crate::command::{Command, CommandMeta};
use crate::session::Session;

/// Lists the available commands, or shows one command's help text.
///
/// `help` with no argument lists all non-system command names in sorted
/// order; system names (marked with `(!)`) join the listing only in
/// developer mode.
pub struct HelpCommand {
    meta: CommandMeta,
}

impl HelpCommand {
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

const QUIPS: &[&str] = &[
    "Help about help. Bold move.",
    "Just type help.",
    "You want a manual for the manual?",
    "It lists commands. That's the whole trick.",
    "If you have to ask twice, try quit.",
    "Recursion detected. Seek shelter.",
    "Somewhere, a game designer sighs.",
];

impl Command for HelpCommand {
    fn meta(&self) -> &CommandMeta {
        &self.meta
    }

    fn help(&self) -> String {
        QUIPS
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or("Just type help.")
            .to_string()
    }

    fn execute(&self, session: &mut Session, args: &[String]) -> Result<()> {
        if args.len() > 1 {
            match session.registry.resolve(&args[1]) {
                Some(command) => {
                    let text = command.help();
                    session.output().write(&format!("{text}\n"));
                }
                None => {
                    session
                        .output()
                        .write(&format!("Unknown command '{}'.\n", args[1]));
                }
            }
            return Ok(());
        }

        let registry = Rc::clone(&session.registry);
        let mut commands: Vec<_> = registry.commands().collect();
        commands.sort_by(|a, b| a.meta().name().cmp(b.meta().name()));

        let dev_mode = session.dev_mode;
        let out = session.output();
        out.write("Available commands are:\n\n");
        for command in commands {
            if command.meta().is_system() {
                if dev_mode {
                    out.write(&format!("{} (!)\n", command.meta().name()));
                }
            } else {
                out.write_line(command.meta().name());
            }
        }
        out.write_line("\nEnter help {command name} to get command specific help.");
        Ok(())
    }
}
