//! Token-sequence to command resolution.
//!
//! The dispatcher is deliberately total: every token sequence resolves to
//! *some* command. Empty input and unknown or ambiguous names resolve to a
//! synthetic notice command carrying the diagnostic text, so the main loop
//! never needs a failure path.

use std::rc::Rc;

use crate::builtin::MessageCommand;
use crate::command::Command;
use crate::registry::CommandRegistry;

/// Resolves token sequences against a [`CommandRegistry`].
pub struct Dispatcher {
    registry: Rc<CommandRegistry>,
}

impl Dispatcher {
    /// Creates a dispatcher over a shared registry.
    #[must_use]
    pub fn new(registry: Rc<CommandRegistry>) -> Self {
        Self { registry }
    }

    /// Resolves a token sequence to the command to execute.
    ///
    /// `tokens[0]` is the candidate name. An exact (case-insensitive)
    /// match wins; otherwise a case-insensitive prefix scan over all
    /// registered names selects the single command whose name starts with
    /// the candidate. Zero or multiple prefix hits, or an empty token
    /// sequence, yield a synthetic notice instead.
    #[must_use]
    pub fn resolve(&self, tokens: &[String]) -> Rc<dyn Command> {
        let Some(candidate) = tokens.first() else {
            return Rc::new(MessageCommand::with_text(
                "Enter 'help' for a list of available commands.",
            ));
        };

        let wanted = candidate.to_lowercase();
        if let Some(command) = self.registry.resolve(&wanted) {
            log::debug!("dispatch '{candidate}' -> '{}'", command.meta().name());
            return command;
        }

        let mut hits = self
            .registry
            .commands()
            .filter(|command| command.meta().name().starts_with(&wanted));
        match (hits.next(), hits.next()) {
            (Some(command), None) => {
                log::debug!(
                    "dispatch '{candidate}' -> '{}' (prefix)",
                    command.meta().name()
                );
                Rc::clone(command)
            }
            _ => Rc::new(MessageCommand::with_text(format!(
                "Unknown command '{candidate}'."
            ))),
        }
    }
}
