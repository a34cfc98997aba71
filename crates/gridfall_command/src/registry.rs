//! The command registry.
//!
//! Built once at startup from an explicit factory table and immutable
//! thereafter: the game session holds it behind `Rc`, so nothing can
//! register into it once dispatch begins.

use std::collections::HashMap;
use std::rc::Rc;

use gridfall_foundation::{Error, Result};

use crate::command::Command;

/// Constructs one command instance. Factories run exactly once, during
/// startup discovery, in declaration order.
pub type CommandFactory = fn() -> Result<Rc<dyn Command>>;

/// The set of known commands, keyed by normalized name.
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<String, Rc<dyn Command>>,
}

impl CommandRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs every factory once and registers the instances that opted in.
    ///
    /// Instances with `auto_register` off are constructed (validating
    /// their configuration) and dropped; they exist to be built
    /// programmatically elsewhere.
    ///
    /// # Errors
    ///
    /// Fails when a factory reports a configuration error or two commands
    /// share a name.
    pub fn from_factories(factories: &[CommandFactory]) -> Result<Self> {
        let mut registry = Self::new();
        for factory in factories {
            let command = factory()?;
            if command.meta().auto_register() {
                registry.register(command)?;
            }
        }
        log::debug!("command registry built: {} commands", registry.len());
        Ok(registry)
    }

    /// Registers a command under its normalized name.
    ///
    /// Startup-time only: once the registry is shared with a session it is
    /// only ever read.
    ///
    /// # Errors
    ///
    /// Fails when a command with the same name (case-insensitively)
    /// already exists.
    pub fn register(&mut self, command: Rc<dyn Command>) -> Result<()> {
        let name = command.meta().name().to_lowercase();
        if self.commands.contains_key(&name) {
            return Err(Error::duplicate_command(name));
        }
        log::debug!("registered command '{name}'");
        self.commands.insert(name, command);
        Ok(())
    }

    /// Exact, case-insensitive lookup. Prefix matching is a dispatcher
    /// concern, not a registry one.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<Rc<dyn Command>> {
        self.commands.get(&name.to_lowercase()).cloned()
    }

    /// All registered commands, in no particular order.
    pub fn commands(&self) -> impl Iterator<Item = &Rc<dyn Command>> {
        self.commands.values()
    }

    /// Number of registered commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
