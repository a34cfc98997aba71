//! The command abstraction.
//!
//! A command is a named, invocable action reachable from user input.
//! Commands are stateless-per-invocation singletons: one instance per
//! command type, created at startup, reused for every invocation.

use gridfall_foundation::{Error, Result};

use crate::session::Session;

/// The conventional suffix command type names must carry.
const TYPE_SUFFIX: &str = "Command";

/// Identity and registration attributes of a command.
#[derive(Clone, Debug)]
pub struct CommandMeta {
    name: String,
    auto_register: bool,
    is_system: bool,
}

impl CommandMeta {
    /// Creates metadata with an explicit name, lowercased.
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_lowercase(),
            auto_register: true,
            is_system: false,
        }
    }

    /// Derives metadata from the command's type name.
    ///
    /// The type name must end in `Command`; the registered name is the
    /// type name minus that suffix, lowercased (`LookCommand` registers as
    /// `look`).
    ///
    /// # Errors
    ///
    /// A type name violating the suffix convention is a startup
    /// configuration error.
    pub fn derived<T>() -> Result<Self> {
        let full = std::any::type_name::<T>();
        let base = full.rsplit("::").next().unwrap_or(full);
        let stripped = base
            .strip_suffix(TYPE_SUFFIX)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| Error::invalid_command_name(base))?;
        Ok(Self::named(stripped))
    }

    /// Marks the command as a system command, hidden from the ordinary
    /// help listing.
    #[must_use]
    pub const fn system(mut self) -> Self {
        self.is_system = true;
        self
    }

    /// Opts the command out of auto-registration; it then exists only to
    /// be constructed programmatically.
    #[must_use]
    pub const fn manual(mut self) -> Self {
        self.auto_register = false;
        self
    }

    /// The normalized (lowercase) command name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the command registers itself at startup.
    #[must_use]
    pub const fn auto_register(&self) -> bool {
        self.auto_register
    }

    /// Whether the command is a system command.
    #[must_use]
    pub const fn is_system(&self) -> bool {
        self.is_system
    }
}

/// A named, invocable action.
pub trait Command {
    /// Identity and registration attributes.
    fn meta(&self) -> &CommandMeta;

    /// Help text, shown by `help {name}`. Produced on demand.
    fn help(&self) -> String;

    /// Executes the command.
    ///
    /// `args` is the full token sequence; `args[0]` is always the name the
    /// player actually typed, even when resolution went through a prefix.
    ///
    /// # Errors
    ///
    /// Only world-structure violations surface here; every user-facing
    /// problem is written as a notice and returns `Ok`.
    fn execute(&self, session: &mut Session, args: &[String]) -> Result<()>;

    /// The normalized command name.
    fn name(&self) -> &str {
        self.meta().name()
    }
}
