//! The built-in command set.
//!
//! Each command is a stateless singleton constructed once during startup
//! discovery. [`builtin_factories`] is the explicit registration table
//! that replaces any notion of scanning for command types: declaration
//! order here is discovery order, which makes duplicate detection and
//! listing order deterministic.

use std::rc::Rc;

use crate::command::Command;
use crate::registry::CommandFactory;

mod delay;
mod devmode;
mod exits;
mod go;
mod help;
mod inventory;
mod look;
mod message;
mod open;
mod quit;
mod take;

pub use delay::DelayCommand;
pub use devmode::DevModeCommand;
pub use exits::ExitsCommand;
pub use go::GoCommand;
pub use help::HelpCommand;
pub use inventory::InventoryCommand;
pub use look::LookCommand;
pub use message::MessageCommand;
pub use open::{CloseCommand, OpenCommand};
pub use quit::QuitCommand;
pub use take::TakeCommand;

/// The registration table for the built-in command set, in declaration
/// order.
#[must_use]
pub fn builtin_factories() -> Vec<CommandFactory> {
    vec![
        || Ok(Rc::new(HelpCommand::new()?) as Rc<dyn Command>),
        || Ok(Rc::new(GoCommand::new()?) as Rc<dyn Command>),
        || Ok(Rc::new(LookCommand::new()?) as Rc<dyn Command>),
        || Ok(Rc::new(OpenCommand::new()?) as Rc<dyn Command>),
        || Ok(Rc::new(CloseCommand::new()?) as Rc<dyn Command>),
        || Ok(Rc::new(ExitsCommand::new()?) as Rc<dyn Command>),
        || Ok(Rc::new(TakeCommand::new()?) as Rc<dyn Command>),
        || Ok(Rc::new(InventoryCommand::new()?) as Rc<dyn Command>),
        || Ok(Rc::new(QuitCommand::new()?) as Rc<dyn Command>),
        || Ok(Rc::new(MessageCommand::new()?) as Rc<dyn Command>),
        || Ok(Rc::new(DelayCommand::new()?) as Rc<dyn Command>),
        || Ok(Rc::new(DevModeCommand::new()?) as Rc<dyn Command>),
    ]
}
