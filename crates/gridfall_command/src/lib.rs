//! The Gridfall command surface.
//!
//! This crate provides:
//! - [`tokenize`] - Splits a raw input line into word tokens
//! - [`Command`] / [`CommandMeta`] - The invocable-action abstraction
//! - [`CommandRegistry`] - The startup-built, name-keyed command set
//! - [`Dispatcher`] - Token-sequence to command resolution
//! - [`Session`] - The per-run state commands execute against
//! - [`builtin`] - The built-in command set and its registration table

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod builtin;
mod command;
mod dispatcher;
mod registry;
mod session;
mod tokenizer;

pub use command::{Command, CommandMeta};
pub use dispatcher::Dispatcher;
pub use registry::{CommandFactory, CommandRegistry};
pub use session::Session;
pub use tokenizer::tokenize;
