//! Gridfall - a text-adventure runtime
//!
//! This crate re-exports all layers of the Gridfall system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: gridfall_runtime    — console output, line editor, game loop, content
//! Layer 2: gridfall_command    — tokenizer, command registry, dispatcher, built-ins
//! Layer 1: gridfall_world      — entity graph, cancelable events, player state
//! Layer 0: gridfall_foundation — directions, errors, output collaborator
//! ```

pub use gridfall_command as command;
pub use gridfall_foundation as foundation;
pub use gridfall_runtime as runtime;
pub use gridfall_world as world;
