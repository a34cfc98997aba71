//! Core types for the Gridfall text-adventure runtime.
//!
//! This crate provides:
//! - [`Direction`] - Compass and vertical directions used to key room portals
//! - [`Error`] - Error types for fatal startup and invariant violations
//! - [`Output`] - The collaborator trait through which all text is emitted

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod direction;
mod error;
mod output;

pub use direction::Direction;
pub use error::{Error, ErrorKind, Result};
pub use output::{MemoryOutput, Output, TypeWriteOptions};
