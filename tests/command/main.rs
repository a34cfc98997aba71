//! Integration tests for the command layer.
//!
//! Tokenization, registry rules, dispatch resolution, and the help
//! surface.

mod dispatch;
mod help;
mod registry;
mod support;
mod tokenizer;
