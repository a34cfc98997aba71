//! Integration tests for the world graph.
//!
//! Entity identity, portal rules, selector location, and the cancelable
//! event protocol.

mod entities;
mod locate;
mod portals;
