//! End-to-end tests: full input lines against a running session.

mod demo_game;
mod scenario;
