//! The output collaborator boundary.
//!
//! The core requests all text emission through the [`Output`] trait and
//! never implements timing or rendering itself. The console implementation
//! lives in the runtime crate; [`MemoryOutput`] is the in-memory double
//! used throughout the tests.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Pacing options for [`Output::type_write`].
#[derive(Clone, Debug)]
pub struct TypeWriteOptions {
    /// Base time in milliseconds between characters.
    pub speed_ms: u64,
    /// Maximum random variation added to the per-character time.
    pub random_ms: u64,
    /// Pause after the whole text has been written.
    pub pause_ms: u64,
    /// Whether to occasionally simulate a typo (type, pause, erase, retype).
    pub typos: bool,
}

impl TypeWriteOptions {
    /// Sets the base per-character speed.
    #[must_use]
    pub const fn with_speed(mut self, ms: u64) -> Self {
        self.speed_ms = ms;
        self
    }

    /// Sets the random per-character variation.
    #[must_use]
    pub const fn with_random(mut self, ms: u64) -> Self {
        self.random_ms = ms;
        self
    }

    /// Sets the trailing pause.
    #[must_use]
    pub const fn with_pause(mut self, ms: u64) -> Self {
        self.pause_ms = ms;
        self
    }

    /// Disables typo simulation.
    #[must_use]
    pub const fn without_typos(mut self) -> Self {
        self.typos = false;
        self
    }
}

impl Default for TypeWriteOptions {
    fn default() -> Self {
        Self {
            speed_ms: 50,
            random_ms: 30,
            pause_ms: 0,
            typos: true,
        }
    }
}

/// The collaborator through which the core emits all text.
pub trait Output {
    /// Writes text without a trailing newline.
    fn write(&mut self, text: &str);

    /// Writes text followed by a newline.
    fn write_line(&mut self, text: &str);

    /// Pauses output for the given number of milliseconds.
    fn delay(&mut self, ms: u64);

    /// Writes text character by character with the given pacing.
    fn type_write(&mut self, text: &str, options: &TypeWriteOptions);

    /// Writes pre-formatted arguments without a trailing newline.
    fn write_fmt(&mut self, args: fmt::Arguments<'_>) {
        self.write(&args.to_string());
    }
}

/// An in-memory [`Output`] that records everything and never pauses.
///
/// Clones share the same buffer, so a test can keep a handle while the
/// session owns another.
#[derive(Clone, Default)]
pub struct MemoryOutput {
    inner: Rc<RefCell<Recorded>>,
}

#[derive(Default)]
struct Recorded {
    text: String,
    delays: Vec<u64>,
}

impl MemoryOutput {
    /// Creates a new empty recording output.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far.
    #[must_use]
    pub fn text(&self) -> String {
        self.inner.borrow().text.clone()
    }

    /// Whether the recorded text contains the given fragment.
    #[must_use]
    pub fn contains(&self, fragment: &str) -> bool {
        self.inner.borrow().text.contains(fragment)
    }

    /// Every delay requested so far, in order.
    #[must_use]
    pub fn delays(&self) -> Vec<u64> {
        self.inner.borrow().delays.clone()
    }

    /// Discards everything recorded so far.
    pub fn clear(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.text.clear();
        inner.delays.clear();
    }
}

impl Output for MemoryOutput {
    fn write(&mut self, text: &str) {
        self.inner.borrow_mut().text.push_str(text);
    }

    fn write_line(&mut self, text: &str) {
        let mut inner = self.inner.borrow_mut();
        inner.text.push_str(text);
        inner.text.push('\n');
    }

    fn delay(&mut self, ms: u64) {
        self.inner.borrow_mut().delays.push(ms);
    }

    fn type_write(&mut self, text: &str, _options: &TypeWriteOptions) {
        self.inner.borrow_mut().text.push_str(text);
    }
}
