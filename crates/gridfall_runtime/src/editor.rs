//! Line editor abstraction for the game loop.
//!
//! A trait-based boundary over the line-editing library, so the loop can
//! run against rustyline in production and a scripted feed in tests.

use std::collections::VecDeque;

use gridfall_foundation::{Error, Result};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF), or the script ran out.
    Eof,
}

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Reads one line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Adds a line to history.
    fn add_history(&mut self, line: &str);
}

/// The rustyline-backed editor used in production.
pub struct RustylineEditor {
    editor: DefaultEditor,
}

impl RustylineEditor {
    /// Creates a new rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().map_err(|e| Error::input(e.to_string()))?;
        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::input(e.to_string())),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }
}

/// Feeds a prepared script of input lines, then reports EOF.
pub struct ScriptedEditor {
    lines: VecDeque<String>,
}

impl ScriptedEditor {
    /// Creates an editor that will replay the given lines in order.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl LineEditor for ScriptedEditor {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(self
            .lines
            .pop_front()
            .map_or(ReadResult::Eof, ReadResult::Line))
    }

    fn add_history(&mut self, _line: &str) {}
}
