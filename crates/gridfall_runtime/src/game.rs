//! Game assembly and the main loop.

use std::rc::Rc;

use gridfall_command::builtin::builtin_factories;
use gridfall_command::{CommandRegistry, Dispatcher, Session, tokenize};
use gridfall_foundation::{Output, Result};
use gridfall_world::{Player, build_world};

use crate::console::ConsoleOutput;
use crate::content;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};

/// Startup options.
#[derive(Clone, Copy, Debug, Default)]
pub struct GameConfig {
    /// Start with developer mode on.
    pub dev_mode: bool,
    /// Disable typewriter pacing and delays.
    pub plain_output: bool,
}

/// A running game: session state, dispatcher, and the input boundary.
///
/// Generic over the editor so tests can drive the loop with a scripted
/// feed.
pub struct Game<E: LineEditor = RustylineEditor> {
    session: Session,
    dispatcher: Dispatcher,
    editor: E,
}

impl Game<RustylineEditor> {
    /// Creates a game on the real console.
    ///
    /// # Errors
    ///
    /// Any startup inconsistency (duplicate command names, bad content,
    /// a refused start room, an unopenable terminal) is fatal here.
    pub fn new(config: GameConfig) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        let output: Box<dyn Output> = if config.plain_output {
            Box::new(ConsoleOutput::plain())
        } else {
            Box::new(ConsoleOutput::new())
        };
        Self::with_editor(config, editor, output)
    }
}

impl<E: LineEditor> Game<E> {
    /// Creates a game over explicit collaborators.
    ///
    /// Builds the command registry from the static table, builds the world
    /// from the content blueprints, then creates the player and runs the
    /// mandatory first room entry. The start room's narration is therefore
    /// already written to `output` when this returns.
    ///
    /// # Errors
    ///
    /// Every startup inconsistency is fatal.
    pub fn with_editor(config: GameConfig, editor: E, mut output: Box<dyn Output>) -> Result<Self> {
        let registry = Rc::new(CommandRegistry::from_factories(&builtin_factories())?);
        let dispatcher = Dispatcher::new(Rc::clone(&registry));

        let mut world = build_world(&content::blueprints())?;
        let start = world.require_room(content::START)?;
        let player = Player::initialize(&mut world, start, output.as_mut())?;

        let mut session = Session::new(world, player, registry, output);
        session.set_dev_mode(config.dev_mode);
        log::info!("game initialized");

        Ok(Self {
            session,
            dispatcher,
            editor,
        })
    }

    /// The session state.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The session state, mutably.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Runs the loop: one read, one dispatch, one execute per cycle, until
    /// a command stops the session or input reaches EOF.
    ///
    /// # Errors
    ///
    /// Returns an error when reading input fails or a command hits a
    /// world-structure violation.
    pub fn run(&mut self) -> Result<()> {
        while self.session.running() {
            let prompt = format!("\n{}: ", self.session.current_room_name());
            match self.editor.read_line(&prompt)? {
                ReadResult::Line(line) => {
                    if !line.trim().is_empty() {
                        self.editor.add_history(&line);
                    }
                    let tokens = tokenize(&line);
                    let command = self.dispatcher.resolve(&tokens);
                    command.execute(&mut self.session, &tokens)?;
                }
                ReadResult::Interrupted => {}
                ReadResult::Eof => self.session.stop(),
            }
        }
        Ok(())
    }
}
