//! Per-run session state.
//!
//! The session is the explicit context object every command executes
//! against: the world graph, the player, the output collaborator, the
//! registry handle, and the two run flags. There is no global state, so a
//! process can host any number of independent sessions.

use std::rc::Rc;

use gridfall_foundation::Output;
use gridfall_world::{Player, World};

use crate::registry::CommandRegistry;

/// Everything a command can read or mutate during execution.
pub struct Session {
    pub(crate) world: World,
    pub(crate) player: Player,
    pub(crate) registry: Rc<CommandRegistry>,
    pub(crate) output: Box<dyn Output>,
    pub(crate) dev_mode: bool,
    pub(crate) running: bool,
}

impl Session {
    /// Assembles a session from its already-built parts.
    #[must_use]
    pub fn new(
        world: World,
        player: Player,
        registry: Rc<CommandRegistry>,
        output: Box<dyn Output>,
    ) -> Self {
        Self {
            world,
            player,
            registry,
            output,
            dev_mode: false,
            running: true,
        }
    }

    /// The world graph.
    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The world graph, mutably.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// The player.
    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// The player, mutably.
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// The command registry.
    #[must_use]
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// The output collaborator.
    pub fn output(&mut self) -> &mut dyn Output {
        self.output.as_mut()
    }

    /// Whether developer mode is on.
    #[must_use]
    pub const fn dev_mode(&self) -> bool {
        self.dev_mode
    }

    /// Sets developer mode.
    pub fn set_dev_mode(&mut self, enabled: bool) {
        self.dev_mode = enabled;
    }

    /// Flips developer mode, returning the new state.
    pub fn toggle_dev_mode(&mut self) -> bool {
        self.dev_mode = !self.dev_mode;
        self.dev_mode
    }

    /// Whether the main loop should keep running.
    #[must_use]
    pub const fn running(&self) -> bool {
        self.running
    }

    /// Asks the main loop to stop after the current command.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// The display name of the room the player currently occupies.
    #[must_use]
    pub fn current_room_name(&self) -> &str {
        self.world.entity(self.player.current_room()).name()
    }
}
