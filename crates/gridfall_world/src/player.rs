//! Player state: the single mutable cursor into the world graph.

use gridfall_foundation::{Direction, Error, Output, Result};

use crate::entity::{EntityDef, EntityId};
use crate::world::World;

/// The one player of a running game.
///
/// `current_room` is read-only to outside callers and changes only through
/// a successful move. The player and its inventory are themselves entities
/// in the arena, so events can carry the player handle and content can put
/// things into the inventory like any other container.
pub struct Player {
    entity: EntityId,
    inventory: EntityId,
    current_room: EntityId,
}

impl Player {
    /// Creates the player in `start_room` and runs the mandatory first
    /// enter through the normal enter protocol.
    ///
    /// # Errors
    ///
    /// Fails when the start room refuses entry; a game with no valid
    /// location cannot begin.
    pub fn initialize(
        world: &mut World,
        start_room: EntityId,
        out: &mut dyn Output,
    ) -> Result<Self> {
        let entity = world.spawn(EntityDef::object("player").invisible())?;
        let inventory = world.spawn(
            EntityDef::container("Inventory")
                .invisible()
                .header("You are carrying: ")
                .empty_text("You are not carrying anything."),
        )?;

        if !world.enter_room(start_room, entity, out) {
            return Err(Error::start_room_rejected());
        }

        Ok(Self {
            entity,
            inventory,
            current_room: start_room,
        })
    }

    /// The player's own entity handle.
    #[must_use]
    pub const fn entity(&self) -> EntityId {
        self.entity
    }

    /// The inventory container.
    #[must_use]
    pub const fn inventory(&self) -> EntityId {
        self.inventory
    }

    /// The room currently occupied.
    #[must_use]
    pub const fn current_room(&self) -> EntityId {
        self.current_room
    }

    /// Attempts to move in a direction through the current room's exit
    /// protocol. The current room changes only when the whole
    /// exit-then-enter chain succeeds.
    pub fn move_dir(&mut self, world: &mut World, direction: Direction, out: &mut dyn Output) {
        if let Some(target) = world.exit_room(self.current_room, self.entity, direction, out) {
            self.current_room = target;
        }
    }
}
