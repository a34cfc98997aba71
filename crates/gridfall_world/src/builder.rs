//! The one-time world-build phase.
//!
//! Content declares its rooms as [`RoomBlueprint`]s in a static table;
//! [`build_world`] runs them in two passes so that any room can wire
//! portals to any other room by kind, regardless of declaration order.

use gridfall_foundation::Result;

use crate::entity::EntityId;
use crate::world::{RoomKindId, World};

/// A singleton room declaration: its kind, how to construct the bare room
/// entity, and how to populate it once every room exists.
pub struct RoomBlueprint {
    /// The stable kind identifier this room registers under.
    pub kind: RoomKindId,
    /// Pass 1: creates the room entity (name, description, flags).
    pub construct: fn(&mut World) -> Result<EntityId>,
    /// Pass 2: fills the room with contents, portals, and observers. Runs
    /// after every blueprint's construct pass, so cross-room lookups by
    /// kind are safe here.
    pub populate: fn(&mut World, EntityId) -> Result<()>,
}

/// Builds a world from a blueprint table.
///
/// Pass 1 constructs every room and registers its kind; pass 2 populates
/// each room in table order.
///
/// # Errors
///
/// Fails when a kind is declared twice, or when any construct or populate
/// step reports a content inconsistency.
pub fn build_world(blueprints: &[RoomBlueprint]) -> Result<World> {
    let mut world = World::new();

    for blueprint in blueprints {
        let room = (blueprint.construct)(&mut world)?;
        world.register_room_kind(blueprint.kind, room)?;
        log::debug!("constructed room kind '{}'", blueprint.kind);
    }

    for blueprint in blueprints {
        let room = world.require_room(blueprint.kind)?;
        (blueprint.populate)(&mut world, room)?;
    }

    log::info!(
        "world built: {} rooms, {} entities",
        blueprints.len(),
        world.entity_count()
    );
    Ok(world)
}
