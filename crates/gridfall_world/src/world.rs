//! The entity arena and its indexes.
//!
//! The `World` owns every entity for the life of a run. There is no
//! destruction: removal from a container's child list is the only deletion
//! primitive the runtime offers. All state is in-memory and owned by the
//! single execution thread.

use std::collections::HashMap;
use std::fmt;

use gridfall_foundation::{Direction, Error, Result};

use crate::entity::{Entity, EntityDef, EntityId, EntityKind};
use crate::events::ObserverSet;

/// Stable identifier for a singleton room kind.
///
/// Exactly one room per kind may exist in a world; the kind is the lookup
/// key content code uses to find rooms built by other blueprints.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RoomKindId(&'static str);

impl RoomKindId {
    /// Creates a kind identifier from a static name.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// The underlying name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for RoomKindId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The world graph: an arena of entities plus the stable-id index, the
/// singleton-room registry, and the per-entity observer lists.
#[derive(Default)]
pub struct World {
    pub(crate) entities: Vec<Entity>,
    ids: HashMap<String, EntityId>,
    rooms: HashMap<RoomKindId, EntityId>,
    pub(crate) observers: HashMap<EntityId, ObserverSet>,
    next_generated: u64,
}

impl World {
    /// Creates an empty world.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns an entity from its definition and registers its stable id.
    ///
    /// # Errors
    ///
    /// Fails when the name contains quote or period characters (the
    /// tokenizer could never round-trip them) or when the stable id is
    /// already registered.
    pub fn spawn(&mut self, mut def: EntityDef) -> Result<EntityId> {
        if def.name.contains('"') || def.name.contains('.') {
            return Err(Error::invalid_entity_name(&def.name));
        }

        let stable_id = match def.id.take() {
            Some(id) => id,
            None => {
                let id = format!("entity-{}", self.next_generated);
                self.next_generated += 1;
                id
            }
        };
        if self.ids.contains_key(&stable_id) {
            return Err(Error::duplicate_entity_id(&stable_id));
        }

        let kind = def.build_kind();
        let handle = EntityId(u32::try_from(self.entities.len()).map_err(|_| {
            Error::internal("entity arena exhausted")
        })?);
        self.entities.push(Entity {
            id: stable_id.clone(),
            name: def.name,
            description: def.description,
            visible: def.visible,
            takeable: def.takeable,
            kind,
        });
        self.ids.insert(stable_id, handle);
        log::debug!("spawned {} '{}'", handle, self.entity(handle).name());
        Ok(handle)
    }

    /// Returns the entity behind a handle.
    ///
    /// # Panics
    ///
    /// Panics when given a handle minted by a different world.
    #[must_use]
    pub fn entity(&self, id: EntityId) -> &Entity {
        &self.entities[id.0 as usize]
    }

    /// Returns the entity behind a handle, mutably.
    ///
    /// # Panics
    ///
    /// Panics when given a handle minted by a different world.
    pub fn entity_mut(&mut self, id: EntityId) -> &mut Entity {
        &mut self.entities[id.0 as usize]
    }

    /// Number of entities spawned so far.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Looks up an entity by its stable string id.
    #[must_use]
    pub fn find_entity(&self, stable_id: &str) -> Option<EntityId> {
        self.ids.get(stable_id).copied()
    }

    /// Changes an entity's stable id, keeping the index consistent.
    ///
    /// # Errors
    ///
    /// Fails when the old id was never registered or the new id is taken.
    pub fn set_entity_id(&mut self, id: EntityId, new_id: impl Into<String>) -> Result<()> {
        let new_id = new_id.into();
        let old_id = self.entity(id).id.clone();
        if old_id == new_id {
            return Ok(());
        }
        if self.ids.contains_key(&new_id) {
            return Err(Error::duplicate_entity_id(new_id));
        }
        if self.ids.remove(&old_id).is_none() {
            return Err(Error::unknown_entity_id(old_id));
        }
        self.ids.insert(new_id.clone(), id);
        self.entity_mut(id).id = new_id;
        Ok(())
    }

    /// Appends `child` to `parent`'s ordered child list.
    ///
    /// # Errors
    ///
    /// Fails when `parent` is not a container.
    pub fn attach(&mut self, parent: EntityId, child: EntityId) -> Result<()> {
        let name = self.entity(parent).name().to_string();
        let Some(container) = self.entity_mut(parent).container_mut() else {
            return Err(Error::internal(format!("'{name}' is not a container")));
        };
        container.items.push(child);
        Ok(())
    }

    /// Removes `child` from `parent`'s child list.
    ///
    /// This is the only deletion primitive: the entity itself lives on in
    /// the arena.
    ///
    /// # Errors
    ///
    /// Fails when `parent` is not a container. Returns `Ok(false)` when the
    /// child was not present.
    pub fn detach(&mut self, parent: EntityId, child: EntityId) -> Result<bool> {
        let name = self.entity(parent).name().to_string();
        let Some(container) = self.entity_mut(parent).container_mut() else {
            return Err(Error::internal(format!("'{name}' is not a container")));
        };
        let before = container.items.len();
        container.items.retain(|&item| item != child);
        Ok(container.items.len() < before)
    }

    /// Finds the container currently holding `child`, if any.
    #[must_use]
    pub fn parent_of(&self, child: EntityId) -> Option<EntityId> {
        self.entities.iter().enumerate().find_map(|(index, entity)| {
            let container = entity.container()?;
            if container.items.contains(&child) {
                u32::try_from(index).ok().map(EntityId)
            } else {
                None
            }
        })
    }

    /// Registers a portal on a room for a direction.
    ///
    /// # Errors
    ///
    /// Fails on the `None` sentinel, on a direction that already has a
    /// portal, when `room` is not a room, or when `portal` is not a portal.
    pub fn set_portal(
        &mut self,
        room: EntityId,
        direction: Direction,
        portal: EntityId,
    ) -> Result<()> {
        if direction == Direction::None {
            return Err(Error::invalid_direction());
        }
        if self.entity(portal).portal_target().is_none() {
            return Err(Error::internal(format!(
                "'{}' is not a portal",
                self.entity(portal).name()
            )));
        }
        let name = self.entity(room).name().to_string();
        let Some(state) = self.entity_mut(room).room_mut() else {
            return Err(Error::internal(format!("'{name}' is not a room")));
        };
        if state.portals.contains_key(&direction) {
            return Err(Error::duplicate_portal(name, direction));
        }
        state.portals.insert(direction, portal);
        Ok(())
    }

    /// Unregisters a room's portal for a direction.
    ///
    /// # Errors
    ///
    /// Fails when `room` is not a room. Returns `Ok(false)` when no portal
    /// was registered for the direction.
    pub fn remove_portal(&mut self, room: EntityId, direction: Direction) -> Result<bool> {
        let name = self.entity(room).name().to_string();
        let Some(state) = self.entity_mut(room).room_mut() else {
            return Err(Error::internal(format!("'{name}' is not a room")));
        };
        Ok(state.portals.remove(&direction).is_some())
    }

    /// The portal registered for a direction, if any.
    ///
    /// The `None` sentinel direction never has a portal. Disabled
    /// (invisible) portals are still returned; visibility only affects
    /// listings.
    #[must_use]
    pub fn portal(&self, room: EntityId, direction: Direction) -> Option<EntityId> {
        self.entity(room)
            .room()
            .and_then(|state| state.portals.get(&direction).copied())
    }

    /// The registered portals whose entity is visible, in direction order.
    #[must_use]
    pub fn visible_exits(&self, room: EntityId) -> Vec<(Direction, EntityId)> {
        self.entity(room)
            .room()
            .map(|state| {
                state
                    .portals()
                    .filter(|&(_, portal)| self.entity(portal).is_visible())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Registers a room under its singleton kind.
    ///
    /// # Errors
    ///
    /// Fails when the kind already has an instance.
    pub fn register_room_kind(&mut self, kind: RoomKindId, room: EntityId) -> Result<()> {
        if self.rooms.contains_key(&kind) {
            return Err(Error::duplicate_room_kind(kind.name()));
        }
        self.rooms.insert(kind, room);
        Ok(())
    }

    /// The room registered for a kind, if any.
    #[must_use]
    pub fn room(&self, kind: RoomKindId) -> Option<EntityId> {
        self.rooms.get(&kind).copied()
    }

    /// The room registered for a kind.
    ///
    /// # Errors
    ///
    /// Fails when no room of that kind was built.
    pub fn require_room(&self, kind: RoomKindId) -> Result<EntityId> {
        self.room(kind)
            .ok_or_else(|| Error::unknown_room_kind(kind.name()))
    }
}
