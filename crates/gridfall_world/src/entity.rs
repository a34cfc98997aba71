//! World entities: objects, containers, rooms, and portals.

use std::collections::BTreeMap;
use std::fmt;

use gridfall_foundation::Direction;

/// Handle to an entity in a [`World`](crate::World) arena.
///
/// Handles are minted only by the world that owns the entity, and entities
/// are never destroyed, so a handle stays valid for the life of its world.
/// Indexing a world with a handle minted by a different world is a logic
/// error.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct EntityId(pub(crate) u32);

impl EntityId {
    /// Returns the raw arena index.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({})", self.0)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// Default listing header for plain containers.
const CONTAINER_HEADER: &str = "It contains the following items: ";

/// Default listing header for rooms.
const ROOM_HEADER: &str = "You see the following items of possible interest: ";

/// Container payload: an ordered child list plus its listing texts.
pub struct ContainerState {
    pub(crate) items: Vec<EntityId>,
    pub(crate) header: String,
    pub(crate) empty_text: Option<String>,
    /// `Some(state)` when the container is openable, `None` otherwise.
    pub(crate) open: Option<bool>,
}

impl ContainerState {
    fn new(header: impl Into<String>) -> Self {
        Self {
            items: Vec::new(),
            header: header.into(),
            empty_text: None,
            open: None,
        }
    }

    /// The ordered children of this container.
    #[must_use]
    pub fn items(&self) -> &[EntityId] {
        &self.items
    }

    /// The header shown above the child-name listing.
    #[must_use]
    pub fn header(&self) -> &str {
        &self.header
    }

    /// The text shown when the container has no children, if any.
    #[must_use]
    pub fn empty_text(&self) -> Option<&str> {
        self.empty_text.as_deref()
    }

    /// Whether this container can be opened and closed at all.
    #[must_use]
    pub const fn is_openable(&self) -> bool {
        self.open.is_some()
    }

    /// The open state: `Some(true)` open, `Some(false)` closed, `None` when
    /// the container is not openable.
    #[must_use]
    pub const fn is_open(&self) -> Option<bool> {
        self.open
    }
}

/// Room payload: the portal mapping.
///
/// At most one portal per direction. `BTreeMap` keeps exit listings in
/// direction declaration order.
pub struct RoomState {
    pub(crate) portals: BTreeMap<Direction, EntityId>,
}

impl RoomState {
    fn new() -> Self {
        Self {
            portals: BTreeMap::new(),
        }
    }

    /// All registered portals in direction order, visible or not.
    pub fn portals(&self) -> impl Iterator<Item = (Direction, EntityId)> + '_ {
        self.portals.iter().map(|(&d, &p)| (d, p))
    }
}

/// What an entity is, structurally.
pub enum EntityKind {
    /// A plain object with no structure of its own.
    Object,
    /// Holds an ordered list of child entities.
    Container(ContainerState),
    /// A container that is also a location, linked to others via portals.
    Room(ContainerState, RoomState),
    /// A one-directional link to a target room.
    Portal {
        /// The room this portal leads to.
        target: EntityId,
    },
}

/// An entity in the world graph.
///
/// The stable string id is distinct from the display name: the name is what
/// the player sees and types, the id is what content code and the world
/// index track the entity by.
pub struct Entity {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) visible: bool,
    pub(crate) takeable: bool,
    pub(crate) kind: EntityKind,
}

impl Entity {
    /// The stable string id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The base description, if one was authored.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Replaces the base description.
    pub fn set_description(&mut self, text: impl Into<String>) {
        self.description = Some(text.into());
    }

    /// Whether the entity shows up in listings and exit displays.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Sets the visibility flag.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Whether the entity can be picked up.
    #[must_use]
    pub const fn is_takeable(&self) -> bool {
        self.takeable
    }

    /// Sets the takeable flag.
    pub fn set_takeable(&mut self, takeable: bool) {
        self.takeable = takeable;
    }

    /// The structural kind.
    #[must_use]
    pub const fn kind(&self) -> &EntityKind {
        &self.kind
    }

    /// The container payload, for both containers and rooms.
    #[must_use]
    pub const fn container(&self) -> Option<&ContainerState> {
        match &self.kind {
            EntityKind::Container(c) | EntityKind::Room(c, _) => Some(c),
            _ => None,
        }
    }

    pub(crate) const fn container_mut(&mut self) -> Option<&mut ContainerState> {
        match &mut self.kind {
            EntityKind::Container(c) | EntityKind::Room(c, _) => Some(c),
            _ => None,
        }
    }

    /// The room payload, if this entity is a room.
    #[must_use]
    pub const fn room(&self) -> Option<&RoomState> {
        match &self.kind {
            EntityKind::Room(_, r) => Some(r),
            _ => None,
        }
    }

    pub(crate) const fn room_mut(&mut self) -> Option<&mut RoomState> {
        match &mut self.kind {
            EntityKind::Room(_, r) => Some(r),
            _ => None,
        }
    }

    /// The target room, if this entity is a portal.
    #[must_use]
    pub const fn portal_target(&self) -> Option<EntityId> {
        match self.kind {
            EntityKind::Portal { target } => Some(target),
            _ => None,
        }
    }

    /// Whether the entity is an openable container.
    #[must_use]
    pub fn is_openable(&self) -> bool {
        self.container().is_some_and(ContainerState::is_openable)
    }

    /// The open state of an openable container, `None` otherwise.
    #[must_use]
    pub fn is_open(&self) -> Option<bool> {
        self.container().and_then(ContainerState::is_open)
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entity")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

pub(crate) enum DefKind {
    Object,
    Container { open: Option<bool> },
    Room,
    Portal { target: EntityId },
}

/// Declarative description of an entity, spawned through
/// [`World::spawn`](crate::World::spawn).
pub struct EntityDef {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) id: Option<String>,
    pub(crate) visible: bool,
    pub(crate) takeable: bool,
    pub(crate) header: Option<String>,
    pub(crate) empty_text: Option<String>,
    pub(crate) kind: DefKind,
}

impl EntityDef {
    fn new(name: impl Into<String>, kind: DefKind) -> Self {
        Self {
            name: name.into(),
            description: None,
            id: None,
            visible: true,
            takeable: false,
            header: None,
            empty_text: None,
            kind,
        }
    }

    /// A plain object.
    pub fn object(name: impl Into<String>) -> Self {
        Self::new(name, DefKind::Object)
    }

    /// A container. Listing header defaults to "It contains the following
    /// items: ".
    pub fn container(name: impl Into<String>) -> Self {
        Self::new(name, DefKind::Container { open: None })
    }

    /// A room. Listing header defaults to "You see the following items of
    /// possible interest: ".
    pub fn room(name: impl Into<String>) -> Self {
        Self::new(name, DefKind::Room)
    }

    /// A portal leading to `target`, which must be a room.
    pub fn portal(name: impl Into<String>, target: EntityId) -> Self {
        Self::new(name, DefKind::Portal { target })
    }

    /// Sets the base description.
    #[must_use]
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    /// Supplies a stable id instead of a generated one.
    #[must_use]
    pub fn stable_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Hides the entity from listings and exit displays.
    #[must_use]
    pub const fn invisible(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Marks the entity as takeable.
    #[must_use]
    pub const fn takeable(mut self) -> Self {
        self.takeable = true;
        self
    }

    /// Overrides the listing header. Only meaningful for containers and
    /// rooms.
    #[must_use]
    pub fn header(mut self, text: impl Into<String>) -> Self {
        self.header = Some(text.into());
        self
    }

    /// Sets the text shown when the container is empty. Only meaningful for
    /// containers and rooms.
    #[must_use]
    pub fn empty_text(mut self, text: impl Into<String>) -> Self {
        self.empty_text = Some(text.into());
        self
    }

    /// Makes the container openable, starting in the given state. Only
    /// meaningful for containers.
    #[must_use]
    pub fn openable(mut self, open: bool) -> Self {
        if let DefKind::Container { open: state } = &mut self.kind {
            *state = Some(open);
        }
        self
    }

    pub(crate) fn build_kind(&mut self) -> EntityKind {
        match self.kind {
            DefKind::Object => EntityKind::Object,
            DefKind::Container { open } => {
                let mut container =
                    ContainerState::new(self.header.take().unwrap_or_else(|| CONTAINER_HEADER.into()));
                container.empty_text = self.empty_text.take();
                container.open = open;
                EntityKind::Container(container)
            }
            DefKind::Room => {
                let mut container =
                    ContainerState::new(self.header.take().unwrap_or_else(|| ROOM_HEADER.into()));
                container.empty_text = self.empty_text.take();
                EntityKind::Room(container, RoomState::new())
            }
            DefKind::Portal { target } => EntityKind::Portal { target },
        }
    }
}
