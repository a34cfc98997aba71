//! The Gridfall world graph.
//!
//! This crate provides:
//! - [`World`] - The entity arena: every object, container, room, and portal
//! - [`EntityDef`] - Declarative entity construction
//! - Cancelable events ([`EnterRoomEvent`], [`ExitRoomEvent`], [`OpenEntityEvent`],
//!   [`PickupEntityEvent`], [`UsePortalEvent`]) and the non-cancelable
//!   [`RenderDescriptionEvent`]
//! - [`Player`] - The single mutable cursor into the graph
//! - [`build_world`] - The two-pass world-build phase over [`RoomBlueprint`]s
//!
//! Everything here is single-threaded and synchronous: events run in-line on
//! the calling thread, and recursion (exiting a room triggers entering the
//! next one) rides the ordinary call stack.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod builder;
mod entity;
mod events;
mod locate;
mod player;
mod world;

pub use builder::{RoomBlueprint, build_world};
pub use entity::{ContainerState, Entity, EntityDef, EntityId, EntityKind, RoomState};
pub use events::{
    CancelFlags, EnterObserver, EnterRoomEvent, ExitObserver, ExitRoomEvent, OpenEntityEvent,
    OpenObserver, PickupEntityEvent, PickupObserver, RenderDescriptionEvent, RenderObserver,
    UsePortalEvent, UsePortalObserver,
};
pub use player::Player;
pub use world::{RoomKindId, World};
