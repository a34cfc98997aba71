//! The cancelable-event protocol.
//!
//! World mutations that content may veto (entering a room, leaving it,
//! opening or closing a container, picking something up) are announced
//! through cancelable events. Observers attach per entity and run in
//! registration order over a shared mutable event value: a later observer
//! sees flags set by an earlier one, and the flag values left after the
//! last observer decide the outcome.
//!
//! While an entity's observer list for one event kind runs, it is detached
//! from the world; an observer that subscribes the same entity and kind
//! mid-pass takes effect from the next raise. Cross-entity recursion (an
//! exit triggering the target room's enter) is unrestricted and rides the
//! call stack.

use gridfall_foundation::{Direction, Output, Result, TypeWriteOptions};

use crate::entity::EntityId;
use crate::world::World;

/// Shown when an entity has no distinguishing description of its own.
const DEFAULT_DESCRIPTION: &str = "I don't see anything special about it.";

/// The veto and messaging flags every cancelable event carries.
#[derive(Clone, Copy, Debug)]
pub struct CancelFlags {
    /// Set by an observer to veto the operation.
    pub cancel: bool,
    /// Whether the default cancel notice is shown on veto. Observers that
    /// narrate the refusal themselves turn this off.
    pub display_cancel_message: bool,
    /// Whether the default success narration runs when not vetoed.
    pub display_success_message: bool,
}

impl Default for CancelFlags {
    fn default() -> Self {
        Self {
            cancel: false,
            display_cancel_message: true,
            display_success_message: true,
        }
    }
}

/// A player is attempting to occupy a room.
pub struct EnterRoomEvent {
    /// The acting player entity.
    pub player: EntityId,
    /// The room being entered.
    pub room: EntityId,
    /// Veto and messaging flags.
    pub flags: CancelFlags,
}

impl EnterRoomEvent {
    fn new(player: EntityId, room: EntityId) -> Self {
        Self {
            player,
            room,
            flags: CancelFlags::default(),
        }
    }
}

/// A player is attempting to leave a room in a direction.
pub struct ExitRoomEvent {
    /// The acting player entity.
    pub player: EntityId,
    /// The room being left.
    pub room: EntityId,
    /// The direction of travel.
    pub direction: Direction,
    /// Veto and messaging flags.
    pub flags: CancelFlags,
}

impl ExitRoomEvent {
    fn new(player: EntityId, room: EntityId, direction: Direction) -> Self {
        Self {
            player,
            room,
            direction,
            flags: CancelFlags::default(),
        }
    }
}

/// A player is attempting to open or close an openable entity.
pub struct OpenEntityEvent {
    /// The acting player entity.
    pub player: EntityId,
    /// The entity being opened or closed.
    pub entity: EntityId,
    /// True for an open attempt, false for a close attempt.
    pub is_open_event: bool,
    /// Veto and messaging flags.
    pub flags: CancelFlags,
}

impl OpenEntityEvent {
    fn new(player: EntityId, entity: EntityId, is_open_event: bool) -> Self {
        Self {
            player,
            entity,
            is_open_event,
            flags: CancelFlags::default(),
        }
    }
}

/// A player is attempting to pick up an entity.
pub struct PickupEntityEvent {
    /// The acting player entity.
    pub player: EntityId,
    /// The entity being taken.
    pub entity: EntityId,
    /// Veto and messaging flags.
    pub flags: CancelFlags,
}

impl PickupEntityEvent {
    fn new(player: EntityId, entity: EntityId) -> Self {
        Self {
            player,
            entity,
            flags: CancelFlags::default(),
        }
    }
}

/// A player is traversing a portal. Notification only: the traversal
/// itself always succeeds, and the success narration defaults off because
/// the exit flow owns it.
pub struct UsePortalEvent {
    /// The acting player entity.
    pub player: EntityId,
    /// The portal being used.
    pub portal: EntityId,
    /// Veto and messaging flags.
    pub flags: CancelFlags,
}

impl UsePortalEvent {
    fn new(player: EntityId, portal: EntityId) -> Self {
        Self {
            player,
            portal,
            flags: CancelFlags {
                display_success_message: false,
                ..CancelFlags::default()
            },
        }
    }
}

/// An entity's description is about to be shown. Not cancelable; content
/// may adjust the base description and append additional text and hints.
pub struct RenderDescriptionEvent {
    /// The base description.
    pub description: String,
    /// Extra text shown below the description (container listings land
    /// here).
    pub additional_text: Option<String>,
    /// Hints shown last.
    pub hints: Option<String>,
}

impl RenderDescriptionEvent {
    fn new(description: Option<String>) -> Self {
        Self {
            description: description.unwrap_or_default(),
            additional_text: None,
            hints: None,
        }
    }

    /// Trims all values, substituting the default description when blank.
    pub fn trim(&mut self) {
        let trimmed = self.description.trim();
        self.description = if trimmed.is_empty() {
            DEFAULT_DESCRIPTION.to_string()
        } else {
            trimmed.to_string()
        };
        self.additional_text = self
            .additional_text
            .take()
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty());
        self.hints = self.hints.take().filter(|text| !text.trim().is_empty());
    }
}

/// Observer over [`EnterRoomEvent`].
pub type EnterObserver = Box<dyn FnMut(&mut World, &mut dyn Output, &mut EnterRoomEvent)>;
/// Observer over [`ExitRoomEvent`].
pub type ExitObserver = Box<dyn FnMut(&mut World, &mut dyn Output, &mut ExitRoomEvent)>;
/// Observer over [`OpenEntityEvent`].
pub type OpenObserver = Box<dyn FnMut(&mut World, &mut dyn Output, &mut OpenEntityEvent)>;
/// Observer over [`PickupEntityEvent`].
pub type PickupObserver = Box<dyn FnMut(&mut World, &mut dyn Output, &mut PickupEntityEvent)>;
/// Observer over [`UsePortalEvent`].
pub type UsePortalObserver = Box<dyn FnMut(&mut World, &mut dyn Output, &mut UsePortalEvent)>;
/// Observer over [`RenderDescriptionEvent`].
pub type RenderObserver = Box<dyn FnMut(&mut World, &mut dyn Output, &mut RenderDescriptionEvent)>;

/// Per-entity observer lists, one per event kind, in registration order.
#[derive(Default)]
pub(crate) struct ObserverSet {
    enter: Vec<EnterObserver>,
    exit: Vec<ExitObserver>,
    open: Vec<OpenObserver>,
    pickup: Vec<PickupObserver>,
    use_portal: Vec<UsePortalObserver>,
    render: Vec<RenderObserver>,
}

/// Detaches an entity's observer list for one event kind, runs it over the
/// event, then reinstates it ahead of any observers registered mid-pass.
macro_rules! raise {
    ($world:expr, $entity:expr, $field:ident, $out:expr, $event:expr) => {{
        let mut observers = $world
            .observers
            .get_mut(&$entity)
            .map(|set| std::mem::take(&mut set.$field))
            .unwrap_or_default();
        for observer in observers.iter_mut() {
            observer(&mut *$world, &mut *$out, $event);
        }
        let slot = &mut $world.observers.entry($entity).or_default().$field;
        let added = std::mem::take(slot);
        *slot = observers;
        slot.extend(added);
    }};
}

impl World {
    /// Subscribes an observer to a room's enter event.
    pub fn observe_enter(
        &mut self,
        room: EntityId,
        observer: impl FnMut(&mut World, &mut dyn Output, &mut EnterRoomEvent) + 'static,
    ) {
        self.observers
            .entry(room)
            .or_default()
            .enter
            .push(Box::new(observer));
    }

    /// Subscribes an observer to a room's exit event.
    pub fn observe_exit(
        &mut self,
        room: EntityId,
        observer: impl FnMut(&mut World, &mut dyn Output, &mut ExitRoomEvent) + 'static,
    ) {
        self.observers
            .entry(room)
            .or_default()
            .exit
            .push(Box::new(observer));
    }

    /// Subscribes an observer to an entity's open/close event.
    pub fn observe_open(
        &mut self,
        entity: EntityId,
        observer: impl FnMut(&mut World, &mut dyn Output, &mut OpenEntityEvent) + 'static,
    ) {
        self.observers
            .entry(entity)
            .or_default()
            .open
            .push(Box::new(observer));
    }

    /// Subscribes an observer to an entity's pickup event.
    pub fn observe_pickup(
        &mut self,
        entity: EntityId,
        observer: impl FnMut(&mut World, &mut dyn Output, &mut PickupEntityEvent) + 'static,
    ) {
        self.observers
            .entry(entity)
            .or_default()
            .pickup
            .push(Box::new(observer));
    }

    /// Subscribes an observer to a portal's use event.
    pub fn observe_use_portal(
        &mut self,
        portal: EntityId,
        observer: impl FnMut(&mut World, &mut dyn Output, &mut UsePortalEvent) + 'static,
    ) {
        self.observers
            .entry(portal)
            .or_default()
            .use_portal
            .push(Box::new(observer));
    }

    /// Subscribes an observer to an entity's render-description event.
    pub fn observe_render(
        &mut self,
        entity: EntityId,
        observer: impl FnMut(&mut World, &mut dyn Output, &mut RenderDescriptionEvent) + 'static,
    ) {
        self.observers
            .entry(entity)
            .or_default()
            .render
            .push(Box::new(observer));
    }

    /// Runs the enter protocol against a room.
    ///
    /// Raises the enter event; a veto shows the default refusal (unless
    /// suppressed) and reports failure. Success auto-renders the room
    /// description (unless suppressed). Only on success may the caller
    /// update the player's current room.
    pub fn enter_room(&mut self, room: EntityId, player: EntityId, out: &mut dyn Output) -> bool {
        let mut event = EnterRoomEvent::new(player, room);
        raise!(self, room, enter, out, &mut event);

        if event.flags.cancel {
            if event.flags.display_cancel_message {
                out.write("You cannot enter the destination area.\n");
            }
            return false;
        }
        if event.flags.display_success_message {
            self.display_description(room, out);
        }
        true
    }

    /// Runs the exit protocol: leave `room` in `direction`.
    ///
    /// Raises the exit event; if not vetoed, looks up the portal for the
    /// direction, announces its use, and runs the enter protocol against
    /// the target. Returns the new room only when the whole chain succeeds.
    /// A missing portal, a veto, or a refused entry all leave the player
    /// where they were.
    pub fn exit_room(
        &mut self,
        room: EntityId,
        player: EntityId,
        direction: Direction,
        out: &mut dyn Output,
    ) -> Option<EntityId> {
        let mut event = ExitRoomEvent::new(player, room, direction);
        raise!(self, room, exit, out, &mut event);

        let mut display_cancel = event.flags.display_cancel_message;

        if !event.flags.cancel {
            // Past the veto: a missing portal always explains itself.
            display_cancel = true;

            if let Some(portal) = self.portal(room, direction) {
                // The enter step narrates its own refusals from here on.
                display_cancel = false;

                if self.use_portal(portal, player, out) {
                    if event.flags.display_success_message {
                        out.write(&format!("You go {}.\n\n", direction.name()));
                    }
                    if let Some(target) = self.entity(portal).portal_target() {
                        if self.enter_room(target, player, out) {
                            return Some(target);
                        }
                    }
                }
            }
        }

        if display_cancel {
            out.write("You cannot go that way.\n\n");
        }
        None
    }

    /// Announces a portal traversal. Always succeeds; the veto point for
    /// movement is the target room's enter step.
    pub fn use_portal(&mut self, portal: EntityId, player: EntityId, out: &mut dyn Output) -> bool {
        let mut event = UsePortalEvent::new(player, portal);
        raise!(self, portal, use_portal, out, &mut event);
        true
    }

    /// Runs the open/close protocol against an openable entity.
    ///
    /// A request matching the current state is a no-op with an
    /// "already open"/"already closed" notice. Otherwise the event is
    /// raised; if not vetoed the state flips. Returns whether the state
    /// changed. Calling this on a non-openable entity is a quiet no-op;
    /// commands are expected to have screened the target first.
    pub fn open_entity(
        &mut self,
        entity: EntityId,
        player: EntityId,
        open: bool,
        out: &mut dyn Output,
    ) -> bool {
        let Some(is_open) = self.entity(entity).is_open() else {
            return false;
        };
        if is_open == open {
            out.write(if is_open {
                "It's already open.\n"
            } else {
                "It's already closed.\n"
            });
            return false;
        }

        let mut event = OpenEntityEvent::new(player, entity, open);
        raise!(self, entity, open, out, &mut event);

        if event.flags.cancel {
            if event.flags.display_cancel_message {
                out.write(if open {
                    "It failed to open.\n"
                } else {
                    "It failed to close.\n"
                });
            }
            return false;
        }
        if event.flags.display_success_message {
            out.write(if open { "Opened.\n" } else { "Closed.\n" });
        }
        if let Some(container) = self.entity_mut(entity).container_mut() {
            container.open = Some(open);
        }
        true
    }

    /// Runs the pickup protocol: move `entity` out of `from` into `into`.
    ///
    /// # Errors
    ///
    /// Fails only on world-structure violations (`from` or `into` not a
    /// container); vetoes are reported through the return value.
    pub fn pickup_entity(
        &mut self,
        entity: EntityId,
        player: EntityId,
        from: EntityId,
        into: EntityId,
        out: &mut dyn Output,
    ) -> Result<bool> {
        let mut event = PickupEntityEvent::new(player, entity);
        raise!(self, entity, pickup, out, &mut event);

        if event.flags.cancel {
            if event.flags.display_cancel_message {
                out.write("You cannot take that.\n");
            }
            return Ok(false);
        }
        self.detach(from, entity)?;
        self.attach(into, entity)?;
        if event.flags.display_success_message {
            out.write("Taken.\n");
        }
        Ok(true)
    }

    /// Renders an entity's description to the output.
    ///
    /// Containers append their child-name listing (or their empty text); a
    /// closed openable container replaces all of that with a fixed closed
    /// notice and skips the render observers entirely. Otherwise observers
    /// run after the container base text, so they can inspect or overwrite
    /// it.
    pub fn display_description(&mut self, entity: EntityId, out: &mut dyn Output) {
        let mut event = RenderDescriptionEvent::new(self.entity(entity).description.clone());

        let closed_override = self.render_base(entity, &mut event);
        if !closed_override {
            raise!(self, entity, render, out, &mut event);
        }

        event.trim();
        out.type_write(
            &format!("{}\n", event.description),
            &TypeWriteOptions::default(),
        );
        if let Some(text) = &event.additional_text {
            out.write(&format!("\n{text}\n"));
        }
        if let Some(text) = &event.hints {
            out.write(&format!("\n{text}\n"));
        }
    }

    /// Fills in the container base text. Returns true when a closed
    /// openable container overrode the rendering.
    fn render_base(&self, entity: EntityId, event: &mut RenderDescriptionEvent) -> bool {
        let Some(container) = self.entity(entity).container() else {
            return false;
        };
        if container.open == Some(false) {
            event.additional_text = Some("It's closed.".to_string());
            return true;
        }
        if container.items.is_empty() {
            if let Some(text) = &container.empty_text {
                if !text.trim().is_empty() {
                    event.additional_text = Some(text.clone());
                }
            }
        } else {
            let names: Vec<&str> = container
                .items
                .iter()
                .map(|&child| self.entity(child).name())
                .collect();
            event.additional_text = Some(format!("{}\n\n{}", container.header, names.join(", ")));
        }
        false
    }
}
