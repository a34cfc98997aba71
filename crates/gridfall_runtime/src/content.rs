//! The demo content set: two linked rooms.
//!
//! Kept deliberately small; it exists to exercise the full surface (intro
//! narration, portals, an openable container, takeable items, hints) and
//! to show the authoring shape for real content.

use gridfall_foundation::{Direction, Result, TypeWriteOptions};
use gridfall_world::{EntityDef, EntityId, RoomBlueprint, RoomKindId, World};

/// The distinguished start room kind.
pub const START: RoomKindId = RoomKindId::new("start");

/// The supply alcove north of the start.
pub const SUPPLY_CACHE: RoomKindId = RoomKindId::new("supply-cache");

/// The demo world's blueprint table, in build order.
#[must_use]
pub fn blueprints() -> Vec<RoomBlueprint> {
    vec![
        RoomBlueprint {
            kind: START,
            construct: construct_start,
            populate: populate_start,
        },
        RoomBlueprint {
            kind: SUPPLY_CACHE,
            construct: construct_supply_cache,
            populate: populate_supply_cache,
        },
    ]
}

fn construct_start(world: &mut World) -> Result<EntityId> {
    world.spawn(EntityDef::room("Unknown location").description(
        "Light pours in from every angle and swallows the edges of the floor. \
         If you squint, something blurry hangs in the air to the north.",
    ))
}

fn populate_start(world: &mut World, room: EntityId) -> Result<()> {
    let cache = world.require_room(SUPPLY_CACHE)?;
    let shape = world.spawn(
        EntityDef::portal("blurry shape", cache)
            .description("It's blurry. Go north to get a closer look."),
    )?;
    world.attach(room, shape)?;
    world.set_portal(room, Direction::North, shape)?;

    // One-shot intro, played on the first entry only.
    let mut intro_shown = false;
    world.observe_enter(room, move |_, out, event| {
        if intro_shown {
            return;
        }
        intro_shown = true;
        event.flags.display_success_message = false;

        let slow = TypeWriteOptions::default().with_pause(800);
        out.type_write("Cold floor. White light.\n", &slow);
        out.type_write(
            "You do not remember standing up, yet here you are, standing.\n",
            &slow,
        );
        out.type_write(
            "Somewhere below, machinery settles into a slow, patient thump.\n\n",
            &slow,
        );
        out.write("Enter 'help' for a list of available commands.\n");
    });
    Ok(())
}

fn construct_supply_cache(world: &mut World) -> Result<EntityId> {
    world.spawn(EntityDef::room("Supply alcove").description(
        "The glare thins out here. On the ground sits a crate with a stenciled lid.",
    ))
}

fn populate_supply_cache(world: &mut World, room: EntityId) -> Result<()> {
    let start = world.require_room(START)?;
    let way_back = world.spawn(
        EntityDef::portal("glare", start)
            .description("The glare you came out of. It leads back south."),
    )?;
    world.attach(room, way_back)?;
    world.set_portal(room, Direction::North.mirror(), way_back)?;

    let crate_box = world.spawn(
        EntityDef::container("crate with stenciled lid")
            .description("The stencil reads: 'SUPPLY CACHE 07'.")
            .openable(false)
            .empty_text("It's empty."),
    )?;
    world.attach(room, crate_box)?;

    let sandals = world.spawn(
        EntityDef::object("sandals")
            .description("Thin foam sandals, one size fits nobody.")
            .takeable(),
    )?;
    world.attach(crate_box, sandals)?;

    let note = world.spawn(
        EntityDef::object("note")
            .description("It says: 'for emergencies only'.")
            .takeable(),
    )?;
    world.attach(crate_box, note)?;

    world.observe_open(crate_box, |_, out, event| {
        if event.is_open_event {
            out.type_write("You pry the crate open.\n\n", &TypeWriteOptions::default());
            out.write("Hint: look at the crate to see its contents.\n");
            event.flags.display_success_message = false;
        }
    });

    world.observe_render(crate_box, move |world, _, event| {
        if world.entity(crate_box).is_open() == Some(true) {
            event.hints = Some(
                "Hint: interact with items inside a container by naming the container first.\n\
                 For example 'look crate note' reads the note inside the crate."
                    .to_string(),
            );
        }
    });

    world.observe_render(room, |_, _, event| {
        event.hints = Some(
            "Hint: you don't need to type an item's full name.\n\
             'look c' is enough when only one name here starts with 'c'."
                .to_string(),
        );
    });
    Ok(())
}
