//! The selector-resolution policy.

use gridfall_foundation::MemoryOutput;
use gridfall_world::{EntityDef, EntityId, World};

fn room_with(names: &[&str]) -> (World, EntityId) {
    let mut world = World::new();
    let room = world.spawn(EntityDef::room("Storeroom")).unwrap();
    for name in names {
        let item = world.spawn(EntityDef::object(*name)).unwrap();
        world.attach(room, item).unwrap();
    }
    (world, room)
}

#[test]
fn ambiguous_prefix_resolves_deterministically_to_not_found() {
    // The documented policy: multiple children sharing a prefix behave
    // exactly like zero matches, never a crash.
    let (world, room) = room_with(&["box", "bottle"]);
    let mut out = MemoryOutput::new();
    let found = world.locate_entity(room, &["b"], &mut out, false);
    assert_eq!(found, None);
    assert!(out.contains("Unable to locate the item 'b'."));
}

#[test]
fn unique_prefix_descends() {
    let (world, room) = room_with(&["box", "lantern"]);
    let mut out = MemoryOutput::new();
    let found = world.locate_entity(room, &["b"], &mut out, false);
    assert_eq!(found.map(|id| world.entity(id).name()), Some("box"));
}

#[test]
fn segments_are_matched_case_insensitively() {
    let (world, room) = room_with(&["Box"]);
    let mut out = MemoryOutput::new();
    assert!(world.locate_entity(room, &["bOx"], &mut out, false).is_some());
}

#[test]
fn nested_selectors_descend_containers() {
    let mut world = World::new();
    let room = world.spawn(EntityDef::room("Storeroom")).unwrap();
    let chest = world.spawn(EntityDef::container("chest")).unwrap();
    let pouch = world.spawn(EntityDef::container("pouch")).unwrap();
    let coin = world.spawn(EntityDef::object("coin")).unwrap();
    world.attach(room, chest).unwrap();
    world.attach(chest, pouch).unwrap();
    world.attach(pouch, coin).unwrap();

    let mut out = MemoryOutput::new();
    let found = world.locate_entity(room, &["chest", "pouch", "coin"], &mut out, false);
    assert_eq!(found, Some(coin));
}

#[test]
fn non_container_mid_path_names_the_offender() {
    let (world, room) = room_with(&["statue"]);
    let mut out = MemoryOutput::new();
    let found = world.locate_entity(room, &["statue", "head"], &mut out, false);
    assert_eq!(found, None);
    assert!(out.contains("The item 'statue' is not a container."));
}

#[test]
fn failure_leaves_no_trace_beyond_the_notice() {
    let (world, room) = room_with(&["box", "bottle"]);
    let mut out = MemoryOutput::new();
    world.locate_entity(room, &["b"], &mut out, false);
    // State unchanged: both children still present and findable exactly.
    assert!(world.locate_entity(room, &["box"], &mut out, false).is_some());
    assert!(world.locate_entity(room, &["bottle"], &mut out, false).is_some());
}
