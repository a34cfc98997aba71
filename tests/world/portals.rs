//! Portal registration rules and exit visibility.

use gridfall_foundation::{Direction, ErrorKind};
use gridfall_world::{EntityDef, EntityId, World};

fn two_rooms() -> (World, EntityId, EntityId) {
    let mut world = World::new();
    let a = world.spawn(EntityDef::room("Gallery")).unwrap();
    let b = world.spawn(EntityDef::room("Landing")).unwrap();
    (world, a, b)
}

#[test]
fn second_portal_for_a_direction_fails() {
    let (mut world, a, b) = two_rooms();
    let first = world.spawn(EntityDef::portal("arch", b)).unwrap();
    let second = world.spawn(EntityDef::portal("grate", b)).unwrap();
    world.set_portal(a, Direction::North, first).unwrap();
    let err = world.set_portal(a, Direction::North, second).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DuplicatePortal { .. }));
}

#[test]
fn none_direction_always_fails() {
    let (mut world, a, b) = two_rooms();
    let portal = world.spawn(EntityDef::portal("arch", b)).unwrap();
    let err = world.set_portal(a, Direction::None, portal).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidDirection));
}

#[test]
fn none_direction_never_resolves() {
    let (world, a, _) = two_rooms();
    assert_eq!(world.portal(a, Direction::None), None);
}

#[test]
fn one_way_portals_are_legal() {
    let (mut world, a, b) = two_rooms();
    let portal = world.spawn(EntityDef::portal("chute", b)).unwrap();
    world.set_portal(a, Direction::Down, portal).unwrap();
    assert!(world.portal(a, Direction::Down).is_some());
    assert_eq!(world.portal(b, Direction::Up), None);
}

#[test]
fn mirror_supports_bidirectional_authoring() {
    let (mut world, a, b) = two_rooms();
    let out_portal = world.spawn(EntityDef::portal("stair up", b)).unwrap();
    let back_portal = world.spawn(EntityDef::portal("stair down", a)).unwrap();
    let direction = Direction::Up;
    world.set_portal(a, direction, out_portal).unwrap();
    world.set_portal(b, direction.mirror(), back_portal).unwrap();
    assert!(world.portal(b, Direction::Down).is_some());
}

#[test]
fn invisible_portals_are_excluded_from_exits_but_still_work() {
    let (mut world, a, b) = two_rooms();
    let hidden = world
        .spawn(EntityDef::portal("crack", b).invisible())
        .unwrap();
    world.set_portal(a, Direction::West, hidden).unwrap();

    assert!(world.visible_exits(a).is_empty());
    // The link itself is intact; visibility only affects listings.
    assert_eq!(world.portal(a, Direction::West), Some(hidden));
}

#[test]
fn exits_list_in_direction_order() {
    let (mut world, a, b) = two_rooms();
    let south = world.spawn(EntityDef::portal("door", b)).unwrap();
    let north = world.spawn(EntityDef::portal("arch", b)).unwrap();
    world.set_portal(a, Direction::South, south).unwrap();
    world.set_portal(a, Direction::North, north).unwrap();

    let exits = world.visible_exits(a);
    assert_eq!(
        exits.iter().map(|&(d, _)| d).collect::<Vec<_>>(),
        [Direction::North, Direction::South]
    );
}

#[test]
fn removed_portals_can_be_rewired() {
    let (mut world, a, b) = two_rooms();
    let portal = world.spawn(EntityDef::portal("arch", b)).unwrap();
    world.set_portal(a, Direction::East, portal).unwrap();
    assert!(world.remove_portal(a, Direction::East).unwrap());
    assert!(!world.remove_portal(a, Direction::East).unwrap());
    world.set_portal(a, Direction::East, portal).unwrap();
}
