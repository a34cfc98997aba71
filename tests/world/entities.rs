//! Entity identity and the stable-id index.

use gridfall_foundation::ErrorKind;
use gridfall_world::{EntityDef, World};

#[test]
fn stable_id_is_distinct_from_display_name() {
    let mut world = World::new();
    let lamp = world.spawn(EntityDef::object("brass lamp")).unwrap();
    let entity = world.entity(lamp);
    assert_eq!(entity.name(), "brass lamp");
    assert_ne!(entity.id(), entity.name());
    assert_eq!(world.find_entity(entity.id()), Some(lamp));
}

#[test]
fn duplicate_stable_ids_are_fatal() {
    let mut world = World::new();
    world
        .spawn(EntityDef::object("first").stable_id("the-one"))
        .unwrap();
    let err = world
        .spawn(EntityDef::object("second").stable_id("the-one"))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DuplicateEntityId { .. }));
}

#[test]
fn names_with_quotes_or_periods_are_rejected() {
    let mut world = World::new();
    assert!(world.spawn(EntityDef::object(r#"a "quoted" thing"#)).is_err());
    assert!(world.spawn(EntityDef::object("etc.")).is_err());
}

#[test]
fn id_changes_are_tracked_in_the_index() {
    let mut world = World::new();
    let lamp = world
        .spawn(EntityDef::object("lamp").stable_id("lamp-01"))
        .unwrap();
    world.set_entity_id(lamp, "lamp-02").unwrap();
    assert_eq!(world.find_entity("lamp-02"), Some(lamp));
    assert_eq!(world.find_entity("lamp-01"), None);
    assert_eq!(world.entity(lamp).id(), "lamp-02");
}

#[test]
fn defaults_match_the_model() {
    let mut world = World::new();
    let thing = world.spawn(EntityDef::object("thing")).unwrap();
    let entity = world.entity(thing);
    assert!(entity.is_visible());
    assert!(!entity.is_takeable());
    assert_eq!(entity.description(), None);
    assert!(entity.container().is_none());
}

#[test]
fn flags_can_be_authored() {
    let mut world = World::new();
    let thing = world
        .spawn(EntityDef::object("keepsake").invisible().takeable())
        .unwrap();
    assert!(!world.entity(thing).is_visible());
    assert!(world.entity(thing).is_takeable());
}
