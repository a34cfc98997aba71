//! The canonical two-room scenario driven through dispatch.

use std::rc::Rc;

use gridfall_command::builtin::builtin_factories;
use gridfall_command::{CommandRegistry, Dispatcher, Session, tokenize};
use gridfall_foundation::{Direction, MemoryOutput, Output};
use gridfall_world::{EntityDef, Player, World};

struct Scenario {
    session: Session,
    dispatcher: Dispatcher,
    output: MemoryOutput,
}

/// Room A with a north portal to Room B; a plain (non-openable) box in A.
fn scenario() -> Scenario {
    let registry = Rc::new(CommandRegistry::from_factories(&builtin_factories()).unwrap());
    let dispatcher = Dispatcher::new(Rc::clone(&registry));
    let output = MemoryOutput::new();

    let mut world = World::new();
    let room_a = world.spawn(EntityDef::room("Room A")).unwrap();
    let room_b = world.spawn(EntityDef::room("Room B")).unwrap();
    let portal = world.spawn(EntityDef::portal("iron gate", room_b)).unwrap();
    world.set_portal(room_a, Direction::North, portal).unwrap();
    let pedestal = world.spawn(EntityDef::object("box")).unwrap();
    world.attach(room_a, pedestal).unwrap();

    let mut boxed: Box<dyn Output> = Box::new(output.clone());
    let player = Player::initialize(&mut world, room_a, boxed.as_mut()).unwrap();
    let session = Session::new(world, player, registry, boxed);
    output.clear();

    Scenario {
        session,
        dispatcher,
        output,
    }
}

impl Scenario {
    fn run(&mut self, line: &str) {
        let tokens = tokenize(line);
        let command = self.dispatcher.resolve(&tokens);
        command.execute(&mut self.session, &tokens).unwrap();
    }

    fn room_name(&self) -> &str {
        self.session.current_room_name()
    }
}

#[test]
fn go_n_moves_to_room_b() {
    let mut s = scenario();
    s.run("go n");
    assert_eq!(s.room_name(), "Room B");
    assert!(s.output.contains("You go north."));
}

#[test]
fn go_s_without_portal_stays_and_explains() {
    let mut s = scenario();
    s.run("go n");
    s.output.clear();
    s.run("go s");
    assert_eq!(s.room_name(), "Room B");
    assert!(s.output.contains("You cannot go that way."));
}

#[test]
fn open_on_a_plain_entity_changes_nothing() {
    let mut s = scenario();
    s.output.clear();
    s.run("open box");
    assert!(s.output.contains("That cannot be opened.\n"));
    assert_eq!(s.room_name(), "Room A");
}

#[test]
fn go_accepts_direction_prefixes() {
    let mut s = scenario();
    s.run("go nort");
    assert_eq!(s.room_name(), "Room B");
}

#[test]
fn go_falls_back_to_portal_names() {
    let mut s = scenario();
    // 'iron' is no direction, but exactly one visible portal starts with
    // it.
    s.run("go iron");
    assert_eq!(s.room_name(), "Room B");
}

#[test]
fn go_with_unknown_word_cannot_go() {
    let mut s = scenario();
    s.run("go sideways");
    assert_eq!(s.room_name(), "Room A");
    assert!(s.output.contains("You cannot go that way."));
}

#[test]
fn go_without_argument_is_a_notice() {
    let mut s = scenario();
    s.run("go");
    assert!(s.output.contains("Got nowhere to go."));
    assert_eq!(s.room_name(), "Room A");
}

#[test]
fn exits_lists_the_north_door() {
    let mut s = scenario();
    s.run("exits");
    assert!(s.output.contains("The following exits are available:"));
    assert!(s.output.contains("North => Room B"));
}

#[test]
fn exits_in_a_dead_end() {
    let mut s = scenario();
    s.run("go n");
    s.output.clear();
    s.run("exits");
    assert!(s.output.contains("No exits found."));
}

#[test]
fn help_never_lists_system_commands_without_dev_mode() {
    let mut s = scenario();
    s.run("help");
    let text = s.output.text();
    assert!(!text.contains("message"));
    assert!(!text.contains("(!)"));
}

#[test]
fn quit_stops_the_session() {
    let mut s = scenario();
    assert!(s.session.running());
    s.run("quit");
    assert!(!s.session.running());
}

#[test]
fn message_echoes_its_arguments() {
    let mut s = scenario();
    s.run(r#"message "all is well" here"#);
    assert!(s.output.contains("all is well here"));
}

#[test]
fn delay_with_a_bad_number_is_a_notice() {
    let mut s = scenario();
    s.run("delay soon");
    assert!(s.output.contains("The argument 'soon' is not a number."));
    assert!(s.output.delays().is_empty());
}

#[test]
fn delay_forwards_to_the_collaborator() {
    let mut s = scenario();
    s.run("delay 250");
    assert_eq!(s.output.delays(), vec![250]);
}
