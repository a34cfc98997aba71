//! Shared helpers for command-layer tests.

use std::cell::RefCell;
use std::rc::Rc;

use gridfall_command::builtin::builtin_factories;
use gridfall_command::{Command, CommandMeta, CommandRegistry, Dispatcher, Session, tokenize};
use gridfall_foundation::{MemoryOutput, Output, Result};
use gridfall_world::{EntityDef, Player, World};

/// A throwaway game: one room, the built-in commands, recording output.
pub struct Fixture {
    pub session: Session,
    pub dispatcher: Dispatcher,
    pub output: MemoryOutput,
}

/// Builds a fixture over the given registry.
pub fn fixture_with_registry(registry: CommandRegistry) -> Fixture {
    let registry = Rc::new(registry);
    let dispatcher = Dispatcher::new(Rc::clone(&registry));
    let output = MemoryOutput::new();

    let mut world = World::new();
    let room = world.spawn(EntityDef::room("Test chamber")).unwrap();
    let mut boxed: Box<dyn Output> = Box::new(output.clone());
    let player = Player::initialize(&mut world, room, boxed.as_mut()).unwrap();
    let session = Session::new(world, player, registry, boxed);

    // Drop the initial room narration; tests care about what comes next.
    output.clear();
    Fixture {
        session,
        dispatcher,
        output,
    }
}

/// Builds a fixture over the built-in command set.
pub fn fixture() -> Fixture {
    fixture_with_registry(CommandRegistry::from_factories(&builtin_factories()).unwrap())
}

/// Feeds one input line through tokenize, dispatch, and execute.
pub fn run(fixture: &mut Fixture, line: &str) {
    let tokens = tokenize(line);
    let command = fixture.dispatcher.resolve(&tokens);
    command.execute(&mut fixture.session, &tokens).unwrap();
}

/// A test command that records the argument vectors it was invoked with.
pub struct ProbeCommand {
    meta: CommandMeta,
    pub calls: Rc<RefCell<Vec<Vec<String>>>>,
}

impl ProbeCommand {
    pub fn new(name: &str) -> (Rc<dyn Command>, Rc<RefCell<Vec<Vec<String>>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let command: Rc<dyn Command> = Rc::new(Self {
            meta: CommandMeta::named(name),
            calls: Rc::clone(&calls),
        });
        (command, calls)
    }
}

impl Command for ProbeCommand {
    fn meta(&self) -> &CommandMeta {
        &self.meta
    }

    fn help(&self) -> String {
        format!("Probe command '{}'.", self.meta.name())
    }

    fn execute(&self, _session: &mut Session, args: &[String]) -> Result<()> {
        self.calls.borrow_mut().push(args.to_vec());
        Ok(())
    }
}
