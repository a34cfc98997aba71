//! Dispatcher resolution: exact, unique prefix, synthetic notices.

use gridfall_command::{CommandRegistry, tokenize};

use crate::support::{Fixture, ProbeCommand, fixture, fixture_with_registry, run};

fn probe_fixture() -> (Fixture, std::rc::Rc<std::cell::RefCell<Vec<Vec<String>>>>) {
    let mut registry = CommandRegistry::new();
    let (probe, calls) = ProbeCommand::new("probe");
    registry.register(probe).unwrap();
    (fixture_with_registry(registry), calls)
}

#[test]
fn empty_input_runs_the_default_notice() {
    let mut fx = fixture();
    run(&mut fx, "   ");
    assert!(fx.output.contains("Enter 'help' for a list of available commands."));
}

#[test]
fn unknown_command_is_a_notice_not_a_crash() {
    let mut fx = fixture();
    run(&mut fx, "xyzzy");
    assert!(fx.output.contains("Unknown command 'xyzzy'."));
}

#[test]
fn unique_prefix_selects_the_command() {
    let mut fx = fixture();
    // Only 'look' starts with 'lo' in the built-in set.
    run(&mut fx, "lo");
    assert!(fx.output.contains("Test chamber") || fx.output.contains("I don't see anything"));
}

#[test]
fn ambiguous_prefix_falls_back_to_unknown() {
    let mut fx = fixture();
    // Both 'delay' and 'devmode' start with 'd'.
    run(&mut fx, "d 100");
    assert!(fx.output.contains("Unknown command 'd'."));
}

#[test]
fn prefix_fallback_is_case_insensitive() {
    let mut fx = fixture();
    run(&mut fx, "LO");
    assert!(!fx.output.contains("Unknown command"));
}

#[test]
fn exact_match_beats_prefix_scan() {
    let mut registry = CommandRegistry::new();
    let (exact, exact_calls) = ProbeCommand::new("go");
    let (longer, longer_calls) = ProbeCommand::new("gossip");
    registry.register(exact).unwrap();
    registry.register(longer).unwrap();
    let mut fx = fixture_with_registry(registry);

    run(&mut fx, "go north");
    assert_eq!(exact_calls.borrow().len(), 1);
    assert!(longer_calls.borrow().is_empty());
}

#[test]
fn args_zero_is_the_typed_name() {
    let (mut fx, calls) = probe_fixture();
    // Resolution goes through the prefix; the args still carry what was
    // typed.
    run(&mut fx, "pro extra arg");
    let calls = calls.borrow();
    assert_eq!(calls[0], ["pro", "extra", "arg"]);
}

#[test]
fn full_token_sequence_is_passed_through() {
    let (mut fx, calls) = probe_fixture();
    run(&mut fx, r#"probe "two words" tail"#);
    assert_eq!(calls.borrow()[0], ["probe", "two words", "tail"]);
}

#[test]
fn resolution_is_total() {
    let fx = fixture();
    // Every token sequence resolves to some command instance.
    let command = fx.dispatcher.resolve(&tokenize("definitely-not-a-command"));
    assert_eq!(command.meta().name(), "message");
}
