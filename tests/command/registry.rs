//! Registry rules: lowercase identity, uniqueness, exact resolution.

use gridfall_command::CommandRegistry;
use gridfall_command::builtin::builtin_factories;

use crate::support::ProbeCommand;

#[test]
fn registered_names_are_lowercase() {
    let registry = CommandRegistry::from_factories(&builtin_factories()).unwrap();
    for command in registry.commands() {
        let name = command.meta().name();
        assert_eq!(name, name.to_lowercase());
    }
}

#[test]
fn duplicate_registration_fails_case_insensitively() {
    let mut registry = CommandRegistry::new();
    let (first, _) = ProbeCommand::new("scan");
    let (second, _) = ProbeCommand::new("SCAN");
    registry.register(first).unwrap();
    assert!(registry.register(second).is_err());
}

#[test]
fn resolve_is_exact_only() {
    let registry = CommandRegistry::from_factories(&builtin_factories()).unwrap();
    assert!(registry.resolve("look").is_some());
    assert!(registry.resolve("LOOK").is_some());
    // Prefixes are a dispatcher concern.
    assert!(registry.resolve("loo").is_none());
}
