//! The help surface: listing order, system gating, per-command text.

use crate::support::{fixture, run};

#[test]
fn help_lists_non_system_commands_sorted() {
    let mut fx = fixture();
    run(&mut fx, "help");
    let text = fx.output.text();

    let mut positions = Vec::new();
    for name in ["close", "exits", "go", "help", "inventory", "look", "open", "quit", "take"] {
        let at = text.find(&format!("{name}\n")).unwrap_or_else(|| panic!("'{name}' missing"));
        positions.push(at);
    }
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted, "listing is not name-sorted");
}

#[test]
fn help_hides_system_commands_by_default() {
    let mut fx = fixture();
    run(&mut fx, "help");
    let text = fx.output.text();
    assert!(!text.contains("message"));
    assert!(!text.contains("delay"));
    assert!(!text.contains("devmode"));
}

#[test]
fn dev_mode_reveals_system_commands_marked() {
    let mut fx = fixture();
    run(&mut fx, "devmode");
    assert!(fx.output.contains("Developer mode enabled."));
    fx.output.clear();

    run(&mut fx, "help");
    assert!(fx.output.contains("message (!)"));
    assert!(fx.output.contains("delay (!)"));
    assert!(fx.output.contains("devmode (!)"));
}

#[test]
fn help_with_name_shows_that_commands_text() {
    let mut fx = fixture();
    run(&mut fx, "help go");
    assert!(fx.output.contains("Usage: go {direction}"));
}

#[test]
fn help_with_unknown_name_is_a_notice() {
    let mut fx = fixture();
    run(&mut fx, "help warp");
    assert!(fx.output.contains("Unknown command 'warp'."));
}

#[test]
fn devmode_toggles_off_again() {
    let mut fx = fixture();
    run(&mut fx, "devmode");
    run(&mut fx, "devmode");
    assert!(fx.output.contains("Developer mode disabled."));
    assert!(!fx.session.dev_mode());
}
