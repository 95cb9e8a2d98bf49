//! Integration tests for pyeveryday-core

use pretty_assertions::assert_eq;
use pyeveryday_core::history::SUBMIT_SUCCESS;
use pyeveryday_core::*;
use rstest::rstest;

fn started_controller() -> LandingController {
    let mut controller = LandingController::new(LandingConfig::new().with_seed(2025));
    controller.start();
    controller
}

/// The active category advances by exactly one per rotation and wraps to zero
#[test]
fn test_active_category_cycles_in_bounds() {
    let mut controller = started_controller();
    let interval = controller.config().rotate_interval_ms;

    for step in 1..=(CATEGORIES.len() * 3) {
        let before = controller.active_index();
        controller.advance(interval);
        let after = controller.active_index();

        assert!(after < CATEGORIES.len());
        assert_eq!(after, (before + 1) % CATEGORIES.len(), "step {step}");
    }
    assert_eq!(controller.active_index(), 0);
}

/// Rotation ignores user input
#[test]
fn test_rotation_is_independent_of_input() {
    let mut controller = started_controller();
    controller.select_category(3);
    controller.hover_category(Some(5));
    controller.set_terminal_input("ls");
    controller.submit_terminal();

    controller.advance(4000);
    assert_eq!(controller.active_index(), 1);
    assert_eq!(controller.command_index(), 1);
}

/// Typed text grows one character at a time up to the full command
#[test]
fn test_typed_text_grows_to_command() {
    let mut controller = started_controller();
    let command = controller.current_command();
    let mut lengths = Vec::new();

    while controller.clock_ms() < 3900 {
        controller.advance(10);
        lengths.push(controller.typed_text().len());
    }

    assert!(lengths.windows(2).all(|w| w[0] <= w[1]));
    assert!(lengths.iter().all(|len| *len <= command.len()));
    assert_eq!(controller.typed_text(), command);
    assert!(command.starts_with(controller.typed_text()));
}

/// History only grows on explicit actions and only shrinks on reset
#[test]
fn test_history_grows_only_on_actions() {
    let mut controller = started_controller();

    controller.advance(60_000);
    controller.scrolled(5000.0, 900.0);
    controller.pointer_moved(10.0, 10.0);
    controller.select_category(0);
    assert!(controller.history().is_empty());

    controller.run_active_script(0);
    assert_eq!(controller.history().len(), 2);

    controller.run_category_script(0, 4);
    assert_eq!(controller.history().len(), 4);

    controller.set_terminal_input("   ");
    controller.submit_terminal();
    assert_eq!(controller.history().len(), 4);
    assert_eq!(controller.terminal_input(), "   ");

    controller.advance(60_000);
    assert_eq!(controller.history().len(), 4);

    controller.reset_history();
    assert!(controller.history().is_empty());
}

/// Submitting "hello" appends the echo and the success line and clears the field
#[test]
fn test_submit_hello() {
    let mut controller = started_controller();
    controller.set_terminal_input("hello");
    controller.submit_terminal();

    assert_eq!(controller.history().lines(), ["$ hello", SUBMIT_SUCCESS]);
    assert_eq!(SUBMIT_SUCCESS, "Command executed successfully! ✅");
    assert_eq!(controller.terminal_input(), "");
}

/// Selecting the selected category collapses it back to the truncated view
#[rstest]
#[case(0, 5)]
#[case(1, 5)]
#[case(2, 4)]
#[case(6, 2)]
fn test_select_toggles_expansion(#[case] index: usize, #[case] total: usize) {
    let mut controller = started_controller();
    let collapsed = total.min(3);
    assert_eq!(controller.visible_scripts(index).len(), collapsed);

    controller.select_category(index);
    assert_eq!(controller.selected_category(), Some(index));
    assert_eq!(controller.visible_scripts(index).len(), total);

    controller.select_category(index);
    assert_eq!(controller.selected_category(), None);
    assert_eq!(controller.visible_scripts(index).len(), collapsed);
}

/// Only one category is expanded at a time
#[test]
fn test_single_selection() {
    let mut controller = started_controller();
    controller.select_category(0);
    controller.select_category(1);
    assert_eq!(controller.selected_category(), Some(1));
    assert_eq!(controller.visible_scripts(0).len(), 3);

    controller.select_category(CATEGORIES.len());
    assert_eq!(controller.selected_category(), Some(1));
}

/// The hero chips run scripts of whichever category is active
#[test]
fn test_hero_chip_uses_active_category() {
    let mut controller = started_controller();
    controller.advance(4000);
    controller.run_active_script(1);

    assert_eq!(
        controller.history().lines(),
        [
            "$ Running Quote Fetcher...",
            "✅ Quote Fetcher executed successfully!"
        ]
    );
}

/// Browser bridge messages flow into the controller
#[test]
fn test_browser_events() {
    let mut controller = started_controller();
    let scroll = BrowserEvent::from_value(serde_json::json!({
        "kind": "scroll",
        "offset": 2500.0,
        "viewport": 1000.0,
    }))
    .unwrap();
    controller.apply_browser_event(scroll);
    controller.apply_browser_event(BrowserEvent::Clock {
        time: "09:15:00".to_string(),
    });

    assert!(controller.stats_animated());
    assert_eq!(controller.scroll_offset(), 2500.0);
    assert_eq!(controller.viewport_height(), 1000.0);
    assert!((controller.parallax() - 50.0).abs() < 1e-9);
    assert_eq!(controller.clock_label(), "09:15:00");
}

/// The same seed yields the same cosmetic layout and drift
#[test]
fn test_seeded_controllers_match() {
    let mut a = LandingController::new(LandingConfig::new().with_seed(99));
    let mut b = LandingController::new(LandingConfig::new().with_seed(99));
    a.start();
    b.start();
    a.advance(20_000);
    b.advance(20_000);

    assert_eq!(a.particles(), b.particles());
    assert_eq!(a.backdrop(), b.backdrop());
    assert!(a
        .particles()
        .particles()
        .iter()
        .all(|p| (0.0..100.0).contains(&p.y)));
}
