//! Tests for live filter application while the panel is open
//!
//! The filter panel stages nothing: every edit lands in the controller as
//! it happens, and closing the panel (Enter or Esc) changes no results.
//! These tests drive the same pieces the panel key handling uses:
//! 1. Open the panel -> input buffers mirror the live filters
//! 2. Type digits into a price field -> results narrow on each keystroke
//! 3. Move focus around the control ring, toggle conditions, cycle sort
//! 4. Close the panel -> results are exactly what the edits produced

use markettui::catalog::{Condition, Listing, ListingLocation};
use markettui::discovery::DiscoveryController;
use markettui::logic::input::{sanitize_amount, step_distance};
use markettui::logic::sorting::DistanceRank;
use markettui::logic::ui::{next_control, prev_control};
use markettui::model::filters::FilterUpdate;
use markettui::model::panel::{FilterPanelState, PanelControl};

fn listing(id: &str, price: u64) -> Listing {
    Listing {
        id: id.to_string(),
        title: format!("{} for sale", id),
        description: String::new(),
        price,
        category: "electronics".to_string(),
        condition: Condition::Good,
        seller: "Jordan".to_string(),
        location: ListingLocation {
            city: "Kingsbridge".to_string(),
            distance: Some(2.0),
        },
        posted_date: "2026-08-05T12:00:00Z".parse().unwrap(),
    }
}

fn price_catalog() -> Vec<Listing> {
    vec![
        listing("a", 2),
        listing("b", 20),
        listing("c", 200),
        listing("d", 2000),
    ]
}

/// Type one digit into the min-price buffer and apply it, the way the
/// panel handler does on each keystroke
fn type_min_digit(panel: &mut FilterPanelState, controller: &mut DiscoveryController, c: char) {
    panel.price_min_input.push(c);
    let amount = sanitize_amount(&panel.price_min_input);
    controller.update_filter(FilterUpdate::PriceMin(amount));
}

/// Test: Opening the panel mirrors the live filters into the buffers
#[test]
fn test_buffers_mirror_filters_on_open() {
    let mut controller =
        DiscoveryController::new(price_catalog(), None, DistanceRank::Nearest);
    controller.update_filter(FilterUpdate::PriceMin(150));

    let mut panel = FilterPanelState::new();
    panel.sync_from_filters(controller.filters());

    assert_eq!(panel.price_min_input, "150");
    assert_eq!(panel.price_max_input, "", "A zero bound shows as an empty buffer");
    assert_eq!(panel.focus, PanelControl::PriceMin, "Focus starts on the first control");
}

/// Test: Each typed digit narrows the results immediately
#[test]
fn test_each_keystroke_applies() {
    let mut controller =
        DiscoveryController::new(price_catalog(), None, DistanceRank::Nearest);
    let mut panel = FilterPanelState::new();
    panel.sync_from_filters(controller.filters());

    type_min_digit(&mut panel, &mut controller, '2');
    assert_eq!(controller.result_count(), 4, "min 2 still lets everything through");

    type_min_digit(&mut panel, &mut controller, '1');
    assert_eq!(controller.result_count(), 2, "min 21 leaves 200 and 2000");

    type_min_digit(&mut panel, &mut controller, '0');
    assert_eq!(controller.result_count(), 1, "min 210 leaves only the 2000 listing");
}

/// Test: Backspacing widens the results again
#[test]
fn test_backspace_widens() {
    let mut controller =
        DiscoveryController::new(price_catalog(), None, DistanceRank::Nearest);
    let mut panel = FilterPanelState::new();

    for c in ['3', '0', '0'] {
        type_min_digit(&mut panel, &mut controller, c);
    }
    assert_eq!(controller.result_count(), 1, "min 300 leaves only the 2000 listing");

    panel.price_min_input.pop();
    let amount = sanitize_amount(&panel.price_min_input);
    controller.update_filter(FilterUpdate::PriceMin(amount));
    assert_eq!(controller.result_count(), 2, "min 30 brings 200 back");

    panel.price_min_input.pop();
    panel.price_min_input.pop();
    let amount = sanitize_amount(&panel.price_min_input);
    assert_eq!(amount, 0, "An empty buffer sanitizes to the inactive bound");
    controller.update_filter(FilterUpdate::PriceMin(amount));
    assert_eq!(controller.result_count(), 4);
}

/// Test: Focus moves through every control and wraps around
#[test]
fn test_focus_ring_wraps() {
    let mut focus = PanelControl::PriceMin;
    let mut seen = Vec::new();

    for _ in 0..PanelControl::ALL.len() {
        seen.push(focus);
        focus = next_control(focus);
    }

    assert_eq!(focus, PanelControl::PriceMin, "A full lap lands back on the first control");
    assert_eq!(seen.len(), 9);
    for condition in Condition::ALL {
        assert!(
            seen.contains(&PanelControl::Condition(condition)),
            "Every condition checkbox is reachable: {:?}",
            condition
        );
    }
    assert!(seen.contains(&PanelControl::Distance));
    assert!(seen.contains(&PanelControl::SortBy));
}

/// Test: Moving backwards from the first control lands on the last
#[test]
fn test_focus_ring_wraps_backwards() {
    assert_eq!(prev_control(PanelControl::PriceMin), PanelControl::SortBy);
    assert_eq!(next_control(PanelControl::SortBy), PanelControl::PriceMin);
}

/// Test: Stepping the distance slider clamps at both ends
#[test]
fn test_distance_steps_clamp() {
    let mut controller =
        DiscoveryController::new(price_catalog(), None, DistanceRank::Nearest);

    let stepped = step_distance(controller.filters().distance, -30);
    controller.update_filter(FilterUpdate::Distance(stepped));
    assert_eq!(controller.filters().distance, 1, "25 - 30 clamps at the minimum");

    let stepped = step_distance(controller.filters().distance, 100);
    controller.update_filter(FilterUpdate::Distance(stepped));
    assert_eq!(controller.filters().distance, 50, "1 + 100 clamps at the maximum");
}

/// Test: Toggling a condition twice returns to the starting results
#[test]
fn test_condition_toggle_round_trip() {
    let mut controller =
        DiscoveryController::new(price_catalog(), None, DistanceRank::Nearest);
    let before = controller.result_count();

    // Toggle on
    let mut conditions = controller.filters().condition.clone();
    conditions.insert(Condition::New);
    controller.update_filter(FilterUpdate::Condition(conditions));
    assert_eq!(controller.result_count(), 0, "Nothing in the catalog is New");

    // Toggle off
    let mut conditions = controller.filters().condition.clone();
    conditions.remove(&Condition::New);
    controller.update_filter(FilterUpdate::Condition(conditions));
    assert_eq!(controller.result_count(), before);
}

/// Test: Opening and closing the panel never touches the results
#[test]
fn test_open_close_changes_no_results() {
    let mut controller =
        DiscoveryController::new(price_catalog(), None, DistanceRank::Nearest);
    controller.update_filter(FilterUpdate::PriceMin(100));
    let narrowed = controller.result_count();

    controller.open_panel();
    assert!(controller.panel_open());
    assert_eq!(controller.result_count(), narrowed);

    controller.close_panel();
    assert!(!controller.panel_open());
    assert_eq!(
        controller.result_count(),
        narrowed,
        "Closing applies nothing because everything already applied live"
    );
}

/// Test: Re-opening the panel after a clear shows empty buffers again
#[test]
fn test_buffers_resync_after_clear() {
    let mut controller =
        DiscoveryController::new(price_catalog(), None, DistanceRank::Nearest);
    controller.update_filter(FilterUpdate::PriceMin(250));

    let mut panel = FilterPanelState::new();
    panel.sync_from_filters(controller.filters());
    assert_eq!(panel.price_min_input, "250");

    controller.clear_filters();

    // The next open re-syncs from the cleared filters
    let mut panel = FilterPanelState::new();
    panel.sync_from_filters(controller.filters());
    assert_eq!(panel.price_min_input, "");
}
