//! UI state transition logic
//!
//! Pure functions for view-state cycling and transitions.

use crate::model::panel::PanelControl;
use crate::{SortOrder, ViewMode};

/// How long a toast stays on screen
const TOAST_DURATION_MS: u128 = 1500;

/// Flip between the two result layouts
///
/// # Examples
/// ```
/// use markettui::ViewMode;
/// use markettui::logic::ui::toggle_view_mode;
///
/// assert_eq!(toggle_view_mode(ViewMode::Grid), ViewMode::List);
/// assert_eq!(toggle_view_mode(ViewMode::List), ViewMode::Grid);
/// ```
pub fn toggle_view_mode(current: ViewMode) -> ViewMode {
    match current {
        ViewMode::Grid => ViewMode::List,
        ViewMode::List => ViewMode::Grid,
    }
}

/// Cycle to the next sort order: Newest → Nearest → PriceLow → PriceHigh → Newest
///
/// A session running with no order (unrecognized config name) starts the
/// cycle at Newest.
///
/// # Examples
/// ```
/// use markettui::SortOrder;
/// use markettui::logic::ui::cycle_sort;
///
/// assert_eq!(cycle_sort(Some(SortOrder::Newest)), SortOrder::Nearest);
/// assert_eq!(cycle_sort(Some(SortOrder::PriceHigh)), SortOrder::Newest);
/// assert_eq!(cycle_sort(None), SortOrder::Newest);
/// ```
pub fn cycle_sort(current: Option<SortOrder>) -> SortOrder {
    match current {
        Some(SortOrder::Newest) => SortOrder::Nearest,
        Some(SortOrder::Nearest) => SortOrder::PriceLow,
        Some(SortOrder::PriceLow) => SortOrder::PriceHigh,
        Some(SortOrder::PriceHigh) => SortOrder::Newest,
        None => SortOrder::Newest,
    }
}

/// Next control in the panel focus ring, wrapping at the bottom
pub fn next_control(current: PanelControl) -> PanelControl {
    let controls = &PanelControl::ALL;
    let pos = controls.iter().position(|c| *c == current).unwrap_or(0);
    controls[(pos + 1) % controls.len()]
}

/// Previous control in the panel focus ring, wrapping at the top
pub fn prev_control(current: PanelControl) -> PanelControl {
    let controls = &PanelControl::ALL;
    let pos = controls.iter().position(|c| *c == current).unwrap_or(0);
    controls[(pos + controls.len() - 1) % controls.len()]
}

/// Check whether a toast has been shown long enough to dismiss
pub fn should_dismiss_toast(elapsed_ms: u128) -> bool {
    elapsed_ms >= TOAST_DURATION_MS
}
