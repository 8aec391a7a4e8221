//! Filter panel form state
//!
//! The panel edits filters live; this sub-model only tracks which control
//! has focus and the raw text typed into the price fields. Parsed values
//! live in `SearchFilters`, so reopening the panel re-syncs the buffers
//! from whatever the filters currently hold.

use crate::catalog::Condition;
use crate::model::filters::SearchFilters;

/// Longest accepted price input, in digits
pub const PRICE_INPUT_MAX_DIGITS: usize = 9;

/// Focusable controls in the filter panel, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelControl {
    PriceMin,
    PriceMax,
    Distance,
    Condition(Condition),
    SortBy,
}

impl PanelControl {
    /// Focus ring order: price fields, distance, the five condition
    /// checkboxes, then the sort selector
    pub const ALL: [PanelControl; 9] = [
        PanelControl::PriceMin,
        PanelControl::PriceMax,
        PanelControl::Distance,
        PanelControl::Condition(Condition::New),
        PanelControl::Condition(Condition::LikeNew),
        PanelControl::Condition(Condition::Good),
        PanelControl::Condition(Condition::Fair),
        PanelControl::Condition(Condition::Poor),
        PanelControl::SortBy,
    ];
}

/// Form state for the filter panel
#[derive(Debug, Clone)]
pub struct FilterPanelState {
    /// Control that receives keystrokes while the panel is open
    pub focus: PanelControl,

    /// Raw text in the "Min" price field ("" renders the placeholder)
    pub price_min_input: String,

    /// Raw text in the "Max" price field
    pub price_max_input: String,
}

impl FilterPanelState {
    pub fn new() -> Self {
        Self {
            focus: PanelControl::PriceMin,
            price_min_input: String::new(),
            price_max_input: String::new(),
        }
    }

    /// Rebuild the text buffers from the current filter values
    ///
    /// The zero sentinel maps back to an empty field, matching how it was
    /// produced.
    pub fn sync_from_filters(&mut self, filters: &SearchFilters) {
        self.price_min_input = if filters.price_min > 0 {
            filters.price_min.to_string()
        } else {
            String::new()
        };
        self.price_max_input = if filters.price_max > 0 {
            filters.price_max.to_string()
        } else {
            String::new()
        };
    }
}

impl Default for FilterPanelState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::filters::FilterUpdate;

    #[test]
    fn test_panel_state_initial_focus() {
        let panel = FilterPanelState::new();
        assert_eq!(panel.focus, PanelControl::PriceMin);
        assert!(panel.price_min_input.is_empty());
        assert!(panel.price_max_input.is_empty());
    }

    #[test]
    fn test_focus_ring_covers_all_conditions() {
        for condition in Condition::ALL {
            assert!(PanelControl::ALL.contains(&PanelControl::Condition(condition)));
        }
    }

    #[test]
    fn test_sync_from_filters_zero_is_empty() {
        let mut panel = FilterPanelState::new();
        panel.price_min_input = "stale".to_string();

        panel.sync_from_filters(&SearchFilters::default());
        assert!(panel.price_min_input.is_empty());
        assert!(panel.price_max_input.is_empty());
    }

    #[test]
    fn test_sync_from_filters_shows_current_bounds() {
        let filters = SearchFilters::default()
            .with(FilterUpdate::PriceMin(20))
            .with(FilterUpdate::PriceMax(450));

        let mut panel = FilterPanelState::new();
        panel.sync_from_filters(&filters);

        assert_eq!(panel.price_min_input, "20");
        assert_eq!(panel.price_max_input, "450");
    }
}
