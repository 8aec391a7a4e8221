//! Browse orchestration methods
//!
//! Methods for moving through results and acting on the selected listing:
//! - Selection movement in both view modes, with grid-aware row steps
//! - Save / message / select actions with toast feedback
//! - Category, sort, and view cycling
//! - Selection preservation across result changes

use markettui::logic;
use markettui::model::filters::FilterUpdate;
use markettui::ViewMode;

use crate::{log_debug, App};

impl App {
    pub(crate) fn quit(&mut self) {
        self.ui.should_quit = true;
    }

    /// Id of the currently selected listing, if any
    pub(crate) fn selected_listing_id(&self) -> Option<String> {
        self.ui
            .selected
            .and_then(|idx| self.discovery.results().get(idx))
            .map(|listing| listing.id.clone())
    }

    /// Re-point the selection at the listing it was on before a result
    /// change, falling back to the first result
    pub(crate) fn restore_selection(&mut self, previous_id: Option<String>) {
        let results = self.discovery.results();
        if results.is_empty() {
            self.ui.selected = None;
            return;
        }

        let restored =
            previous_id.and_then(|id| logic::navigation::listing_position(results, &id));
        self.ui.selected = restored.or(Some(0)); // Default to first item if not found
    }

    /// Apply a single filter change, keeping the selection on the same
    /// listing where possible
    pub(crate) fn apply_update(&mut self, update: FilterUpdate) {
        let previous = self.selected_listing_id();
        self.discovery.update_filter(update);
        self.restore_selection(previous);
    }

    pub(crate) fn move_selection_next(&mut self) {
        self.ui.selected =
            logic::navigation::next_selection(self.ui.selected, self.discovery.result_count());
    }

    pub(crate) fn move_selection_prev(&mut self) {
        self.ui.selected =
            logic::navigation::prev_selection(self.ui.selected, self.discovery.result_count());
    }

    /// Down in list view is the next item; in grid view it is one row down
    pub(crate) fn move_selection_down(&mut self) {
        match self.discovery.view_mode() {
            ViewMode::List => self.move_selection_next(),
            ViewMode::Grid => {
                self.ui.selected = logic::navigation::row_step(
                    self.ui.selected,
                    self.discovery.result_count(),
                    self.last_grid_columns,
                    true,
                );
            }
        }
    }

    pub(crate) fn move_selection_up(&mut self) {
        match self.discovery.view_mode() {
            ViewMode::List => self.move_selection_prev(),
            ViewMode::Grid => {
                self.ui.selected = logic::navigation::row_step(
                    self.ui.selected,
                    self.discovery.result_count(),
                    self.last_grid_columns,
                    false,
                );
            }
        }
    }

    pub(crate) fn select_current(&mut self) {
        if let Some(listing) = self
            .ui
            .selected
            .and_then(|idx| self.discovery.results().get(idx))
            .cloned()
        {
            self.discovery.select_listing(&listing);
            self.ui.show_toast(format!("Selected: {}", listing.title));
        }
    }

    pub(crate) fn save_current(&mut self) {
        if let Some(listing) = self
            .ui
            .selected
            .and_then(|idx| self.discovery.results().get(idx))
            .cloned()
        {
            self.discovery.save_listing(&listing.id);
            self.ui.show_toast(format!("Saved: {}", listing.title));
        }
    }

    pub(crate) fn message_current(&mut self) {
        if let Some(listing) = self
            .ui
            .selected
            .and_then(|idx| self.discovery.results().get(idx))
            .cloned()
        {
            self.discovery.message_seller(&listing);
            self.ui
                .show_toast(format!("Message sent to {}", listing.seller));
        }
    }

    pub(crate) fn toggle_view(&mut self) {
        let next = logic::ui::toggle_view_mode(self.discovery.view_mode());
        self.discovery.set_view_mode(next);
    }

    /// Cycle the active category: all -> each category in order -> all
    pub(crate) fn cycle_category(&mut self) {
        let categories = self.discovery.categories();
        if categories.is_empty() {
            return;
        }

        let next = match self.discovery.active_category() {
            None => Some(categories[0].clone()),
            Some(current) => categories
                .iter()
                .position(|c| c == current)
                .and_then(|idx| categories.get(idx + 1))
                .cloned(),
        };
        log_debug(&format!("cycle category -> {:?}", next));

        let previous = self.selected_listing_id();
        self.discovery.set_active_category(next);
        self.restore_selection(previous);
    }

    pub(crate) fn cycle_sort(&mut self) {
        let next = logic::ui::cycle_sort(self.discovery.filters().sort_by);
        self.apply_update(FilterUpdate::SortBy(Some(next)));
    }

    pub(crate) fn clear_filters(&mut self) {
        let previous = self.selected_listing_id();
        self.discovery.clear_filters();
        self.restore_selection(previous);
        self.ui.show_toast("Filters cleared".to_string());
    }
}
