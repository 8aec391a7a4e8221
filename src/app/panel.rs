//! Filter panel orchestration methods
//!
//! Methods backing the filter panel while it is open:
//! - Opening (with input buffers re-synced from the live filters) and closing
//! - Focus movement around the control ring
//! - Price digit entry, distance stepping, condition and sort toggling
//!
//! Every edit feeds straight into the discovery controller, so results
//! update while the panel stays open.

use markettui::logic;
use markettui::model::filters::FilterUpdate;
use markettui::model::panel::{FilterPanelState, PanelControl, PRICE_INPUT_MAX_DIGITS};

use crate::App;

impl App {
    /// Open the filter panel with focus on the first control
    pub(crate) fn open_filter_panel(&mut self) {
        self.ui.panel = FilterPanelState::new();
        self.ui.panel.sync_from_filters(self.discovery.filters());
        self.discovery.open_panel();
    }

    pub(crate) fn close_filter_panel(&mut self) {
        self.discovery.close_panel();
    }

    pub(crate) fn panel_focus_next(&mut self) {
        self.ui.panel.focus = logic::ui::next_control(self.ui.panel.focus);
    }

    pub(crate) fn panel_focus_prev(&mut self) {
        self.ui.panel.focus = logic::ui::prev_control(self.ui.panel.focus);
    }

    /// Append a digit to the focused price input
    pub(crate) fn panel_input_char(&mut self, c: char) {
        if !c.is_ascii_digit() {
            return;
        }

        match self.ui.panel.focus {
            PanelControl::PriceMin => {
                if self.ui.panel.price_min_input.len() < PRICE_INPUT_MAX_DIGITS {
                    self.ui.panel.price_min_input.push(c);
                    let amount = logic::input::sanitize_amount(&self.ui.panel.price_min_input);
                    self.apply_update(FilterUpdate::PriceMin(amount));
                }
            }
            PanelControl::PriceMax => {
                if self.ui.panel.price_max_input.len() < PRICE_INPUT_MAX_DIGITS {
                    self.ui.panel.price_max_input.push(c);
                    let amount = logic::input::sanitize_amount(&self.ui.panel.price_max_input);
                    self.apply_update(FilterUpdate::PriceMax(amount));
                }
            }
            _ => {}
        }
    }

    /// Delete the last digit of the focused price input
    pub(crate) fn panel_backspace(&mut self) {
        match self.ui.panel.focus {
            PanelControl::PriceMin => {
                self.ui.panel.price_min_input.pop();
                let amount = logic::input::sanitize_amount(&self.ui.panel.price_min_input);
                self.apply_update(FilterUpdate::PriceMin(amount));
            }
            PanelControl::PriceMax => {
                self.ui.panel.price_max_input.pop();
                let amount = logic::input::sanitize_amount(&self.ui.panel.price_max_input);
                self.apply_update(FilterUpdate::PriceMax(amount));
            }
            _ => {}
        }
    }

    /// Left/Right adjustment; only the distance slider reacts
    pub(crate) fn panel_adjust(&mut self, delta: i32) {
        if self.ui.panel.focus == PanelControl::Distance {
            let next = logic::input::step_distance(self.discovery.filters().distance, delta);
            self.apply_update(FilterUpdate::Distance(next));
        }
    }

    /// Space on a condition toggles membership; on the sort row it cycles
    /// the order
    pub(crate) fn panel_toggle(&mut self) {
        match self.ui.panel.focus {
            PanelControl::Condition(condition) => {
                let mut conditions = self.discovery.filters().condition.clone();
                if !conditions.remove(&condition) {
                    conditions.insert(condition);
                }
                self.apply_update(FilterUpdate::Condition(conditions));
            }
            PanelControl::SortBy => self.cycle_sort(),
            _ => {}
        }
    }
}
