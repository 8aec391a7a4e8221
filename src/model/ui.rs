//! UI Model
//!
//! Presentation state that lives outside the discovery controller: result
//! selection, the filter panel form, toast feedback, and the quit flag.

use std::time::Instant;

use super::panel::FilterPanelState;

/// Presentation state for the browse screen
#[derive(Clone, Debug)]
pub struct UiModel {
    /// Index of the highlighted result (None when there are no results)
    pub selected: Option<usize>,

    /// Filter panel form state (focus + price text buffers)
    pub panel: FilterPanelState,

    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    /// Create initial UI model
    pub fn new() -> Self {
        Self {
            selected: None,
            panel: FilterPanelState::new(),
            toast_message: None,
            should_quit: false,
        }
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    /// Check if toast has outlived its display window
    pub fn should_dismiss_toast(&self) -> bool {
        if let Some((_, timestamp)) = &self.toast_message {
            crate::logic::ui::should_dismiss_toast(timestamp.elapsed().as_millis())
        } else {
            false
        }
    }

    /// Dismiss toast message
    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }
}

impl Default for UiModel {
    fn default() -> Self {
        Self::new()
    }
}
