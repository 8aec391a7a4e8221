//! Keyboard Input Handler
//!
//! Handles all keyboard input and dispatches to App methods. The filter
//! panel captures keys while it is open; browse hotkeys apply otherwise.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::App;

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ctrl-C quits from anywhere
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    if app.discovery.panel_open() {
        handle_panel_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.quit(),

        // Selection movement
        KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
        KeyCode::Right | KeyCode::Char('l') => app.move_selection_next(),
        KeyCode::Left | KeyCode::Char('h') => app.move_selection_prev(),

        // Actions on the selected listing
        KeyCode::Enter => app.select_current(),
        KeyCode::Char('s') => app.save_current(),
        KeyCode::Char('m') => app.message_current(),

        // Discovery controls
        KeyCode::Char('v') => app.toggle_view(),
        KeyCode::Char('f') => app.open_filter_panel(),
        KeyCode::Char('c') => app.cycle_category(),
        KeyCode::Char('o') => app.cycle_sort(),
        KeyCode::Char('x') => app.clear_filters(),

        _ => {}
    }
}

/// Handle keys while the filter panel is open
fn handle_panel_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // Filters already applied live, so both keys just close
        KeyCode::Enter | KeyCode::Esc => app.close_filter_panel(),

        KeyCode::Tab | KeyCode::Down => app.panel_focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.panel_focus_prev(),

        KeyCode::Left => app.panel_adjust(-1),
        KeyCode::Right => app.panel_adjust(1),

        KeyCode::Backspace => app.panel_backspace(),

        KeyCode::Char(' ') => app.panel_toggle(),
        KeyCode::Char('j') => app.panel_focus_next(),
        KeyCode::Char('k') => app.panel_focus_prev(),
        KeyCode::Char(c) => app.panel_input_char(c),

        _ => {}
    }
}
