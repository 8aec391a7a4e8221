// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (header, results, panel, status bar)
// - render: Main orchestration function that coordinates all rendering
// - header: Renders the top header with active category and result count
// - results: Renders the listing results (grid cards or list rows)
// - filter_panel: Renders the filter sidebar with its focusable controls
// - status_bar: Renders bottom status bar with sort, view mode, and hotkeys
// - toast: Renders toast notifications (brief pop-up messages)

pub mod filter_panel;
pub mod header;
pub mod layout;
pub mod render;
pub mod results;
pub mod status_bar;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
