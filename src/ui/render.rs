use crate::App;
use markettui::logic::layout::grid_columns;
use ratatui::Frame;

use super::{filter_panel, header, layout, results, status_bar, toast};

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let layout_info = layout::calculate_layout(size, app.discovery.panel_open());

    // Row-wise grid movement in the handlers needs the rendered column count
    app.last_grid_columns = grid_columns(layout_info.results_area.width.saturating_sub(2));

    header::render_header(
        f,
        layout_info.header_area,
        app.discovery.active_category(),
        app.discovery.result_count(),
    );

    results::render_results(
        f,
        layout_info.results_area,
        app.discovery.results(),
        app.discovery.view_mode(),
        app.ui.selected,
    );

    if let Some(panel_area) = layout_info.panel_area {
        filter_panel::render_filter_panel(f, panel_area, app.discovery.filters(), &app.ui.panel);
    }

    status_bar::render_status_bar(
        f,
        layout_info.status_area,
        app.discovery.filters(),
        app.discovery.view_mode(),
        app.discovery.panel_open(),
    );

    // Render toast notification if active
    if let Some((message, _timestamp)) = &app.ui.toast_message {
        toast::render_toast(f, size, message);
    }
}
