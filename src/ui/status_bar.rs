use markettui::model::filters::SearchFilters;
use markettui::ViewMode;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the bottom status bar with sort, view mode, and hotkeys
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    filters: &SearchFilters,
    view_mode: ViewMode,
    panel_open: bool,
) {
    let sort_display = match filters.sort_by {
        Some(order) => order.label().to_string(),
        None => "Catalog order".to_string(),
    };

    let mut metrics = vec![
        format!("Sort: {}", sort_display),
        format!("View: {}", view_mode.as_str()),
    ];

    if filters.price_min > 0 || filters.price_max > 0 || !filters.condition.is_empty() {
        metrics.push("Filters: active".to_string());
    }

    let hints = if panel_open {
        "Tab: move | Space: toggle | Enter: close"
    } else {
        "f: filters | c: category | o: sort | v: view | x: clear | q: quit"
    };
    metrics.push(hints.to_string());

    let status_line = metrics.join(" | ");

    // Color the labels (before colons)
    let mut spans: Vec<Span> = Vec::new();
    for (idx, part) in status_line.split(" | ").enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" | "));
        }

        if let Some(colon_pos) = part.find(':') {
            let (label, value) = part.split_at(colon_pos + 1);
            spans.push(Span::styled(
                label.to_string(),
                Style::default().fg(Color::Yellow),
            ));
            spans.push(Span::raw(value.to_string()));
        } else {
            spans.push(Span::raw(part.to_string()));
        }
    }

    let status_bar = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(Style::default().fg(Color::Gray));

    f.render_widget(status_bar, area);
}
