use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the filter panel column when open
pub const FILTER_PANEL_WIDTH: u16 = 34;

/// Layout information for rendering
pub struct LayoutInfo {
    /// Top header area (category title, result count)
    pub header_area: Rect,
    /// Results area (grid or list)
    pub results_area: Rect,
    /// Filter panel area (when open)
    pub panel_area: Option<Rect>,
    /// Bottom status bar area
    pub status_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect, panel_open: bool) -> LayoutInfo {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header (3 lines: top border, text, bottom border)
            Constraint::Min(5),    // Content area (results + optional panel)
            Constraint::Length(3), // Status bar
        ])
        .split(terminal_size);

    let header_area = main_chunks[0];
    let content_area = main_chunks[1];
    let status_area = main_chunks[2];

    // The panel takes a fixed-width column on the right; results keep the rest
    let (results_area, panel_area) = if panel_open {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(20),
                Constraint::Length(FILTER_PANEL_WIDTH),
            ])
            .split(content_area);
        (chunks[0], Some(chunks[1]))
    } else {
        (content_area, None)
    };

    LayoutInfo {
        header_area,
        results_area,
        panel_area,
        status_area,
    }
}
