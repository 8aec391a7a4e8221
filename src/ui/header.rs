use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Capitalize the first letter for display ("electronics" -> "Electronics")
fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Render the top header with the active category and result count
pub fn render_header(
    f: &mut Frame,
    area: Rect,
    active_category: Option<&str>,
    result_count: usize,
) {
    let title = match active_category {
        Some(category) => format!("{} Items", title_case(category)),
        None => "All Items".to_string(),
    };

    let count_text = if result_count == 1 {
        "1 item found".to_string()
    } else {
        format!("{} items found", result_count)
    };

    let header_line = Line::from(vec![
        Span::styled(
            title,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(count_text, Style::default().fg(Color::Gray)),
    ]);

    let header = Paragraph::new(header_line)
        .block(Block::default().borders(Borders::ALL).title("Marketplace"));

    f.render_widget(header, area);
}
