use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render a toast notification (brief pop-up message)
///
/// Drawn centered near the bottom of the screen, just above the status bar.
pub fn render_toast(f: &mut Frame, area: Rect, message: &str) {
    let max_width = (area.width as usize).min(70);
    let toast_width = (message.chars().count() + 6).min(max_width) as u16;
    let toast_height = 3;

    let toast_x = (area.width.saturating_sub(toast_width)) / 2;
    let toast_y = area.height.saturating_sub(toast_height + 4);

    let toast_area = Rect {
        x: area.x + toast_x,
        y: area.y + toast_y,
        width: toast_width,
        height: toast_height,
    };

    // Clear the area first to prevent background bleed-through
    f.render_widget(Clear, toast_area);

    // Error messages get the red treatment
    let is_error = message.starts_with("Error:");
    let (icon, accent) = if is_error {
        ("✗ ", Color::Red)
    } else {
        ("✓ ", Color::Green)
    };

    let toast_line = Line::from(vec![
        Span::styled(
            icon,
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(message, Style::default()),
    ]);

    let toast_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent).add_modifier(Modifier::BOLD));

    let toast_text = Paragraph::new(vec![toast_line])
        .block(toast_block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    f.render_widget(toast_text, toast_area);
}
