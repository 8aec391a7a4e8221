//! Results View
//!
//! Renders the filtered listings either as a card grid or as a flat list.
//! The grid draws its own cards and scrolls by whole rows so the selected
//! card stays on screen.

use chrono::Utc;
use markettui::catalog::Listing;
use markettui::logic::formatting::{format_distance, format_posted_age, format_price};
use markettui::logic::layout::{
    first_visible_row, grid_columns, grid_rows, visible_rows, GRID_CARD_HEIGHT,
};
use markettui::ViewMode;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate a string to a display width, appending an ellipsis when cut
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let budget = max_width.saturating_sub(1);
    let mut result = String::new();
    let mut used = 0;
    for c in text.chars() {
        let char_width = c.width().unwrap_or(0);
        if used + char_width > budget {
            break;
        }
        used += char_width;
        result.push(c);
    }
    result.push('…');
    result
}

/// Render the results area in the current view mode
pub fn render_results(
    f: &mut Frame,
    area: Rect,
    listings: &[Listing],
    view_mode: ViewMode,
    selected: Option<usize>,
) {
    if listings.is_empty() {
        render_empty_state(f, area);
        return;
    }

    match view_mode {
        ViewMode::Grid => render_grid(f, area, listings, selected),
        ViewMode::List => render_list(f, area, listings, selected),
    }
}

fn render_empty_state(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "No items found matching your criteria.",
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press x to clear filters, or f to adjust them.",
            Style::default().fg(Color::Gray),
        )),
    ];

    let message = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Results"))
        .alignment(Alignment::Center);

    f.render_widget(message, area);
}

fn render_list(f: &mut Frame, area: Rect, listings: &[Listing], selected: Option<usize>) {
    let now = Utc::now();

    let items: Vec<ListItem> = listings
        .iter()
        .map(|listing| {
            let details = format!(
                "{} | {} | {} | {}",
                listing.condition.label(),
                listing.location.city,
                format_distance(listing.location.distance),
                format_posted_age(listing.posted_date, now),
            );

            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>8}", format_price(listing.price)),
                    Style::default().fg(Color::Green),
                ),
                Span::raw("  "),
                Span::raw(listing.title.clone()),
                Span::raw("  "),
                Span::styled(details, Style::default().fg(Color::Gray)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Results"))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    // Create temporary ListState for rendering
    let mut state = ListState::default();
    state.select(selected);
    f.render_stateful_widget(list, area, &mut state);
}

fn render_grid(f: &mut Frame, area: Rect, listings: &[Listing], selected: Option<usize>) {
    let block = Block::default().borders(Borders::ALL).title("Results");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = grid_columns(inner.width);
    let visible = visible_rows(inner.height);
    if visible == 0 || inner.width == 0 {
        return;
    }

    let selected_row = selected.unwrap_or(0) / columns;
    let first_row = first_visible_row(selected_row, visible);
    let total_rows = grid_rows(listings.len(), columns);
    let last_row = total_rows.min(first_row + visible);

    let card_width = inner.width / columns as u16;

    for row in first_row..last_row {
        for col in 0..columns {
            let index = row * columns + col;
            if index >= listings.len() {
                break;
            }

            let card_area = Rect {
                x: inner.x + col as u16 * card_width,
                y: inner.y + (row - first_row) as u16 * GRID_CARD_HEIGHT,
                width: card_width,
                height: GRID_CARD_HEIGHT,
            };
            render_card(f, card_area, &listings[index], selected == Some(index));
        }
    }
}

fn render_card(f: &mut Frame, area: Rect, listing: &Listing, is_selected: bool) {
    let border_style = if is_selected {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let inner_width = area.width.saturating_sub(2) as usize;

    let lines = vec![
        Line::from(Span::styled(
            format_price(listing.price),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::raw(truncate_to_width(&listing.title, inner_width))),
        Line::from(Span::styled(
            truncate_to_width(
                &format!(
                    "{} - {}",
                    listing.condition.label(),
                    format_distance(listing.location.distance)
                ),
                inner_width,
            ),
            Style::default().fg(Color::Gray),
        )),
    ];

    let card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    f.render_widget(card, area);
}
