//! Filter Panel UI
//!
//! Renders the filter sidebar: price inputs, distance slider, condition
//! checkboxes, and the sort selector. The focused control is highlighted;
//! every change applies to the results immediately.

use markettui::catalog::Condition;
use markettui::model::filters::{SearchFilters, MAX_DISTANCE, MIN_DISTANCE};
use markettui::model::panel::{FilterPanelState, PanelControl};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const SLIDER_WIDTH: u32 = 16;

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

fn section_label(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::Cyan),
    ))
}

fn input_line(label: &str, buffer: &str, focused: bool) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("{:<11}", format!("{}:", label)),
        focus_style(focused),
    )];

    if buffer.is_empty() && !focused {
        spans.push(Span::styled("any", Style::default().fg(Color::Gray)));
    } else {
        spans.push(Span::raw(format!("${}", buffer)));
    }

    if focused {
        // Blinking cursor
        spans.push(Span::styled(
            "█",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::SLOW_BLINK),
        ));
    }

    Line::from(spans)
}

fn distance_line(distance: u32, focused: bool) -> Line<'static> {
    let span = MAX_DISTANCE - MIN_DISTANCE;
    let filled = (distance.saturating_sub(MIN_DISTANCE) * SLIDER_WIDTH) / span;
    let bar: String = (0..SLIDER_WIDTH)
        .map(|i| if i < filled { '=' } else { '-' })
        .collect();

    Line::from(vec![
        Span::styled(format!("{:<11}", "Distance:"), focus_style(focused)),
        Span::raw(format!("[{}] {} mi", bar, distance)),
    ])
}

fn checkbox_line(label: &str, checked: bool, focused: bool) -> Line<'static> {
    let mark = if checked { "[x]" } else { "[ ]" };
    Line::from(vec![
        Span::styled(format!("  {} ", mark), focus_style(focused)),
        Span::styled(label.to_string(), focus_style(focused)),
    ])
}

fn sort_line(filters: &SearchFilters, focused: bool) -> Line<'static> {
    let current = match filters.sort_by {
        Some(order) => order.label().to_string(),
        None => "Catalog order".to_string(),
    };

    let mut spans = vec![
        Span::styled(format!("{:<11}", "Sort:"), focus_style(focused)),
        Span::raw(current),
    ];
    if focused {
        spans.push(Span::styled(
            "  (Space cycles)",
            Style::default().fg(Color::Gray),
        ));
    }
    Line::from(spans)
}

/// Render the filter panel sidebar
pub fn render_filter_panel(
    f: &mut Frame,
    area: Rect,
    filters: &SearchFilters,
    panel: &FilterPanelState,
) {
    let mut lines: Vec<Line> = vec![
        input_line(
            "Price Min",
            &panel.price_min_input,
            panel.focus == PanelControl::PriceMin,
        ),
        input_line(
            "Price Max",
            &panel.price_max_input,
            panel.focus == PanelControl::PriceMax,
        ),
        Line::from(""),
        distance_line(filters.distance, panel.focus == PanelControl::Distance),
        Line::from(""),
        section_label("Condition"),
    ];

    for condition in Condition::ALL {
        lines.push(checkbox_line(
            condition.label(),
            filters.condition.contains(&condition),
            panel.focus == PanelControl::Condition(condition),
        ));
    }

    lines.push(Line::from(""));
    lines.push(sort_line(filters, panel.focus == PanelControl::SortBy));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Changes apply immediately",
        Style::default().fg(Color::Gray),
    )));
    lines.push(Line::from(Span::styled(
        "Tab: next | Space: toggle",
        Style::default().fg(Color::Gray),
    )));
    lines.push(Line::from(Span::styled(
        "Enter/Esc: close",
        Style::default().fg(Color::Gray),
    )));

    let panel_widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Filters ")
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(panel_widget, area);
}
