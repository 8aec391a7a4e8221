//! Formatting and display logic
//!
//! Pure functions for formatting listing data for human-readable display.

use chrono::{DateTime, Utc};

/// Format a price in whole currency units with thousands grouping
///
/// # Examples
/// ```
/// use markettui::logic::formatting::format_price;
///
/// assert_eq!(format_price(0), "$0");
/// assert_eq!(format_price(85), "$85");
/// assert_eq!(format_price(1200), "$1,200");
/// assert_eq!(format_price(1250000), "$1,250,000");
/// ```
pub fn format_price(price: u64) -> String {
    let digits = price.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${}", grouped)
}

/// Format a listing distance for display
pub fn format_distance(distance: Option<f64>) -> String {
    match distance {
        Some(d) => format!("{:.1} mi", d),
        None => "n/a".to_string(),
    }
}

/// Format how long ago a listing was posted, relative to `now`
///
/// Compact single-unit output: minutes under an hour, hours under a day,
/// days under a week, then the posting date itself.
pub fn format_posted_age(posted: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(posted);
    let minutes = elapsed.num_minutes();

    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{}m ago", minutes)
    } else if elapsed.num_hours() < 24 {
        format!("{}h ago", elapsed.num_hours())
    } else if elapsed.num_days() < 7 {
        format!("{}d ago", elapsed.num_days())
    } else {
        posted.format("%b %-d").to_string()
    }
}
