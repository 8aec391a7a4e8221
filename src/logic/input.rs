//! Numeric input sanitizing
//!
//! Pure functions for turning raw form input into filter values. Bad input
//! degrades to the inactive sentinel or the nearest bound instead of
//! surfacing an error.

use crate::model::filters::{MAX_DISTANCE, MIN_DISTANCE};

/// Parse a raw price field into whole currency units
///
/// Empty or non-numeric input coerces to 0, the "no bound" sentinel.
///
/// # Examples
/// ```
/// use markettui::logic::input::sanitize_amount;
///
/// assert_eq!(sanitize_amount("250"), 250);
/// assert_eq!(sanitize_amount(""), 0);
/// assert_eq!(sanitize_amount("abc"), 0);
/// ```
pub fn sanitize_amount(raw: &str) -> u64 {
    raw.trim().parse().unwrap_or(0)
}

/// Clamp a distance value into the slider range
pub fn clamp_distance(value: u32) -> u32 {
    value.clamp(MIN_DISTANCE, MAX_DISTANCE)
}

/// Move the distance slider by `delta` miles, staying inside the range
pub fn step_distance(current: u32, delta: i32) -> u32 {
    let moved = if delta >= 0 {
        current.saturating_add(delta as u32)
    } else {
        current.saturating_sub(delta.unsigned_abs())
    };
    clamp_distance(moved)
}
