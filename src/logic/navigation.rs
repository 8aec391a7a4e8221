//! Result selection logic
//!
//! Pure functions for moving the highlighted result with wrapping, and for
//! finding a listing again after the result set has been recomputed.

use crate::catalog::Listing;

/// Next selection index with wrapping
///
/// # Examples
/// ```
/// use markettui::logic::navigation::next_selection;
///
/// assert_eq!(next_selection(None, 0), None);
/// assert_eq!(next_selection(None, 3), Some(0));
/// assert_eq!(next_selection(Some(1), 3), Some(2));
/// assert_eq!(next_selection(Some(2), 3), Some(0)); // Wraps
/// ```
pub fn next_selection(current: Option<usize>, result_count: usize) -> Option<usize> {
    if result_count == 0 {
        return None;
    }

    Some(match current {
        Some(i) => (i + 1) % result_count,
        None => 0,
    })
}

/// Previous selection index with wrapping
///
/// # Examples
/// ```
/// use markettui::logic::navigation::prev_selection;
///
/// assert_eq!(prev_selection(None, 0), None);
/// assert_eq!(prev_selection(Some(2), 3), Some(1));
/// assert_eq!(prev_selection(Some(0), 3), Some(2)); // Wraps
/// ```
pub fn prev_selection(current: Option<usize>, result_count: usize) -> Option<usize> {
    if result_count == 0 {
        return None;
    }

    Some(match current {
        Some(0) | None => result_count - 1,
        Some(i) => i - 1,
    })
}

/// Position of a listing id within a result slice
///
/// Used to restore the highlight after filters or sort order change the
/// result sequence.
pub fn listing_position(listings: &[Listing], id: &str) -> Option<usize> {
    listings.iter().position(|listing| listing.id == id)
}

/// Move the selection sideways by one grid column, clamped to the results
///
/// Grid view navigates two-dimensionally: up/down move by one row (one
/// column's worth of indices), left/right move by one. Falls back to the
/// last result when a full step would run past the end.
pub fn row_step(current: Option<usize>, result_count: usize, columns: usize, down: bool) -> Option<usize> {
    if result_count == 0 || columns == 0 {
        return None;
    }

    let current = match current {
        Some(i) => i,
        None => return Some(0),
    };

    if down {
        let stepped = current + columns;
        if stepped < result_count {
            Some(stepped)
        } else if current == result_count - 1 {
            Some(current)
        } else {
            Some(result_count - 1)
        }
    } else {
        Some(current.saturating_sub(columns))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Condition, ListingLocation};

    fn make_listing(id: &str) -> Listing {
        Listing {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            price: 10,
            category: "misc".to_string(),
            condition: Condition::Good,
            seller: String::new(),
            location: ListingLocation::default(),
            posted_date: "2026-08-01T00:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_next_selection_empty() {
        assert_eq!(next_selection(None, 0), None);
        assert_eq!(next_selection(Some(3), 0), None);
    }

    #[test]
    fn test_next_selection_wraps() {
        assert_eq!(next_selection(None, 4), Some(0));
        assert_eq!(next_selection(Some(0), 4), Some(1));
        assert_eq!(next_selection(Some(3), 4), Some(0));
    }

    #[test]
    fn test_prev_selection_wraps() {
        assert_eq!(prev_selection(None, 4), Some(3));
        assert_eq!(prev_selection(Some(3), 4), Some(2));
        assert_eq!(prev_selection(Some(0), 4), Some(3));
    }

    #[test]
    fn test_listing_position() {
        let listings = vec![make_listing("a"), make_listing("b"), make_listing("c")];

        assert_eq!(listing_position(&listings, "a"), Some(0));
        assert_eq!(listing_position(&listings, "c"), Some(2));
        assert_eq!(listing_position(&listings, "missing"), None);
    }

    #[test]
    fn test_row_step_down_within_grid() {
        // 7 results in 3 columns: rows are [0 1 2] [3 4 5] [6]
        assert_eq!(row_step(Some(1), 7, 3, true), Some(4));
        assert_eq!(row_step(Some(3), 7, 3, true), Some(6));
    }

    #[test]
    fn test_row_step_down_clamps_to_last() {
        // Stepping down from the second row's tail lands on the last result
        assert_eq!(row_step(Some(5), 7, 3, true), Some(6));
        assert_eq!(row_step(Some(6), 7, 3, true), Some(6));
    }

    #[test]
    fn test_row_step_up() {
        assert_eq!(row_step(Some(4), 7, 3, false), Some(1));
        assert_eq!(row_step(Some(1), 7, 3, false), Some(0));
        assert_eq!(row_step(Some(0), 7, 3, false), Some(0));
    }

    #[test]
    fn test_row_step_no_selection_picks_first() {
        assert_eq!(row_step(None, 7, 3, true), Some(0));
        assert_eq!(row_step(None, 0, 3, true), None);
    }
}
