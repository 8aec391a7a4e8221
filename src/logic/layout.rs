//! Grid layout calculations
//!
//! Pure geometry for the results grid: how many card columns fit the
//! available width, and which row the viewport should start at so the
//! selection stays visible.

/// Narrowest acceptable card, including its borders
pub const GRID_CARD_MIN_WIDTH: u16 = 26;

/// Card height in terminal rows, including its borders
pub const GRID_CARD_HEIGHT: u16 = 5;

/// Cap on grid columns regardless of width
pub const GRID_MAX_COLUMNS: usize = 4;

/// Number of card columns for a given content width
///
/// At least one column is always used, even on terminals narrower than a
/// card.
pub fn grid_columns(width: u16) -> usize {
    let fit = (width / GRID_CARD_MIN_WIDTH) as usize;
    fit.clamp(1, GRID_MAX_COLUMNS)
}

/// Number of grid rows needed for a result count
pub fn grid_rows(result_count: usize, columns: usize) -> usize {
    if columns == 0 {
        return 0;
    }
    (result_count + columns - 1) / columns
}

/// Number of whole card rows that fit a content height
pub fn visible_rows(height: u16) -> usize {
    (height / GRID_CARD_HEIGHT) as usize
}

/// First row the viewport should show so the selected row is visible
///
/// The selection rides the bottom edge once it moves past the first
/// screenful.
pub fn first_visible_row(selected_row: usize, visible_rows: usize) -> usize {
    if visible_rows == 0 {
        return selected_row;
    }
    selected_row.saturating_sub(visible_rows - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_columns_narrow_terminal() {
        assert_eq!(grid_columns(0), 1);
        assert_eq!(grid_columns(20), 1);
        assert_eq!(grid_columns(25), 1);
    }

    #[test]
    fn test_grid_columns_scales_with_width() {
        assert_eq!(grid_columns(26), 1);
        assert_eq!(grid_columns(52), 2);
        assert_eq!(grid_columns(80), 3);
        assert_eq!(grid_columns(104), 4);
    }

    #[test]
    fn test_grid_columns_capped() {
        assert_eq!(grid_columns(250), GRID_MAX_COLUMNS);
    }

    #[test]
    fn test_grid_rows_rounds_up() {
        assert_eq!(grid_rows(0, 3), 0);
        assert_eq!(grid_rows(3, 3), 1);
        assert_eq!(grid_rows(4, 3), 2);
        assert_eq!(grid_rows(7, 3), 3);
    }

    #[test]
    fn test_grid_rows_zero_columns() {
        assert_eq!(grid_rows(10, 0), 0);
    }

    #[test]
    fn test_visible_rows() {
        assert_eq!(visible_rows(0), 0);
        assert_eq!(visible_rows(4), 0);
        assert_eq!(visible_rows(5), 1);
        assert_eq!(visible_rows(17), 3);
    }

    #[test]
    fn test_first_visible_row_top_of_list() {
        assert_eq!(first_visible_row(0, 3), 0);
        assert_eq!(first_visible_row(2, 3), 0);
    }

    #[test]
    fn test_first_visible_row_scrolled() {
        assert_eq!(first_visible_row(3, 3), 1);
        assert_eq!(first_visible_row(9, 3), 7);
    }

    #[test]
    fn test_first_visible_row_degenerate_height() {
        assert_eq!(first_visible_row(5, 0), 5);
    }
}
