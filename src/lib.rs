//! Marketplace TUI Library
//!
//! Exposes modules for testing

pub mod catalog;
pub mod config;
pub mod discovery;
pub mod logic;
pub mod model;

/// Result layout mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Grid, // Multi-column cards
    List, // Single-column rows with more detail
}

impl ViewMode {
    pub fn as_str(&self) -> &str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }

    /// Parse a view mode name from config ("grid" or "list")
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "grid" => Some(ViewMode::Grid),
            "list" => Some(ViewMode::List),
            _ => None,
        }
    }
}

/// Sort order for discovery results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Newest,    // Most recently posted first
    Nearest,   // Smallest distance first
    PriceLow,  // Cheapest first
    PriceHigh, // Most expensive first
}

impl SortOrder {
    /// All orders in panel display order
    pub const ALL: [SortOrder; 4] = [
        SortOrder::Newest,
        SortOrder::Nearest,
        SortOrder::PriceLow,
        SortOrder::PriceHigh,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Nearest => "nearest",
            SortOrder::PriceLow => "price-low",
            SortOrder::PriceHigh => "price-high",
        }
    }

    pub fn label(&self) -> &str {
        match self {
            SortOrder::Newest => "Newest First",
            SortOrder::Nearest => "Nearest First",
            SortOrder::PriceLow => "Price: Low to High",
            SortOrder::PriceHigh => "Price: High to Low",
        }
    }

    /// Parse a sort order name from config
    ///
    /// Returns None for unrecognized names; callers treat that as
    /// "keep catalog order" rather than an error.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "newest" => Some(SortOrder::Newest),
            "nearest" => Some(SortOrder::Nearest),
            "price-low" => Some(SortOrder::PriceLow),
            "price-high" => Some(SortOrder::PriceHigh),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_order_parse_round_trip() {
        for order in SortOrder::ALL {
            assert_eq!(SortOrder::parse(order.as_str()), Some(order));
        }
    }

    #[test]
    fn test_sort_order_parse_unknown_is_none() {
        assert_eq!(SortOrder::parse("oldest"), None);
        assert_eq!(SortOrder::parse("Newest"), None);
        assert_eq!(SortOrder::parse(""), None);
    }

    #[test]
    fn test_view_mode_parse() {
        assert_eq!(ViewMode::parse("grid"), Some(ViewMode::Grid));
        assert_eq!(ViewMode::parse("list"), Some(ViewMode::List));
        assert_eq!(ViewMode::parse("table"), None);
    }
}
