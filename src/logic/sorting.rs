//! Sorting comparison logic
//!
//! Pure functions for comparing listings across the available sort orders.

use crate::catalog::Listing;
use crate::SortOrder;
use std::cmp::Ordering;

/// Where listings without a distance attribute rank under the Nearest order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceRank {
    /// Unknown distance compares as zero, so those listings surface first
    #[default]
    Nearest,
    /// Unknown distance compares as infinite, so those listings sink last
    Farthest,
}

impl DistanceRank {
    pub fn as_str(&self) -> &str {
        match self {
            DistanceRank::Nearest => "nearest",
            DistanceRank::Farthest => "farthest",
        }
    }

    /// Parse the `unknown_distance` config value
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "nearest" => Some(DistanceRank::Nearest),
            "farthest" => Some(DistanceRank::Farthest),
            _ => None,
        }
    }
}

/// Distance used for ordering, with unknown distances substituted per rank
pub fn effective_distance(listing: &Listing, unknown: DistanceRank) -> f64 {
    match listing.location.distance {
        Some(distance) => distance,
        None => match unknown {
            DistanceRank::Nearest => 0.0,
            DistanceRank::Farthest => f64::INFINITY,
        },
    }
}

/// Compare two listings according to the selected sort order
///
/// # Arguments
/// * `a` - First listing
/// * `b` - Second listing
/// * `order` - Selected order; None means "keep catalog order"
/// * `unknown` - Rank of unknown-distance listings under Nearest
///
/// # Returns
/// Ordering indicating relative position (Less, Equal, Greater)
///
/// Equal keys stay Equal (no tie-breaking), so a stable sort preserves
/// catalog order among ties.
pub fn compare_listings(
    a: &Listing,
    b: &Listing,
    order: Option<SortOrder>,
    unknown: DistanceRank,
) -> Ordering {
    match order {
        None => Ordering::Equal,
        Some(SortOrder::Newest) => b.posted_date.cmp(&a.posted_date),
        Some(SortOrder::Nearest) => {
            effective_distance(a, unknown).total_cmp(&effective_distance(b, unknown))
        }
        Some(SortOrder::PriceLow) => a.price.cmp(&b.price),
        Some(SortOrder::PriceHigh) => b.price.cmp(&a.price),
    }
}

/// Stable in-place sort of a result slice
pub fn sort_listings(listings: &mut [Listing], order: Option<SortOrder>, unknown: DistanceRank) {
    listings.sort_by(|a, b| compare_listings(a, b, order, unknown));
}
