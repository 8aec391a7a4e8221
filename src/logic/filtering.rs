//! Listing predicate logic
//!
//! Pure functions deciding whether a listing survives the current filters.
//! A listing matches only if every active condition accepts it; inactive
//! conditions (zero price bounds, empty condition set, no category) accept
//! everything.

use crate::catalog::Listing;
use crate::model::filters::SearchFilters;

/// Decide whether a listing passes the current filters
///
/// Conditions are checked in order and short-circuit on the first failure:
/// 1. Category: with an active category, `listing.category` must equal it
///    exactly (case-sensitive).
/// 2. Minimum price: when `price_min > 0`, `price >= price_min`.
/// 3. Maximum price: when `price_max > 0`, `price <= price_max`.
/// 4. Condition: with a non-empty set, the listing's condition must be a
///    member.
/// 5. Distance: a known distance must be within `filters.distance`; listings
///    without a distance are never excluded here.
///
/// This is a strict filter: no scoring, no partial matches. `filters.query`
/// is deliberately not consulted.
pub fn listing_matches(
    listing: &Listing,
    filters: &SearchFilters,
    active_category: Option<&str>,
) -> bool {
    if let Some(category) = active_category {
        if listing.category != category {
            return false;
        }
    }

    if filters.price_min > 0 && listing.price < filters.price_min {
        return false;
    }

    if filters.price_max > 0 && listing.price > filters.price_max {
        return false;
    }

    if !filters.condition.is_empty() && !filters.condition.contains(&listing.condition) {
        return false;
    }

    if let Some(distance) = listing.location.distance {
        if distance > filters.distance as f64 {
            return false;
        }
    }

    true
}

/// Filter a catalog down to matching listings, preserving catalog order
pub fn filter_listings(
    listings: &[Listing],
    filters: &SearchFilters,
    active_category: Option<&str>,
) -> Vec<Listing> {
    listings
        .iter()
        .filter(|listing| listing_matches(listing, filters, active_category))
        .cloned()
        .collect()
}
