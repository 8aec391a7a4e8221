//! Search filter state
//!
//! The filter model is a plain value: every field is always populated, and
//! edits produce a new value instead of mutating in place. Zero is the
//! sentinel for "no bound" on both price fields; the distance cap is always
//! active.

use std::collections::BTreeSet;

use crate::catalog::Condition;
use crate::SortOrder;

/// Distance slider bounds (miles)
pub const MIN_DISTANCE: u32 = 1;
pub const MAX_DISTANCE: u32 = 50;
pub const DEFAULT_DISTANCE: u32 = 25;

/// One field's worth of filter change
///
/// Each variant carries the field's full new value, so a `condition` update
/// replaces the whole membership set (the panel computes the new set when a
/// checkbox is toggled).
#[derive(Debug, Clone, PartialEq)]
pub enum FilterUpdate {
    Query(String),
    Category(String),
    PriceMin(u64),
    PriceMax(u64),
    Distance(u32),
    Condition(BTreeSet<Condition>),
    SortBy(Option<SortOrder>),
}

/// The complete filter state for a discovery session
#[derive(Debug, Clone, PartialEq)]
pub struct SearchFilters {
    /// Free-text query. Declared but not consumed by the evaluator; kept as
    /// the extension point for text search.
    pub query: String,

    /// Declared category field, "" means unrestricted. Category narrowing
    /// actually flows through the controller's active category; this field
    /// only mirrors it at session start.
    pub category: String,

    /// Minimum price, 0 = no lower bound
    pub price_min: u64,

    /// Maximum price, 0 = no upper bound
    pub price_max: u64,

    /// Distance cap in miles, always active, MIN_DISTANCE..=MAX_DISTANCE
    pub distance: u32,

    /// Accepted conditions; empty set = any condition
    pub condition: BTreeSet<Condition>,

    /// Selected ordering. None means "unrecognized sort name from config":
    /// results keep catalog order and no error is raised.
    pub sort_by: Option<SortOrder>,
}

impl SearchFilters {
    /// Initial filters for a session, mirroring the active category
    pub fn new(active_category: &str) -> Self {
        Self {
            query: String::new(),
            category: active_category.to_string(),
            price_min: 0,
            price_max: 0,
            distance: DEFAULT_DISTANCE,
            condition: BTreeSet::new(),
            sort_by: Some(SortOrder::Newest),
        }
    }

    /// New filters equal to `self` except the one updated field
    pub fn with(&self, update: FilterUpdate) -> Self {
        let mut next = self.clone();
        match update {
            FilterUpdate::Query(query) => next.query = query,
            FilterUpdate::Category(category) => next.category = category,
            FilterUpdate::PriceMin(price_min) => next.price_min = price_min,
            FilterUpdate::PriceMax(price_max) => next.price_max = price_max,
            FilterUpdate::Distance(distance) => next.distance = distance,
            FilterUpdate::Condition(condition) => next.condition = condition,
            FilterUpdate::SortBy(sort_by) => next.sort_by = sort_by,
        }
        next
    }

    /// New filters with exactly price_min, price_max, and condition reset
    ///
    /// Query, category, distance, and sort order survive a clear.
    pub fn cleared(&self) -> Self {
        let mut next = self.clone();
        next.price_min = 0;
        next.price_max = 0;
        next.condition.clear();
        next
    }
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self::new("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filters_fully_populated() {
        let filters = SearchFilters::default();
        assert!(filters.query.is_empty());
        assert!(filters.category.is_empty());
        assert_eq!(filters.price_min, 0);
        assert_eq!(filters.price_max, 0);
        assert_eq!(filters.distance, DEFAULT_DISTANCE);
        assert!(filters.condition.is_empty());
        assert_eq!(filters.sort_by, Some(SortOrder::Newest));
    }

    #[test]
    fn test_new_mirrors_active_category() {
        let filters = SearchFilters::new("electronics");
        assert_eq!(filters.category, "electronics");
    }

    #[test]
    fn test_with_changes_exactly_one_field() {
        let base = SearchFilters::default();

        let updated = base.with(FilterUpdate::PriceMin(20));
        assert_eq!(updated.price_min, 20);
        assert_eq!(updated.price_max, base.price_max);
        assert_eq!(updated.distance, base.distance);
        assert_eq!(updated.condition, base.condition);
        assert_eq!(updated.sort_by, base.sort_by);

        let updated = base.with(FilterUpdate::Distance(10));
        assert_eq!(updated.distance, 10);
        assert_eq!(updated.price_min, base.price_min);

        let mut wanted = BTreeSet::new();
        wanted.insert(Condition::New);
        wanted.insert(Condition::Good);
        let updated = base.with(FilterUpdate::Condition(wanted.clone()));
        assert_eq!(updated.condition, wanted);
        assert_eq!(updated.price_max, base.price_max);

        let updated = base.with(FilterUpdate::SortBy(Some(SortOrder::PriceHigh)));
        assert_eq!(updated.sort_by, Some(SortOrder::PriceHigh));

        let updated = base.with(FilterUpdate::Query("bike".to_string()));
        assert_eq!(updated.query, "bike");
        assert!(base.query.is_empty()); // Source value untouched
    }

    #[test]
    fn test_with_replaces_condition_set_wholesale() {
        let mut first = BTreeSet::new();
        first.insert(Condition::Fair);
        let base = SearchFilters::default().with(FilterUpdate::Condition(first));

        let mut second = BTreeSet::new();
        second.insert(Condition::New);
        let updated = base.with(FilterUpdate::Condition(second.clone()));

        // Full replacement, not a merge
        assert_eq!(updated.condition, second);
    }

    #[test]
    fn test_cleared_resets_exactly_three_fields() {
        let mut condition = BTreeSet::new();
        condition.insert(Condition::LikeNew);

        let filters = SearchFilters::new("sports")
            .with(FilterUpdate::Query("bike".to_string()))
            .with(FilterUpdate::PriceMin(50))
            .with(FilterUpdate::PriceMax(500))
            .with(FilterUpdate::Distance(10))
            .with(FilterUpdate::Condition(condition))
            .with(FilterUpdate::SortBy(Some(SortOrder::Nearest)));

        let cleared = filters.cleared();

        // Reset
        assert_eq!(cleared.price_min, 0);
        assert_eq!(cleared.price_max, 0);
        assert!(cleared.condition.is_empty());

        // Untouched
        assert_eq!(cleared.query, "bike");
        assert_eq!(cleared.category, "sports");
        assert_eq!(cleared.distance, 10);
        assert_eq!(cleared.sort_by, Some(SortOrder::Nearest));
    }
}
