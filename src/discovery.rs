//! Discovery controller
//!
//! Owns the state of one browsing session: the injected listing catalog,
//! the current filters, the active category, view mode, and filter panel
//! visibility. Results are fully re-derived on every filter change (a whole
//! catalog scan, nothing cached between changes) and published to
//! subscribers as a snapshot.
//!
//! Save/message/select are pass-through notifications: they forward to the
//! installed [`ListingActions`] without touching controller state.

use crate::catalog::{self, Listing};
use crate::logic::sorting::DistanceRank;
use crate::logic::{filtering, sorting};
use crate::model::filters::{FilterUpdate, SearchFilters};
use crate::ViewMode;

/// Immutable view of discovery state, published after each mutation
#[derive(Debug, Clone, Copy)]
pub struct DiscoverySnapshot<'a> {
    /// Filtered and sorted results
    pub results: &'a [Listing],
    /// Filters the results were derived from
    pub filters: &'a SearchFilters,
    /// Session category narrowing, if any
    pub active_category: Option<&'a str>,
    pub view_mode: ViewMode,
    pub panel_open: bool,
}

impl DiscoverySnapshot<'_> {
    pub fn result_count(&self) -> usize {
        self.results.len()
    }
}

/// Receiver of discovery snapshots
///
/// Closures work directly: any `FnMut(DiscoverySnapshot<'_>)` is an
/// observer.
pub trait DiscoveryObserver {
    fn discovery_changed(&mut self, snapshot: DiscoverySnapshot<'_>);
}

impl<F> DiscoveryObserver for F
where
    F: FnMut(DiscoverySnapshot<'_>),
{
    fn discovery_changed(&mut self, snapshot: DiscoverySnapshot<'_>) {
        self(snapshot)
    }
}

/// Callbacks for listing interactions
///
/// Every method defaults to a no-op so a backend can implement only what it
/// handles. The controller never interprets these events itself.
pub trait ListingActions {
    fn on_save(&mut self, _listing_id: &str) {}
    fn on_message(&mut self, _listing: &Listing) {}
    fn on_select(&mut self, _listing: &Listing) {}
}

/// Default hook target: ignores every notification
pub struct NoopActions;

impl ListingActions for NoopActions {}

/// State and operations for one listing discovery session
pub struct DiscoveryController {
    catalog: Vec<Listing>,
    filters: SearchFilters,
    active_category: Option<String>,
    view_mode: ViewMode,
    panel_open: bool,
    unknown_distance: DistanceRank,
    results: Vec<Listing>,
    subscribers: Vec<Box<dyn DiscoveryObserver>>,
    actions: Box<dyn ListingActions>,
}

impl DiscoveryController {
    /// Start a session over an injected catalog
    ///
    /// The initial filters mirror the active category into their declared
    /// `category` field; narrowing itself always flows through the active
    /// category. An empty category string counts as "no category".
    pub fn new(
        catalog: Vec<Listing>,
        active_category: Option<String>,
        unknown_distance: DistanceRank,
    ) -> Self {
        let active_category = active_category.filter(|c| !c.is_empty());
        let filters = SearchFilters::new(active_category.as_deref().unwrap_or(""));

        let mut controller = Self {
            catalog,
            filters,
            active_category,
            view_mode: ViewMode::Grid,
            panel_open: false,
            unknown_distance,
            results: Vec::new(),
            subscribers: Vec::new(),
            actions: Box::new(NoopActions),
        };
        controller.recompute();
        controller
    }

    pub fn results(&self) -> &[Listing] {
        &self.results
    }

    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    pub fn filters(&self) -> &SearchFilters {
        &self.filters
    }

    pub fn active_category(&self) -> Option<&str> {
        self.active_category.as_deref()
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn panel_open(&self) -> bool {
        self.panel_open
    }

    pub fn unknown_distance(&self) -> DistanceRank {
        self.unknown_distance
    }

    /// Distinct catalog categories, sorted
    pub fn categories(&self) -> Vec<String> {
        catalog::distinct_categories(&self.catalog)
    }

    /// Replace the whole filter state
    pub fn set_filters(&mut self, filters: SearchFilters) {
        self.filters = filters;
        self.recompute();
        self.publish();
    }

    /// Apply a single-field update
    ///
    /// Always replaces, recomputes, and publishes, even when the new value
    /// equals the old one.
    pub fn update_filter(&mut self, update: FilterUpdate) {
        self.filters = self.filters.with(update);
        self.recompute();
        self.publish();
    }

    /// Reset price bounds and condition set; category, distance, sort, and
    /// query survive
    pub fn clear_filters(&mut self) {
        self.filters = self.filters.cleared();
        self.recompute();
        self.publish();
    }

    /// Change the session's category narrowing (None or "" = all categories)
    pub fn set_active_category(&mut self, category: Option<String>) {
        self.active_category = category.filter(|c| !c.is_empty());
        self.recompute();
        self.publish();
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        if self.view_mode == mode {
            return;
        }
        self.view_mode = mode;
        self.publish();
    }

    /// Open the filter panel; a no-op when already open
    pub fn open_panel(&mut self) {
        if self.panel_open {
            return;
        }
        self.panel_open = true;
        self.publish();
    }

    /// Close the filter panel; a no-op when already closed
    ///
    /// Filters are applied live while the panel is open, so closing changes
    /// nothing about the result set.
    pub fn close_panel(&mut self) {
        if !self.panel_open {
            return;
        }
        self.panel_open = false;
        self.publish();
    }

    /// Attach an observer; it is notified after each subsequent mutation
    pub fn subscribe(&mut self, observer: impl DiscoveryObserver + 'static) {
        self.subscribers.push(Box::new(observer));
    }

    /// Install the listing action hooks
    pub fn set_actions(&mut self, actions: Box<dyn ListingActions>) {
        self.actions = actions;
    }

    /// Forward a save request; no controller state changes
    pub fn save_listing(&mut self, listing_id: &str) {
        self.actions.on_save(listing_id);
    }

    /// Forward a message-seller request; no controller state changes
    pub fn message_seller(&mut self, listing: &Listing) {
        self.actions.on_message(listing);
    }

    /// Forward a listing selection; no controller state changes
    pub fn select_listing(&mut self, listing: &Listing) {
        self.actions.on_select(listing);
    }

    fn snapshot(&self) -> DiscoverySnapshot<'_> {
        DiscoverySnapshot {
            results: &self.results,
            filters: &self.filters,
            active_category: self.active_category.as_deref(),
            view_mode: self.view_mode,
            panel_open: self.panel_open,
        }
    }

    fn recompute(&mut self) {
        let mut results = filtering::filter_listings(
            &self.catalog,
            &self.filters,
            self.active_category.as_deref(),
        );
        sorting::sort_listings(&mut results, self.filters.sort_by, self.unknown_distance);
        self.results = results;
    }

    fn publish(&mut self) {
        if self.subscribers.is_empty() {
            return;
        }

        // Subscribers are taken out for the duration of the walk so each one
        // can borrow the controller state through the snapshot
        let mut subscribers = std::mem::take(&mut self.subscribers);
        for subscriber in &mut subscribers {
            subscriber.discovery_changed(self.snapshot());
        }
        self.subscribers = subscribers;
    }
}
