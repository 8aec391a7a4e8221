//! Listing catalog
//!
//! Defines the listing records the discovery pipeline operates on and the
//! loader that reads a catalog from a JSON file. The catalog is read-only
//! input: the pipeline never creates, mutates, or deletes listings.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Item condition reported by the seller
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Condition {
    New,
    LikeNew,
    Good,
    Fair,
    Poor,
}

impl Condition {
    /// All conditions in panel display order
    pub const ALL: [Condition; 5] = [
        Condition::New,
        Condition::LikeNew,
        Condition::Good,
        Condition::Fair,
        Condition::Poor,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Condition::New => "new",
            Condition::LikeNew => "like-new",
            Condition::Good => "good",
            Condition::Fair => "fair",
            Condition::Poor => "poor",
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Condition::New => "New",
            Condition::LikeNew => "Like New",
            Condition::Good => "Good",
            Condition::Fair => "Fair",
            Condition::Poor => "Poor",
        }
    }
}

/// Where the item is offered
///
/// `distance` is precomputed by whatever produced the catalog; listings
/// without one are treated as "distance unknown" and are never excluded by
/// the distance filter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingLocation {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub distance: Option<f64>,
}

/// A marketplace listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Whole currency units, always non-negative
    pub price: u64,
    pub category: String,
    pub condition: Condition,
    #[serde(default)]
    pub seller: String,
    #[serde(default)]
    pub location: ListingLocation,
    pub posted_date: DateTime<Utc>,
}

/// Built-in demo catalog used when no catalog file is configured
const SAMPLE_CATALOG: &str = include_str!("sample_listings.json");

/// Parse a catalog from JSON text (an array of listing objects)
pub fn parse_catalog(data: &str) -> Result<Vec<Listing>> {
    let listings: Vec<Listing> =
        serde_json::from_str(data).context("Failed to parse listing catalog JSON")?;
    Ok(listings)
}

/// Load a catalog from a JSON file
pub fn load_catalog(path: &Path) -> Result<Vec<Listing>> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
    parse_catalog(&data).with_context(|| format!("Invalid catalog file: {}", path.display()))
}

/// The built-in sample catalog
pub fn sample_catalog() -> Result<Vec<Listing>> {
    parse_catalog(SAMPLE_CATALOG).context("Built-in sample catalog is invalid")
}

/// Distinct categories present in a catalog, sorted
pub fn distinct_categories(listings: &[Listing]) -> Vec<String> {
    let mut categories: Vec<String> = listings.iter().map(|l| l.category.clone()).collect();
    categories.sort();
    categories.dedup();
    categories
}
