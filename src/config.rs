//! Configuration
//!
//! Optional YAML config file. Every field has a default, so running with no
//! file at all works fine.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::logic::input::clamp_distance;
use crate::logic::sorting::DistanceRank;
use crate::model::filters::DEFAULT_DISTANCE;
use crate::{SortOrder, ViewMode};

fn default_view_mode() -> String {
    ViewMode::Grid.as_str().to_string()
}

fn default_sort() -> String {
    SortOrder::Newest.as_str().to_string()
}

fn default_distance() -> u32 {
    DEFAULT_DISTANCE
}

fn default_unknown_distance() -> String {
    DistanceRank::Nearest.as_str().to_string()
}

/// Settings read from the config file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Path to a catalog JSON file; the built-in sample is used when unset
    #[serde(default)]
    pub catalog: Option<String>,
    /// Initial view mode: "grid" or "list"
    #[serde(default = "default_view_mode")]
    pub view_mode: String,
    /// Initial sort order name; an unrecognized name keeps catalog order
    #[serde(default = "default_sort")]
    pub default_sort: String,
    /// Initial distance cap in miles (1-50)
    #[serde(default = "default_distance")]
    pub distance: u32,
    /// Ranking for listings without a distance under the nearest sort:
    /// "nearest" or "farthest"
    #[serde(default = "default_unknown_distance")]
    pub unknown_distance: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: None,
            view_mode: default_view_mode(),
            default_sort: default_sort(),
            distance: default_distance(),
            unknown_distance: default_unknown_distance(),
        }
    }
}

impl Config {
    /// Initial view mode, falling back to grid for unknown names
    pub fn initial_view_mode(&self) -> ViewMode {
        ViewMode::parse(&self.view_mode).unwrap_or(ViewMode::Grid)
    }

    /// Initial sort order; `None` means "keep catalog order"
    pub fn initial_sort(&self) -> Option<SortOrder> {
        SortOrder::parse(&self.default_sort)
    }

    /// Distance cap clamped to the supported range
    pub fn initial_distance(&self) -> u32 {
        clamp_distance(self.distance)
    }

    pub fn unknown_distance_rank(&self) -> DistanceRank {
        DistanceRank::parse(&self.unknown_distance).unwrap_or_default()
    }
}

/// Locate the config file
///
/// An explicit path wins, then the platform config directory, then the
/// working directory. Probed locations are skipped when absent; only an
/// explicit path is expected to exist.
pub fn resolve_config_path(cli_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = cli_path {
        return Some(path);
    }

    if let Some(dir) = dirs::config_dir() {
        let candidate = dir.join("markettui").join("config.yaml");
        if candidate.exists() {
            return Some(candidate);
        }
    }

    let local = PathBuf::from("config.yaml");
    if local.exists() {
        return Some(local);
    }

    None
}

/// Load configuration, falling back to defaults when no file is found
pub fn load_config(cli_path: Option<PathBuf>) -> Result<Config> {
    match resolve_config_path(cli_path) {
        Some(path) => read_config(&path),
        None => Ok(Config::default()),
    }
}

fn read_config(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_config(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse YAML config contents; an empty document yields the defaults
pub fn parse_config(contents: &str) -> Result<Config> {
    if contents.trim().is_empty() {
        return Ok(Config::default());
    }
    let config = serde_yaml::from_str(contents)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.catalog, None);
        assert_eq!(config.view_mode, "grid");
        assert_eq!(config.default_sort, "newest");
        assert_eq!(config.distance, 25);
        assert_eq!(config.unknown_distance, "nearest");
    }

    #[test]
    fn test_parse_empty_document_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.default_sort, "newest");

        let config = parse_config("   \n").unwrap();
        assert_eq!(config.distance, 25);
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
catalog: /tmp/listings.json
view-mode: list
default-sort: price-low
distance: 10
unknown-distance: farthest
"#;
        let config = parse_config(yaml).unwrap();
        assert_eq!(config.catalog.as_deref(), Some("/tmp/listings.json"));
        assert_eq!(config.initial_view_mode(), ViewMode::List);
        assert_eq!(config.initial_sort(), Some(SortOrder::PriceLow));
        assert_eq!(config.initial_distance(), 10);
        assert_eq!(config.unknown_distance_rank(), DistanceRank::Farthest);
    }

    #[test]
    fn test_parse_partial_config_fills_defaults() {
        let config = parse_config("default-sort: nearest\n").unwrap();
        assert_eq!(config.initial_sort(), Some(SortOrder::Nearest));
        assert_eq!(config.catalog, None);
        assert_eq!(config.view_mode, "grid");
        assert_eq!(config.distance, 25);
    }

    #[test]
    fn test_unrecognized_sort_name_means_catalog_order() {
        let config = parse_config("default-sort: oldest\n").unwrap();
        assert_eq!(config.initial_sort(), None);
    }

    #[test]
    fn test_unrecognized_view_mode_falls_back_to_grid() {
        let config = parse_config("view-mode: carousel\n").unwrap();
        assert_eq!(config.initial_view_mode(), ViewMode::Grid);
    }

    #[test]
    fn test_out_of_range_distance_clamped() {
        let config = parse_config("distance: 500\n").unwrap();
        assert_eq!(config.initial_distance(), 50);

        let config = parse_config("distance: 0\n").unwrap();
        assert_eq!(config.initial_distance(), 1);
    }

    #[test]
    fn test_unrecognized_unknown_distance_defaults_nearest() {
        let config = parse_config("unknown-distance: sideways\n").unwrap();
        assert_eq!(config.unknown_distance_rank(), DistanceRank::Nearest);
    }
}
