//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - filtering: Listing predicate evaluation against the active filters
//! - formatting: Price, distance, and posted-age display formatting
//! - input: Numeric input sanitizing and distance clamping
//! - layout: Results grid geometry (columns, rows, scroll window)
//! - navigation: Selection movement and restore-by-id calculations
//! - sorting: Listing comparison across sort orders
//! - ui: View-state transitions and cycling

pub mod filtering;
pub mod formatting;
pub mod input;
pub mod layout;
pub mod navigation;
pub mod sorting;
pub mod ui;
