//! App Orchestration Methods
//!
//! App implementation methods grouped by domain. Each submodule contains
//! methods that orchestrate between:
//! - The discovery controller (filters, results, view, panel)
//! - Presentation state (selection, input buffers, toasts)
//! - Pure logic functions
//!
//! Methods are kept as `impl App` but organized by functional domain.

pub(crate) mod browse;
pub(crate) mod panel;
