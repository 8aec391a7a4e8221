//! Pure presentation and filter state
//!
//! Plain, cloneable state with no I/O:
//!
//! - **filters**: the always-fully-populated `SearchFilters` value and the
//!   typed `FilterUpdate` union used to edit it
//! - **panel**: filter panel form state (focused control, price text buffers)
//! - **ui**: selection, toast feedback, quit flag
//!
//! Derived result state lives in the discovery controller, not here; the UI
//! reads it through controller accessors each frame.

pub mod filters;
pub mod panel;
pub mod ui;

pub use filters::{FilterUpdate, SearchFilters};
pub use panel::{FilterPanelState, PanelControl};
pub use ui::UiModel;
