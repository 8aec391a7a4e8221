//! Event Handlers
//!
//! Input handling for the main event loop.

pub mod keyboard;
