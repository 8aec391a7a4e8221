//! Utility functions

use std::path::PathBuf;

/// Get the path to the debug log file
pub fn get_debug_log_path() -> PathBuf {
    std::env::temp_dir().join("markettui-debug.log")
}
