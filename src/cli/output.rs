//! CLI output: error mapping and exit codes.

use crate::error::ApiError;

/// Baseline recorded, or check found no changes
pub const EXIT_SUCCESS: i32 = 0;
/// Check found added, modified or deleted files
pub const EXIT_CHANGES_DETECTED: i32 = 1;
/// Operational failure (missing root, corrupt baseline, bad config, ...)
pub const EXIT_FAILURE: i32 = 2;

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    format!("Error: {}", e)
}

