//! File system utilities

use std::path::Path;

use crate::core::models::AppResult;

/// Ensure directory exists
pub fn ensure_dir_exists(path: &Path) -> AppResult<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
