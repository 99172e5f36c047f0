//! Frame table sidecar output.

use std::fs;
use std::path::Path;

use crate::engine::FrameTable;
use crate::error::{FurnishError, Result};

/// Write a frame table as pretty-printed JSON.
pub fn write_frame_table(table: &FrameTable, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(table).map_err(|e| FurnishError::Build {
        message: format!("Failed to serialize frame table: {}", e),
        help: None,
    })?;
    fs::write(path, json).map_err(|e| FurnishError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write frame table: {}", e),
    })?;
    Ok(())
}
