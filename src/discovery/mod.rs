//! Source texture discovery for furnish projects.
//!
//! Finds item icons and tile sheets, either in directories given directly
//! or through a `furnish.yaml` manifest, and pairs them into items.
//!
//! # Example
//!
//! ```ignore
//! use furnish::discovery::discover;
//!
//! let result = discover("art/items", "art/tiles")?;
//! for item in &result.matches.matched {
//!     let item = item.load("")?;
//! }
//! ```

mod manifest;
mod matcher;
mod naming;

use std::path::{Path, PathBuf};

use crate::error::Result;

pub use manifest::Manifest;
pub use matcher::{match_textures, scan_textures, MatchResult, MatchedItem};
pub use naming::{is_texture, parse_variant, TextureName, HIGHLIGHT_SUFFIX, TEXTURE_EXTENSIONS};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "furnish.yaml";

/// Result of discovering textures.
#[derive(Debug)]
pub struct DiscoveryResult {
    pub items: Vec<PathBuf>,
    pub tiles: Vec<PathBuf>,
    pub matches: MatchResult,
}

/// Scan an item directory and a tile directory and pair their files.
pub fn discover(items_dir: impl AsRef<Path>, tiles_dir: impl AsRef<Path>) -> Result<DiscoveryResult> {
    let items = scan_textures(items_dir.as_ref())?;
    let tiles = scan_textures(tiles_dir.as_ref())?;
    let matches = match_textures(&items, &tiles);

    Ok(DiscoveryResult {
        items,
        tiles,
        matches,
    })
}

/// Load `furnish.yaml` from `root`, or defaults when there is none.
///
/// Returns the manifest and whether a file was found.
pub fn load_manifest(root: &Path) -> Result<(Manifest, bool)> {
    let path = root.join(MANIFEST_FILENAME);
    if path.exists() {
        Ok((Manifest::load(&path)?, true))
    } else {
        Ok((Manifest::default(), false))
    }
}
