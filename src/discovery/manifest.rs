//! Project manifest (furnish.yaml) parsing.
//!
//! The manifest names the source directories, the output directory and the
//! defaults applied to every item.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::engine::EngineConfig;
use crate::error::{FurnishError, Result};
use crate::transform::DEFAULT_ALPHA_THRESHOLD;
use crate::types::LightTint;

/// Project manifest loaded from furnish.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Prepended to every output name.
    pub name: String,

    /// Directory of item icons.
    #[serde(default = "default_items")]
    pub items: PathBuf,

    /// Directory of tile sheets and their companions.
    #[serde(default = "default_tiles")]
    pub tiles: PathBuf,

    /// Output directory for generated textures.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Light colour as `"r, g, b"`, in 0-1 or 0-255.
    pub light: Option<String>,

    /// Alpha below which outline extraction treats a pixel as background.
    #[serde(default = "default_alpha_threshold")]
    pub alpha_threshold: u8,
}

fn default_items() -> PathBuf {
    PathBuf::from("items")
}

fn default_tiles() -> PathBuf {
    PathBuf::from("tiles")
}

fn default_output() -> PathBuf {
    PathBuf::from("dist")
}

fn default_alpha_threshold() -> u8 {
    DEFAULT_ALPHA_THRESHOLD
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            name: String::new(),
            items: default_items(),
            tiles: default_tiles(),
            output: default_output(),
            light: None,
            alpha_threshold: default_alpha_threshold(),
        }
    }
}

impl Manifest {
    /// Load manifest from a furnish.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| FurnishError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| FurnishError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check furnish.yaml syntax".to_string()),
        })
    }

    /// Render the manifest as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| FurnishError::Build {
            message: format!("Failed to serialize manifest: {}", e),
            help: None,
        })
    }

    /// Engine settings described by this manifest.
    pub fn engine_config(&self) -> Result<EngineConfig> {
        let light = match &self.light {
            Some(light) => Some(LightTint::parse(light).map_err(|e| FurnishError::Config {
                message: format!("light: {}", e),
                help: Some("Use three comma-separated numbers, e.g. \"255, 200, 120\"".to_string()),
            })?),
            None => None,
        };

        Ok(EngineConfig {
            alpha_threshold: self.alpha_threshold,
            light,
        })
    }

    /// Resolve the manifest's directories against the project root.
    pub fn resolve_dirs(&self, root: &Path) -> (PathBuf, PathBuf, PathBuf) {
        (
            root.join(&self.items),
            root.join(&self.tiles),
            root.join(&self.output),
        )
    }
}
