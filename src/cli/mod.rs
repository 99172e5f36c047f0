pub mod completions;
pub mod generate;
pub mod highlight;
pub mod init;
pub mod list;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::discovery::{load_manifest, Manifest};
use crate::error::Result;

/// furnish - Furniture sprite sheet texture generator
#[derive(Parser, Debug)]
#[command(name = "furnish")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Only print warnings and errors
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Retile, outline and upscale item and tile textures
    Generate(generate::GenerateArgs),

    /// Write highlight masks for already upscaled tile sheets
    Highlight(highlight::HighlightArgs),

    /// List items and the tile files paired with them
    List(list::ListArgs),

    /// Initialize a furnish project (generates furnish.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Project location and manifest overrides shared by commands that discover
/// textures.
#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    /// Project directory containing furnish.yaml (default: current directory)
    #[arg(long, default_value = ".")]
    pub project: PathBuf,

    /// Directory of item icons
    #[arg(long)]
    pub items: Option<PathBuf>,

    /// Directory of tile sheets
    #[arg(long)]
    pub tiles: Option<PathBuf>,
}

impl ProjectArgs {
    /// Load the project manifest and apply directory overrides.
    pub fn manifest(&self) -> Result<Manifest> {
        let (mut manifest, _) = load_manifest(&self.project)?;
        if let Some(items) = &self.items {
            manifest.items = items.clone();
        }
        if let Some(tiles) = &self.tiles {
            manifest.tiles = tiles.clone();
        }
        Ok(manifest)
    }
}
