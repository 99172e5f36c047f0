//! furnish - Furniture sprite sheet texture generator
//!
//! A library for turning furniture item icons and tile sheets into the
//! retiled, 2x upscaled textures and highlight masks a tile-based game
//! engine loads.

pub mod cli;
pub mod discovery;
pub mod engine;
pub mod error;
pub mod highlight;
pub mod output;
pub mod render;
pub mod transform;
pub mod types;
pub mod validation;

pub use discovery::{discover, DiscoveryResult, Manifest, MatchedItem};
pub use engine::{
    process_batch, process_item, BatchEntry, EngineConfig, FrameTable, GenerationItem, ItemOutput,
};
pub use error::{FurnishError, Result};
pub use render::{encode_png, load_png, write_png};
pub use transform::{enlarge, outline, pad, resolve, retile};
pub use types::{FrameLayout, LightTint, PixelBuffer, SpriteClass};
pub use validation::{Diagnostic, Severity, ValidationResult};
