//! Texture transformation engine.
//!
//! Pure, deterministic operations over `PixelBuffer`s:
//! - `resolve` - infer frame geometry from sheet size and class
//! - `pad` - align sheets to the 8px tile grid
//! - `retile` - split frames into gutter-separated cells
//! - `enlarge` / `scale` - nearest-neighbour upscaling
//! - `outline` - highlight masks via border flood fill
//! - `chest_prepare` / `chest_recover` and `strip_interval` /
//!   `restore_interval` - gutter removal for upscaled sheets

mod geometry;
mod interval;
mod outline;
mod pad;
mod retile;
mod scale;

pub use geometry::resolve;
pub use interval::{
    chest_prepare, chest_recover, restore_interval, strip_interval, CHEST_CELL, TILE_PITCH,
};
pub use outline::{outline, outline_frame, DEFAULT_ALPHA_THRESHOLD};
pub use pad::pad;
pub use retile::retile;
pub use scale::{enlarge, scale};
