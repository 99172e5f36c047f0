//! Core domain types for furnish.
//!
//! - `PixelBuffer` - owned RGBA grid every transform operates on
//! - `SpriteClass` - furniture categories and their default frame tables
//! - `FrameLayout` / `FrameGrid` - resolved frame geometry
//! - `LightTint` - light colour scaled per class

mod layout;
mod pixels;
mod sprite_class;
mod tint;

pub use layout::{FrameGrid, FrameLayout, CELL, CELL_PITCH, PARTIAL_CELL};
pub(crate) use layout::{ceil_div, frame_extent, round_half_up};
pub use pixels::{PixelBuffer, Rect, OUTLINE, TRANSPARENT};
pub use sprite_class::{SpriteClass, DOOR_CLOSED_FRAMES};
pub use tint::LightTint;
