//! Output of processed textures.
//!
//! Handles image decoding and encoding, the per-item output file layout and
//! the JSON frame table written next to each tile.

mod item;
mod png;
mod table;

pub use item::{write_item_outputs, OutputDirs};
pub use png::{encode_png, load_png, write_png};
pub use table::write_frame_table;
