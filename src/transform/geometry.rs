//! Frame geometry resolution.

use crate::types::{frame_extent, FrameLayout, SpriteClass, CELL};

/// Resolve the frame layout of a raw tile sheet.
///
/// Never fails: classes without a table entry fall back to a single frame.
pub fn resolve(class: SpriteClass, raw_width: u32, raw_height: u32) -> FrameLayout {
    let partial_last_row = raw_height % CELL == 1;

    let (frame_count_x, frame_count_y) = match class {
        // Closed, opening and open rows
        SpriteClass::Chest => (raw_width % CELL + 1, 3),
        other => other.default_frames().unwrap_or((1, 1)),
    };

    FrameLayout {
        frame_count_x,
        frame_count_y,
        cell_width: frame_extent(raw_width, frame_count_x),
        cell_height: frame_extent(raw_height, frame_count_y),
        partial_last_row,
    }
}
