//! Gutter removal for upscaled tile sheets.
//!
//! Upscaled sheets place 16px tiles on an 18px pitch. Before outlining,
//! tiles are pulled together (and halved back to 8px) so the flood fill
//! sees each frame without the spacing; the masks are then scattered back
//! to the original positions at 2x.

use crate::types::{ceil_div, round_half_up, PixelBuffer, Rect, CELL, PARTIAL_CELL};

/// Tile pitch in upscaled sheets.
pub const TILE_PITCH: u32 = 18;

/// Edge length of one packed chest cell.
pub const CHEST_CELL: u32 = 17;

const CHEST_PITCH_X: i64 = 36;
const CHEST_PITCH_Y: i64 = 38;

/// One chest quadrant: source offset and height, packed offset and height.
struct Quadrant {
    src: (i64, i64),
    src_h: u32,
    dst: (i64, i64),
    dst_h: u32,
}

const QUADRANTS: [Quadrant; 4] = [
    Quadrant {
        src: (0, 0),
        src_h: 16,
        dst: (0, 0),
        dst_h: CELL,
    },
    Quadrant {
        src: (18, 0),
        src_h: 16,
        dst: (8, 0),
        dst_h: CELL,
    },
    Quadrant {
        src: (0, 18),
        src_h: 18,
        dst: (0, 8),
        dst_h: PARTIAL_CELL,
    },
    Quadrant {
        src: (18, 18),
        src_h: 18,
        dst: (8, 8),
        dst_h: PARTIAL_CELL,
    },
];

fn chest_grid(width: u32, height: u32) -> (u32, u32) {
    (
        ceil_div(ceil_div(width, TILE_PITCH), 2),
        ceil_div(ceil_div(height, TILE_PITCH), 2),
    )
}

/// Pack every 2x2-tile chest frame into a 17x17 cell.
///
/// Cells are ordered column-major: all rows of the first column first.
pub fn chest_prepare(buffer: &PixelBuffer) -> Vec<PixelBuffer> {
    let (cols, rows) = chest_grid(buffer.width(), buffer.height());
    let mut cells = Vec::with_capacity((cols * rows) as usize);

    for x in 0..cols as i64 {
        for y in 0..rows as i64 {
            let (px, py) = (x * CHEST_PITCH_X, y * CHEST_PITCH_Y);
            let mut cell = PixelBuffer::new(CHEST_CELL, CHEST_CELL);
            for q in &QUADRANTS {
                cell.draw_scaled(
                    buffer,
                    Rect::new(px + q.src.0, py + q.src.1, 16, q.src_h),
                    Rect::new(q.dst.0, q.dst.1, CELL, q.dst_h),
                );
            }
            cells.push(cell);
        }
    }

    cells
}

/// Scatter packed chest cells back into a `width` x `height` sheet.
pub fn chest_recover(cells: &[PixelBuffer], width: u32, height: u32) -> PixelBuffer {
    let (cols, rows) = chest_grid(width, height);
    let mut out = PixelBuffer::new(width, height);

    for x in 0..cols {
        for y in 0..rows {
            let Some(cell) = cells.get((y + x * rows) as usize) else {
                continue;
            };
            let (px, py) = (x as i64 * CHEST_PITCH_X, y as i64 * CHEST_PITCH_Y);
            for q in &QUADRANTS {
                out.draw_scaled(
                    cell,
                    Rect::new(q.dst.0, q.dst.1, CELL, q.dst_h),
                    Rect::new(px + q.src.0, py + q.src.1, 16, q.src_h),
                );
            }
        }
    }

    out
}

/// Pack an upscaled multi-frame sheet into one 8px-tile canvas per frame.
///
/// Tiles are assigned to frames by splitting the tile columns evenly.
pub fn strip_interval(buffer: &PixelBuffer, frames: u32) -> Vec<PixelBuffer> {
    let frames = frames.max(1);
    let cols = ceil_div(buffer.width(), TILE_PITCH);
    let rows = ceil_div(buffer.height(), TILE_PITCH);
    let per_frame = round_half_up(cols as i64, frames as i64).max(0) as u32;

    (0..frames)
        .map(|i| {
            let mut canvas = PixelBuffer::new(per_frame * CELL, rows * CELL);
            for x in 0..per_frame {
                for y in 0..rows {
                    let px = ((i * per_frame + x) * TILE_PITCH) as i64;
                    let py = (y * TILE_PITCH) as i64;
                    canvas.draw_scaled(
                        buffer,
                        Rect::new(px, py, 16, 16),
                        Rect::new((x * CELL) as i64, (y * CELL) as i64, CELL, CELL),
                    );
                }
            }
            canvas
        })
        .collect()
}

/// Inverse of [`strip_interval`].
pub fn restore_interval(canvases: &[PixelBuffer], width: u32, height: u32) -> PixelBuffer {
    let mut out = PixelBuffer::new(width, height);
    let Some(first) = canvases.first() else {
        return out;
    };

    let per_frame = first.width() / CELL;
    let rows = first.height() / CELL;

    for (i, canvas) in canvases.iter().enumerate() {
        for x in 0..per_frame {
            for y in 0..rows {
                let dx = ((i as u32 * per_frame + x) * TILE_PITCH) as i64;
                let dy = (y * TILE_PITCH) as i64;
                out.draw_scaled(
                    canvas,
                    Rect::new((x * CELL) as i64, (y * CELL) as i64, CELL, CELL),
                    Rect::new(dx, dy, 16, 16),
                );
            }
        }
    }

    out
}
