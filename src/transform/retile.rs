//! Frame retiling.
//!
//! Splits each frame of a sheet into 8x8 cells (8x9 on a partial bottom
//! row) and lays them out with a 1px gutter between every cell, keeping
//! frames anchored to the bottom edge.

use crate::types::{FrameLayout, PixelBuffer, Rect, CELL, CELL_PITCH};

/// Retile a sheet using the layout's frame counts, or `frames` when given.
///
/// Cell sizes are measured from `buffer` itself, so a padded sheet retiles
/// on its aligned grid.
pub fn retile(
    buffer: &PixelBuffer,
    layout: &FrameLayout,
    frames: Option<(u32, u32)>,
) -> PixelBuffer {
    let frames = frames.unwrap_or_else(|| layout.frames());
    let grid = layout.grid_with_frames(buffer.width(), buffer.height(), frames);

    let (out_w, out_h) = grid.retiled_size();
    let mut out = PixelBuffer::new(out_w, out_h);

    let pitch = CELL_PITCH as i64;
    for x in 0..grid.frames_x {
        for y in 0..grid.frames_y {
            let (base_x, base_y) = grid.frame_origin(x, y);
            let draw_x = (grid.cells_x * x) as i64 * pitch;
            let draw_y = out_h as i64 - (grid.cells_y * (y + 1)) as i64 * pitch;

            for nx in 0..grid.cells_x {
                for ny in 0..grid.cells_y {
                    let src = Rect::new(
                        base_x + (nx * CELL) as i64,
                        base_y + (ny * CELL) as i64,
                        CELL,
                        grid.cell_row_height(ny),
                    );
                    let dx = draw_x + nx as i64 * pitch;
                    let dy = draw_y + ny as i64 * pitch;
                    out.copy_region(buffer, src, dx, dy);
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::resolve;
    use crate::types::SpriteClass;
    use image::Rgba;
    use pretty_assertions::assert_eq;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

    #[test]
    fn test_retile_single_cell() {
        let buf = PixelBuffer::filled(8, 8, RED);
        let layout = resolve(SpriteClass::Clock, 8, 8);
        let out = retile(&buf, &layout, None);

        assert_eq!(out.dimensions(), (9, 9));
        assert_eq!(out.get(7, 7), RED);
        assert_eq!(out.get(8, 0)[3], 0);
        assert_eq!(out.get(0, 8)[3], 0);
    }

    #[test]
    fn test_retile_inserts_gutters() {
        // 16x16 single frame -> 2x2 cells with gutters
        let buf = PixelBuffer::filled(16, 16, RED);
        let layout = resolve(SpriteClass::Table, 16, 16);
        let out = retile(&buf, &layout, None);

        assert_eq!(out.dimensions(), (18, 18));
        assert_eq!(out.get(8, 3)[3], 0);
        assert_eq!(out.get(3, 8)[3], 0);
        assert_eq!(out.get(9, 9), RED);
        assert_eq!(out.get(16, 16), RED);
        assert_eq!(out.opaque_count(), 16 * 16);
    }

    #[test]
    fn test_retile_partial_last_row() {
        // Two 16x17 frames with a gutter; bottom row is 9px tall
        let mut buf = PixelBuffer::filled(33, 17, RED);
        for y in 0..17 {
            buf.put(16, y, Rgba([0, 0, 0, 0]));
        }
        let layout = resolve(SpriteClass::Door, 33, 17);
        assert!(layout.partial_last_row);

        let out = retile(&buf, &layout, None);
        assert_eq!(out.dimensions(), (36, 18));

        // Top cell row 0..8, gutter at 8, partial row 9..18
        assert_eq!(out.get(0, 7), RED);
        assert_eq!(out.get(0, 8)[3], 0);
        assert_eq!(out.get(0, 17), RED);
        assert_eq!(out.opaque_count(), 2 * 16 * 17);
    }

    #[test]
    fn test_retile_orders_frames_left_to_right() {
        let mut buf = PixelBuffer::new(17, 8);
        for y in 0..8 {
            for x in 0..8 {
                buf.put(x, y, RED);
                buf.put(x + 9, y, BLUE);
            }
        }
        let layout = resolve(SpriteClass::Chair, 17, 8);
        let out = retile(&buf, &layout, None);

        assert_eq!(out.dimensions(), (18, 9));
        assert_eq!(out.get(0, 0), RED);
        assert_eq!(out.get(9, 0), BLUE);
    }

    #[test]
    fn test_retile_keeps_frame_rows_in_order() {
        // Two 8x8 frames stacked with a 1px gutter: red on top, blue below
        let mut buf = PixelBuffer::new(8, 17);
        for x in 0..8 {
            for y in 0..8 {
                buf.put(x, y, RED);
                buf.put(x, y + 9, BLUE);
            }
        }
        let layout = resolve(SpriteClass::Table, 8, 8);
        let out = retile(&buf, &layout, Some((1, 2)));

        assert_eq!(out.dimensions(), (9, 18));
        assert_eq!(out.get(0, 0), RED);
        assert_eq!(out.get(7, 7), RED);
        assert_eq!(out.get(0, 8)[3], 0);
        assert_eq!(out.get(0, 9), BLUE);
        assert_eq!(out.get(7, 16), BLUE);
        assert_eq!(out.opaque_count(), 2 * 64);
    }

    #[test]
    fn test_retile_short_frame_leaves_cell_blank() {
        // 8x12 sheet: cell height 12 -> 2 cell rows, the second half empty
        let mut buf = PixelBuffer::new(8, 12);
        buf.put(0, 11, RED);
        let layout = resolve(SpriteClass::Table, 8, 12);
        let out = retile(&buf, &layout, None);

        assert_eq!(out.dimensions(), (9, 18));
        // Last source row lands in the second cell row at offset 11 - 8 = 3
        assert_eq!(out.get(0, 9 + 3), RED);
    }

    #[test]
    fn test_retile_frame_override() {
        let buf = PixelBuffer::filled(26, 8, RED);
        let layout = resolve(SpriteClass::Door, 26, 8);
        let out = retile(&buf, &layout, Some((3, 1)));

        assert_eq!(out.dimensions(), (27, 9));
        assert_eq!(out.opaque_count(), 3 * 64);
    }
}
