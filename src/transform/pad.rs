//! Horizontal alignment of sheets to the 8px tile grid.

use std::borrow::Cow;

use crate::types::{ceil_div, round_half_up, FrameLayout, PixelBuffer, Rect, CELL};

/// Pad a sheet so its content width (gutters excluded) is a multiple of 8.
///
/// The source is centred in the new margin. Already aligned sheets are
/// returned borrowed.
pub fn pad<'a>(buffer: &'a PixelBuffer, layout: &FrameLayout) -> Cow<'a, PixelBuffer> {
    let gutters = layout.frame_count_x.saturating_sub(1);
    let content = buffer.width() as i64 - gutters as i64;
    if content <= 0 || content % CELL as i64 == 0 {
        return Cow::Borrowed(buffer);
    }

    let content = content as u32;
    let aligned = ceil_div(content, CELL) * CELL;
    let offset = round_half_up((aligned - content) as i64, 2);

    let mut padded = PixelBuffer::new(aligned + gutters, buffer.height());
    padded.copy_region(
        buffer,
        Rect::new(0, 0, buffer.width(), buffer.height()),
        offset,
        0,
    );

    Cow::Owned(padded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::resolve;
    use crate::types::SpriteClass;
    use image::Rgba;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

    #[test]
    fn test_pad_aligned_is_borrowed() {
        let buf = PixelBuffer::filled(33, 16, RED);
        let layout = resolve(SpriteClass::Bed, 33, 16);
        assert!(matches!(pad(&buf, &layout), Cow::Borrowed(_)));
    }

    #[test]
    fn test_pad_centres_content() {
        // Content 12px wide, padded to 16 with 2px either side
        let buf = PixelBuffer::filled(12, 8, RED);
        let layout = resolve(SpriteClass::Table, 12, 8);
        let padded = pad(&buf, &layout);

        assert_eq!(padded.dimensions(), (16, 8));
        assert_eq!(padded.get(1, 0)[3], 0);
        assert_eq!(padded.get(2, 0), RED);
        assert_eq!(padded.get(13, 7), RED);
        assert_eq!(padded.get(14, 7)[3], 0);
    }

    #[test]
    fn test_pad_keeps_gutters() {
        // 2 frames of 15px + gutter = 31; content 30 -> 32, width 33
        let buf = PixelBuffer::filled(31, 16, RED);
        let layout = resolve(SpriteClass::Chair, 31, 16);
        let padded = pad(&buf, &layout);

        assert_eq!(padded.width(), 33);
        assert_eq!(padded.height(), 16);
        assert_eq!(padded.get(0, 0)[3], 0);
        assert_eq!(padded.get(1, 0), RED);
    }

    #[test]
    fn test_pad_odd_margin_rounds_up() {
        // Content 13 -> 16, margin 3, offset round(1.5) = 2
        let buf = PixelBuffer::filled(13, 8, RED);
        let layout = resolve(SpriteClass::Table, 13, 8);
        let padded = pad(&buf, &layout);

        assert_eq!(padded.get(1, 0)[3], 0);
        assert_eq!(padded.get(2, 0), RED);
        assert_eq!(padded.get(14, 0), RED);
        assert_eq!(padded.get(15, 0)[3], 0);
    }

    #[test]
    fn test_pad_idempotent() {
        for width in [9u32, 17, 23, 34, 41] {
            let buf = PixelBuffer::filled(width, 17, RED);
            let layout = resolve(SpriteClass::Door, width, 17);
            let once = pad(&buf, &layout).into_owned();
            let twice = pad(&once, &layout).into_owned();
            assert_eq!(once, twice, "width {}", width);
        }
    }
}
