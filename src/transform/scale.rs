//! Nearest-neighbour upscaling.

use crate::types::PixelBuffer;

/// Scale a buffer by an integer factor.
///
/// Uses nearest-neighbour scaling for crisp pixel art.
pub fn scale(buffer: &PixelBuffer, factor: u32) -> PixelBuffer {
    if factor <= 1 {
        return buffer.clone();
    }

    let mut scaled = PixelBuffer::new(buffer.width() * factor, buffer.height() * factor);

    for (x, y, pixel) in buffer.as_image().enumerate_pixels() {
        for sy in 0..factor {
            for sx in 0..factor {
                let nx = (x * factor + sx) as i64;
                let ny = (y * factor + sy) as i64;
                scaled.put(nx, ny, *pixel);
            }
        }
    }

    scaled
}

/// Double a buffer in both dimensions.
pub fn enlarge(buffer: &PixelBuffer) -> PixelBuffer {
    scale(buffer, 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn gradient(width: u32, height: u32) -> PixelBuffer {
        let mut buf = PixelBuffer::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let v = (y * width + x) as u8;
                buf.put(x as i64, y as i64, Rgba([v, 255 - v, v / 2, 255]));
            }
        }
        buf
    }

    #[test]
    fn test_enlarge_doubles_dimensions() {
        let buf = gradient(5, 3);
        assert_eq!(enlarge(&buf).dimensions(), (10, 6));
    }

    #[test]
    fn test_enlarge_exact_blocks() {
        let buf = gradient(4, 3);
        let big = enlarge(&buf);

        for y in 0..3i64 {
            for x in 0..4i64 {
                let expected = buf.get(x, y);
                for j in 0..2 {
                    for i in 0..2 {
                        assert_eq!(big.get(2 * x + i, 2 * y + j), expected);
                    }
                }
            }
        }
    }

    #[test]
    fn test_scale_one_is_identity() {
        let buf = gradient(3, 3);
        assert_eq!(scale(&buf, 1), buf);
        assert_eq!(scale(&buf, 0), buf);
    }

    #[test]
    fn test_enlarge_empty() {
        let buf = PixelBuffer::new(0, 0);
        assert!(enlarge(&buf).is_empty());
    }
}
