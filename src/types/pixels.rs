//! Owned RGBA pixel buffer.
//!
//! Every transform in the engine reads and writes `PixelBuffer`s. Blits
//! follow canvas `drawImage` semantics with smoothing disabled: source reads
//! outside the buffer are transparent and destination writes are clipped.

use image::{Rgba, RgbaImage};

use crate::error::{FurnishError, Result};

/// Fully transparent black.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Opaque white, the only colour an outline mask contains.
pub const OUTLINE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// A rectangle in pixel space. The origin may lie outside a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: i64, y: i64, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
}

/// An owned 2D grid of RGBA samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    image: RgbaImage,
}

impl PixelBuffer {
    /// Allocate a fully transparent buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    /// Allocate a buffer filled with a single colour.
    pub fn filled(width: u32, height: u32, colour: Rgba<u8>) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, colour),
        }
    }

    /// Build a buffer from raw RGBA samples.
    ///
    /// Fails when `samples.len() != width * height * 4`.
    pub fn from_raw(width: u32, height: u32, samples: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if samples.len() != expected {
            return Err(FurnishError::Image {
                message: format!(
                    "Expected {} samples for a {}x{} buffer, got {}",
                    expected,
                    width,
                    height,
                    samples.len()
                ),
            });
        }

        RgbaImage::from_raw(width, height, samples)
            .map(Self::from_image)
            .ok_or_else(|| FurnishError::Image {
                message: format!("Invalid {}x{} sample buffer", width, height),
            })
    }

    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// True when either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// The raw RGBA samples, row-major.
    pub fn samples(&self) -> &[u8] {
        self.image.as_raw()
    }

    #[inline]
    fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.width() as i64 && y < self.height() as i64
    }

    /// Read a pixel, returning transparent outside the buffer.
    #[inline]
    pub fn get(&self, x: i64, y: i64) -> Rgba<u8> {
        if self.contains(x, y) {
            *self.image.get_pixel(x as u32, y as u32)
        } else {
            TRANSPARENT
        }
    }

    /// Alpha of an in-bounds pixel.
    #[inline]
    pub fn alpha(&self, x: u32, y: u32) -> u8 {
        self.image.get_pixel(x, y)[3]
    }

    /// Write a pixel, ignoring writes outside the buffer.
    #[inline]
    pub fn put(&mut self, x: i64, y: i64, colour: Rgba<u8>) {
        if self.contains(x, y) {
            self.image.put_pixel(x as u32, y as u32, colour);
        }
    }

    /// Copy a rectangle into a new buffer of exactly `rect.w` x `rect.h`.
    pub fn crop(&self, rect: Rect) -> PixelBuffer {
        let mut out = PixelBuffer::new(rect.w, rect.h);
        out.copy_region(self, rect, 0, 0);
        out
    }

    /// Copy `src_rect` from `src` 1:1 with its top-left at `(dx, dy)`.
    pub fn copy_region(&mut self, src: &PixelBuffer, src_rect: Rect, dx: i64, dy: i64) {
        for y in 0..src_rect.h as i64 {
            for x in 0..src_rect.w as i64 {
                let sx = src_rect.x + x;
                let sy = src_rect.y + y;
                if !src.contains(sx, sy) {
                    continue;
                }
                self.put(dx + x, dy + y, src.get(sx, sy));
            }
        }
    }

    /// Nearest-neighbour copy of `src_rect` stretched into `dst_rect`.
    ///
    /// Each destination pixel samples the source pixel under its centre.
    pub fn draw_scaled(&mut self, src: &PixelBuffer, src_rect: Rect, dst_rect: Rect) {
        if dst_rect.w == 0 || dst_rect.h == 0 {
            return;
        }

        let (sw, sh) = (src_rect.w as i64, src_rect.h as i64);
        let (dw, dh) = (dst_rect.w as i64, dst_rect.h as i64);

        for y in 0..dh {
            let sy = src_rect.y + (2 * y + 1) * sh / (2 * dh);
            for x in 0..dw {
                let sx = src_rect.x + (2 * x + 1) * sw / (2 * dw);
                if !src.contains(sx, sy) {
                    continue;
                }
                self.put(dst_rect.x + x, dst_rect.y + y, src.get(sx, sy));
            }
        }
    }

    /// Paint every non-transparent pixel of `src` with its top-left at
    /// `(dx, dy)`, leaving the rest of this buffer untouched.
    pub fn overlay(&mut self, src: &PixelBuffer, dx: i64, dy: i64) {
        for (x, y, pixel) in src.image.enumerate_pixels() {
            if pixel[3] != 0 {
                self.put(dx + x as i64, dy + y as i64, *pixel);
            }
        }
    }

    /// Count pixels with non-zero alpha.
    pub fn opaque_count(&self) -> usize {
        self.image.pixels().filter(|p| p[3] != 0).count()
    }
}

impl From<RgbaImage> for PixelBuffer {
    fn from(image: RgbaImage) -> Self {
        Self::from_image(image)
    }
}
