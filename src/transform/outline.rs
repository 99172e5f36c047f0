//! Outline (highlight) mask extraction.
//!
//! A flood fill seeded from every border pixel walks the translucent
//! background of a frame. The first opaque pixels it touches form the
//! silhouette edge and are painted opaque white; enclosed regions are never
//! reached.

use std::collections::VecDeque;

use crate::types::{FrameLayout, PixelBuffer, Rect, OUTLINE};

/// Alpha below which a pixel counts as background.
pub const DEFAULT_ALPHA_THRESHOLD: u8 = 25;

/// Outline every frame of a sheet.
///
/// Frames use the same bottom-anchored geometry as retiling; each mask is
/// composited back where its frame was cut from. The result has the size of
/// `buffer`.
pub fn outline(
    buffer: &PixelBuffer,
    layout: &FrameLayout,
    frames_x: u32,
    frames_y: u32,
    alpha_threshold: u8,
) -> PixelBuffer {
    let grid = layout.grid_with_frames(buffer.width(), buffer.height(), (frames_x, frames_y));
    let mut highlight = PixelBuffer::new(buffer.width(), buffer.height());

    for x in 0..grid.frames_x {
        for y in 0..grid.frames_y {
            let (sx, sy) = grid.frame_origin(x, y);
            let frame = buffer.crop(Rect::new(sx, sy, grid.cell_width, grid.cell_height));
            let mask = outline_frame(&frame, alpha_threshold);
            highlight.overlay(&mask, sx, sy);
        }
    }

    highlight
}

/// Outline a single frame.
pub fn outline_frame(frame: &PixelBuffer, alpha_threshold: u8) -> PixelBuffer {
    let (width, height) = frame.dimensions();
    let mut mask = PixelBuffer::new(width, height);
    if frame.is_empty() {
        return mask;
    }

    let (w, h) = (width as usize, height as usize);
    let mut visited = vec![false; w * h];
    let mut queue: VecDeque<usize> = VecDeque::with_capacity(2 * (w + h));

    for x in 0..w {
        queue.push_back(x);
        queue.push_back((h - 1) * w + x);
    }
    for y in 1..h.saturating_sub(1) {
        queue.push_back(y * w);
        queue.push_back(y * w + w - 1);
    }

    while let Some(index) = queue.pop_front() {
        if visited[index] {
            continue;
        }
        visited[index] = true;

        let (x, y) = (index % w, index / w);
        if frame.alpha(x as u32, y as u32) >= alpha_threshold {
            mask.put(x as i64, y as i64, OUTLINE);
            continue;
        }

        if y > 0 && !visited[index - w] {
            queue.push_back(index - w);
        }
        if y + 1 < h && !visited[index + w] {
            queue.push_back(index + w);
        }
        if x > 0 && !visited[index - 1] {
            queue.push_back(index - 1);
        }
        if x + 1 < w && !visited[index + 1] {
            queue.push_back(index + 1);
        }
    }

    mask
}
