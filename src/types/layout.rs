//! Frame layout and per-buffer cell grid.

use serde::Serialize;

/// Base tile size of the target engine.
pub const CELL: u32 = 8;

/// Height of the bottom cell row when the sheet carries a partial row.
pub const PARTIAL_CELL: u32 = 9;

/// Cell pitch in retiled sheets (one cell plus its gutter).
pub const CELL_PITCH: u32 = CELL + 1;

/// `Math.round` semantics: halves round towards positive infinity.
pub(crate) fn round_half_up(numerator: i64, denominator: i64) -> i64 {
    if denominator == 0 {
        return 0;
    }
    (numerator as f64 / denominator as f64 + 0.5).floor() as i64
}

pub(crate) fn ceil_div(numerator: u32, denominator: u32) -> u32 {
    if denominator == 0 {
        return 0;
    }
    numerator.div_ceil(denominator)
}

/// Frame geometry resolved from a source sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameLayout {
    pub frame_count_x: u32,
    pub frame_count_y: u32,
    pub cell_width: u32,
    pub cell_height: u32,
    /// The bottom cell row is 9 pixels tall instead of 8.
    pub partial_last_row: bool,
}

impl FrameLayout {
    pub fn frames(&self) -> (u32, u32) {
        (self.frame_count_x, self.frame_count_y)
    }

    /// Measure a buffer of the given size with this layout's frame counts.
    pub fn grid(&self, width: u32, height: u32) -> FrameGrid {
        FrameGrid::measure(
            width,
            height,
            self.frame_count_x,
            self.frame_count_y,
            self.partial_last_row,
        )
    }

    /// Measure a buffer with overridden frame counts.
    pub fn grid_with_frames(&self, width: u32, height: u32, frames: (u32, u32)) -> FrameGrid {
        FrameGrid::measure(width, height, frames.0, frames.1, self.partial_last_row)
    }
}

/// Frame size in pixels for `extent` split into `count` frames with a
/// 1px gutter between neighbours. Negative sizes clamp to zero.
pub(crate) fn frame_extent(extent: u32, count: u32) -> u32 {
    let count = count.max(1) as i64;
    round_half_up(extent as i64 - count + 1, count).max(0) as u32
}

/// Cell bookkeeping for one concrete buffer.
///
/// Frames are anchored to the bottom edge of the sheet; rows count upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameGrid {
    pub frames_x: u32,
    pub frames_y: u32,
    pub cell_width: u32,
    pub cell_height: u32,
    /// 8px cells per frame, horizontally.
    pub cells_x: u32,
    /// 8px (or 9px for the partial bottom row) cells per frame, vertically.
    pub cells_y: u32,
    pub partial_last_row: bool,
    height: u32,
}

impl FrameGrid {
    pub fn measure(width: u32, height: u32, frames_x: u32, frames_y: u32, partial: bool) -> Self {
        let cell_width = frame_extent(width, frames_x);
        let cell_height = frame_extent(height, frames_y);
        let cells_y = if partial {
            cell_height / CELL
        } else {
            ceil_div(cell_height, CELL)
        };

        Self {
            frames_x: frames_x.max(1),
            frames_y: frames_y.max(1),
            cell_width,
            cell_height,
            cells_x: ceil_div(cell_width, CELL),
            cells_y,
            partial_last_row: partial,
            height,
        }
    }

    /// At least one cell per frame in each direction.
    pub fn has_cells(&self) -> bool {
        self.cells_x > 0 && self.cells_y > 0
    }

    /// Top-left corner of frame `(x, y)` in the source sheet.
    pub fn frame_origin(&self, x: u32, y: u32) -> (i64, i64) {
        let (x, y) = (x as i64, y as i64);
        let base_x = self.cell_width as i64 * x + x;
        let base_y = self.height as i64 - self.cell_height as i64 * (y + 1) - y;
        (base_x, base_y)
    }

    /// Size of the retiled sheet.
    pub fn retiled_size(&self) -> (u32, u32) {
        (
            self.frames_x * CELL_PITCH * self.cells_x,
            self.frames_y * CELL_PITCH * self.cells_y,
        )
    }

    /// Height of sub-cell row `ny` in the retiled sheet.
    pub fn cell_row_height(&self, ny: u32) -> u32 {
        if self.partial_last_row && ny + 1 == self.cells_y {
            PARTIAL_CELL
        } else {
            CELL
        }
    }

    /// Per-row tile heights in the 2x output, e.g. `[16, 16, 18]`.
    pub fn coordinate_heights(&self) -> Vec<u32> {
        let mut heights = vec![CELL * 2; self.cells_y as usize];
        if self.partial_last_row {
            if let Some(last) = heights.last_mut() {
                *last = PARTIAL_CELL * 2;
            }
        }
        heights
    }
}
