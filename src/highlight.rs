//! Highlight masks for sheets that are already retiled and upscaled.
//!
//! Such sheets place 16px tiles on an 18px pitch. The tiles of each frame
//! are packed back into an 8px canvas, outlined, and scattered back at 2x.
//! The frame count is chosen from the file name.

use std::path::{Path, PathBuf};

use crate::discovery::{TextureName, HIGHLIGHT_SUFFIX};
use crate::error::Result;
use crate::render::{load_png, write_png};
use crate::transform::{chest_prepare, chest_recover, outline_frame, restore_interval, strip_interval};
use crate::types::PixelBuffer;

/// Frames per sheet by lowercase stem suffix. The first match wins.
const FRAME_TABLE: [(&str, u32); 12] = [
    ("bathtub", 2),
    ("bed", 2),
    ("candelabra", 2),
    ("candle", 2),
    ("chair", 2),
    ("chandelier", 2),
    ("door", 2),
    ("doorclosed", 3),
    ("lamp", 2),
    ("lantern", 2),
    ("toilet", 2),
    ("clock", 1),
];

/// Number of frames in a sheet named `stem`. Unknown names have one.
///
/// Only the part before the first `_` is matched, so variant sheets such as
/// `Bed_Type1` get the frame count of their class instead of falling back
/// to one.
pub fn frames_for_stem(stem: &str) -> u32 {
    let lowered = TextureName::parse(stem).start.to_lowercase();
    FRAME_TABLE
        .iter()
        .find(|(suffix, _)| lowered.ends_with(suffix))
        .map_or(1, |&(_, frames)| frames)
}

/// Whether `stem` names a chest sheet.
pub fn is_chest(stem: &str) -> bool {
    TextureName::parse(stem).start.to_lowercase().ends_with("chest")
}

/// Build the highlight mask of an upscaled sheet named `stem`.
///
/// The result has the size of `sheet`.
pub fn highlight_sheet(sheet: &PixelBuffer, stem: &str, alpha_threshold: u8) -> PixelBuffer {
    let (width, height) = sheet.dimensions();

    if is_chest(stem) {
        let masks: Vec<PixelBuffer> = chest_prepare(sheet)
            .iter()
            .map(|cell| outline_frame(cell, alpha_threshold))
            .collect();
        chest_recover(&masks, width, height)
    } else {
        let masks: Vec<PixelBuffer> = strip_interval(sheet, frames_for_stem(stem))
            .iter()
            .map(|canvas| outline_frame(canvas, alpha_threshold))
            .collect();
        restore_interval(&masks, width, height)
    }
}

/// Output path for a sheet's highlight: `<stem>_Highlight.<ext>` alongside it.
pub fn highlight_path(path: &Path) -> Option<PathBuf> {
    let stem = path.file_stem()?.to_str()?;
    let name = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}{}.{}", stem, HIGHLIGHT_SUFFIX, ext),
        None => format!("{}{}", stem, HIGHLIGHT_SUFFIX),
    };
    Some(path.with_file_name(name))
}

/// Generate and write the highlight for one sheet. Returns the written path.
pub fn generate_highlight(path: &Path, alpha_threshold: u8) -> Result<PathBuf> {
    let sheet = load_png(path)?;
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();

    let out_path = highlight_path(path).unwrap_or_else(|| path.with_extension("highlight.png"));
    write_png(&highlight_sheet(&sheet, stem, alpha_threshold), &out_path)?;

    Ok(out_path)
}
