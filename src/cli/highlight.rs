//! Highlight command implementation.
//!
//! Writes `<stem>_Highlight.<ext>` next to each already upscaled sheet.

use std::path::PathBuf;

use clap::Args;
use rayon::prelude::*;

use crate::discovery::{is_texture, scan_textures};
use crate::error::{FurnishError, Result};
use crate::highlight::generate_highlight;
use crate::output::{display_path, plural, Printer};
use crate::transform::DEFAULT_ALPHA_THRESHOLD;

/// Write highlight masks for already upscaled tile sheets
#[derive(Args, Debug)]
pub struct HighlightArgs {
    /// Sheets or directories of sheets
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Alpha below which a pixel is background when outlining
    #[arg(long, default_value_t = DEFAULT_ALPHA_THRESHOLD)]
    pub alpha_threshold: u8,
}

/// Expand directories into their texture files.
fn collect_sheets(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut sheets = Vec::new();
    for path in paths {
        if path.is_dir() {
            sheets.extend(scan_textures(path)?);
        } else if is_texture(path) {
            sheets.push(path.clone());
        }
    }
    Ok(sheets)
}

pub fn run(args: HighlightArgs, printer: &Printer) -> Result<()> {
    let sheets = collect_sheets(&args.paths)?;
    if sheets.is_empty() {
        return Err(FurnishError::Build {
            message: "No sheets found".to_string(),
            help: Some("Pass .png, .jpg or .jpeg files, or directories containing them".to_string()),
        });
    }

    let results: Vec<Result<PathBuf>> = sheets
        .par_iter()
        .map(|sheet| generate_highlight(sheet, args.alpha_threshold))
        .collect();

    let mut failed = 0;
    for (sheet, result) in sheets.iter().zip(results) {
        match result {
            Ok(out) => printer.status("Outlined", &display_path(&out)),
            Err(e) => {
                printer.error("Skipping", &format!("{}: {}", display_path(sheet), e));
                failed += 1;
            }
        }
    }

    printer.status(
        "Finished",
        &plural(sheets.len() - failed, "highlight", "highlights"),
    );

    if failed > 0 {
        return Err(FurnishError::Build {
            message: format!("{} failed", plural(failed, "sheet", "sheets")),
            help: None,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_collect_sheets() {
        let dir = tempdir().unwrap();
        for name in ["Bed.png", "Bed_Highlight.png", "readme.md"] {
            fs::write(dir.path().join(name), b"").unwrap();
        }
        let single = dir.path().join("Lamp.jpg");
        fs::write(&single, b"").unwrap();

        let sheets = collect_sheets(&[dir.path().to_path_buf()]).unwrap();
        assert_eq!(sheets.len(), 2);

        let sheets = collect_sheets(&[single.clone(), dir.path().join("readme.md")]).unwrap();
        assert_eq!(sheets, vec![single]);
    }

    #[test]
    fn test_run_without_sheets() {
        let dir = tempdir().unwrap();
        let args = HighlightArgs {
            paths: vec![dir.path().to_path_buf()],
            alpha_threshold: DEFAULT_ALPHA_THRESHOLD,
        };
        assert!(run(args, &Printer::plain()).is_err());
    }
}
