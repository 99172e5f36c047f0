//! List command implementation.
//!
//! Discovers textures and prints each item with its paired tile files.

use std::path::Path;

use clap::Args;

use crate::discovery::{discover, MatchedItem};
use crate::error::Result;
use crate::output::{plural, Printer};
use crate::render::load_png;
use crate::transform::resolve;

use super::ProjectArgs;

/// List items and the tile files paired with them
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Also decode each tile and show its resolved frame geometry
    #[arg(long)]
    pub geometry: bool,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let manifest = args.project.manifest()?;
    let (items_dir, tiles_dir, _) = manifest.resolve_dirs(&args.project.project);
    let discovery = discover(&items_dir, &tiles_dir)?;

    for matched in &discovery.matches.matched {
        let mut line = describe(matched, printer);
        if args.geometry {
            let tile = load_png(&matched.tile)?;
            let layout = resolve(matched.class, tile.width(), tile.height());
            line.push_str(&printer.dim(&format!(
                " {}x{} frames of {}x{}",
                layout.frame_count_x, layout.frame_count_y, layout.cell_width, layout.cell_height
            )));
        }
        printer.info(matched.class.name(), &line);
    }

    printer.diagnostics(&discovery.matches.diagnostics);
    printer.status(
        "Found",
        &plural(discovery.matches.matched.len(), "item", "items"),
    );

    Ok(())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// One-line summary: item name followed by its tile files.
fn describe(matched: &MatchedItem, printer: &Printer) -> String {
    let mut files = vec![file_name(&matched.tile)];
    files.extend(matched.flame.as_deref().map(file_name));
    files.extend(matched.door_closed.as_deref().map(file_name));

    format!(
        "{} {} {}",
        file_name(&matched.item),
        printer.dim("->"),
        files.join(", ")
    )
}
