//! Generate command implementation.
//!
//! Discovers item and tile textures, processes them in parallel and writes
//! the results under the output directory.

use std::path::{Path, PathBuf};

use clap::Args;
use rayon::prelude::*;

use crate::discovery::{discover, Manifest};
use crate::engine::{process_batch, EngineConfig, GenerationItem};
use crate::error::{FurnishError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::{write_item_outputs, OutputDirs};

use super::ProjectArgs;

/// Retile, outline and upscale item and tile textures
#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Output directory
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Prefix for every output name
    #[arg(long)]
    pub name: Option<String>,

    /// Light colour for light-emitting furniture, e.g. "255, 200, 120"
    #[arg(long)]
    pub light: Option<String>,

    /// Alpha below which a pixel is background when outlining
    #[arg(long)]
    pub alpha_threshold: Option<u8>,
}

impl GenerateArgs {
    fn manifest(&self) -> Result<Manifest> {
        let mut manifest = self.project.manifest()?;
        if let Some(output) = &self.output {
            manifest.output = output.clone();
        }
        if let Some(name) = &self.name {
            manifest.name = name.clone();
        }
        if let Some(light) = &self.light {
            manifest.light = Some(light.clone());
        }
        if let Some(threshold) = self.alpha_threshold {
            manifest.alpha_threshold = threshold;
        }
        Ok(manifest)
    }
}

/// Counts reported at the end of a run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct GenerateSummary {
    pub generated: usize,
    pub failed: usize,
    pub files: usize,
}

pub fn run(args: GenerateArgs, printer: &Printer) -> Result<()> {
    let manifest = args.manifest()?;
    let summary = generate(&args.project.project, &manifest, printer)?;

    if summary.failed > 0 {
        return Err(FurnishError::Build {
            message: format!("{} failed", plural(summary.failed, "item", "items")),
            help: Some("See the errors above; the other items were written".to_string()),
        });
    }

    Ok(())
}

/// Run a full generation for the project at `root`.
pub fn generate(root: &Path, manifest: &Manifest, printer: &Printer) -> Result<GenerateSummary> {
    let config = manifest.engine_config()?;
    let (items_dir, tiles_dir, output_dir) = manifest.resolve_dirs(root);

    printer.status("Scanning", &display_path(&items_dir));
    let discovery = discover(&items_dir, &tiles_dir)?;
    printer.diagnostics(&discovery.matches.diagnostics);
    if discovery.matches.matched.is_empty() {
        printer.warning("Empty", &format!("no items paired in {}", display_path(&items_dir)));
    }

    let mut summary = GenerateSummary::default();

    let loaded: Vec<Result<GenerationItem>> = discovery
        .matches
        .matched
        .par_iter()
        .map(|m| m.load(&manifest.name))
        .collect();

    let mut items = Vec::with_capacity(loaded.len());
    for (result, matched) in loaded.into_iter().zip(&discovery.matches.matched) {
        match result {
            Ok(item) => items.push(item),
            Err(e) => {
                printer.error("Skipping", &format!("{}: {}", display_path(&matched.item), e));
                summary.failed += 1;
            }
        }
    }

    let dirs = OutputDirs::under(&output_dir);
    summary.merge(write_batch(&items, &config, &dirs, printer));

    printer.status(
        "Finished",
        &format!(
            "{} ({}) to {}",
            plural(summary.generated, "item", "items"),
            plural(summary.files, "file", "files"),
            printer.cyan(&display_path(&output_dir))
        ),
    );

    Ok(summary)
}

fn write_batch(
    items: &[GenerationItem],
    config: &EngineConfig,
    dirs: &OutputDirs,
    printer: &Printer,
) -> GenerateSummary {
    let mut summary = GenerateSummary::default();

    for (item, result) in items.iter().zip(process_batch(items, config)) {
        let written = result.and_then(|output| {
            printer.status(
                "Generating",
                &format!(
                    "{} {}",
                    output.name,
                    printer.dim(&format!(
                        "({}x{} frames)",
                        output.layout.frame_count_x, output.layout.frame_count_y
                    ))
                ),
            );
            printer.diagnostics(&output.diagnostics);
            write_item_outputs(&output, dirs)
        });

        match written {
            Ok(paths) => {
                summary.generated += 1;
                summary.files += paths.len();
            }
            Err(e) => {
                printer.error("Skipping", &format!("{}: {}", item.output_name(), e));
                summary.failed += 1;
            }
        }
    }

    summary
}

impl GenerateSummary {
    fn merge(&mut self, other: GenerateSummary) {
        self.generated += other.generated;
        self.failed += other.failed;
        self.files += other.files;
    }
}
