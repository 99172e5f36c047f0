//! Init command implementation.
//!
//! Writes a `furnish.yaml` manifest with the default layout.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::discovery::{Manifest, MANIFEST_FILENAME};
use crate::error::{FurnishError, Result};
use crate::output::{display_path, Printer};

/// Initialize a furnish project by generating a furnish.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Prefix for every output name
    #[arg(long)]
    pub name: Option<String>,

    /// Create the items/ and tiles/ source directories
    #[arg(long)]
    pub dirs: bool,

    /// Overwrite existing furnish.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(FurnishError::Build {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let manifest = Manifest {
        name: args.name.unwrap_or_default(),
        ..Default::default()
    };

    if args.dirs {
        for dir in [&manifest.items, &manifest.tiles] {
            let dir = args.path.join(dir);
            fs::create_dir_all(&dir).map_err(|e| FurnishError::Io {
                path: dir.clone(),
                message: format!("Failed to create directory: {}", e),
            })?;
            printer.status("Created", &display_path(&dir));
        }
    }

    fs::write(&manifest_path, manifest.to_yaml()?).map_err(|e| FurnishError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;
    printer.status("Created", &display_path(&manifest_path));

    Ok(())
}
