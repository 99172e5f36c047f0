//! Writes every texture of a processed item.

use std::path::{Path, PathBuf};

use crate::engine::ItemOutput;
use crate::error::Result;
use crate::types::PixelBuffer;

use super::png::write_png;
use super::table::write_frame_table;

/// Output directories for one generation run.
#[derive(Debug, Clone)]
pub struct OutputDirs {
    pub items: PathBuf,
    pub tiles: PathBuf,
}

impl OutputDirs {
    /// `items/` and `tiles/` under `root`.
    pub fn under(root: &Path) -> Self {
        Self {
            items: root.join("items"),
            tiles: root.join("tiles"),
        }
    }
}

/// Write an item's textures and frame table. Returns the written paths.
pub fn write_item_outputs(output: &ItemOutput, dirs: &OutputDirs) -> Result<Vec<PathBuf>> {
    let name = &output.name;
    let mut written = Vec::new();

    let mut write = |buffer: &PixelBuffer, path: PathBuf| -> Result<()> {
        write_png(buffer, &path)?;
        written.push(path);
        Ok(())
    };

    write(&output.tile, dirs.tiles.join(format!("{}.png", name)))?;
    write(&output.highlight, dirs.tiles.join(format!("{}_Highlight.png", name)))?;
    if let Some(flame) = &output.flame {
        write(flame, dirs.tiles.join(format!("{}_Flame.png", name)))?;
    }
    if let Some(closed) = &output.door_closed {
        write(&closed.texture, dirs.tiles.join(format!("{}Closed.png", name)))?;
        write(
            &closed.highlight,
            dirs.tiles.join(format!("{}Closed_Highlight.png", name)),
        )?;
    }
    write(&output.item, dirs.items.join(format!("{}.png", name)))?;

    let table_path = dirs.tiles.join(format!("{}.json", name));
    write_frame_table(&output.frame_table(), &table_path)?;
    written.push(table_path);

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{process_item, EngineConfig, GenerationItem};
    use crate::types::SpriteClass;
    use image::Rgba;
    use tempfile::tempdir;

    const WOOD: Rgba<u8> = Rgba([140, 90, 40, 255]);

    #[test]
    fn test_write_item_outputs() {
        let item = GenerationItem::new(
            SpriteClass::Door,
            Some(1),
            PixelBuffer::filled(8, 8, WOOD),
            PixelBuffer::filled(33, 17, WOOD),
        )
        .with_flame(PixelBuffer::filled(33, 17, WOOD))
        .with_door_closed(PixelBuffer::filled(26, 17, WOOD));
        let output = process_item(&item, &EngineConfig::default()).unwrap();

        let dir = tempdir().unwrap();
        let dirs = OutputDirs::under(dir.path());
        let written = write_item_outputs(&output, &dirs).unwrap();

        let names: Vec<String> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec![
                "Door_Type1.png",
                "Door_Type1_Highlight.png",
                "Door_Type1_Flame.png",
                "Door_Type1Closed.png",
                "Door_Type1Closed_Highlight.png",
                "Door_Type1.png",
                "Door_Type1.json",
            ]
        );
        assert!(dirs.items.join("Door_Type1.png").exists());
        assert!(dirs.tiles.join("Door_Type1Closed_Highlight.png").exists());
    }
}
