//! Pairing item icons with their tile sheets.
//!
//! Every item icon is the anchor: it is matched against the tile directory
//! for its tile sheet and optional flame and closed-door companions. Items
//! without a tile sheet are skipped.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::engine::GenerationItem;
use crate::error::{FurnishError, Result};
use crate::render::load_png;
use crate::types::SpriteClass;
use crate::validation::{Diagnostic, ValidationResult};

use super::naming::{is_texture, TextureName};

/// List the texture files directly inside `dir`, sorted by file name.
pub fn scan_textures(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(FurnishError::Io {
            path: dir.to_path_buf(),
            message: "Texture directory not found".to_string(),
        });
    }

    let files = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| is_texture(p))
        .collect();

    Ok(files)
}

/// An item icon with the tile files that belong to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedItem {
    pub class: SpriteClass,
    pub variant: Option<u32>,
    /// Text in front of the class name in the item's file name.
    pub prefix: String,
    pub item: PathBuf,
    pub tile: PathBuf,
    pub flame: Option<PathBuf>,
    pub door_closed: Option<PathBuf>,
}

impl MatchedItem {
    /// Decode every file and build a generation item.
    ///
    /// `name` is prepended to the item's own prefix rather than replacing it,
    /// so `OakBed.png` and `PineBed.png` under `Mod` become `ModOakBed` and
    /// `ModPineBed` instead of both writing `ModBed`.
    pub fn load(&self, name: &str) -> Result<GenerationItem> {
        let mut item = GenerationItem::new(
            self.class,
            self.variant,
            load_png(&self.item)?,
            load_png(&self.tile)?,
        )
        .with_prefix(format!("{}{}", name, self.prefix));

        if let Some(flame) = &self.flame {
            item = item.with_flame(load_png(flame)?);
        }
        if let Some(closed) = &self.door_closed {
            item = item.with_door_closed(load_png(closed)?);
        }

        Ok(item)
    }
}

/// Pairing outcome.
#[derive(Debug, Default)]
pub struct MatchResult {
    pub matched: Vec<MatchedItem>,
    /// Skipped items and unused tiles.
    pub diagnostics: ValidationResult,
}

struct Candidate<'a> {
    path: &'a Path,
    name: TextureName,
}

fn candidates(paths: &[PathBuf]) -> Vec<Candidate<'_>> {
    paths
        .iter()
        .filter_map(|path| {
            TextureName::from_path(path).map(|name| Candidate {
                path: path.as_path(),
                name,
            })
        })
        .collect()
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Pair item icons with tile sheets.
///
/// A `<Class>_Flame` tile serves every variant of its class, while a
/// `<Class>_Type<n>_Flame` tile is only attached to the item of variant `n`.
/// When several tiles fit the same role, the last one in file name order
/// wins.
pub fn match_textures(items: &[PathBuf], tiles: &[PathBuf]) -> MatchResult {
    let tiles = candidates(tiles);
    let mut used: HashSet<usize> = HashSet::new();
    let mut result = MatchResult::default();

    for item in candidates(items) {
        if item.name.extra_is_flame() {
            continue;
        }

        let Some(class) = item.name.class() else {
            result.diagnostics.push(
                Diagnostic::warning(
                    "furnish::discover::unknown-class",
                    format!("{} names no furniture class", file_name(item.path)),
                )
                .with_help("End the file name with a class such as Bed, Door or Table"),
            );
            continue;
        };
        let variant = item.name.variant();

        let mut tile = None;
        let mut flame = None;
        let mut door_closed = None;

        for (index, candidate) in tiles.iter().enumerate() {
            let name = &candidate.name;
            let slot = if name.is_door_closed() {
                (class == SpriteClass::Door).then_some(&mut door_closed)
            } else if name.class() != Some(class) {
                None
            } else if name.count_is_flame() {
                Some(&mut flame)
            } else if name.extra_is_flame() {
                (name.variant() == variant).then_some(&mut flame)
            } else if name.variant() == variant {
                Some(&mut tile)
            } else {
                None
            };

            if let Some(slot) = slot {
                *slot = Some(index);
            }
        }

        let Some(tile) = tile else {
            result.diagnostics.push(
                Diagnostic::warning(
                    "furnish::discover::no-tile",
                    format!("{} has no matching tile sheet", file_name(item.path)),
                )
                .with_help("Add a tile with the same class and Type suffix"),
            );
            continue;
        };

        used.extend([Some(tile), flame, door_closed].into_iter().flatten());

        result.matched.push(MatchedItem {
            class,
            variant,
            prefix: item.name.prefix().to_string(),
            item: item.path.to_path_buf(),
            tile: tiles[tile].path.to_path_buf(),
            flame: flame.map(|i| tiles[i].path.to_path_buf()),
            door_closed: door_closed.map(|i| tiles[i].path.to_path_buf()),
        });
    }

    for (index, candidate) in tiles.iter().enumerate() {
        if !used.contains(&index) {
            result.diagnostics.warning(
                "furnish::discover::unused-tile",
                format!("{} matched no item", file_name(candidate.path)),
            );
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_match_basic() {
        let result = match_textures(
            &paths(&["OakBed_Type1.png"]),
            &paths(&["OakBed_Type1.png", "OakBed_Type2.png"]),
        );

        assert_eq!(result.matched.len(), 1);
        let m = &result.matched[0];
        assert_eq!(m.class, SpriteClass::Bed);
        assert_eq!(m.variant, Some(1));
        assert_eq!(m.prefix, "Oak");
        assert_eq!(m.tile, PathBuf::from("OakBed_Type1.png"));
        assert!(m.flame.is_none());
        // Type2 tile has no item
        assert_eq!(result.diagnostics.warning_count(), 1);
    }

    #[test]
    fn test_match_without_variant() {
        let result = match_textures(&paths(&["Clock.png"]), &paths(&["Clock.png"]));
        assert_eq!(result.matched[0].variant, None);
        assert!(result.diagnostics.is_ok());
    }

    #[test]
    fn test_match_flame_by_count() {
        let result = match_textures(
            &paths(&["Lamp.png"]),
            &paths(&["Lamp.png", "Lamp_Flame.png"]),
        );
        assert_eq!(result.matched[0].flame, Some(PathBuf::from("Lamp_Flame.png")));
    }

    #[test]
    fn test_match_flame_by_extra_same_variant() {
        let result = match_textures(
            &paths(&["Lamp_Type1.png", "Lamp_Type2.png"]),
            &paths(&[
                "Lamp_Type1.png",
                "Lamp_Type1_Flame.png",
                "Lamp_Type2.png",
                "Lamp_Type2_Flame.png",
            ]),
        );

        assert_eq!(result.matched.len(), 2);
        assert_eq!(
            result.matched[0].flame,
            Some(PathBuf::from("Lamp_Type1_Flame.png"))
        );
        assert_eq!(
            result.matched[1].flame,
            Some(PathBuf::from("Lamp_Type2_Flame.png"))
        );
        assert!(result.diagnostics.is_ok());
    }

    #[test]
    fn test_variant_flame_stays_with_its_variant() {
        let result = match_textures(
            &paths(&["Lamp_Type1.png", "Lamp_Type2.png"]),
            &paths(&["Lamp_Type1.png", "Lamp_Type2.png", "Lamp_Type2_Flame.png"]),
        );

        assert_eq!(result.matched[0].flame, None);
        assert_eq!(
            result.matched[1].flame,
            Some(PathBuf::from("Lamp_Type2_Flame.png"))
        );
    }

    #[test]
    fn test_class_flame_serves_every_variant() {
        let result = match_textures(
            &paths(&["Lamp_Type1.png", "Lamp_Type2.png"]),
            &paths(&["Lamp_Flame.png", "Lamp_Type1.png", "Lamp_Type2.png"]),
        );

        for m in &result.matched {
            assert_eq!(m.flame, Some(PathBuf::from("Lamp_Flame.png")));
        }
        assert!(result.diagnostics.is_ok());
    }

    #[test]
    fn test_load_keeps_file_prefix() {
        use crate::render::write_png;
        use crate::types::PixelBuffer;

        let dir = tempdir().unwrap();
        let icon = dir.path().join("items");
        let tile = dir.path().join("tiles");
        for name in ["OakBed.png", "PineBed.png"] {
            write_png(&PixelBuffer::new(8, 8), &icon.join(name)).unwrap();
            write_png(&PixelBuffer::new(33, 16), &tile.join(name)).unwrap();
        }

        let result = match_textures(
            &[icon.join("OakBed.png"), icon.join("PineBed.png")],
            &[tile.join("OakBed.png"), tile.join("PineBed.png")],
        );
        let names: Vec<String> = result
            .matched
            .iter()
            .map(|m| m.load("Mod").unwrap().output_name())
            .collect();
        assert_eq!(names, vec!["ModOakBed", "ModPineBed"]);
    }

    #[test]
    fn test_flame_item_icons_are_skipped() {
        let result = match_textures(
            &paths(&["Lamp_Type1.png", "Lamp_Type1_Flame.png"]),
            &paths(&["Lamp_Type1.png"]),
        );
        assert_eq!(result.matched.len(), 1);
    }

    #[test]
    fn test_match_door_closed() {
        let result = match_textures(
            &paths(&["OakDoorOpen.png", "Chair.png"]),
            &paths(&["Chair.png", "OakDoorClosed.png", "OakDoorOpen.png"]),
        );

        let door = result
            .matched
            .iter()
            .find(|m| m.class == SpriteClass::Door)
            .unwrap();
        assert_eq!(door.prefix, "Oak");
        assert_eq!(door.tile, PathBuf::from("OakDoorOpen.png"));
        assert_eq!(door.door_closed, Some(PathBuf::from("OakDoorClosed.png")));

        let chair = result
            .matched
            .iter()
            .find(|m| m.class == SpriteClass::Chair)
            .unwrap();
        assert!(chair.door_closed.is_none());
    }

    #[test]
    fn test_item_without_tile_is_skipped() {
        let result = match_textures(&paths(&["Sofa.png"]), &paths(&["Bed.png"]));
        assert!(result.matched.is_empty());
        assert_eq!(result.diagnostics.warning_count(), 2);
    }

    #[test]
    fn test_unknown_class_is_reported() {
        let result = match_textures(&paths(&["Rock.png"]), &[]);
        assert!(result.matched.is_empty());
        assert_eq!(
            result.diagnostics.iter().next().unwrap().code,
            "furnish::discover::unknown-class"
        );
    }

    #[test]
    fn test_scan_textures() {
        let dir = tempdir().unwrap();
        for name in ["b.png", "a.jpg", "a_Highlight.png", "notes.txt"] {
            fs::write(dir.path().join(name), b"").unwrap();
        }
        fs::create_dir(dir.path().join("nested.png")).unwrap();

        let files = scan_textures(dir.path()).unwrap();
        let names: Vec<String> = files.iter().map(|p| file_name(p)).collect();
        assert_eq!(names, vec!["a.jpg", "b.png"]);
    }

    #[test]
    fn test_scan_missing_dir() {
        let dir = tempdir().unwrap();
        assert!(scan_textures(&dir.path().join("missing")).is_err());
    }
}
