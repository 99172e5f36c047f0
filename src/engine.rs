//! Item processing.
//!
//! Runs the transform chain for one furniture item: resolve the tile's frame
//! layout, pad, outline, retile and upscale the tile family, and upscale the
//! item icon. Items are independent, so batches run in parallel.

use rayon::prelude::*;
use serde::Serialize;

use crate::error::{FurnishError, Result};
use crate::transform::{enlarge, outline, pad, resolve, retile, DEFAULT_ALPHA_THRESHOLD};
use crate::types::{FrameLayout, LightTint, PixelBuffer, SpriteClass, DOOR_CLOSED_FRAMES};
use crate::validation::{validate_item, ValidationResult};

/// One unit of work: a classified item icon and its tile sheets.
#[derive(Debug, Clone)]
pub struct GenerationItem {
    pub class: SpriteClass,
    /// `_Type<n>` suffix; `None` when the source had no variant.
    pub variant: Option<u32>,
    /// Prepended to the class name in output names.
    pub prefix: String,
    pub item: PixelBuffer,
    pub tile: PixelBuffer,
    pub flame: Option<PixelBuffer>,
    pub door_closed: Option<PixelBuffer>,
}

impl GenerationItem {
    pub fn new(
        class: SpriteClass,
        variant: Option<u32>,
        item: PixelBuffer,
        tile: PixelBuffer,
    ) -> Self {
        Self {
            class,
            variant,
            prefix: String::new(),
            item,
            tile,
            flame: None,
            door_closed: None,
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_flame(mut self, flame: PixelBuffer) -> Self {
        self.flame = Some(flame);
        self
    }

    pub fn with_door_closed(mut self, door_closed: PixelBuffer) -> Self {
        self.door_closed = Some(door_closed);
        self
    }

    /// Output base name, e.g. `OakDoor_Type2`.
    pub fn output_name(&self) -> String {
        let mut name = format!("{}{}", self.prefix, self.class.name());
        if let Some(variant) = self.variant {
            name.push_str(&format!("_Type{}", variant));
        }
        name
    }

    /// Every present texture with its role.
    pub fn textures(&self) -> Vec<(&'static str, &PixelBuffer)> {
        let mut textures = vec![("item", &self.item), ("tile", &self.tile)];
        if let Some(flame) = &self.flame {
            textures.push(("flame", flame));
        }
        if let Some(door_closed) = &self.door_closed {
            textures.push(("closed door", door_closed));
        }
        textures
    }
}

/// Engine settings shared by every item in a batch.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    /// Alpha below which outline extraction treats a pixel as background.
    pub alpha_threshold: u8,
    pub light: Option<LightTint>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            alpha_threshold: DEFAULT_ALPHA_THRESHOLD,
            light: None,
        }
    }
}

/// Processed closed-door sheet and its highlight.
#[derive(Debug, Clone)]
pub struct DoorClosedOutput {
    pub texture: PixelBuffer,
    pub highlight: PixelBuffer,
}

/// Everything produced for one item.
#[derive(Debug, Clone)]
pub struct ItemOutput {
    pub name: String,
    pub class: SpriteClass,
    pub variant: Option<u32>,
    pub layout: FrameLayout,
    /// Tile heights of one frame column in the 2x output, top to bottom.
    pub coordinate_heights: Vec<u32>,
    pub tile: PixelBuffer,
    pub highlight: PixelBuffer,
    pub item: PixelBuffer,
    pub flame: Option<PixelBuffer>,
    pub door_closed: Option<DoorClosedOutput>,
    /// Light colour scaled for the class.
    pub light: Option<[f32; 3]>,
    /// Non-fatal problems found while processing.
    pub diagnostics: ValidationResult,
}

impl ItemOutput {
    /// Metadata consumed by the code generation step.
    pub fn frame_table(&self) -> FrameTable {
        FrameTable {
            name: self.name.clone(),
            class: self.class,
            variant: self.variant,
            layout: self.layout,
            coordinate_heights: self.coordinate_heights.clone(),
            flame: self.flame.is_some(),
            door_closed: self.door_closed.is_some(),
            light: self.light,
        }
    }
}

/// Serializable per-item frame metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameTable {
    pub name: String,
    pub class: SpriteClass,
    pub variant: Option<u32>,
    pub layout: FrameLayout,
    pub coordinate_heights: Vec<u32>,
    pub flame: bool,
    pub door_closed: bool,
    pub light: Option<[f32; 3]>,
}

struct TileOutputs {
    tile: PixelBuffer,
    highlight: PixelBuffer,
    flame: Option<PixelBuffer>,
    door_closed: Option<DoorClosedOutput>,
    coordinate_heights: Vec<u32>,
}

fn invalid_geometry(name: &str, buffer: &PixelBuffer) -> FurnishError {
    FurnishError::InvalidGeometry {
        name: name.to_string(),
        width: buffer.width(),
        height: buffer.height(),
    }
}

/// Process a single item.
///
/// Fails with `InvalidGeometry` when a texture is empty or the tile (or the
/// closed-door sheet) measures zero cells per frame; the caller should skip
/// the item.
pub fn process_item(item: &GenerationItem, config: &EngineConfig) -> Result<ItemOutput> {
    let name = item.output_name();

    for (role, buffer) in item.textures() {
        if buffer.is_empty() {
            return Err(invalid_geometry(&format!("{} {}", name, role), buffer));
        }
    }

    let layout = resolve(item.class, item.tile.width(), item.tile.height());
    let tile = pad(&item.tile, &layout);
    if !layout.grid(tile.width(), tile.height()).has_cells() {
        return Err(invalid_geometry(&format!("{} tile", name), &item.tile));
    }
    if let Some(closed) = &item.door_closed {
        let grid = layout.grid_with_frames(closed.width(), closed.height(), DOOR_CLOSED_FRAMES);
        if !grid.has_cells() {
            return Err(invalid_geometry(&format!("{} closed door", name), closed));
        }
    }

    let diagnostics = validate_item(item);

    let (tiles, icon) = rayon::join(
        || process_tiles(item, &tile, &layout, config),
        || enlarge(&item.item),
    );

    Ok(ItemOutput {
        name,
        class: item.class,
        variant: item.variant,
        layout,
        coordinate_heights: tiles.coordinate_heights,
        tile: tiles.tile,
        highlight: tiles.highlight,
        item: icon,
        flame: tiles.flame,
        door_closed: tiles.door_closed,
        light: config.light.map(|tint| tint.for_class(item.class)),
        diagnostics,
    })
}

fn process_tiles(
    item: &GenerationItem,
    tile: &PixelBuffer,
    layout: &FrameLayout,
    config: &EngineConfig,
) -> TileOutputs {
    let (frames_x, frames_y) = layout.frames();

    let highlight = outline(tile, layout, frames_x, frames_y, config.alpha_threshold);
    let coordinate_heights = layout
        .grid(tile.width(), tile.height())
        .coordinate_heights();

    let flame = item
        .flame
        .as_ref()
        .map(|flame| enlarge(&retile(&pad(flame, layout), layout, None)));

    let door_closed = item
        .door_closed
        .as_ref()
        .map(|closed| process_door_closed(closed, layout, config));

    TileOutputs {
        tile: enlarge(&retile(tile, layout, None)),
        highlight: enlarge(&retile(&highlight, layout, None)),
        flame,
        door_closed,
        coordinate_heights,
    }
}

/// Closed-door sheets use a fixed frame grid and are not padded.
fn process_door_closed(
    closed: &PixelBuffer,
    layout: &FrameLayout,
    config: &EngineConfig,
) -> DoorClosedOutput {
    let (frames_x, frames_y) = DOOR_CLOSED_FRAMES;
    let highlight = outline(closed, layout, frames_x, frames_y, config.alpha_threshold);

    DoorClosedOutput {
        texture: enlarge(&retile(closed, layout, Some(DOOR_CLOSED_FRAMES))),
        highlight: enlarge(&retile(&highlight, layout, Some(DOOR_CLOSED_FRAMES))),
    }
}

/// Outcome of one item in a batch.
pub type BatchEntry = Result<ItemOutput>;

/// Process items in parallel. Each entry holds that item's own result, so
/// one failure never affects its siblings.
pub fn process_batch(items: &[GenerationItem], config: &EngineConfig) -> Vec<BatchEntry> {
    items
        .par_iter()
        .map(|item| process_item(item, config))
        .collect()
}
