//! Validation checks for generation items.
//!
//! Each check takes a `&GenerationItem` and returns a `ValidationResult`.

use crate::engine::GenerationItem;
use crate::transform::resolve;
use crate::types::SpriteClass;

use super::warning::{Diagnostic, ValidationResult};

/// Check that every participating texture has a non-zero size.
pub fn check_empty_textures(item: &GenerationItem) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (role, buffer) in item.textures() {
        if buffer.is_empty() {
            result.push(
                Diagnostic::error(
                    "furnish::validate::empty-texture",
                    format!(
                        "{} {} texture is {}x{}",
                        item.output_name(),
                        role,
                        buffer.width(),
                        buffer.height()
                    ),
                )
                .with_help("Re-export the texture; this item will be skipped"),
            );
        }
    }

    result
}

/// Check that the tile is large enough to hold at least one cell per frame.
pub fn check_cell_geometry(item: &GenerationItem) -> ValidationResult {
    let mut result = ValidationResult::new();
    if item.tile.is_empty() {
        return result;
    }

    let layout = resolve(item.class, item.tile.width(), item.tile.height());
    if !layout.grid(item.tile.width(), item.tile.height()).has_cells() {
        result.push(
            Diagnostic::error(
                "furnish::validate::no-cells",
                format!(
                    "{} tile is {}x{}, too small for {}x{} frames",
                    item.output_name(),
                    item.tile.width(),
                    item.tile.height(),
                    layout.frame_count_x,
                    layout.frame_count_y
                ),
            )
            .with_help("Check the file name resolves to the intended furniture class"),
        );
    }

    result
}

/// Check that the flame sheet matches the tile sheet.
pub fn check_flame_size(item: &GenerationItem) -> ValidationResult {
    let mut result = ValidationResult::new();

    if let Some(flame) = &item.flame {
        if flame.dimensions() != item.tile.dimensions() {
            result.push(
                Diagnostic::warning(
                    "furnish::validate::flame-size",
                    format!(
                        "{} flame is {}x{} but tile is {}x{}",
                        item.output_name(),
                        flame.width(),
                        flame.height(),
                        item.tile.width(),
                        item.tile.height()
                    ),
                )
                .with_help("The tile layout is used for both sheets"),
            );
        }
    }

    result
}

/// Check that closed-door sheets only accompany doors.
pub fn check_door_closed_class(item: &GenerationItem) -> ValidationResult {
    let mut result = ValidationResult::new();

    if item.door_closed.is_some() && item.class != SpriteClass::Door {
        result.warning(
            "furnish::validate::door-closed-class",
            format!(
                "{} has a closed-door sheet but is a {}",
                item.output_name(),
                item.class
            ),
        );
    }

    result
}
