//! Validation for generation items.
//!
//! Runs a suite of checks against an item before processing and reports
//! errors and warnings. Errors mean the item is skipped; warnings are passed
//! back to the caller alongside the processed textures.

mod checks;
mod warning;

pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::engine::GenerationItem;

/// Run all validation checks against an item.
pub fn validate_item(item: &GenerationItem) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_empty_textures(item));
    result.merge(checks::check_cell_geometry(item));
    result.merge(checks::check_flame_size(item));
    result.merge(checks::check_door_closed_class(item));

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PixelBuffer, SpriteClass};

    #[test]
    fn test_validate_clean_item() {
        let item = GenerationItem::new(
            SpriteClass::Bed,
            None,
            PixelBuffer::new(16, 16),
            PixelBuffer::new(33, 17),
        );
        assert!(validate_item(&item).is_ok());
    }

    #[test]
    fn test_validate_collects_all() {
        let item = GenerationItem::new(
            SpriteClass::Lamp,
            Some(2),
            PixelBuffer::new(0, 0),
            PixelBuffer::new(33, 17),
        )
        .with_flame(PixelBuffer::new(17, 17));

        let result = validate_item(&item);
        assert_eq!(result.error_count(), 1);
        assert_eq!(result.warning_count(), 1);
    }
}
