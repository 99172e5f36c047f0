//! Light tint colour for light-emitting furniture.

use palette::Srgb;

use crate::error::{FurnishError, Result};

use super::SpriteClass;

/// A normalised RGB light colour.
///
/// Parsed from `"r, g, b"`; components above 1 are read as 0-255 bytes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightTint {
    colour: Srgb<f32>,
}

impl LightTint {
    pub fn new(red: f32, green: f32, blue: f32) -> Self {
        Self {
            colour: Srgb::new(red, green, blue),
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(FurnishError::Parse {
                message: format!("Invalid light colour '{}': expected three components", s),
                help: Some("Use 'r, g, b' with 0-1 floats or 0-255 integers".to_string()),
            });
        }

        let mut channels = [0.0f32; 3];
        for (channel, part) in channels.iter_mut().zip(&parts) {
            let value: f32 = part.parse().map_err(|_| FurnishError::Parse {
                message: format!("Invalid light component '{}' in '{}'", part, s),
                help: Some("Components must be numbers".to_string()),
            })?;
            *channel = if value > 1.0 { value / 255.0 } else { value };
        }

        Ok(Self::new(channels[0], channels[1], channels[2]))
    }

    /// Scale the colour by the class light ratio.
    pub fn for_class(&self, class: SpriteClass) -> [f32; 3] {
        let ratio = class.light_ratio();
        let scaled = Srgb::new(
            self.colour.red * ratio,
            self.colour.green * ratio,
            self.colour.blue * ratio,
        );
        [scaled.red, scaled.green, scaled.blue]
    }
}
