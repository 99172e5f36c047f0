//! Texture file naming.
//!
//! Source textures are named `<start>[_<count>[_<extra>]].<ext>`, e.g.
//! `OakDoor_Type2.png` or `Lamp_Type1_Flame.png`. The start carries the
//! furniture class as a suffix, the count an optional `Type<n>` variant.

use std::path::Path;

use crate::types::SpriteClass;

/// Accepted texture extensions, lowercase.
pub const TEXTURE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Stem suffix marking generated highlight files.
pub const HIGHLIGHT_SUFFIX: &str = "_Highlight";

/// Check whether a path is a source texture.
///
/// Generated `_Highlight` files are never sources.
pub fn is_texture(path: &Path) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
        return false;
    };

    TEXTURE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str())
        && !stem.ends_with(HIGHLIGHT_SUFFIX)
}

/// A texture file name split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureName {
    pub start: String,
    pub count: Option<String>,
    pub extra: Option<String>,
}

impl TextureName {
    /// Split a file stem on `_`. Parts past the third are ignored.
    pub fn parse(stem: &str) -> Self {
        let mut parts = stem.split('_');
        Self {
            start: parts.next().unwrap_or_default().to_string(),
            count: parts.next().map(str::to_string),
            extra: parts.next().map(str::to_string),
        }
    }

    /// Parse the stem of a path.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.file_stem()
            .and_then(|s| s.to_str())
            .map(Self::parse)
    }

    pub fn class(&self) -> Option<SpriteClass> {
        SpriteClass::classify(&self.start)
    }

    pub fn variant(&self) -> Option<u32> {
        self.count.as_deref().and_then(parse_variant)
    }

    /// Whether the start names a closed-door sheet.
    pub fn is_door_closed(&self) -> bool {
        self.start.to_lowercase().ends_with("doorclosed")
    }

    /// Whether the count part marks a flame sheet, e.g. `Lamp_Flame`.
    pub fn count_is_flame(&self) -> bool {
        starts_with_flame(self.count.as_deref())
    }

    /// Whether the extra part marks a flame sheet, e.g. `Lamp_Type1_Flame`.
    pub fn extra_is_flame(&self) -> bool {
        starts_with_flame(self.extra.as_deref())
    }

    /// Text in front of the class name, used as the output prefix.
    pub fn prefix(&self) -> &str {
        let Some(class) = self.class() else {
            return "";
        };
        let lowered = self.start.to_lowercase();
        let suffix = if class == SpriteClass::Door {
            ["dooropened", "dooropen", "door"]
                .into_iter()
                .find(|s| lowered.ends_with(s))
                .unwrap_or("door")
        } else {
            class.name()
        };
        let cut = self.start.len().saturating_sub(suffix.len());
        self.start.get(..cut).unwrap_or_default()
    }
}

fn starts_with_flame(part: Option<&str>) -> bool {
    part.is_some_and(|p| p.to_lowercase().starts_with("flame"))
}

/// Parse a `Type<digits>` count into a variant number.
pub fn parse_variant(count: &str) -> Option<u32> {
    let digits = count.strip_prefix("Type")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
