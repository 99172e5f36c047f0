//! Furniture sprite classes and their static lookup tables.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{FurnishError, Result};

/// Frame grid of the closed-door companion sheet.
pub const DOOR_CLOSED_FRAMES: (u32, u32) = (3, 1);

/// Furniture category driving the default frame geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SpriteClass {
    Bed,
    Chair,
    Chest,
    Clock,
    Door,
    Dresser,
    Platform,
    Table,
    Toilet,
    WorkBench,
    Sink,
    Chandelier,
    Lantern,
    Candle,
    Candelabra,
    Bathtub,
    Bookcase,
    Lamp,
    Piano,
    Sofa,
}

impl SpriteClass {
    /// Every class, in suffix-matching order.
    pub const ALL: [SpriteClass; 20] = [
        SpriteClass::Bed,
        SpriteClass::Chair,
        SpriteClass::Chest,
        SpriteClass::Clock,
        SpriteClass::Door,
        SpriteClass::Dresser,
        SpriteClass::Platform,
        SpriteClass::Table,
        SpriteClass::Toilet,
        SpriteClass::WorkBench,
        SpriteClass::Sink,
        SpriteClass::Chandelier,
        SpriteClass::Lantern,
        SpriteClass::Candle,
        SpriteClass::Candelabra,
        SpriteClass::Bathtub,
        SpriteClass::Bookcase,
        SpriteClass::Lamp,
        SpriteClass::Piano,
        SpriteClass::Sofa,
    ];

    /// Canonical spelling used in output file names.
    pub fn name(self) -> &'static str {
        match self {
            SpriteClass::Bed => "Bed",
            SpriteClass::Chair => "Chair",
            SpriteClass::Chest => "Chest",
            SpriteClass::Clock => "Clock",
            SpriteClass::Door => "Door",
            SpriteClass::Dresser => "Dresser",
            SpriteClass::Platform => "Platform",
            SpriteClass::Table => "Table",
            SpriteClass::Toilet => "Toilet",
            SpriteClass::WorkBench => "WorkBench",
            SpriteClass::Sink => "Sink",
            SpriteClass::Chandelier => "Chandelier",
            SpriteClass::Lantern => "Lantern",
            SpriteClass::Candle => "Candle",
            SpriteClass::Candelabra => "Candelabra",
            SpriteClass::Bathtub => "Bathtub",
            SpriteClass::Bookcase => "Bookcase",
            SpriteClass::Lamp => "Lamp",
            SpriteClass::Piano => "Piano",
            SpriteClass::Sofa => "Sofa",
        }
    }

    /// Default `(frames_x, frames_y)` for classes with a fixed table entry.
    ///
    /// Chest is resolved from the sheet width and has no entry here.
    pub fn default_frames(self) -> Option<(u32, u32)> {
        match self {
            SpriteClass::Bathtub
            | SpriteClass::Bed
            | SpriteClass::Candelabra
            | SpriteClass::Candle
            | SpriteClass::Chair
            | SpriteClass::Chandelier
            | SpriteClass::Door
            | SpriteClass::Lamp
            | SpriteClass::Lantern
            | SpriteClass::Toilet => Some((2, 1)),
            SpriteClass::Clock => Some((1, 1)),
            SpriteClass::Platform => Some((27, 1)),
            _ => None,
        }
    }

    /// Multiplier applied to the configured light colour.
    pub fn light_ratio(self) -> f32 {
        match self {
            SpriteClass::Candle => 0.6,
            SpriteClass::Candelabra => 1.2,
            SpriteClass::Chandelier => 1.5,
            _ => 1.0,
        }
    }

    /// Infer a class from the leading part of a file stem.
    ///
    /// `...DoorOpen` and `...DoorOpened` map to `Door`; otherwise the first
    /// class whose name is a case-insensitive suffix wins.
    pub fn classify(start: &str) -> Option<SpriteClass> {
        let lowered = start.to_lowercase();
        if lowered.ends_with("dooropen") || lowered.ends_with("dooropened") {
            return Some(SpriteClass::Door);
        }

        Self::ALL
            .into_iter()
            .find(|class| lowered.ends_with(&class.name().to_lowercase()))
    }
}

impl fmt::Display for SpriteClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SpriteClass {
    type Err = FurnishError;

    /// Case-insensitive exact match on the canonical name.
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|class| class.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FurnishError::Parse {
                message: format!("Unknown sprite class '{}'", s),
                help: Some("Expected one of: Bed, Chair, Chest, Door, Table, ...".to_string()),
            })
    }
}
