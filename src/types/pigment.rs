//! Pigment entries: the colorant line items of a recipe.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Colour, LibraryPigment, PigmentLibrary};

/// Percentage given to newly added pigments.
pub const DEFAULT_PERCENTAGE: f64 = 0.5;

const CUSTOM: &str = "custom";

/// Where a pigment entry's colour comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ColourRef {
    /// A library pigment id.
    Library(String),
    /// A user-picked colour.
    Custom,
}

impl ColourRef {
    pub fn is_custom(&self) -> bool {
        matches!(self, ColourRef::Custom)
    }
}

impl From<String> for ColourRef {
    fn from(s: String) -> Self {
        if s == CUSTOM {
            ColourRef::Custom
        } else {
            ColourRef::Library(s)
        }
    }
}

impl From<ColourRef> for String {
    fn from(r: ColourRef) -> Self {
        match r {
            ColourRef::Library(id) => id,
            ColourRef::Custom => CUSTOM.to_string(),
        }
    }
}

impl fmt::Display for ColourRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColourRef::Library(id) => f.write_str(id),
            ColourRef::Custom => f.write_str(CUSTOM),
        }
    }
}

/// One colorant line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PigmentEntry {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "pigmentId")]
    pub source: ColourRef,
    /// Hex colour string. Kept as entered; decoded on use.
    pub color: String,
    /// Share of the total mix weight, in percent.
    pub percentage: f64,
}

impl PigmentEntry {
    /// A library pigment at the given percentage.
    pub fn from_library(pigment: &LibraryPigment, percentage: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: pigment.name.to_string(),
            source: ColourRef::Library(pigment.id.to_string()),
            color: pigment.colour.to_string(),
            percentage,
        }
    }

    /// A custom-coloured pigment at the given percentage.
    pub fn custom(colour: Colour, percentage: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: "Custom".to_string(),
            source: ColourRef::Custom,
            color: colour.to_string(),
            percentage,
        }
    }

    /// Decoded colour; invalid hex strings decode to neutral grey.
    pub fn colour(&self) -> Colour {
        Colour::decode(&self.color)
    }

    /// Copy of this entry under a fresh id.
    pub fn rekeyed(&self) -> Self {
        Self {
            id: Uuid::new_v4(),
            ..self.clone()
        }
    }
}

impl Default for PigmentEntry {
    fn default() -> Self {
        Self::from_library(PigmentLibrary::default_pigment(), DEFAULT_PERCENTAGE)
    }
}

/// A pigment entry with its weight for a particular mix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedPigment {
    #[serde(flatten)]
    pub entry: PigmentEntry,
    /// Grams of pigment.
    pub weight: f64,
}
