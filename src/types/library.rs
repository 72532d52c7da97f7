//! Builtin pigment library.
//!
//! Hex values are approximations from colour-name research, not manufacturer
//! specifications. Real pigments vary with load, material, lighting and cure.

use std::fmt;

use self::PigmentCategory::{Core, New};
use super::Colour;

/// Library grouping tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PigmentCategory {
    Core,
    New,
}

impl fmt::Display for PigmentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PigmentCategory::Core => write!(f, "core"),
            PigmentCategory::New => write!(f, "new"),
        }
    }
}

/// A read-only library pigment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LibraryPigment {
    pub id: &'static str,
    pub name: &'static str,
    pub colour: Colour,
    pub category: PigmentCategory,
}

impl LibraryPigment {
    const fn new(
        id: &'static str,
        name: &'static str,
        colour: Colour,
        category: PigmentCategory,
    ) -> Self {
        Self {
            id,
            name,
            colour,
            category,
        }
    }
}

const PIGMENTS: [LibraryPigment; 13] = [
    LibraryPigment::new("white", "White", Colour::rgb(0xFF, 0xFF, 0xFF), Core),
    LibraryPigment::new("black", "Black", Colour::rgb(0x00, 0x00, 0x00), Core),
    LibraryPigment::new("blue", "Blue", Colour::rgb(0x00, 0x66, 0xCC), Core),
    LibraryPigment::new("green", "Green", Colour::rgb(0x22, 0x8B, 0x22), Core),
    LibraryPigment::new("coade", "Coade", Colour::rgb(0xC1, 0x9A, 0x6B), Core),
    LibraryPigment::new("terracotta", "Terracotta", Colour::rgb(0xE2, 0x72, 0x5B), Core),
    LibraryPigment::new("bright-red", "Bright Red", Colour::rgb(0xFF, 0x16, 0x0C), Core),
    LibraryPigment::new("red-oxide", "Red Oxide", Colour::rgb(0x6E, 0x09, 0x02), Core),
    LibraryPigment::new("bright-yellow", "Bright Yellow", Colour::rgb(0xFF, 0xEA, 0x00), Core),
    LibraryPigment::new("yellow-oxide", "Yellow Oxide", Colour::rgb(0xFE, 0xCB, 0x52), Core),
    LibraryPigment::new("pink", "Pink", Colour::rgb(0xFF, 0x69, 0xB4), New),
    LibraryPigment::new("purple", "Purple", Colour::rgb(0x8B, 0x00, 0xFF), New),
    LibraryPigment::new("orange", "Orange", Colour::rgb(0xFF, 0x66, 0x00), New),
];

/// Access to the builtin pigment table.
pub struct PigmentLibrary;

impl PigmentLibrary {
    /// All library pigments, in display order.
    pub fn all() -> &'static [LibraryPigment] {
        &PIGMENTS
    }

    /// The pigment new entries start with.
    pub fn default_pigment() -> &'static LibraryPigment {
        &PIGMENTS[0]
    }

    /// Get a pigment by id.
    pub fn get(id: &str) -> Option<&'static LibraryPigment> {
        PIGMENTS.iter().find(|p| p.id == id)
    }

    /// Get a pigment by display name (case-insensitive, trimmed).
    pub fn get_by_name(name: &str) -> Option<&'static LibraryPigment> {
        let name = name.trim();
        PIGMENTS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Pigments in a category.
    pub fn in_category(category: PigmentCategory) -> impl Iterator<Item = &'static LibraryPigment> {
        PIGMENTS.iter().filter(move |p| p.category == category)
    }
}
