//! Core domain types for castmix.
//!
//! This module contains the fundamental types used throughout the crate:
//! - `Colour` - RGB colour values and the hex codec
//! - `Product` / `Formulation` - mix ratios and densities per product
//! - `PigmentLibrary` - the builtin pigment table
//! - `PigmentEntry` - one colorant line item of a recipe
//! - `Recipe` - a saved recipe snapshot

mod colour;
mod formulation;
mod library;
mod pigment;
mod recipe;

pub use colour::{contrast_colour, Colour};
pub use formulation::{Formulation, PigmentKind, Product};
pub use library::{LibraryPigment, PigmentCategory, PigmentLibrary};
pub use pigment::{ColourRef, PigmentEntry, WeightedPigment, DEFAULT_PERCENTAGE};
pub use recipe::Recipe;
