//! castmix - Casting compound mix and pigment recipe calculator
//!
//! A library for working out base and liquid quantities of two-part casting
//! compounds from a mold's water weight, and for balancing and previewing
//! multi-pigment colour recipes.
//!
//! The [`calc`] module is the pure calculation core. Everything else
//! (the working recipe builder, persisted state, settings and the CLI) calls
//! into it with plain values.

pub mod builder;
pub mod calc;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod render;
pub mod store;
pub mod types;

pub use builder::RecipeBuilder;
pub use calc::{
    compute_mix, compute_weights, max_percentage, mix_colour, rebalance, total_percentage,
    MixResult,
};
pub use config::Settings;
pub use error::{CastError, Result};
pub use render::{render_swatch, write_swatch};
pub use store::{AppState, CalculatorInputs, KeyValueStore};
pub use types::{
    contrast_colour, Colour, ColourRef, Formulation, LibraryPigment, PigmentCategory, PigmentEntry,
    PigmentKind, PigmentLibrary, Product, Recipe, WeightedPigment,
};
