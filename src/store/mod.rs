//! Persistence for calculator inputs and saved recipes.
//!
//! The calculation core never touches storage. The CLI opens a
//! [`KeyValueStore`], loads an [`AppState`] from it at startup and saves the
//! state back after a change.

mod kv;
mod state;

pub use kv::KeyValueStore;
pub use state::{
    AppState, CalculatorInputs, DEFAULT_WASTE, PRODUCT_KEY, RECIPES_KEY, WASTE_KEY, WEIGHT_KEY,
};

use std::path::PathBuf;

/// Store file name inside the data directory.
pub const STORE_FILENAME: &str = "store.json";

/// Default store location: `<data dir>/castmix/store.json`, or the current
/// directory when no data directory is known.
pub fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("castmix"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(STORE_FILENAME)
}
