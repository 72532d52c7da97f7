pub mod blend;
pub mod completions;
pub mod mix;
pub mod pigments;
pub mod products;
pub mod recipe;

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};

use crate::config::Settings;
use crate::error::Result;
use crate::store::{default_store_path, AppState, KeyValueStore, PRODUCT_KEY, WASTE_KEY};

/// castmix - Casting compound mix and pigment recipe calculator
#[derive(Parser, Debug)]
#[command(name = "castmix")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Store file for saved inputs and recipes
    #[arg(long, global = true, env = "CASTMIX_STORE")]
    pub store: Option<PathBuf>,

    /// Settings file (default: ./castmix.yaml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log more detail (repeat for trace output)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Calculate base and liquid weights for a mold
    Mix(mix::MixArgs),

    /// List supported products and their formulations
    Products,

    /// List the builtin pigment library
    Pigments,

    /// Preview a pigment blend without saving it
    Blend(blend::BlendArgs),

    /// Save, list, show and delete pigment recipes
    #[command(subcommand)]
    Recipe(recipe::RecipeCommand),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Settings plus the persisted state for one CLI run.
///
/// State is loaded once when the session opens; commands that change it
/// call [`Session::commit`] to write it back.
pub struct Session {
    pub settings: Settings,
    pub state: AppState,
    store: KeyValueStore,
}

impl Session {
    /// Open the session from the `--store` and `--config` flags.
    pub fn open(store: Option<PathBuf>, config: Option<PathBuf>) -> Result<Self> {
        let settings = match &config {
            Some(path) => Settings::load(path)?,
            None => Settings::discover(Path::new("."))?,
        };

        let path = store
            .or_else(|| settings.store.clone())
            .unwrap_or_else(default_store_path);
        tracing::debug!(store = %path.display(), "opening store");

        let store = KeyValueStore::open(path)?;
        let mut state = AppState::load(&store);

        // Settings only fill in what was never saved
        if store.get_raw(PRODUCT_KEY).is_none() {
            if let Some(product) = settings.product {
                state.inputs.product = product;
            }
        }
        if store.get_raw(WASTE_KEY).is_none() {
            if let Some(waste) = settings.waste {
                state.inputs.waste = waste;
            }
        }

        Ok(Self {
            settings,
            state,
            store,
        })
    }

    /// Save the state and write the store if anything changed.
    pub fn commit(&mut self) -> Result<()> {
        self.state.save(&mut self.store)?;
        self.store.flush()
    }
}
