//! Application state persisted between runs.

use serde_json::Value;

use crate::error::{CastError, Result};
use crate::types::{Product, Recipe};

use super::KeyValueStore;

pub const PRODUCT_KEY: &str = "castmix_product";
pub const WEIGHT_KEY: &str = "castmix_weight";
pub const WASTE_KEY: &str = "castmix_waste";
pub const RECIPES_KEY: &str = "castmix_pigment_recipes";

/// Default waste margin, in percent.
pub const DEFAULT_WASTE: f64 = 10.0;

/// Last-used calculator inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorInputs {
    pub product: Product,
    /// Water weight in grams, if one was ever entered.
    pub weight: Option<f64>,
    pub waste: f64,
}

impl Default for CalculatorInputs {
    fn default() -> Self {
        Self {
            product: Product::default(),
            weight: None,
            waste: DEFAULT_WASTE,
        }
    }
}

/// Everything castmix remembers: calculator inputs and saved recipes.
///
/// Loaded once at startup with [`AppState::load`] and written back with
/// [`AppState::save`] after a change.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub inputs: CalculatorInputs,
    recipes: Vec<Recipe>,
    /// Stored recipe values that failed to load. Written back untouched so
    /// a bad entry never takes the readable recipes down with it.
    unreadable: Vec<Value>,
}

impl AppState {
    /// Read state from the store. Missing or unreadable values fall back to
    /// defaults; an unknown stored product is ignored. Recipes load one at a
    /// time, and any that cannot be read are kept aside for [`AppState::save`].
    pub fn load(store: &KeyValueStore) -> Self {
        let mut inputs = CalculatorInputs::default();

        if let Some(id) = store.get::<String>(PRODUCT_KEY) {
            match Product::from_id(&id) {
                Some(product) => inputs.product = product,
                None => tracing::warn!(product = %id, "ignoring unknown stored product"),
            }
        }
        inputs.weight = store.get::<f64>(WEIGHT_KEY).filter(|w| *w >= 0.0);
        if let Some(waste) = store.get::<f64>(WASTE_KEY).filter(|w| *w >= 0.0) {
            inputs.waste = waste;
        }

        let (recipes, unreadable) = match store.get_raw(RECIPES_KEY) {
            None => (Vec::new(), Vec::new()),
            Some(Value::Array(items)) => split_recipes(items),
            Some(other) => {
                tracing::warn!(key = RECIPES_KEY, "stored recipes are not a list");
                (Vec::new(), vec![other.clone()])
            }
        };
        tracing::debug!(
            recipes = recipes.len(),
            unreadable = unreadable.len(),
            "state loaded"
        );

        Self {
            inputs,
            recipes,
            unreadable,
        }
    }

    /// Write state into the store. Call [`KeyValueStore::flush`] to persist.
    pub fn save(&self, store: &mut KeyValueStore) -> Result<()> {
        store.set(PRODUCT_KEY, &self.inputs.product)?;
        match self.inputs.weight {
            Some(weight) => store.set(WEIGHT_KEY, &weight)?,
            None => store.remove(WEIGHT_KEY),
        }
        store.set(WASTE_KEY, &self.inputs.waste)?;

        let mut stored = Vec::with_capacity(self.recipes.len() + self.unreadable.len());
        for recipe in &self.recipes {
            stored.push(serde_json::to_value(recipe).map_err(|e| CastError::Parse {
                message: format!("Failed to encode recipe {}: {}", recipe.name, e),
                help: None,
            })?);
        }
        stored.extend(self.unreadable.iter().cloned());
        store.set(RECIPES_KEY, &stored)?;
        Ok(())
    }

    /// Number of stored recipes that could not be read.
    pub fn unreadable_recipes(&self) -> usize {
        self.unreadable.len()
    }

    /// Saved recipes, oldest first.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn add_recipe(&mut self, recipe: Recipe) {
        self.recipes.push(recipe);
    }

    /// Find a recipe by id or name. Ids win over names.
    pub fn find_recipe(&self, key: &str) -> Result<&Recipe> {
        let key = key.trim();
        self.recipes
            .iter()
            .find(|r| r.id.to_string() == key)
            .or_else(|| self.recipes.iter().find(|r| r.matches(key)))
            .ok_or_else(|| CastError::NotFound {
                message: format!("No recipe named {}", key),
                help: Some("Run `castmix recipe list` to see saved recipes".to_string()),
            })
    }

    /// Delete a recipe by id or name and return it.
    pub fn delete_recipe(&mut self, key: &str) -> Result<Recipe> {
        let id = self.find_recipe(key)?.id;
        let index = self
            .recipes
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| CastError::NotFound {
                message: format!("No recipe named {}", key),
                help: None,
            })?;
        Ok(self.recipes.remove(index))
    }
}

/// Deserialize stored recipes one by one, keeping the raw value of any that
/// fail.
fn split_recipes(items: &[Value]) -> (Vec<Recipe>, Vec<Value>) {
    let mut recipes = Vec::with_capacity(items.len());
    let mut unreadable = Vec::new();
    for item in items {
        match serde_json::from_value::<Recipe>(item.clone()) {
            Ok(recipe) => recipes.push(recipe),
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable stored recipe");
                unreadable.push(item.clone());
            }
        }
    }
    (recipes, unreadable)
}
