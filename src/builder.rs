//! Working recipe builder.
//!
//! Holds the in-progress recipe and applies edits to it. Percentage edits are
//! clamped to the product's pigment cap and then rebalanced so the total load
//! never exceeds it. Saving produces a [`Recipe`] snapshot and clears the
//! working state.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::calc::{compute_weights, mix_colour, rebalance, total_percentage, MixResult};
use crate::error::{CastError, Result};
use crate::types::{
    Colour, ColourRef, PigmentEntry, PigmentLibrary, Product, Recipe, WeightedPigment,
};

/// The in-progress, unsaved recipe.
#[derive(Debug, Clone, Default)]
pub struct RecipeBuilder {
    product: Product,
    pigments: Vec<PigmentEntry>,
    pub name: String,
    pub notes: String,
}

impl RecipeBuilder {
    pub fn new(product: Product) -> Self {
        Self {
            product,
            ..Self::default()
        }
    }

    pub fn product(&self) -> Product {
        self.product
    }

    /// Switch product. Existing percentages are kept; the new cap applies to
    /// subsequent edits.
    pub fn set_product(&mut self, product: Product) {
        self.product = product;
    }

    pub fn pigments(&self) -> &[PigmentEntry] {
        &self.pigments
    }

    pub fn is_empty(&self) -> bool {
        self.pigments.is_empty()
    }

    /// Pigment cap of the current product, in percent.
    pub fn max_percentage(&self) -> f64 {
        self.product.formulation().pigment.max_percentage()
    }

    pub fn total_percentage(&self) -> f64 {
        total_percentage(&self.pigments)
    }

    /// Approximate colour of the current pigments.
    pub fn mixed_colour(&self) -> Colour {
        mix_colour(&self.pigments, self.max_percentage())
    }

    /// Pigment weights for a computed mix.
    pub fn weights(&self, mix: &MixResult) -> Vec<WeightedPigment> {
        compute_weights(&self.pigments, mix.base, mix.liquid)
    }

    /// Append the default pigment and return its id.
    pub fn add_pigment(&mut self) -> Uuid {
        let entry = PigmentEntry::default();
        let id = entry.id;
        self.pigments.push(entry);
        id
    }

    /// Remove a pigment. Returns false if no pigment has that id.
    pub fn remove_pigment(&mut self, id: Uuid) -> bool {
        let before = self.pigments.len();
        self.pigments.retain(|p| p.id != id);
        self.pigments.len() != before
    }

    /// Point a pigment at a library colour. Unknown library ids are ignored.
    pub fn select_library(&mut self, id: Uuid, pigment_id: &str) {
        let Some(pigment) = PigmentLibrary::get(pigment_id) else {
            tracing::debug!(pigment_id, "unknown library pigment");
            return;
        };
        if let Some(entry) = self.entry_mut(id) {
            entry.name = pigment.name.to_string();
            entry.source = ColourRef::Library(pigment.id.to_string());
            entry.color = pigment.colour.to_string();
        }
    }

    /// Turn a pigment into a custom colour, starting from neutral grey.
    pub fn select_custom(&mut self, id: Uuid) {
        if let Some(entry) = self.entry_mut(id) {
            entry.name = "Custom".to_string();
            entry.source = ColourRef::Custom;
            entry.color = Colour::NEUTRAL_GREY.to_string();
        }
    }

    /// Set a pigment's colour. Valid hex values are normalized to `#RRGGBB`;
    /// anything else is stored as given and decodes to grey.
    pub fn set_colour(&mut self, id: Uuid, colour: &str) {
        if let Some(entry) = self.entry_mut(id) {
            entry.color = match Colour::from_hex(colour) {
                Ok(c) => c.to_string(),
                Err(_) => colour.to_string(),
            };
        }
    }

    /// Set a pigment's percentage, clamped to `0..=cap`, and rebalance the
    /// other pigments.
    pub fn set_percentage(&mut self, id: Uuid, value: f64) {
        let Some(index) = self.pigments.iter().position(|p| p.id == id) else {
            return;
        };
        let max = self.max_percentage();
        let value = if value.is_finite() { value.clamp(0.0, max) } else { 0.0 };

        self.pigments = rebalance(&self.pigments, index, value, max);
    }

    /// Snapshot the working recipe and clear it.
    ///
    /// The name must be non-blank and there must be at least one pigment.
    pub fn save(&mut self, now: DateTime<Utc>) -> Result<Recipe> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CastError::Validation {
                message: "Recipe name is required".to_string(),
                help: None,
            });
        }
        if self.pigments.is_empty() {
            return Err(CastError::Validation {
                message: "Recipe has no pigments".to_string(),
                help: Some("Add at least one pigment".to_string()),
            });
        }

        let notes = self.notes.trim();
        let recipe = Recipe {
            id: Uuid::new_v4(),
            name: name.to_string(),
            product: self.product,
            pigments: self.pigments.iter().map(PigmentEntry::rekeyed).collect(),
            mixed_color: self.mixed_colour().to_string(),
            notes: (!notes.is_empty()).then(|| notes.to_string()),
            created_at: now,
            updated_at: now,
        };

        self.clear();
        Ok(recipe)
    }

    /// Replace the working recipe with a copy of a saved one.
    pub fn load(&mut self, recipe: &Recipe) {
        self.pigments = recipe.pigments.iter().map(PigmentEntry::rekeyed).collect();
        self.name = recipe.name.clone();
        self.notes = recipe.notes.clone().unwrap_or_default();
    }

    /// Drop all pigments, the name and the notes. The product is kept.
    pub fn clear(&mut self) {
        self.pigments.clear();
        self.name.clear();
        self.notes.clear();
    }

    fn entry_mut(&mut self, id: Uuid) -> Option<&mut PigmentEntry> {
        self.pigments.iter_mut().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn percentages(builder: &RecipeBuilder) -> Vec<f64> {
        builder.pigments().iter().map(|p| p.percentage).collect()
    }

    #[test]
    fn test_add_and_remove() {
        let mut builder = RecipeBuilder::new(Product::Ac100);
        let a = builder.add_pigment();
        let b = builder.add_pigment();
        assert_eq!(builder.pigments().len(), 2);
        assert_eq!(builder.total_percentage(), 1.0);

        assert!(builder.remove_pigment(a));
        assert!(!builder.remove_pigment(a));
        assert_eq!(builder.pigments()[0].id, b);
    }

    #[test]
    fn test_select_library_and_custom() {
        let mut builder = RecipeBuilder::new(Product::Ac100);
        let id = builder.add_pigment();

        builder.select_library(id, "terracotta");
        let entry = &builder.pigments()[0];
        assert_eq!(entry.name, "Terracotta");
        assert_eq!(entry.color, "#E2725B");

        builder.select_library(id, "no-such-pigment");
        assert_eq!(builder.pigments()[0].name, "Terracotta");

        builder.select_custom(id);
        let entry = &builder.pigments()[0];
        assert!(entry.source.is_custom());
        assert_eq!(entry.color, "#808080");

        builder.set_colour(id, "#a1b2c3");
        assert_eq!(builder.pigments()[0].color, "#A1B2C3");
    }

    #[test]
    fn test_set_percentage_clamps_to_cap() {
        let mut builder = RecipeBuilder::new(Product::Ac100);
        let id = builder.add_pigment();

        builder.set_percentage(id, 9.0);
        assert_eq!(percentages(&builder), vec![2.0]);

        builder.set_percentage(id, -1.0);
        assert_eq!(percentages(&builder), vec![0.0]);

        builder.set_percentage(id, f64::NAN);
        assert_eq!(percentages(&builder), vec![0.0]);
    }

    #[test]
    fn test_set_product_caps_later_edits() {
        let mut builder = RecipeBuilder::new(Product::Ac730);
        let id = builder.add_pigment();
        builder.set_percentage(id, 4.0);

        builder.set_product(Product::Ac100);
        assert_eq!(builder.product(), Product::Ac100);
        assert_eq!(builder.max_percentage(), 2.0);
        assert_eq!(percentages(&builder), vec![4.0]);

        builder.set_percentage(id, 3.0);
        assert_eq!(percentages(&builder), vec![2.0]);
    }

    #[test]
    fn test_set_percentage_rebalances() {
        let mut builder = RecipeBuilder::new(Product::Ac100);
        let a = builder.add_pigment();
        let b = builder.add_pigment();
        builder.set_percentage(a, 1.0);
        builder.set_percentage(b, 1.0);

        builder.set_percentage(a, 1.5);
        assert_eq!(percentages(&builder), vec![1.5, 0.5]);
    }

    #[test]
    fn test_powder_product_has_higher_cap() {
        let mut builder = RecipeBuilder::new(Product::Ac730);
        let id = builder.add_pigment();
        builder.set_percentage(id, 4.5);
        assert_eq!(percentages(&builder), vec![4.5]);
        assert_eq!(builder.max_percentage(), 5.0);
    }

    #[test]
    fn test_save_requires_name() {
        let mut builder = RecipeBuilder::new(Product::Ac100);
        builder.add_pigment();
        builder.name = "   ".to_string();

        let err = builder.save(Utc::now()).unwrap_err();
        assert!(matches!(err, CastError::Validation { .. }));
        assert_eq!(builder.pigments().len(), 1);
    }

    #[test]
    fn test_save_requires_pigments() {
        let mut builder = RecipeBuilder::new(Product::Ac100);
        builder.name = "Empty".to_string();
        assert!(builder.save(Utc::now()).is_err());
    }

    #[test]
    fn test_save_snapshots_and_clears() {
        let mut builder = RecipeBuilder::new(Product::Ac100);
        let id = builder.add_pigment();
        builder.select_library(id, "black");
        builder.set_percentage(id, 2.0);
        builder.name = " Charcoal ".to_string();
        builder.notes = "two coats".to_string();

        let now = Utc::now();
        let recipe = builder.save(now).unwrap();

        assert_eq!(recipe.name, "Charcoal");
        assert_eq!(recipe.product, Product::Ac100);
        assert_eq!(recipe.mixed_color, "#000000");
        assert_eq!(recipe.notes.as_deref(), Some("two coats"));
        assert_eq!(recipe.created_at, now);
        assert_ne!(recipe.pigments[0].id, id);
        assert!(builder.is_empty());
        assert!(builder.name.is_empty());
    }

    #[test]
    fn test_saved_recipe_unaffected_by_later_edits() {
        let mut builder = RecipeBuilder::new(Product::Ac100);
        let id = builder.add_pigment();
        builder.set_percentage(id, 1.0);
        builder.name = "Snapshot".to_string();
        let recipe = builder.save(Utc::now()).unwrap();

        builder.load(&recipe);
        let loaded = builder.pigments()[0].id;
        builder.set_percentage(loaded, 2.0);

        assert_eq!(recipe.pigments[0].percentage, 1.0);
        assert_eq!(builder.pigments()[0].percentage, 2.0);
    }

    #[test]
    fn test_mixed_colour_uses_product_cap() {
        let mut builder = RecipeBuilder::new(Product::Ac730);
        let id = builder.add_pigment();
        builder.select_library(id, "black");
        builder.set_percentage(id, 2.5);
        // Half of the 5% cap
        assert_eq!(builder.mixed_colour(), Colour::rgb(128, 128, 128));
    }

    #[test]
    fn test_load_rekeys_and_copies_fields() {
        let mut builder = RecipeBuilder::new(Product::Ac100);
        builder.add_pigment();
        builder.name = "Chalk".to_string();
        let recipe = builder.save(Utc::now()).unwrap();

        builder.load(&recipe);
        assert_eq!(builder.name, "Chalk");
        assert_eq!(builder.notes, "");
        assert_ne!(builder.pigments()[0].id, recipe.pigments[0].id);
        assert_eq!(builder.pigments()[0].name, recipe.pigments[0].name);
    }

    #[test]
    fn test_weights_from_mix() {
        let mut builder = RecipeBuilder::new(Product::Ac100);
        let id = builder.add_pigment();
        builder.set_percentage(id, 1.0);

        let mix = MixResult {
            liquid: 50.0,
            base: 125.0,
            total_wet: 175.0,
            estimated_dry: 0.0,
        };
        assert_eq!(builder.weights(&mix)[0].weight, 1.8);
    }
}
