//! Saved pigment recipes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{PigmentEntry, Product};

/// A named, persisted snapshot of a pigment recipe.
///
/// The pigment list is a value copy taken at save time and `mixed_color` is
/// never recomputed, so editing the working recipe afterwards cannot change it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: Uuid,
    pub name: String,
    pub product: Product,
    pub pigments: Vec<PigmentEntry>,
    pub mixed_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Recipe {
    /// Check whether `key` names this recipe, by id or by name
    /// (case-insensitive).
    pub fn matches(&self, key: &str) -> bool {
        let key = key.trim();
        self.id.to_string() == key || self.name.eq_ignore_ascii_case(key)
    }
}
