//! Core domain types for the product/recipe catalog.

use serde::{Deserialize, Serialize};

/// Unique identifier for a recipe, as assigned by the upstream service.
pub type RecipeId = u64;

/// A product currently available to the user.
///
/// The upstream payload carries more fields (type, expiry, owner), but
/// only the name participates in recommendation, so everything else is
/// ignored on deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
}

/// A recipe from the upstream catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    /// Comma-separated ingredient names, e.g. "flour, milk, eggs".
    pub ingredients: String,
}

impl Recipe {
    /// Split the comma-separated ingredient field into individual names.
    ///
    /// The upstream uses ", " as the separator; a name containing a bare
    /// comma would be split incorrectly, matching the upstream's own
    /// handling of the field.
    pub fn ingredient_list(&self) -> Vec<&str> {
        if self.ingredients.is_empty() {
            return Vec::new();
        }
        self.ingredients.split(", ").collect()
    }
}
