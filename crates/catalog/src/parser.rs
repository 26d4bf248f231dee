//! Parsers for the raw JSON payloads the upstream service returns.
//!
//! Both endpoints answer with a JSON array of objects. Unknown fields
//! are ignored so upstream schema additions don't break deserialization.

use crate::error::{CatalogError, Result};
use crate::types::{Product, Recipe};

/// Parse the products payload from `/products/all/type`.
pub fn parse_products(raw: &str) -> Result<Vec<Product>> {
    serde_json::from_str(raw).map_err(|source| CatalogError::MalformedPayload {
        payload: "products",
        source,
    })
}

/// Parse the recipes payload from `/recipes/all`.
pub fn parse_recipes(raw: &str) -> Result<Vec<Recipe>> {
    serde_json::from_str(raw).map_err(|source| CatalogError::MalformedPayload {
        payload: "recipes",
        source,
    })
}
