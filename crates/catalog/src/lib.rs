//! # Catalog Crate
//!
//! Domain types and payload parsing for the product/recipe catalog the
//! upstream service provides.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Product, Recipe)
//! - **parser**: Decode the upstream JSON payloads into Rust structs
//! - **error**: Error types for payload decoding
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{parse_products, parse_recipes};
//!
//! let products = parse_products(&products_body)?;
//! let recipes = parse_recipes(&recipes_body)?;
//!
//! println!("{} products, {} recipes", products.len(), recipes.len());
//! ```

// Public modules
pub mod error;
pub mod parser;
pub mod types;

// Re-export commonly used items for convenience
pub use error::{CatalogError, Result};
pub use parser::{parse_products, parse_recipes};
pub use types::{Product, Recipe, RecipeId};
