//! Feature pipeline for the recipe recommender.
//!
//! This crate provides the preprocessing stage between the fetched
//! catalog and the model: encoding recipes into the binary
//! ingredient-presence matrix the network scores.
//!
//! ## Architecture
//! The pipeline is a single pure stage:
//! 1. The orchestrator parses the upstream payloads into domain types
//! 2. `encode_presence_matrix` turns them into an `Array2<f32>`
//! 3. The matrix feeds the model's forward pass
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::encode_presence_matrix;
//!
//! let features = encode_presence_matrix(&products, &recipes);
//! assert_eq!(features.shape(), &[recipes.len(), products.len()]);
//! ```

pub mod encoder;

// Re-export main entry point
pub use encoder::encode_presence_matrix;
