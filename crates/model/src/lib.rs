//! Recipe suggestion model.
//!
//! This crate owns the scoring seam of the pipeline: the `Recommend`
//! network (linear → ReLU → linear → row softmax), its offline training
//! loop, and weight persistence. It handles:
//! - Forward passes over the ingredient-presence matrix
//! - Full-batch gradient-descent training with MSE loss
//! - Saving/loading weights as a bincode blob, with a shape check on load

pub mod error;
pub mod network;
pub mod store;
pub mod train;

// Re-export the main types
pub use error::{ModelError, Result};
pub use network::{relu, softmax_rows, Linear, Recommend};
pub use store::ModelWeights;
pub use train::{mse_loss, train, TrainConfig};
