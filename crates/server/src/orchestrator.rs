//! # Recommendation Orchestrator
//!
//! Coordinates the recommendation pipeline for one request:
//! 1. Fetch products and recipes from the upstream API (concurrently)
//! 2. Parse both payloads into domain types
//! 3. Encode the ingredient-presence matrix
//! 4. Load the persisted weights and run one forward pass
//! 5. Zip scores with recipe metadata, in input recipe order

use std::path::PathBuf;
use std::time::Instant;

use ndarray::Array2;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use catalog::{CatalogError, Recipe, RecipeId};
use model::{ModelError, Recommend};
use upstream::{UpstreamClient, UpstreamError};

use crate::config::ServiceConfig;

/// Failures the recommendation pipeline can surface.
#[derive(Error, Debug)]
pub enum RecommendError {
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("Inference task panicked")]
    Inference,
}

/// Final recommendation returned to the caller, one per recipe.
#[derive(Debug, Clone, Serialize)]
pub struct RecipeRecommendation {
    pub recipe_id: RecipeId,
    pub recipe_name: String,
    pub suggest: f32,
}

/// Sequences preprocessing and inference for the HTTP endpoint.
#[derive(Debug, Clone)]
pub struct RecommendOrchestrator {
    client: UpstreamClient,
    weights_path: PathBuf,
}

impl RecommendOrchestrator {
    pub fn new(config: &ServiceConfig) -> Self {
        Self {
            client: UpstreamClient::new(&config.upstream.base_url),
            weights_path: config.model.weights_path.clone(),
        }
    }

    /// Main entry point: recommendations for the catalog visible to `token`.
    ///
    /// Weights are re-read from disk on every call; nothing is cached
    /// between requests.
    pub async fn recommend(&self, token: &str) -> Result<Vec<RecipeRecommendation>, RecommendError> {
        let started = Instant::now();

        let (products_raw, recipes_raw) = self.client.fetch_catalog(token).await?;
        let products = catalog::parse_products(&products_raw)?;
        let recipes = catalog::parse_recipes(&recipes_raw)?;
        info!(
            "Loaded {} products and {} recipes",
            products.len(),
            recipes.len()
        );

        let input_size = products.len();
        let output_size = recipes.len();

        let features = pipeline::encode_presence_matrix(&products, &recipes);
        let scores = self.score(features, input_size, output_size).await?;

        let recommendations = assemble(recipes, &scores);
        info!(
            "Generated {} recommendations in {:.2?}",
            recommendations.len(),
            started.elapsed()
        );
        Ok(recommendations)
    }

    /// Run inference off the async runtime: load weights, one forward pass.
    async fn score(
        &self,
        features: Array2<f32>,
        input_size: usize,
        output_size: usize,
    ) -> Result<Array2<f32>, RecommendError> {
        let weights_path = self.weights_path.clone();

        tokio::task::spawn_blocking(move || -> Result<Array2<f32>, RecommendError> {
            let network = Recommend::load(&weights_path, input_size, output_size)?;
            Ok(network.forward(&features))
        })
        .await
        .map_err(|_| RecommendError::Inference)?
    }
}

/// Zip score rows with recipe metadata, preserving input recipe order.
///
/// The suggestion value is the first component of each recipe's score
/// row, matching the upstream contract for the `suggest` field.
fn assemble(recipes: Vec<Recipe>, scores: &Array2<f32>) -> Vec<RecipeRecommendation> {
    recipes
        .into_iter()
        .enumerate()
        .map(|(i, recipe)| RecipeRecommendation {
            recipe_id: recipe.id,
            recipe_name: recipe.name,
            suggest: scores[[i, 0]],
        })
        .collect()
}
