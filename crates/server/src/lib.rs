//! Server crate for the recipe recommendation service.
//!
//! Contains the orchestrator that sequences the pipeline (fetch →
//! parse → encode → infer → assemble), the HTTP routes that expose it,
//! and the service's configuration and telemetry setup.

pub mod config;
pub mod orchestrator;
pub mod routes;
pub mod telemetry;

pub use config::ServiceConfig;
pub use orchestrator::{RecipeRecommendation, RecommendError, RecommendOrchestrator};
pub use routes::{router, run};
