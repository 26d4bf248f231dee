//! # Upstream Crate
//!
//! Client for the upstream service that supplies the product and recipe
//! catalogs the recommendation pipeline consumes.
//!
//! ## Components
//!
//! - **client**: `UpstreamClient` with per-endpoint fetches and a
//!   concurrent `fetch_catalog` fan-out
//! - **error**: status-code and transport error types
//!
//! ## Example Usage
//!
//! ```ignore
//! use upstream::UpstreamClient;
//!
//! let client = UpstreamClient::new("http://localhost:8080");
//! let (products_body, recipes_body) = client.fetch_catalog(token).await?;
//! ```

// Public modules
pub mod client;
pub mod error;

// Re-export commonly used types
pub use client::UpstreamClient;
pub use error::{Result, UpstreamError};
