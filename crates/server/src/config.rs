//! Service configuration.
//!
//! Loaded from a TOML file (`recs.toml` by default, path overridable
//! via the `RECS_CONFIG` environment variable). Every field has a
//! default so a missing file or a partial file still yields a working
//! configuration.

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ServiceConfig {
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub model: ModelConfig,
}

impl ServiceConfig {
    /// Load the configuration, falling back to defaults when no config
    /// file exists.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path();
        if config_path.exists() {
            let raw = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config file {}", config_path.display()))?;
            let parsed: ServiceConfig = toml::from_str(&raw)
                .with_context(|| format!("Failed to parse TOML from {}", config_path.display()))?;
            return Ok(parsed);
        }

        Ok(ServiceConfig::default())
    }
}

fn resolve_config_path() -> PathBuf {
    if let Ok(path) = env::var("RECS_CONFIG") {
        return PathBuf::from(path);
    }

    PathBuf::from("recs.toml")
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0:5000".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    #[serde(default = "default_hidden_size")]
    pub hidden_size: usize,
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f32,
    #[serde(default = "default_epochs")]
    pub epochs: usize,
    #[serde(default = "default_weights_path")]
    pub weights_path: PathBuf,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            hidden_size: default_hidden_size(),
            learning_rate: default_learning_rate(),
            epochs: default_epochs(),
            weights_path: default_weights_path(),
        }
    }
}

fn default_hidden_size() -> usize {
    32
}

fn default_learning_rate() -> f32 {
    0.01
}

fn default_epochs() -> usize {
    100
}

fn default_weights_path() -> PathBuf {
    PathBuf::from("models/recipe_model_weights.bin")
}
