//! Weight persistence.
//!
//! Weights are a bincode blob of the four parameter arrays plus the
//! layer sizes. There is no format versioning; a stale or foreign blob
//! fails to decode or fails the shape check.

use std::fs;
use std::path::Path;

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ModelError, Result};
use crate::network::{Linear, Recommend};

/// Serialized form of a trained network.
#[derive(Debug, Serialize, Deserialize)]
pub struct ModelWeights {
    pub input_size: usize,
    pub hidden_size: usize,
    pub output_size: usize,
    pub fc1_weight: Array2<f32>,
    pub fc1_bias: Array1<f32>,
    pub fc2_weight: Array2<f32>,
    pub fc2_bias: Array1<f32>,
}

impl From<&Recommend> for ModelWeights {
    fn from(network: &Recommend) -> Self {
        Self {
            input_size: network.input_size(),
            hidden_size: network.hidden_size(),
            output_size: network.output_size(),
            fc1_weight: network.fc1.weight.clone(),
            fc1_bias: network.fc1.bias.clone(),
            fc2_weight: network.fc2.weight.clone(),
            fc2_bias: network.fc2.bias.clone(),
        }
    }
}

impl Recommend {
    /// Persist the network's weights to `path`, creating parent
    /// directories as needed. Always overwrites.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| ModelError::Io {
                    path: parent.display().to_string(),
                    source,
                })?;
            }
        }

        let blob = bincode::serialize(&ModelWeights::from(self))?;
        fs::write(path, blob).map_err(|source| ModelError::Io {
            path: path.display().to_string(),
            source,
        })?;

        info!(path = %path.display(), "Model weights saved");
        Ok(())
    }

    /// Load weights from `path` into a network with the requested sizes.
    ///
    /// Fails with [`ModelError::ShapeMismatch`] when the stored
    /// input/output sizes differ from `input_size`/`output_size`, i.e. the
    /// catalog has changed since the weights were trained.
    pub fn load(path: &Path, input_size: usize, output_size: usize) -> Result<Self> {
        info!(path = %path.display(), "Loading model weights");

        let bytes = fs::read(path).map_err(|source| ModelError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let weights: ModelWeights = bincode::deserialize(&bytes)?;

        if weights.input_size != input_size || weights.output_size != output_size {
            return Err(ModelError::ShapeMismatch {
                stored_input: weights.input_size,
                stored_output: weights.output_size,
                requested_input: input_size,
                requested_output: output_size,
            });
        }

        info!("Model weights loaded successfully");
        Ok(Self {
            fc1: Linear {
                weight: weights.fc1_weight,
                bias: weights.fc1_bias,
            },
            fc2: Linear {
                weight: weights.fc2_weight,
                bias: weights.fc2_bias,
            },
        })
    }
}
