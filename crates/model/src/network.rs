//! The recommendation network.
//!
//! A two-layer feed-forward net: linear → ReLU → linear → row softmax.
//! Input is the ingredient-presence matrix (one row per recipe), output
//! is a probability-like score row per recipe.

use ndarray::{Array1, Array2, Axis};
use rand::Rng;

/// Fully-connected layer with `(out, in)` weight layout.
#[derive(Debug, Clone)]
pub struct Linear {
    pub(crate) weight: Array2<f32>,
    pub(crate) bias: Array1<f32>,
}

impl Linear {
    /// Initialize with uniform `±1/sqrt(in)` weights and biases.
    pub fn init(in_features: usize, out_features: usize, rng: &mut impl Rng) -> Self {
        let bound = if in_features == 0 {
            0.0
        } else {
            1.0 / (in_features as f32).sqrt()
        };

        let weight =
            Array2::from_shape_fn((out_features, in_features), |_| rng.random_range(-bound..=bound));
        let bias = Array1::from_shape_fn(out_features, |_| rng.random_range(-bound..=bound));

        Self { weight, bias }
    }

    pub fn forward(&self, x: &Array2<f32>) -> Array2<f32> {
        x.dot(&self.weight.t()) + &self.bias
    }

    pub fn in_features(&self) -> usize {
        self.weight.ncols()
    }

    pub fn out_features(&self) -> usize {
        self.weight.nrows()
    }
}

/// Element-wise rectified linear unit.
pub fn relu(x: &Array2<f32>) -> Array2<f32> {
    x.mapv(|v| v.max(0.0))
}

/// Row-wise softmax.
///
/// The row maximum is subtracted before exponentiation so large logits
/// don't overflow. Each non-empty row of the result sums to 1.0.
pub fn softmax_rows(z: &Array2<f32>) -> Array2<f32> {
    let mut out = z.clone();
    for mut row in out.axis_iter_mut(Axis(0)) {
        let max = row.fold(f32::NEG_INFINITY, |acc, &v| acc.max(v));
        row.mapv_inplace(|v| (v - max).exp());
        let sum = row.sum();
        if sum > 0.0 {
            row.mapv_inplace(|v| v / sum);
        }
    }
    out
}

/// Two-layer recipe suggestion network.
#[derive(Debug, Clone)]
pub struct Recommend {
    pub(crate) fc1: Linear,
    pub(crate) fc2: Linear,
}

impl Recommend {
    /// Build a freshly initialized network.
    pub fn new(
        input_size: usize,
        hidden_size: usize,
        output_size: usize,
        rng: &mut impl Rng,
    ) -> Self {
        Self {
            fc1: Linear::init(input_size, hidden_size, rng),
            fc2: Linear::init(hidden_size, output_size, rng),
        }
    }

    /// One forward pass: linear → ReLU → linear → row softmax.
    pub fn forward(&self, x: &Array2<f32>) -> Array2<f32> {
        let hidden = relu(&self.fc1.forward(x));
        softmax_rows(&self.fc2.forward(&hidden))
    }

    pub fn input_size(&self) -> usize {
        self.fc1.in_features()
    }

    pub fn hidden_size(&self) -> usize {
        self.fc1.out_features()
    }

    pub fn output_size(&self) -> usize {
        self.fc2.out_features()
    }
}
