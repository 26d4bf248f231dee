//! Offline training for the recommendation network.
//!
//! Full-batch gradient descent with MSE loss over the softmax output.
//! The network is small enough that the backward pass is hand-derived:
//! softmax Jacobian, ReLU mask, then the usual linear-layer gradients.

use ndarray::{Array2, Axis};
use rand::Rng;
use tracing::info;

use crate::network::{relu, softmax_rows, Recommend};

/// Hyperparameters for a training run.
#[derive(Debug, Clone)]
pub struct TrainConfig {
    pub hidden_size: usize,
    pub learning_rate: f32,
    pub epochs: usize,
}

/// Mean squared error between prediction and target.
pub fn mse_loss(prediction: &Array2<f32>, target: &Array2<f32>) -> f32 {
    let diff = prediction - target;
    diff.mapv(|v| v * v).mean().unwrap_or(0.0)
}

/// Train a fresh network on the full batch `(x_train, y_train)`.
///
/// Runs `config.epochs` epochs of plain gradient descent, logging the
/// loss every 10 epochs, and returns the trained network. Persisting
/// the weights is the caller's responsibility.
pub fn train(
    x_train: &Array2<f32>,
    y_train: &Array2<f32>,
    config: &TrainConfig,
    rng: &mut impl Rng,
) -> Recommend {
    info!(
        epochs = config.epochs,
        learning_rate = config.learning_rate,
        hidden_size = config.hidden_size,
        "Training started"
    );

    let mut network = Recommend::new(
        x_train.ncols(),
        config.hidden_size,
        y_train.ncols(),
        rng,
    );

    for epoch in 0..config.epochs {
        let loss = train_step(&mut network, x_train, y_train, config.learning_rate);
        if epoch % 10 == 0 {
            info!(
                "Epoch {} of {} finished with loss={:.4}",
                epoch + 1,
                config.epochs,
                loss
            );
        }
    }

    info!("Model training finished");
    network
}

/// One full-batch gradient step. Returns the pre-update loss.
fn train_step(network: &mut Recommend, x: &Array2<f32>, y: &Array2<f32>, lr: f32) -> f32 {
    // Forward, keeping intermediates for the backward pass
    let hidden_pre = network.fc1.forward(x);
    let hidden = relu(&hidden_pre);
    let logits = network.fc2.forward(&hidden);
    let probs = softmax_rows(&logits);

    let loss = mse_loss(&probs, y);

    // dL/dp for mean squared error
    let n = probs.len().max(1) as f32;
    let grad_probs = (&probs - y).mapv(|v| 2.0 * v / n);

    // Softmax Jacobian applied row-wise: dz = p ⊙ (g - <g, p>)
    let mut grad_logits = Array2::<f32>::zeros(probs.raw_dim());
    for i in 0..probs.nrows() {
        let p = probs.row(i);
        let g = grad_probs.row(i);
        let dot = g.dot(&p);
        for j in 0..probs.ncols() {
            grad_logits[[i, j]] = p[j] * (g[j] - dot);
        }
    }

    // Output layer gradients
    let grad_w2 = grad_logits.t().dot(&hidden);
    let grad_b2 = grad_logits.sum_axis(Axis(0));

    // Back through fc2, masking where the ReLU was inactive
    let grad_hidden = grad_logits.dot(&network.fc2.weight);
    let relu_mask = hidden_pre.mapv(|v| if v > 0.0 { 1.0 } else { 0.0 });
    let grad_hidden_pre = &grad_hidden * &relu_mask;

    let grad_w1 = grad_hidden_pre.t().dot(x);
    let grad_b1 = grad_hidden_pre.sum_axis(Axis(0));

    // Gradient descent update
    network.fc2.weight.scaled_add(-lr, &grad_w2);
    network.fc2.bias.scaled_add(-lr, &grad_b2);
    network.fc1.weight.scaled_add(-lr, &grad_w1);
    network.fc1.bias.scaled_add(-lr, &grad_b1);

    loss
}
