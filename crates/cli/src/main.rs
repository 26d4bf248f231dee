use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use ndarray::Array2;
use std::time::Instant;
use tracing::info;

use model::TrainConfig;
use server::{RecommendOrchestrator, ServiceConfig};
use upstream::UpstreamClient;

/// PantryRecs - Recipe Recommendation Service
#[derive(Parser)]
#[command(name = "pantry-recs")]
#[command(about = "Recipe recommendations over a product/recipe catalog", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the recommendation HTTP server
    Serve {
        /// Address to bind, overriding the configured one
        #[arg(long)]
        bind: Option<String>,
    },

    /// Train the model on the current catalog and persist its weights
    Train {
        /// Upstream API token used to fetch the product list
        #[arg(long)]
        token: String,

        /// Number of training epochs, overriding the configured value
        #[arg(long)]
        epochs: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ServiceConfig::load().context("Failed to load service configuration")?;

    match cli.command {
        Commands::Serve { bind } => handle_serve(config, bind).await,
        Commands::Train { token, epochs } => handle_train(config, token, epochs).await,
    }
}

/// Handle the 'serve' command
async fn handle_serve(config: ServiceConfig, bind: Option<String>) -> Result<()> {
    let _guard = server::telemetry::init("serve");

    let bind_addr = bind.unwrap_or_else(|| config.http.bind_addr.clone());
    let orchestrator = RecommendOrchestrator::new(&config);

    println!(
        "{} Recommending against {} (weights: {})",
        "✓".green(),
        config.upstream.base_url,
        config.model.weights_path.display()
    );

    server::run(&bind_addr, orchestrator).await
}

/// Handle the 'train' command
async fn handle_train(
    config: ServiceConfig,
    token: String,
    epochs_override: Option<usize>,
) -> Result<()> {
    let _guard = server::telemetry::init("train");

    // Fetch the catalog the weights will be trained against
    let client = UpstreamClient::new(&config.upstream.base_url);
    println!("Fetching catalog from {}...", config.upstream.base_url);
    let (products_raw, recipes_raw) = client
        .fetch_catalog(&token)
        .await
        .context("Failed to fetch catalog from upstream")?;

    let products = catalog::parse_products(&products_raw)?;
    let recipes = catalog::parse_recipes(&recipes_raw)?;
    println!(
        "{} Fetched {} products and {} recipes",
        "✓".green(),
        products.len(),
        recipes.len()
    );

    let train_config = TrainConfig {
        hidden_size: config.model.hidden_size,
        learning_rate: config.model.learning_rate,
        epochs: epochs_override.unwrap_or(config.model.epochs),
    };
    info!(
        epochs = train_config.epochs,
        "Training on {} recipes", recipes.len()
    );

    let features = pipeline::encode_presence_matrix(&products, &recipes);
    // Target: each recipe's output row peaks at its own index
    let targets = Array2::<f32>::eye(recipes.len());

    let start = Instant::now();
    let network = tokio::task::spawn_blocking(move || {
        let mut rng = rand::rng();
        model::train(&features, &targets, &train_config, &mut rng)
    })
    .await
    .context("Training task panicked")?;
    println!("{} Trained in {:?}", "✓".green(), start.elapsed());

    network
        .save(&config.model.weights_path)
        .context("Failed to persist model weights")?;
    println!(
        "{} Weights saved to {}",
        "✓".green(),
        config.model.weights_path.display()
    );

    Ok(())
}
