//! `feedlift` — terminal client for the AI product listing optimization
//! service: single-product optimization, CSV batch runs with a session
//! dashboard, and merchant feed exports.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use feedlift_client::{ApiClient, FeedType};

mod form;
mod render;
mod workflow;

use form::ProductForm;
use render::TermPresenter;
use workflow::Workflows;

#[derive(Debug, Parser)]
#[command(name = "feedlift")]
#[command(about = "Client for the AI product listing optimization service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check service liveness and credentials.
    Status,
    /// Optimize a single product entered as flags.
    Optimize(ProductForm),
    /// Upload CSV files and batch-optimize their products.
    Batch {
        /// CSV files, processed strictly in order.
        files: Vec<PathBuf>,
        /// Export the newest batch afterwards (google-merchant or meta-csv).
        #[arg(long)]
        export: Option<FeedType>,
    },
    /// Download an export feed for a completed batch.
    Export {
        #[arg(long)]
        batch_id: String,
        /// google-merchant or meta-csv.
        #[arg(long)]
        feed: FeedType,
        /// Output directory; defaults to FEEDLIFT_EXPORT_DIR.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Write the CSV template for bulk uploads (no network call).
    Template {
        #[arg(long, default_value = "product_template.csv")]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    // The template is generated entirely client-side.
    if let Commands::Template { out } = &cli.command {
        std::fs::write(out, feedlift_core::template::csv_template())?;
        println!("saved {}", out.display());
        return Ok(());
    }

    let config = feedlift_core::load_config()?;
    let client = ApiClient::new(&config.api_url, config.timeout_secs)?;
    let mut flows = Workflows::new(client, TermPresenter::new());

    // Status check runs once at startup; degraded or unreachable states
    // warn but never block the requested workflow.
    flows.startup_check().await;

    match cli.command {
        Commands::Status | Commands::Template { .. } => {}
        Commands::Optimize(form) => {
            flows.optimize_single(&form.into_input()).await;
        }
        Commands::Batch { files, export } => {
            for file in &files {
                flows.run_csv_batch(Some(file)).await;
            }
            if let Some(feed) = export {
                match flows.latest_batch_id() {
                    Some(batch_id) => {
                        flows.export_feed(&batch_id, feed, &config.export_dir).await;
                    }
                    None => tracing::warn!("no completed batch to export"),
                }
            }
        }
        Commands::Export {
            batch_id,
            feed,
            out,
        } => {
            let out_dir = out.unwrap_or_else(|| config.export_dir.clone());
            flows.export_feed(&batch_id, feed, &out_dir).await;
        }
    }

    Ok(())
}
