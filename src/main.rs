//! pdf-quote - Entry point
//!
//! Extracts the text of a PDF drawing and prints the quote returned by the
//! estimation service.

use clap::Parser;
use pdf_quote::cli::{run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pdf_quote=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    tracing::debug!(endpoint = %cli.endpoint, "Starting pdf-quote");

    run(cli).await
}
