// Exports the error envelope's OpenAPI document
// Run with: cargo run --bin openapi_export
// Set OPENAPI_OUTPUT to write to a file instead of stdout

use anyhow::{Context, Result};
use swagger_errors::api::openapi::ErrorApiDoc;
use swagger_errors::config::ExportConfig;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,swagger_errors=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ExportConfig::from_env().context("Failed to load configuration")?;
    let json = config.render(&ErrorApiDoc::openapi())?;

    match &config.output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("OpenAPI specification written to {}", path.display());
        }
        None => {
            println!("{}", json);
            info!("OpenAPI specification generated successfully");
        }
    }

    Ok(())
}
