use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Settings for the OpenAPI export tool
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Target file; stdout when unset
    pub output: Option<PathBuf>,
    pub pretty: bool,
}

impl ExportConfig {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Ok(ExportConfig {
            output: env::var("OPENAPI_OUTPUT")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            pretty: env::var("OPENAPI_PRETTY")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .context("OPENAPI_PRETTY must be true or false")?,
        })
    }

    pub fn render<T: serde::Serialize>(&self, value: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        json.context("Failed to serialize OpenAPI document")
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output: None,
            pretty: true,
        }
    }
}
