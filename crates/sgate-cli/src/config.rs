//! # Server Configuration
//!
//! YAML configuration file for the `serve` subcommand, with flag
//! overrides. Every field has a default, so running without a config file
//! works out of the box.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable text lines.
    #[default]
    Text,
    /// Structured JSON lines.
    Json,
}

/// Configuration for the API server.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Socket address to bind.
    pub bind: String,
    /// Create the sample school at startup.
    pub seed_sample_data: bool,
    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:5000".to_string(),
            seed_sample_data: false,
            log_format: LogFormat::Text,
        }
    }
}

impl ServerConfig {
    /// Load configuration from a YAML file, or defaults when no path is
    /// given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        serde_yaml::from_str(&text)
            .with_context(|| format!("parsing config file {}", path.display()))
    }
}
