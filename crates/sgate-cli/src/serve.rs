//! # Serve Subcommand
//!
//! Runs the API server over a fresh in-memory registry, optionally seeded
//! with the sample school.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Args;

use sgate_api::AppState;
use sgate_core::{GeoPoint, Institution, InstitutionId};
use sgate_registry::{MemoryRegistry, Registry};

use crate::config::ServerConfig;

/// Arguments for the serve subcommand.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Path to a YAML configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Bind address, overriding the configuration file.
    #[arg(long)]
    pub bind: Option<String>,

    /// Seed the sample school at startup.
    #[arg(long)]
    pub seed: bool,
}

/// Run the server until interrupted.
pub async fn run(config: ServerConfig, args: ServeArgs) -> anyhow::Result<()> {
    let registry = MemoryRegistry::new();
    if args.seed || config.seed_sample_data {
        let institution = seed_sample_data(&registry)?;
        tracing::info!(%institution, "sample school created");
    }

    let state = AppState::with_registry(Arc::new(registry));
    let app = sgate_api::app(state);

    let bind = args.bind.unwrap_or(config.bind);
    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("binding {bind}"))?;
    tracing::info!(%bind, "sgate API listening");
    axum::serve(listener, app).await?;
    Ok(())
}

/// Create the sample school with its default policy set.
fn seed_sample_data(registry: &dyn Registry) -> anyhow::Result<InstitutionId> {
    let institution = Institution::new(
        "Sample High School",
        Some("123 Education Street, Learning City".to_string()),
        Some(GeoPoint::new(40.7128, -74.0060)?),
        Some("School-WiFi".to_string()),
    )?;
    let id = institution.id;
    registry.insert_institution(institution)?;
    sgate_policy::bootstrap(registry, id)?;
    Ok(id)
}
