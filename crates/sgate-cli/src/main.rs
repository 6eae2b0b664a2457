//! # sgate CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

mod config;
mod serve;
mod token;

use clap::Parser;

use crate::config::{LogFormat, ServerConfig};

/// SchoolsGate Stack CLI — institution device policy toolchain.
///
/// Runs the presence-verification and policy API server, and issues
/// credential tokens offline.
#[derive(Parser, Debug)]
#[command(name = "sgate", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run the API server.
    Serve(serve::ServeArgs),
    /// Encode a credential token offline.
    Token(token::TokenArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => {
            let config = ServerConfig::load(args.config.as_deref())?;
            init_tracing(config.log_format);
            serve::run(config, args).await
        }
        Commands::Token(args) => {
            init_tracing(LogFormat::Text);
            token::run(args)
        }
    }
}

/// Initialize the tracing subscriber. `RUST_LOG` overrides the default
/// `info` filter.
fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    match format {
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
        LogFormat::Json => tracing_subscriber::fmt().json().with_env_filter(filter).init(),
    }
}
