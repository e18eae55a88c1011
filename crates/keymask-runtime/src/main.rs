//! # Keymask Runtime
//!
//! The main entry point for the Keymask service.
//!
//! ## Startup Sequence
//!
//! 1. Initialize logging (`KEYMASK_LOG` overrides the `info` default)
//! 2. Build the name dictionary (built-in table, or `KEYMASK_NAMES_FILE`)
//! 3. Generate the substitution key (`KEYMASK_SEED` for deterministic
//!    runs, otherwise a fresh time-derived seed per process)
//! 4. Start the HTTP gateway
//! 5. Serve until Ctrl+C, then shut down gracefully
//!
//! Engine initialization failure is fatal: the process logs the error and
//! exits non-zero without serving a single request. The key is immutable
//! for the lifetime of the process; restarting the service is the only way
//! to rotate it.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use keymask_engine::{EngineError, NameDictionary, SubstitutionCipher};
use keymask_gateway::{GatewayConfig, GatewayService};

/// Load gateway configuration from environment overrides.
fn load_config() -> GatewayConfig {
    let mut config = GatewayConfig::default();

    if let Ok(host) = std::env::var("KEYMASK_HTTP_HOST") {
        match host.parse() {
            Ok(h) => config.http.host = h,
            Err(_) => warn!(host = %host, "KEYMASK_HTTP_HOST is not a valid IP address"),
        }
    }
    if let Ok(port) = std::env::var("KEYMASK_HTTP_PORT") {
        match port.parse() {
            Ok(p) => config.http.port = p,
            Err(_) => warn!(port = %port, "KEYMASK_HTTP_PORT is not a valid port"),
        }
    }

    config
}

/// Build the name dictionary from `KEYMASK_NAMES_FILE`, falling back to the
/// built-in table.
fn load_dictionary() -> Result<NameDictionary, EngineError> {
    match std::env::var("KEYMASK_NAMES_FILE") {
        Ok(path) => {
            info!(path = %path, "Loading name dictionary from file");
            NameDictionary::from_json_file(&PathBuf::from(path))
        }
        Err(_) => Ok(NameDictionary::with_default_names()),
    }
}

/// Build the cipher engine. `KEYMASK_SEED` pins the key for debugging;
/// otherwise every run gets a distinct key.
fn build_engine() -> Result<SubstitutionCipher, EngineError> {
    let names = load_dictionary()?;

    match std::env::var("KEYMASK_SEED")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
    {
        Some(seed) => {
            info!(seed, "Using fixed key seed");
            SubstitutionCipher::with_seed(seed, names)
        }
        None => SubstitutionCipher::new(names),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_env("KEYMASK_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("=====================================");
    info!("  Keymask v{}", keymask_gateway::VERSION);
    info!("=====================================");

    // Engine construction is the only fatal failure class: a process
    // without a valid key must not serve requests.
    let engine = match build_engine() {
        Ok(engine) => Arc::new(engine),
        Err(e) => {
            error!(error = %e, "Failed to initialize cipher engine");
            std::process::exit(1);
        }
    };
    debug!(key = %engine.key().mapping(), "Cipher initialized");
    info!(
        names = engine.names().len(),
        "Cipher engine ready"
    );

    let config = load_config();
    let service = match GatewayService::new(config, Arc::clone(&engine)) {
        Ok(service) => Arc::new(service),
        Err(e) => {
            error!(error = %e, "Failed to create gateway service");
            std::process::exit(1);
        }
    };

    let server = {
        let service = Arc::clone(&service);
        tokio::spawn(async move { service.start().await })
    };

    info!("Service is running. Press Ctrl+C to stop.");
    tokio::signal::ctrl_c().await?;

    // Graceful shutdown
    info!("Initiating graceful shutdown...");
    service.shutdown();
    server.await??;
    info!("Shutdown complete");

    Ok(())
}
