//! # rfbridged — rfbridge daemon
//!
//! Composition root that wires all adapters together and starts the bridge.
//!
//! ## Responsibilities
//! - Load configuration (TOML file + env overrides) and initialize logging
//! - Build the identity resolver from the configured mapping table
//! - Construct the sinks (latest-value cache, optional MQTT publisher)
//! - Spawn the decoder subprocess and the pipeline task that consumes it
//! - Serve the HTTP query endpoint over the cache
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.
//!
//! When the decoder subprocess exits, the pipeline task ends but the HTTP
//! endpoint keeps serving the last cached readings; restarting the decoder
//! is the supervisor's job, not ours.

mod config;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use rfbridge_adapter_rtl433::Rtl433Process;
use rfbridge_app::latest_cache::LatestValueCache;
use rfbridge_app::pipeline::Pipeline;
use rfbridge_app::ports::EventSink;
use rfbridge_app::resolver::IdentityResolver;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Sinks
    let cache = Arc::new(LatestValueCache::new());
    let mut sinks: Vec<Arc<dyn EventSink>> = vec![cache.clone()];
    if config.mqtt.enabled {
        sinks.push(Arc::new(rfbridge_adapter_mqtt::start(&config.mqtt)));
    } else {
        tracing::info!("mqtt publisher disabled by configuration");
    }

    // Pipeline
    let resolver = IdentityResolver::new(config.identity_map());
    tracing::info!(mappings = resolver.len(), "identity table loaded");
    let pipeline = Pipeline::new(resolver, sinks);

    let source = Rtl433Process::spawn(&config.rtl433)?;
    tokio::spawn(async move {
        if let Err(err) = pipeline.run(source).await {
            tracing::error!(%err, "pipeline input failed");
        }
    });

    // HTTP
    let app = rfbridge_adapter_http_axum::router::build(cache);
    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "rfbridge sensor receiver listening");
    axum::serve(listener, app).await?;

    Ok(())
}
