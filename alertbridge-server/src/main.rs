//! Alertbridge Server
//!
//! Accepts batches of structured log lines over HTTP and forwards one
//! Alertmanager alert per line.
//!
//! Architecture:
//! - Configuration: CLI flags with environment fallbacks, validated at startup
//! - API: `POST /` for log batches, `GET /health` for probes
//! - Services: Decode, translate and forward, strictly one record at a time

mod api;
mod config;
mod service;

use std::sync::Arc;
use std::time::Duration;

use alertbridge_client::AlertmanagerClient;
use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api::AppState;
use crate::config::{Config, DEFAULT_MAX_BODY_BYTES};
use crate::service::{AlertForwarder, bridge_service};

#[derive(Parser)]
#[command(name = "alertbridge")]
#[command(about = "Forward error log lines to Alertmanager", long_about = None)]
struct Cli {
    /// Alertmanager v2 API URL
    #[arg(long, env = "ALERTMANAGER_URL")]
    alertmanager_url: String,

    /// Address to listen on
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8080")]
    bind_addr: String,

    /// Timeout for each alert post, in seconds
    #[arg(long, env = "ALERTMANAGER_TIMEOUT_SECS", default_value_t = 10)]
    request_timeout_secs: u64,

    /// Largest accepted log batch, in bytes
    #[arg(long, env = "MAX_BODY_BYTES", default_value_t = DEFAULT_MAX_BODY_BYTES)]
    max_body_bytes: usize,

    /// Send a single test alert and exit
    #[arg(long)]
    send_test_alert: bool,
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Self {
            bind_addr: cli.bind_addr.clone(),
            request_timeout: Duration::from_secs(cli.request_timeout_secs),
            max_body_bytes: cli.max_body_bytes,
            ..Config::new(cli.alertmanager_url.clone())
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "alertbridge_server=info,alertbridge_client=info,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = Config::from(&cli);
    config.validate()?;
    let endpoint = config.endpoint()?;

    tracing::info!("Alertmanager endpoint: {}", endpoint);

    let client = AlertmanagerClient::with_timeout(endpoint, config.request_timeout)
        .context("Failed to build Alertmanager client")?;
    let forwarder: Arc<dyn AlertForwarder> = Arc::new(client);

    if cli.send_test_alert {
        return send_test_alert(forwarder.as_ref()).await;
    }

    let app = api::create_router(AppState {
        forwarder,
        max_body_bytes: config.max_body_bytes,
    });

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;

    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server shut down");
    Ok(())
}

/// Push one synthetic alert through the normal translate/forward path
async fn send_test_alert(forwarder: &dyn AlertForwarder) -> Result<()> {
    tracing::info!("Sending test alert");

    let record = bridge_service::test_record(chrono::Utc::now());
    bridge_service::forward_record(forwarder, 0, &record)
        .await
        .context("Failed to send test alert")?;

    Ok(())
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
