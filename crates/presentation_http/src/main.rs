//! Simple Weather HTTP Server
//!
//! Main entry point for the HTTP API server.

use infrastructure::{AppConfig, LogConfig, build_weather_service, init_logging};
use presentation_http::{ShutdownOutcome, routes, serve, state::AppState};
use tokio::{net::TcpListener, signal};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()
        .and_then(|config| config.validate().map(|()| config))
        .map_err(|e| e.to_string());

    let (config, config_error) = match config {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    init_logging(&LogConfig::from(&config.server))?;

    info!("Simple Weather v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(e) = config_error {
        warn!(error = %e, "Failed to load config, using defaults");
    }

    info!(
        host = %config.server.host,
        port = %config.server.port,
        cache = ?config.cache.backend(),
        "Configuration loaded"
    );

    let service = build_weather_service(&config)
        .map_err(|e| anyhow::anyhow!("Failed to initialize weather service: {e}"))?;

    let addr = config.server.bind_address();
    let shutdown_timeout = config.server.shutdown_timeout();
    let app = routes::create_router(AppState::new(service, config));

    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    match serve(listener, app, shutdown_signal(), shutdown_timeout).await? {
        ShutdownOutcome::Drained => info!("Server shutdown complete"),
        ShutdownOutcome::TimedOut => warn!("Server shutdown forced after timeout"),
    }

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
