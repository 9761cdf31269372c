//! # Launch Dashboard Server
//!
//! Binary entry point: load the dataset once, then serve the dashboard.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use launch_analytics::{DashboardEngine, DatasetSource, FileCsvSource, HttpCsvSource};
use launch_dashboard_api::{
    build_router, build_schema, ApiContext, Config, DatasetLocation, LogFormat,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.log_level.clone().into());
    let registry = tracing_subscriber::registry().with(filter);
    match config.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer().pretty()).init(),
    }

    tracing::info!(
        version = launch_dashboard_api::VERSION,
        "Starting Launch Dashboard"
    );

    // Load the base table; the server never starts without it
    let source: Box<dyn DatasetSource> = match &config.dataset {
        DatasetLocation::Url(url) => Box::new(HttpCsvSource::new(url.clone())?),
        DatasetLocation::Path(path) => Box::new(FileCsvSource::new(path.clone())),
    };

    tracing::info!(source = %source.describe(), "Loading launch dataset");
    let table = match source.load().await {
        Ok(table) => table,
        Err(e) => {
            tracing::error!(source = %source.describe(), error = %e, "Dataset load failed");
            return Err(e)
                .with_context(|| format!("Failed to load dataset from {}", source.describe()));
        }
    };

    let info = table.info();
    tracing::info!(
        rows = info.row_count,
        undated_rows = info.undated_rows,
        missing_payload_rows = info.missing_payload_rows,
        "Dataset loaded"
    );

    // Build engine, context and schema
    let engine = DashboardEngine::new(table).with_histogram_bins(config.histogram_bins);
    let schema = build_schema(ApiContext::new(engine));

    tracing::info!(
        histogram_bins = config.histogram_bins,
        "GraphQL schema built"
    );

    // Build router
    let app = build_router(schema);

    // Start server
    let addr = config.server_addr;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!("Dashboard available at http://{}/", addr);
    tracing::info!("GraphQL Playground available at http://{}/graphql", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down gracefully");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
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
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, shutting down");
        }
    }
}
