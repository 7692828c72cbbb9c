//! ACH workbench server entrypoint.

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use ach_workbench::adapters::export::MarkdownReportExporter;
use ach_workbench::adapters::http::workbench::{workbench_routes, WorkbenchAppState};
use ach_workbench::adapters::storage::{FileAnalysisRepository, InMemoryAnalysisRepository};
use ach_workbench::config::{AppConfig, ServerConfig};
use ach_workbench::ports::AnalysisRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server);

    let repository: Arc<dyn AnalysisRepository> = match &config.storage.data_dir {
        Some(dir) => {
            info!("Persisting analyses under {}", dir.display());
            Arc::new(FileAnalysisRepository::new(dir))
        }
        None => {
            info!("No data directory configured; analyses are kept in memory");
            Arc::new(InMemoryAnalysisRepository::new())
        }
    };

    let state = WorkbenchAppState::new(
        repository,
        Arc::new(MarkdownReportExporter::new()),
        config.analysis.thresholds(),
    );

    let app = workbench_routes(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.server))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("ACH workbench listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(config: &ServerConfig) {
    // RUST_LOG wins over the configured directive.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
