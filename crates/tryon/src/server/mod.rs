//! HTTP API.
//!
//! Three routes over shared, immutable service state:
//!
//! - `GET /health`
//! - `POST /generate-tryon` (multipart form, PNG response)
//! - `POST /generate-description` (multipart form, JSON response)

mod error;
mod handlers;

use std::sync::Arc;

use anyhow::Context;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, HeaderValue};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tryon_core::config::CorsConfig;
use tryon_core::{
    Config, DescribeService, ImageGenerator, ProductDescriber, ProviderFactory, TryOnService,
};

/// Response header carrying the translated size.
pub const MAPPED_SIZE_HEADER: &str = "x-mapped-size";

/// Room for the text fields and multipart framing on top of the file itself.
const FORM_OVERHEAD_BYTES: usize = 1 << 20;

/// Services shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub tryon: Arc<TryOnService>,
    pub describe: Arc<DescribeService>,
}

impl AppState {
    pub fn new(
        config: &Config,
        generator: Arc<dyn ImageGenerator>,
        describer: Option<Arc<dyn ProductDescriber>>,
    ) -> Self {
        Self {
            tryon: Arc::new(TryOnService::from_config(config, generator)),
            describe: Arc::new(DescribeService::from_config(config, describer)),
        }
    }
}

/// Build the application router with CORS, tracing and the upload limit.
pub fn router(state: AppState, config: &Config) -> Router {
    let body_limit = config
        .limits
        .max_upload_bytes()
        .saturating_add(FORM_OVERHEAD_BYTES);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/generate-tryon", post(handlers::generate_tryon))
        .route("/generate-description", post(handlers::generate_description))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors_layer(&config.server.cors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Build a CORS layer from configuration.
///
/// Wildcard origins never allow credentials; config validation rejects that
/// combination before it gets here.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let mapped_size = HeaderName::from_static(MAPPED_SIZE_HEADER);

    if config.allow_any_origin {
        return CorsLayer::new()
            .allow_origin(AllowOrigin::any())
            .allow_methods(AllowMethods::any())
            .allow_headers(AllowHeaders::any())
            .expose_headers([mapped_size]);
    }

    let origins: Vec<HeaderValue> = config
        .origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{origin}'");
                None
            }
        })
        .collect();

    let layer = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .expose_headers([mapped_size]);
    if config.allow_credentials {
        layer.allow_credentials(true)
    } else {
        layer
    }
}

/// Build providers and serve until a shutdown signal arrives.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let generator = ProviderFactory::image_generator(&config)?;
    let describer = match ProviderFactory::describer(&config) {
        Ok(describer) => Some(describer),
        Err(e) => {
            tracing::warn!("Product descriptions disabled: {e}");
            None
        }
    };

    let inventory_root = config.inventory_root();
    if !inventory_root.is_dir() {
        tracing::warn!("Inventory root not found: {}", inventory_root.display());
    }

    let state = AppState::new(&config, generator, describer);
    let app = router(state, &config);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Try-on API listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
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
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("Shutdown signal received, draining connections");
}
