//! # Formwizard - Multi-step Form Backend
//!
//! Formwizard serves multi-step form wizards over HTTP. The frontend posts
//! every answer it has collected so far; the server replays them through the
//! wizard and either answers with the schema of the next page to render, with
//! per-field validation errors, or with the completed result.
//!
//! ## Features
//!
//! - **Form engine**: Typed fields, constraints and custom checks rendered as JSON Schema
//! - **Wizards**: `basic`, `showcase` and `widgets` demo flows
//! - **CORS**: Configurable cross-origin policy, permissive by default
//! - **Metrics**: Prometheus metrics for monitoring
//! - **Health Checks**: Kubernetes-ready health endpoints
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use formwizard::config::Settings;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Load configuration
//!     let settings = Settings::new()?;
//!
//!     // Server will start on configured host:port
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **Domain**: The form engine (fields, validation, schema, generator driver)
//! - **Wizards**: Concrete page sequences built on the engine
//! - **Adapters**: HTTP handlers, error mapping and metrics
//! - **Config**: Configuration management

pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;
pub mod wizards;

use crate::adapters::form_handler::{self, FormApiState};
use crate::adapters::health_handler::HealthHandler;
use crate::adapters::metrics_handler::{MetricsCollector, MetricsHandler};
use crate::config::{CorsSettings, Settings};
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Creates the Axum application router with all endpoints configured.
///
/// # Arguments
///
/// * `settings` - Application settings
/// * `metrics` - Metrics collector shared by the form and metrics endpoints
///
/// # Returns
///
/// Configured Axum Router
pub fn create_app(settings: Arc<Settings>, metrics: Arc<MetricsCollector>) -> Router {
    let health_handler = Arc::new(HealthHandler::new(settings.clone()));
    let metrics_handler = Arc::new(MetricsHandler::new(metrics.clone()));

    let health_router = Router::new()
        .route("/health", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.health().await }
            }
        }))
        .route("/health/ready", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.ready().await }
            }
        }))
        .route("/health/live", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.live().await }
            }
        }))
        .route("/metrics", get({
            let handler = metrics_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.metrics().await }
            }
        }));

    let form_state = FormApiState {
        settings: settings.clone(),
        metrics,
    };

    let form_router = Router::new()
        .route("/", get(form_handler::read_root))
        .route("/form", post(form_handler::post_default_form))
        .route("/form/:variant", post(form_handler::post_variant_form))
        .with_state(form_state);

    health_router
        .merge(form_router)
        .layer(cors_layer(&settings.cors))
        .layer(TraceLayer::new_for_http())
}

/// Builds the CORS layer for the configured policy.
///
/// Browsers refuse a literal `*` together with credentials, so a wildcard
/// policy with credentials echoes the request's origin, method and headers.
pub fn cors_layer(cors: &CorsSettings) -> CorsLayer {
    match (cors.allows_any_origin(), cors.allow_credentials) {
        (true, true) => CorsLayer::new()
            .allow_origin(AllowOrigin::mirror_request())
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true),
        (true, false) => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        (false, credentials) => {
            let origins: Vec<HeaderValue> = cors
                .allow_origins
                .iter()
                .filter_map(|origin| match HeaderValue::from_str(origin) {
                    Ok(value) => Some(value),
                    Err(e) => {
                        tracing::warn!("Ignoring invalid CORS origin '{}': {}", origin, e);
                        None
                    }
                })
                .collect();
            let layer = CorsLayer::new().allow_origin(AllowOrigin::list(origins));
            if credentials {
                layer
                    .allow_methods(AllowMethods::mirror_request())
                    .allow_headers(AllowHeaders::mirror_request())
                    .allow_credentials(true)
            } else {
                layer.allow_methods(Any).allow_headers(Any)
            }
        }
    }
}
