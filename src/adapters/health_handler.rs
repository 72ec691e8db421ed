use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::Settings;
use crate::domain::form::Step;
use crate::wizards::Variant;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthChecks {
    pub config: String,
    pub variant: Variant,
}

pub struct HealthHandler {
    settings: Arc<Settings>,
    start_time: std::time::Instant,
}

impl HealthHandler {
    pub fn new(settings: Arc<Settings>) -> Self {
        Self {
            settings,
            start_time: std::time::Instant::now(),
        }
    }

    /// Basic health check - returns 200 if server is running
    pub async fn health(&self) -> impl IntoResponse {
        let uptime = self.start_time.elapsed().as_secs();
        let status = HealthStatus {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: uptime,
            checks: HealthChecks {
                config: "ok".to_string(),
                variant: self.settings.form.variant,
            },
        };

        (StatusCode::OK, Json(status))
    }

    /// Readiness check - returns 200 once the configured wizard can render
    /// its first page
    pub async fn ready(&self) -> impl IntoResponse {
        let variant = self.settings.form.variant;
        let mut generator = variant.generator();

        match generator.resume(None) {
            Step::Page(page) => (
                StatusCode::OK,
                Json(serde_json::json!({
                    "status": "ready",
                    "message": "Server is ready to accept requests",
                    "first_page": page.name(),
                })),
            ),
            Step::Done(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({
                    "status": "not_ready",
                    "message": format!("Form {} has no pages", variant),
                })),
            ),
        }
    }

    /// Liveness check - returns 200 if server is alive
    pub async fn live(&self) -> impl IntoResponse {
        (
            StatusCode::OK,
            Json(serde_json::json!({
                "status": "alive",
                "message": "Server is alive"
            })),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    fn handler() -> HealthHandler {
        HealthHandler::new(Arc::new(Settings::default()))
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = handler().health().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_ready_endpoint_reports_first_page() {
        let response = handler().ready().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ready");
        assert_eq!(json["first_page"], "TestForm0");
    }

    #[tokio::test]
    async fn test_live_endpoint() {
        let response = handler().live().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
