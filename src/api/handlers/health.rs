//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;

use crate::api::dto::health::{EnvironmentInfo, HealthErrorResponse, HealthResponse};
use crate::state::AppState;

/// Reports the health of the Redis storage dependency.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Probe succeeded
/// - **500 Internal Server Error**: Probe failed for any reason
///
/// # Response
///
/// ```json
/// {
///   "timestamp": "2026-08-07T12:00:00.000Z",
///   "redis": {
///     "status": "ok",
///     "latencyMs": 3
///   },
///   "environment": {
///     "nodeEnv": "production",
///     "redisUrl": "configured"
///   }
/// }
/// ```
///
/// On failure the body is `{ "error": "Health check failed", "timestamp": ... }`.
/// Probe errors are not classified or retried; the underlying cause is
/// logged once for operators and never exposed to callers.
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthErrorResponse>)> {
    match state.probe.check_health().await {
        Ok(report) => Ok(Json(HealthResponse {
            timestamp: Utc::now(),
            redis: report,
            environment: EnvironmentInfo {
                node_env: state.config.deploy_mode.clone(),
                redis_url: if state.config.is_redis_configured() {
                    "configured"
                } else {
                    "not configured"
                },
            },
        })),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);

            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HealthErrorResponse {
                    error: "Health check failed",
                    timestamp: Utc::now(),
                }),
            ))
        }
    }
}
