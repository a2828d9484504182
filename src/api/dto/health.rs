//! DTOs for health check endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::infrastructure::probe::HealthReport;

/// Health check response envelope (success path).
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub timestamp: DateTime<Utc>,
    pub redis: HealthReport,
    pub environment: EnvironmentInfo,
}

/// Runtime environment summary.
///
/// `redis_url` only states whether a connection string is configured;
/// the value itself is never echoed back.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentInfo {
    pub node_env: String,
    pub redis_url: &'static str,
}

/// Health check response envelope (failure path).
#[derive(Debug, Serialize)]
pub struct HealthErrorResponse {
    pub error: &'static str,
    pub timestamp: DateTime<Utc>,
}
