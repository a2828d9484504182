//! HTTP server initialization and runtime setup.
//!
//! Handles probe construction and Axum server lifecycle.

use crate::config::Config;
use crate::infrastructure::probe::{HealthProbe, RedisProbe, UnconfiguredProbe};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Redis health probe (or UnconfiguredProbe fallback)
/// - Axum HTTP server
///
/// A malformed connection string does not abort startup: the service
/// comes up and the health endpoint reports the dependency as failing.
///
/// # Errors
///
/// Returns an error if:
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let probe: Arc<dyn HealthProbe> = if let Some(redis_url) = &config.redis_url {
        match RedisProbe::new(redis_url) {
            Ok(probe) => {
                tracing::info!("Redis probe ready");
                Arc::new(probe)
            }
            Err(e) => {
                tracing::warn!(
                    "Rejected Redis connection string: {}. Health checks will fail.",
                    e
                );
                Arc::new(UnconfiguredProbe::new())
            }
        }
    } else {
        tracing::info!("Redis not configured; health checks will report failure");
        Arc::new(UnconfiguredProbe::new())
    };

    let state = AppState::new(probe, Arc::new(config.clone()));

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
