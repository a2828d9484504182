//! Always-failing probe for deployments without Redis.

use super::service::{HealthProbe, HealthReport, MemoryInfo, ProbeError, ProbeResult};
use async_trait::async_trait;
use tracing::debug;

/// A probe used when no Redis connection string is configured.
///
/// Every call fails with [`ProbeError::Unconfigured`], so the health
/// endpoint reports the dependency as down while the service itself
/// stays up.
pub struct UnconfiguredProbe;

impl UnconfiguredProbe {
    /// Creates a new UnconfiguredProbe instance.
    pub fn new() -> Self {
        debug!("Using UnconfiguredProbe (Redis not configured)");
        Self
    }
}

impl Default for UnconfiguredProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HealthProbe for UnconfiguredProbe {
    async fn check_health(&self) -> ProbeResult<HealthReport> {
        Err(ProbeError::Unconfigured)
    }

    async fn memory_info(&self) -> ProbeResult<MemoryInfo> {
        Err(ProbeError::Unconfigured)
    }
}
