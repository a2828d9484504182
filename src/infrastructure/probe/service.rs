//! Health probe trait, report types, and error types.

use async_trait::async_trait;
use serde::Serialize;

/// Errors that can occur while probing Redis.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("no Redis connection string is configured")]
    Unconfigured,

    #[error("Redis connection error: {0}")]
    Connection(#[source] redis::RedisError),

    #[error("Redis command error: {0}")]
    Command(#[source] redis::RedisError),

    #[error("malformed INFO response: {0}")]
    Parse(String),
}

/// Result type for probe operations.
pub type ProbeResult<T> = Result<T, ProbeError>;

/// Diagnostic report produced by a successful health probe.
///
/// Serialized verbatim under the `redis` key of the health endpoint
/// response; handlers do not inspect its fields.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub status: String,
    pub latency_ms: u64,
}

/// Memory statistics parsed from `INFO memory`.
///
/// Byte counts are reported alongside the human-readable strings Redis
/// emits, so consumers can pick whichever form suits them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryInfo {
    pub used_memory: u64,
    pub used_memory_human: String,
    pub used_memory_peak: u64,
    pub used_memory_peak_human: String,
    pub maxmemory: u64,
}

/// Trait for probing the health of the Redis dependency.
///
/// Implementations must be thread-safe. Each call reflects live
/// connectivity at the moment of invocation; implementations do not
/// cache results or retry on failure.
///
/// # Implementations
///
/// - [`crate::infrastructure::probe::RedisProbe`] - Probes a live Redis server
/// - [`crate::infrastructure::probe::UnconfiguredProbe`] - Fails every call
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HealthProbe: Send + Sync {
    /// Runs a PING round-trip against Redis and measures its latency.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError`] if the connection cannot be established or
    /// the command fails. Callers decide how to surface the failure; this
    /// layer does not retry.
    async fn check_health(&self) -> ProbeResult<HealthReport>;

    /// Retrieves memory statistics via `INFO memory`.
    ///
    /// Part of the probe surface for consumers that want to report memory
    /// pressure; the health endpoint itself does not call this.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError`] on connection or command failure, or if the
    /// INFO payload is missing expected fields.
    async fn memory_info(&self) -> ProbeResult<MemoryInfo>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_report_wire_format() {
        let report = HealthReport {
            status: "ok".to_string(),
            latency_ms: 3,
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["latencyMs"], 3);
    }

    #[test]
    fn test_memory_info_wire_format() {
        let info = MemoryInfo {
            used_memory: 1_048_576,
            used_memory_human: "1.00M".to_string(),
            used_memory_peak: 2_097_152,
            used_memory_peak_human: "2.00M".to_string(),
            maxmemory: 0,
        };

        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["usedMemory"], 1_048_576);
        assert_eq!(json["usedMemoryHuman"], "1.00M");
        assert_eq!(json["usedMemoryPeak"], 2_097_152);
        assert_eq!(json["maxmemory"], 0);
    }
}
