#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Arc;

use redis_health::config::Config;
use redis_health::infrastructure::probe::{
    HealthProbe, HealthReport, MemoryInfo, ProbeError, ProbeResult,
};
use redis_health::state::AppState;

/// Probe double with a scripted outcome.
pub struct StubProbe {
    healthy: Option<HealthReport>,
}

impl StubProbe {
    /// Reports a healthy dependency with the given latency.
    pub fn healthy(latency_ms: u64) -> Self {
        Self {
            healthy: Some(HealthReport {
                status: "ok".to_string(),
                latency_ms,
            }),
        }
    }

    /// Fails every call with a connection timeout.
    pub fn timed_out() -> Self {
        Self { healthy: None }
    }

    fn timeout_error() -> ProbeError {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "connection timed out");
        ProbeError::Connection(redis::RedisError::from(io))
    }
}

#[async_trait]
impl HealthProbe for StubProbe {
    async fn check_health(&self) -> ProbeResult<HealthReport> {
        match &self.healthy {
            Some(report) => Ok(report.clone()),
            None => Err(Self::timeout_error()),
        }
    }

    async fn memory_info(&self) -> ProbeResult<MemoryInfo> {
        match &self.healthy {
            Some(_) => Ok(MemoryInfo {
                used_memory: 1_048_576,
                used_memory_human: "1.00M".to_string(),
                used_memory_peak: 4_194_304,
                used_memory_peak_human: "4.00M".to_string(),
                maxmemory: 0,
            }),
            None => Err(Self::timeout_error()),
        }
    }
}

pub fn create_test_state(probe: impl HealthProbe + 'static, redis_url: Option<&str>) -> AppState {
    let config = Config {
        redis_url: redis_url.map(String::from),
        deploy_mode: "test".to_string(),
        listen_addr: "127.0.0.1:0".to_string(),
        log_level: "info".to_string(),
        log_format: "text".to_string(),
    };

    AppState::new(Arc::new(probe), Arc::new(config))
}
