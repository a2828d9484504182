//! Redis health probing layer.
//!
//! Provides a [`HealthProbe`] trait with two implementations:
//! - [`RedisProbe`] - Production probe backed by a live Redis connection
//! - [`UnconfiguredProbe`] - Always-failing probe for deployments without Redis

mod redis_probe;
mod service;
mod unconfigured;

pub use redis_probe::RedisProbe;
pub use service::{HealthProbe, HealthReport, MemoryInfo, ProbeError, ProbeResult};
pub use unconfigured::UnconfiguredProbe;

#[cfg(test)]
pub use service::MockHealthProbe;
