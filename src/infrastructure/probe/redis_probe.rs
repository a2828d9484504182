//! Redis-backed health probe implementation.

use super::service::{HealthProbe, HealthReport, MemoryInfo, ProbeError, ProbeResult};
use async_trait::async_trait;
use redis::{AsyncCommands, Client};
use std::time::Instant;
use tracing::debug;

/// Probes a live Redis server.
///
/// Holds a [`Client`] and opens a multiplexed connection per probe, so the
/// service starts even when Redis is down and every call reflects current
/// connectivity. No connection state is cached between probes.
pub struct RedisProbe {
    client: Client,
}

impl RedisProbe {
    /// Creates a probe for the given connection string.
    ///
    /// Parsing the URL performs no I/O; connectivity is only exercised when
    /// a probe method is called.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::Connection`] if the connection string cannot
    /// be parsed.
    pub fn new(redis_url: &str) -> ProbeResult<Self> {
        let client = Client::open(redis_url).map_err(ProbeError::Connection)?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HealthProbe for RedisProbe {
    async fn check_health(&self) -> ProbeResult<HealthReport> {
        let mut conn = self
            .client
            .get_multiplexed_async_connection()
            .await
            .map_err(ProbeError::Connection)?;

        let started = Instant::now();
        conn.ping::<()>().await.map_err(ProbeError::Command)?;
        let latency_ms = started.elapsed().as_millis() as u64;

        debug!("Redis PING ok ({}ms)", latency_ms);

        Ok(HealthReport {
            status: "ok".to_string(),
            latency_ms,
        })
    }

    async fn memory_info(&self) -> ProbeResult<MemoryInfo> {
        let mut conn = self
            .client
            .get_multiplexed_async_connection()
            .await
            .map_err(ProbeError::Connection)?;

        let raw: String = redis::cmd("INFO")
            .arg("memory")
            .query_async(&mut conn)
            .await
            .map_err(ProbeError::Command)?;

        parse_memory_info(&raw)
    }
}

/// Parses the `INFO memory` bulk-string reply.
///
/// The payload is a sequence of `key:value` lines with `#` section headers
/// and CRLF line endings. Unknown keys are ignored.
fn parse_memory_info(raw: &str) -> ProbeResult<MemoryInfo> {
    let mut used_memory = None;
    let mut used_memory_human = None;
    let mut used_memory_peak = None;
    let mut used_memory_peak_human = None;
    let mut maxmemory = None;

    for line in raw.lines() {
        let line = line.trim_end_matches('\r');
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once(':') else {
            continue;
        };

        match key {
            "used_memory" => used_memory = Some(parse_bytes(key, value)?),
            "used_memory_human" => used_memory_human = Some(value.to_string()),
            "used_memory_peak" => used_memory_peak = Some(parse_bytes(key, value)?),
            "used_memory_peak_human" => used_memory_peak_human = Some(value.to_string()),
            "maxmemory" => maxmemory = Some(parse_bytes(key, value)?),
            _ => {}
        }
    }

    Ok(MemoryInfo {
        used_memory: used_memory.ok_or_else(|| missing_field("used_memory"))?,
        used_memory_human: used_memory_human.ok_or_else(|| missing_field("used_memory_human"))?,
        used_memory_peak: used_memory_peak.ok_or_else(|| missing_field("used_memory_peak"))?,
        used_memory_peak_human: used_memory_peak_human
            .ok_or_else(|| missing_field("used_memory_peak_human"))?,
        maxmemory: maxmemory.ok_or_else(|| missing_field("maxmemory"))?,
    })
}

fn parse_bytes(key: &str, value: &str) -> ProbeResult<u64> {
    value
        .parse()
        .map_err(|_| ProbeError::Parse(format!("field '{}' is not an integer: '{}'", key, value)))
}

fn missing_field(key: &str) -> ProbeError {
    ProbeError::Parse(format!("missing field '{}'", key))
}
