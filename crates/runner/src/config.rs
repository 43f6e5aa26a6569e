//! Consumer configuration
//!
//! Plain struct with defaults; `from_env` applies environment overrides.
//! Queue endpoint and store connection strings are owned by the transport
//! and store adapters - what lives here is the names used in log lines and
//! the dispatch limits.

use std::env;

/// Configuration for the quote consumer
#[derive(Debug, Clone)]
pub struct ConsumerConfig {
    /// Queue the upstream publisher writes to
    pub queue_name: String,
    /// Document database name (for parity with the deployed store)
    pub database: String,
    /// Collection holding quote documents
    pub collection: String,
    /// Maximum concurrently processed deliveries
    pub max_in_flight: usize,
    /// Poll interval used by the verification harness
    pub processing_interval_ms: u64,
}

impl Default for ConsumerConfig {
    fn default() -> Self {
        Self {
            queue_name: "queue-acoes".to_string(),
            database: "db-acoes-investimentos".to_string(),
            collection: "acoes".to_string(),
            max_in_flight: 4,
            processing_interval_ms: 250,
        }
    }
}

impl ConsumerConfig {
    /// Build from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            queue_name: env_or("QUEUE_NAME", defaults.queue_name),
            database: env_or("STORE_DATABASE", defaults.database),
            collection: env_or("STORE_COLLECTION", defaults.collection),
            max_in_flight: env_parsed("MAX_IN_FLIGHT", defaults.max_in_flight),
            processing_interval_ms: env_parsed(
                "PROCESSING_INTERVAL_MS",
                defaults.processing_interval_ms,
            ),
        }
    }
}

fn env_or(key: &str, default: String) -> String {
    env::var(key).unwrap_or(default)
}

fn env_parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(default)
}
