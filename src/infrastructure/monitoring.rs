// Monitoring - tracing setup and generator statistics

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{AppError, AppResult};

/// Install the global tracing subscriber. `RUST_LOG` overrides `default_filter`.
pub fn initialize_tracing(default_filter: &str) -> AppResult<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| AppError::Internal(format!("Tracing already initialized: {}", e)))?;

    info!("Tracing initialized");
    Ok(())
}

/// Snapshot of a generator's activity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorStats {
    pub seed: i32,
    pub sequence: u32,
    pub unsynchronized: u64,
    pub synchronized: u64,
}

impl GeneratorStats {
    pub fn total(&self) -> u64 {
        self.unsynchronized + self.synchronized
    }
}

/// Per-entry-point mint counts
#[derive(Debug, Default)]
pub struct MintCounters {
    unsynchronized: AtomicU64,
    synchronized: AtomicU64,
}

impl MintCounters {
    pub fn record(&self, synchronized: bool) {
        let counter = if synchronized {
            &self.synchronized
        } else {
            &self.unsynchronized
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self, seed: i32, sequence: u32) -> GeneratorStats {
        GeneratorStats {
            seed,
            sequence,
            unsynchronized: self.unsynchronized.load(Ordering::Relaxed),
            synchronized: self.synchronized.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_split_by_entry_point() {
        let counters = MintCounters::default();
        counters.record(true);
        counters.record(false);
        counters.record(false);

        let stats = counters.snapshot(7, 4);
        assert_eq!(stats.unsynchronized, 2);
        assert_eq!(stats.synchronized, 1);
        assert_eq!(stats.total(), 3);
        assert_eq!(stats.seed, 7);
    }

    #[test]
    fn test_stats_serialize() {
        let stats = MintCounters::default().snapshot(-3, 1);
        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json["seed"], -3);
        assert_eq!(json["sequence"], 1);
        assert_eq!(json["synchronized"], 0);
    }
}
