// Sequence counter - per-context disambiguator embedded in the low word

use std::sync::atomic::{AtomicU32, Ordering};
use tracing::warn;

/// Counter values at or above this get no random bits
pub const RANDOMNESS_CLIFF: u32 = 1 << 24;

/// Monotonic counter starting at 1. Never reset; wraps at `u32::MAX`.
#[derive(Debug)]
pub struct SequenceCounter {
    value: AtomicU32,
}

impl SequenceCounter {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(value: u32) -> Self {
        Self {
            value: AtomicU32::new(value),
        }
    }

    /// Increment by one and return the new value
    pub fn advance(&self) -> u32 {
        let next = self.value.fetch_add(1, Ordering::Relaxed).wrapping_add(1);
        if next == RANDOMNESS_CLIFF {
            warn!(
                sequence = next,
                "Sequence counter reached 2^24; identifiers no longer carry random bits"
            );
        }
        next
    }

    pub fn current(&self) -> u32 {
        self.value.load(Ordering::Relaxed)
    }
}

impl Default for SequenceCounter {
    fn default() -> Self {
        Self::new()
    }
}
