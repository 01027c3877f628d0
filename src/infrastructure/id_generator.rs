// UID64 Generator - coordinator-free 64-bit identifiers
// Packs an approximate time value, a sequence counter and xorshift randomness,
// then negates the word. See core::layout for the bit positions.

use std::sync::{Arc, Mutex};
use tracing::{info, trace};

use crate::config::GeneratorConfig;
use crate::core::layout::{self, PackedFields, MARKER_BYTES};
use crate::core::uid64::Uid64;
use crate::infrastructure::monitoring::{GeneratorStats, MintCounters};
use crate::infrastructure::random_xor::RandomXor;
use crate::infrastructure::sequence::{SequenceCounter, RANDOMNESS_CLIFF};
use crate::infrastructure::time_encoder::{self, encode_seconds, SystemTicks};
use crate::infrastructure::traits::TickSource;

/// Random bits OR'd into the low word for a given counter value.
///
/// Small counters leave room for more randomness; from `2^24` on the low
/// word is the bare counter.
fn random_bits(counter: u32, random: &RandomXor) -> u32 {
    if counter < 1 << 8 {
        (random.next_max(1 << 24) as u32) << 8
    } else if counter < 1 << 16 {
        (random.next_max(1 << 16) as u32) << 16
    } else if counter < RANDOMNESS_CLIFF {
        (random.next_max(1 << 8) as u32) << 24
    } else {
        0
    }
}

/// Build the packed (pre-negation) word for one identifier.
///
/// Draws from `random` once for the low word (unless the counter is past the
/// cliff) and once for the marker, in that order.
pub fn pack(counter: u32, time: u32, random: &RandomXor) -> i64 {
    let low = counter | random_bits(counter, random);
    let marker = MARKER_BYTES[random.next_max(MARKER_BYTES.len() as i32) as usize];
    PackedFields::new(time, marker, low).pack()
}

/// Generator context owning the random state, the sequence counter and the clock.
///
/// Share it behind an `Arc`. [`Uid64Generator::create_new`] never blocks but
/// concurrent callers may race on the random state; use
/// [`Uid64Generator::create_new_sync`] when duplicates are not acceptable.
#[derive(Debug)]
pub struct Uid64Generator {
    seed: i32,
    random: RandomXor,
    counter: SequenceCounter,
    clock: Arc<dyn TickSource>,
    sync: Mutex<()>,
    mints: MintCounters,
}

impl Uid64Generator {
    /// Create a generator on the system clock, seeded from the startup ticks
    pub fn new() -> Self {
        let clock = SystemTicks::start();
        let seed = time_encoder::fold_ticks(clock.startup_ticks());
        Self::with_clock(seed, Arc::new(clock))
    }

    /// Create a generator on the system clock with a fixed seed
    pub fn with_seed(seed: i32) -> Self {
        Self::with_clock(seed, Arc::new(SystemTicks::start()))
    }

    pub fn with_clock(seed: i32, clock: Arc<dyn TickSource>) -> Self {
        Self::with_parts(seed, clock, SequenceCounter::new())
    }

    fn with_parts(seed: i32, clock: Arc<dyn TickSource>, counter: SequenceCounter) -> Self {
        info!(seed, ticks = clock.now_ticks(), "UID64 generator initialized");
        Self {
            seed,
            random: RandomXor::new(seed),
            counter,
            clock,
            sync: Mutex::new(()),
            mints: MintCounters::default(),
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        match config.seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }

    fn mint(&self) -> Uid64 {
        let counter = self.counter.advance();
        let time = encode_seconds(self.clock.now_ticks());
        let id = Uid64::from_i64(layout::seal(pack(counter, time, &self.random)));
        trace!(counter, time, id = %id, "Minted UID64");
        id
    }

    /// Mint an identifier without locking
    pub fn create_new(&self) -> Uid64 {
        self.mints.record(false);
        self.mint()
    }

    /// Mint an identifier inside the generator's critical section
    pub fn create_new_sync(&self) -> Uid64 {
        // The guarded state is only atomics, so a poisoned lock is still usable.
        let _guard = self.sync.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        self.mints.record(true);
        self.mint()
    }

    pub fn seed(&self) -> i32 {
        self.seed
    }

    pub fn stats(&self) -> GeneratorStats {
        self.mints.snapshot(self.seed, self.counter.current())
    }
}

impl Default for Uid64Generator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::time_encoder::FixedTicks;
    use std::collections::HashSet;

    // 2016-04-19T21:12:44, encodes to 0x0C77984C
    const REFERENCE_TICKS: i64 = 635_966_971_640_000_000;
    const REFERENCE_TIME: u32 = 0x0C77_984C;

    fn fixed_generator(seed: i32) -> Uid64Generator {
        Uid64Generator::with_clock(seed, Arc::new(FixedTicks(REFERENCE_TICKS)))
    }

    #[test]
    fn test_reference_identifiers() {
        let generator = fixed_generator(42);
        let ids: Vec<i64> = (0..3).map(|_| generator.create_new().value()).collect();
        assert_eq!(
            ids,
            vec![4866253419618769662, 254567399867314941, 2560410408894382332]
        );
        assert_eq!(generator.create_new().unpack().partial_time(), REFERENCE_TIME & 0x0FFF_FFFF);
    }

    #[test]
    fn test_reference_packed_words() {
        let random = RandomXor::new(42);
        let words: Vec<u64> = (2..5)
            .map(|counter| pack(counter, REFERENCE_TIME, &random) as u64)
            .collect();
        assert_eq!(
            words,
            vec![0xBC77_984C_2097_E502, 0xFC77_984C_6F83_8D03, 0xDC77_984C_7AA3_3F04]
        );
    }

    #[test]
    fn test_randomness_shrinks_with_counter() {
        let random = RandomXor::new(7);
        let words: Vec<u64> = [300, 70_000, RANDOMNESS_CLIFF, RANDOMNESS_CLIFF + 84]
            .into_iter()
            .map(|counter| pack(counter, REFERENCE_TIME, &random) as u64)
            .collect();
        assert_eq!(
            words,
            vec![
                0xBC77_984C_2095_012C,
                0xFC77_984C_6F01_1170,
                // past the cliff the low word is the bare counter
                0xCC77_984C_0100_0000,
                0xDC77_984C_0100_0054,
            ]
        );
    }

    #[test]
    fn test_low_word_keeps_counter_bits() {
        let random = RandomXor::new(1);
        for counter in [2u32, 255, 256, 65_535, 65_536, 16_777_215] {
            let low = pack(counter, 0, &random) as u32;
            assert_eq!(low & counter, counter);
        }
    }

    #[test]
    fn test_generated_ids_are_nonzero_with_marker() {
        let generator = Uid64Generator::new();
        for _ in 0..10_000 {
            let id = generator.create_new();
            assert_ne!(id, Uid64::EMPTY);
            // the marker sets the top bit of the packed word, negation clears it
            assert!(layout::seal(id.value()) < 0);
            assert!(id.value() > 0);
            assert!(id.unpack().has_valid_marker());
        }
    }

    #[test]
    fn test_generated_ids_round_trip_through_hex() {
        let generator = fixed_generator(99);
        for _ in 0..1000 {
            let id = generator.create_new_sync();
            let hex = id.to_hex_string();
            assert_eq!(hex.len(), crate::core::HEX_LEN);
            assert_eq!(Uid64::load_from_string(&hex), id);
        }
    }

    #[test]
    fn test_no_randomness_past_cliff() {
        let generator = Uid64Generator::with_parts(
            5,
            Arc::new(FixedTicks(REFERENCE_TICKS)),
            SequenceCounter::starting_at(RANDOMNESS_CLIFF - 1),
        );
        let first = generator.create_new().unpack();
        let second = generator.create_new().unpack();
        assert_eq!(first.low, RANDOMNESS_CLIFF);
        assert_eq!(second.low, RANDOMNESS_CLIFF + 1);
    }

    #[test]
    fn test_same_seed_and_clock_reproduce_sequence() {
        let a = fixed_generator(-12345);
        let b = fixed_generator(-12345);
        for _ in 0..500 {
            assert_eq!(a.create_new(), b.create_new_sync());
        }
    }

    #[test]
    fn test_sync_concurrent_callers_get_distinct_ids() {
        const CALLERS: usize = 32;
        let generator = Arc::new(fixed_generator(2024));

        let ids: HashSet<Uid64> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..CALLERS)
                .map(|_| {
                    let generator = Arc::clone(&generator);
                    scope.spawn(move || generator.create_new_sync())
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert_eq!(ids.len(), CALLERS);

        // Serialized minting yields the same values as a sequential run.
        let sequential = fixed_generator(2024);
        let expected: HashSet<Uid64> = (0..CALLERS).map(|_| sequential.create_new()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_stats_track_entry_points() {
        let generator = fixed_generator(3);
        generator.create_new();
        generator.create_new_sync();
        generator.create_new_sync();

        let stats = generator.stats();
        assert_eq!(stats.seed, 3);
        assert_eq!(stats.unsynchronized, 1);
        assert_eq!(stats.synchronized, 2);
        assert_eq!(stats.sequence, 4);
    }

    #[test]
    fn test_from_config_uses_fixed_seed() {
        let config = GeneratorConfig {
            seed: Some(77),
            synchronized: true,
        };
        assert_eq!(Uid64Generator::from_config(&config).seed(), 77);
    }
}
