// Xorshift pseudo-random generator seeding the random part of each UID64
// Output for a given seed and call sequence is fixed; identifier values depend on it.

use std::sync::atomic::{AtomicU32, Ordering};

const Y: u32 = 842_502_087;
const Z: u32 = 3_579_807_591;
const W: u32 = 273_326_509;

/// `1 / (i32::MAX + 1)`, maps the low 31 bits of a state word into `[0, 1)`
const INT_MOD: f64 = 1.0 / (i32::MAX as f64 + 1.0);

/// Four-word xorshift generator.
///
/// The state words are atomics so one generator can be shared by reference
/// between threads. Each draw loads and stores the words separately, so
/// concurrent draws without outside locking may interleave and repeat
/// values; they never tear memory.
#[derive(Debug)]
pub struct RandomXor {
    x: AtomicU32,
    y: AtomicU32,
    z: AtomicU32,
    w: AtomicU32,
}

impl RandomXor {
    pub fn new(seed: i32) -> Self {
        Self {
            x: AtomicU32::new(seed as u32),
            y: AtomicU32::new(Y),
            z: AtomicU32::new(Z),
            w: AtomicU32::new(W),
        }
    }

    /// Seed from the low 32 bits of the system millisecond clock
    pub fn with_default_seed() -> Self {
        Self::new(chrono::Utc::now().timestamp_millis() as i32)
    }

    /// Current `[x, y, z, w]` state
    pub fn state(&self) -> [u32; 4] {
        [
            self.x.load(Ordering::Relaxed),
            self.y.load(Ordering::Relaxed),
            self.z.load(Ordering::Relaxed),
            self.w.load(Ordering::Relaxed),
        ]
    }

    fn step(&self) -> u32 {
        let [x, y, z, w] = self.state();
        let t = x ^ (x << 11);
        let next = (w ^ (w >> 19)) ^ (t ^ (t >> 8));

        self.x.store(y, Ordering::Relaxed);
        self.y.store(z, Ordering::Relaxed);
        self.z.store(w, Ordering::Relaxed);
        self.w.store(next, Ordering::Relaxed);
        next
    }

    fn unit(word: u32) -> f64 {
        INT_MOD * f64::from(word & 0x7FFF_FFFF)
    }

    /// Next state word as a non-negative `i32`.
    ///
    /// A word of `0x8000_0000` has no positive counterpart and comes back as
    /// `i32::MIN`.
    pub fn next(&self) -> i32 {
        let value = self.step() as i32;
        if value < 0 {
            value.wrapping_neg()
        } else {
            value
        }
    }

    /// Value in `[0, max)`.
    ///
    /// Scales by `max` as given, so a negative `max` yields a value in
    /// `(max, 0]`.
    pub fn next_max(&self, max: i32) -> i32 {
        (Self::unit(self.step()) * f64::from(max)) as i32
    }

    /// Value in `[min, min + |max - min|)`
    pub fn next_range(&self, min: i32, max: i32) -> i32 {
        let range = max.wrapping_sub(min).wrapping_abs();
        min.wrapping_add((Self::unit(self.step()) * f64::from(range)) as i32)
    }
}

impl Default for RandomXor {
    fn default() -> Self {
        Self::with_default_seed()
    }
}
