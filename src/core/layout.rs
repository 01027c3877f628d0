//! Bit layout of a generated identifier.
//!
//! Before negation the packed word is laid out as:
//!
//! ```text
//!  63    60 59    56 55                       32 31                        0
//! +--------+--------+---------------------------+---------------------------+
//! | marker | time   | time bits 0..24           | sequence | random         |
//! | nibble | 24..28 |                           |                           |
//! +--------+--------+---------------------------+---------------------------+
//! ```
//!
//! The marker nibble is always one of `0xA..=0xF`, so the packed word is
//! negative and the stored identifier (its two's-complement negation) is
//! positive and nonzero.

use serde::{Deserialize, Serialize};

/// Marker bytes stamped into the high nibble of the top byte
pub const MARKER_BYTES: [u8; 6] = [0xA0, 0xB0, 0xC0, 0xD0, 0xE0, 0xF0];

const TIME_LOW_MASK: u32 = 0x00FF_FFFF;

/// Decomposed fields of the packed (pre-negation) word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackedFields {
    /// High nibble of the top byte, `0xA..=0xF` for generated values
    pub marker: u8,
    /// Bits 24..28 of the encoded time value
    pub time_nibble: u8,
    /// Bits 0..24 of the encoded time value
    pub time_low: u32,
    /// Sequence counter OR'd with the injected random bits
    pub low: u32,
}

impl PackedFields {
    /// Build the fields for an encoded time value, a marker byte from
    /// [`MARKER_BYTES`] and the low word.
    pub fn new(time: u32, marker_byte: u8, low: u32) -> Self {
        let top = (time >> 24) as u8;
        Self {
            marker: marker_byte >> 4,
            time_nibble: top & 0x0F,
            time_low: time & TIME_LOW_MASK,
            low,
        }
    }

    /// Assemble the packed word
    pub fn pack(&self) -> i64 {
        let top = (u64::from(self.marker & 0x0F) << 4) | u64::from(self.time_nibble & 0x0F);
        let word = (top << 56) | (u64::from(self.time_low & TIME_LOW_MASK) << 32) | u64::from(self.low);
        word as i64
    }

    /// Low 28 bits of the encoded time value that survive packing
    pub fn partial_time(&self) -> u32 {
        (u32::from(self.time_nibble) << 24) | self.time_low
    }

    pub fn has_valid_marker(&self) -> bool {
        (0xA..=0xF).contains(&self.marker)
    }
}

/// Negate a packed word into its identifier value
pub fn seal(packed: i64) -> i64 {
    packed.wrapping_neg()
}

/// Split an identifier value back into its packed fields
pub fn unpack(id: i64) -> PackedFields {
    let word = seal(id) as u64;
    PackedFields {
        marker: (word >> 60) as u8,
        time_nibble: ((word >> 56) & 0x0F) as u8,
        time_low: ((word >> 32) as u32) & TIME_LOW_MASK,
        low: word as u32,
    }
}
