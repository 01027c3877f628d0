// UID64 - Opaque 64-bit identifier value
// Generated values carry a negated time/random/counter word, see core::layout

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::layout::{self, PackedFields};

/// Compact 64-bit identifier.
///
/// Equality, ordering and hashing operate on the raw signed value. The zero
/// value is [`Uid64::EMPTY`] and is never produced by a generator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Uid64(i64);

impl Uid64 {
    /// The zero identifier
    pub const EMPTY: Uid64 = Uid64(0);

    /// Wrap a raw signed value
    pub const fn from_i64(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw signed value
    pub const fn value(self) -> i64 {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Recover the packed fields of a generated identifier.
    ///
    /// Meaningful only for values minted by a generator; any other value
    /// decodes to whatever its bits happen to say.
    pub fn unpack(self) -> PackedFields {
        layout::unpack(self.0)
    }
}

impl fmt::Display for Uid64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl From<i64> for Uid64 {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Uid64> for i64 {
    fn from(id: Uid64) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_zero_and_default() {
        assert_eq!(Uid64::EMPTY.value(), 0);
        assert_eq!(Uid64::default(), Uid64::EMPTY);
        assert!(Uid64::EMPTY.is_empty());
        assert!(!Uid64::from_i64(-1).is_empty());
    }

    #[test]
    fn test_integer_conversions() {
        let id: Uid64 = (-42i64).into();
        assert_eq!(id, Uid64::from_i64(-42));
        assert_eq!(i64::from(id), -42);
    }

    #[test]
    fn test_ordering_uses_signed_value() {
        let mut ids = vec![Uid64::from_i64(5), Uid64::from_i64(-5), Uid64::EMPTY];
        ids.sort();
        assert_eq!(ids, vec![Uid64::from_i64(-5), Uid64::EMPTY, Uid64::from_i64(5)]);
    }

    #[test]
    fn test_display_matches_hex_string() {
        let id = Uid64::from_i64(-2);
        assert_eq!(id.to_string(), "FFFFFFFFFFFFFFFE");
        assert_eq!(Uid64::EMPTY.to_string(), "0");
    }

    #[test]
    fn test_serde_is_transparent() {
        let id = Uid64::from_i64(4866253419618769662);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "4866253419618769662");
        let back: Uid64 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_bincode_layout_matches_byte_codec() {
        let id = Uid64::from_i64(4866253419618769662);
        let encoded = bincode::serialize(&id).unwrap();
        assert_eq!(encoded, id.to_bytes().to_vec());
        let decoded: Uid64 = bincode::deserialize(&encoded).unwrap();
        assert_eq!(decoded, id);
    }
}
