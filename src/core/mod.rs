// Core UID64 types - identifier value, bit layout and codecs

pub mod codec;
pub mod layout;
pub mod uid64;

// Re-export commonly used types
pub use codec::{ENCODED_LEN, HEX_LEN};
pub use layout::{PackedFields, MARKER_BYTES};
pub use uid64::Uid64;
