// UID64 - Compact, coordinator-free 64-bit identifiers

// Identifier value, bit layout and codecs
pub mod core;

// Generator context, random source, clock and counter
pub mod infrastructure;

// Common utilities
pub mod config;
pub mod error;

// Re-exports for convenience
pub use crate::core::{PackedFields, Uid64};
pub use error::{AppError, AppResult};
pub use infrastructure::{create_new, create_new_sync, RandomXor, Uid64Generator};
