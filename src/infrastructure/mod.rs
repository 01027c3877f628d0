// UID64 infrastructure - stateful generation machinery
pub mod global_uid;           // Optional process-wide generator
pub mod id_generator;         // Generator context and bit packing
pub mod monitoring;           // Tracing setup and statistics
pub mod random_xor;           // Xorshift pseudo-random generator
pub mod sequence;             // Sequence counter
pub mod time_encoder;         // Approximate seconds-since-2010 encoding
pub mod traits;               // Infrastructure traits

pub use global_uid::{create_new, create_new_sync, global_generator, install_global_generator};
pub use id_generator::Uid64Generator;
pub use monitoring::{initialize_tracing, GeneratorStats};
pub use random_xor::RandomXor;
pub use sequence::SequenceCounter;
pub use time_encoder::{encode_seconds, FixedTicks, SystemTicks};
pub use traits::TickSource;
