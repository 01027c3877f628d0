use crate::core::uid64::Uid64;
use crate::error::{AppError, AppResult};
use crate::infrastructure::id_generator::Uid64Generator;
use once_cell::sync::OnceCell;
use std::sync::Arc;
use tracing::debug;

static GENERATOR_INSTANCE: OnceCell<Arc<Uid64Generator>> = OnceCell::new();

/// Install the process-wide generator. Fails once one is in place.
pub fn install_global_generator(generator: Arc<Uid64Generator>) -> AppResult<()> {
    let seed = generator.seed();
    GENERATOR_INSTANCE
        .set(generator)
        .map_err(|_| AppError::Internal("Global UID64 generator already set".to_string()))?;
    debug!(seed, "Global UID64 generator installed");
    Ok(())
}

/// The process-wide generator, created on first use if none was installed
pub fn global_generator() -> &'static Arc<Uid64Generator> {
    GENERATOR_INSTANCE.get_or_init(|| Arc::new(Uid64Generator::new()))
}

pub fn create_new() -> Uid64 {
    global_generator().create_new()
}

pub fn create_new_sync() -> Uid64 {
    global_generator().create_new_sync()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_generator_is_shared() {
        let first = create_new_sync();
        let second = create_new();
        assert_ne!(first, second);
        assert!(!first.is_empty() && !second.is_empty());

        assert!(Arc::ptr_eq(global_generator(), global_generator()));
        assert!(global_generator().stats().total() >= 2);
        assert!(install_global_generator(Arc::new(Uid64Generator::with_seed(1))).is_err());
    }
}
