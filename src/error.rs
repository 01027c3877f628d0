use std::fmt;

#[derive(Debug)]
pub enum AppError {
    /// Fewer than `needed` bytes are available at `offset` in a buffer of `len` bytes
    OutOfRange {
        offset: usize,
        len: usize,
        needed: usize,
    },
    Io(std::io::Error),
    ConfigurationError(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::OutOfRange { offset, len, needed } => write!(
                f,
                "Out of range: need {} bytes at offset {} but buffer holds {}",
                needed, offset, len
            ),
            AppError::Io(err) => write!(f, "I/O error: {}", err),
            AppError::ConfigurationError(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

pub type AppResult<T> = Result<T, AppError>;
