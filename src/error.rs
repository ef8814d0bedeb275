//! Library error type.

/// Errors raised by the simulations and the reporting layer.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("standard deviation needs at least 2 samples, got {got}")]
    InsufficientSamples { got: usize },

    #[error("invalid PIN {0:?}: expected 1 to 9 ASCII digits")]
    InvalidPin(String),

    #[error("no match after {limit} draws")]
    DrawLimitExceeded { limit: u64 },

    #[error("invalid distribution: {0}")]
    InvalidDistribution(String),

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
