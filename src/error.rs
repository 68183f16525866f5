use thiserror::Error;

/// Failures raised by the game core. Each one aborts the current round only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid move: {0}")]
    InvalidMove(String),

    #[error("Weight table sums to zero, nothing to sample")]
    EmptyDistribution,

    #[error("Weight table total exceeds {max}")]
    WeightOverflow { max: u32 },

    #[error("Strategy invariant violated: {0}")]
    StrategyInvariantViolation(String),

    #[error("Invalid win relation: {0}")]
    InvalidRelation(String),

    #[error("Round out of order: {0}")]
    RoundOutOfOrder(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Game(#[from] GameError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("JSON error: {0}")]
    JsonError(String),
}
