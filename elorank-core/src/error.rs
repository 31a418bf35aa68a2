/// Error type for the ranking core.
///
/// None of these are retried inside the core; every variant is reported up to
/// whoever drives the session.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RankError {
    /// Fewer than two distinct items to compare.
    #[error("need at least 2 items to compare, got {available}")]
    InsufficientItems { available: usize },

    /// Persisted state exists but does not match the expected document shape.
    #[error("corrupt state file {}: {reason}", .path.display())]
    CorruptState { path: PathBuf, reason: String },

    /// Reading or writing the state file failed.
    #[error("failed to access state file {}: {source}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A decision event that cannot be applied (e.g. an item matched against itself).
    #[error("invalid decision: {0}")]
    InvalidDecision(String),

    /// Engine configuration out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, RankError>;
