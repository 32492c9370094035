//! Error taxonomy for the match engine.

use thiserror::Error;

/// Errors surfaced by the engine and its input collaborator.
#[derive(Debug, Error)]
pub enum MatchError {
    /// Token does not name a move or a yes/no answer.
    ///
    /// Input sources recover from this locally by re-prompting.
    #[error("invalid token `{0}`")]
    InvalidMoveToken(String),

    /// Engine-internal contract broken. Not user-recoverable.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// The input source ran dry or hit its retry limit.
    #[error("no valid input after {attempts} attempts")]
    InputExhausted { attempts: u32 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, MatchError>;
