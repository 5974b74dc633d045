use thiserror::Error;

/// Fatal engine conditions. Expected game outcomes (collision, ignored turns,
/// wrong-state commands) are state transitions and never show up here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("failed to find an empty cell for food after {attempts} attempts")]
    BoardFullOrUnlucky { attempts: usize },

    #[error("invalid game configuration: {0}")]
    InvalidConfig(String),

    #[error("session does not match the engine configuration: {0}")]
    SessionMismatch(String),
}
