//! Error types of the attendance core.
//!
//! Each component owns one error enum. None of them is meant to escape as an
//! unhandled failure: parse errors degrade to a zero duration, persistence
//! errors are logged while the in-memory state carries on, and workflow
//! errors are refusals the UI shows instead of performing the action.

use thiserror::Error;

/// A wall-clock string that is not `hh:mm[:ss] AM|PM`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid clock time '{input}': expected hh:mm:ss AM|PM")]
pub struct ClockParseError {
    /// The rejected text, kept verbatim so callers can show it.
    pub input: String,
}

impl ClockParseError {
    pub fn new(input: &str) -> Self {
        Self { input: input.to_owned() }
    }
}

/// Failure of the durable session snapshot.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("snapshot database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("snapshot encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("snapshot i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot is inconsistent: {0}")]
    Corrupt(String),
}

/// Reasons the confirmation workflow refuses a transition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkflowError {
    #[error("there is no active attendance session")]
    NoActiveSession,

    #[error("nothing is waiting for confirmation")]
    NothingPending,

    #[error("no user is signed in")]
    NotSignedIn,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TickerError {
    #[error("cannot start the timer for an inactive session")]
    InactiveSession,
}
