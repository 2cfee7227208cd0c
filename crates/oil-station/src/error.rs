//! Construction-time station errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StationError {
    #[error("terminal {station:?} must have exactly one track, got {got}")]
    TerminalTrackCount { station: String, got: usize },

    #[error("invalid production distribution for {station:?}: {reason}")]
    InvalidProduction { station: String, reason: String },
}

pub type StationResult<T> = Result<T, StationError>;
