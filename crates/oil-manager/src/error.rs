//! Manager-layer errors.
//!
//! Everything here is fatal: either a misconfigured scenario caught at
//! construction, or a name lookup that can only fail through a logic error.
//! Admission refusals are NOT errors — they return `false` and are absorbed
//! by the FIFO buffers.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("duplicate station name {0:?}")]
    DuplicateStation(String),

    #[error("unknown station name {0:?}")]
    UnknownStation(String),

    #[error("train {train:?} routes through unknown station {station:?}")]
    UnknownRouteStation { train: String, station: String },

    #[error("no distance configured between {from:?} and {to:?}")]
    MissingDistance { from: String, to: String },
}

pub type ManagerResult<T> = Result<T, ManagerError>;
