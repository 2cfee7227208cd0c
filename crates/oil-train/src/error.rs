//! Error type for fleet construction.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrainError {
    #[error("duplicate train name {0:?}")]
    DuplicateName(String),
}

pub type TrainResult<T> = Result<T, TrainError>;
