//! Driver-level error type: every fatal construction or tick error funnels
//! into `SimError` so applications handle one enum.

use thiserror::Error;

use oil_manager::ManagerError;
use oil_station::StationError;
use oil_train::TrainError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("train roster error: {0}")]
    Train(#[from] TrainError),

    #[error("station error: {0}")]
    Station(#[from] StationError),

    #[error("manager error: {0}")]
    Manager(#[from] ManagerError),
}

pub type SimResult<T> = Result<T, SimError>;
