//! Closed train state and direction enumerations.
//!
//! Both enums are matched exhaustively everywhere they are consumed, so an
//! impossible state is a compile error rather than a runtime branch.

use std::fmt;

/// Lifecycle state of a train.  There is no terminal state — a roster train
/// cycles through these forever.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TrainState {
    /// Queued at a station (or not yet dispatched).
    #[default]
    Wait,
    /// Finished a cargo episode; will be dispatched next manager pass.
    Ready,
    /// Moving between stations.
    Transit,
    /// Reached `coord == 0`; awaiting track admission.
    Arrived,
    /// Occupying a track slot, loading or unloading.
    InCargoProcess,
}

impl fmt::Display for TrainState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TrainState::Wait => "wait",
            TrainState::Ready => "ready",
            TrainState::Transit => "transit",
            TrainState::Arrived => "arrived",
            TrainState::InCargoProcess => "in_cargo_process",
        };
        f.write_str(s)
    }
}

/// Which endpoint of its route a train is heading toward.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TrainDirection {
    #[default]
    ToLoadStation,
    ToUnloadStation,
}

impl fmt::Display for TrainDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TrainDirection::ToLoadStation => "to_load_station",
            TrainDirection::ToUnloadStation => "to_unload_station",
        };
        f.write_str(s)
    }
}
