//! The `Train` entity.

use crate::state::{TrainDirection, TrainState};

/// A train shuttling oil between its two route endpoints.
///
/// Identity fields (`name`, route, `velocity`, `storage_volume`) are fixed at
/// construction.  `state` and `coord` are public because the manager layer
/// and stations drive those transitions; `oil_volume` is private so every
/// transfer flows through [`fill_storage`][Self::fill_storage] /
/// [`empty_storage`][Self::empty_storage].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Train {
    name:                String,
    load_station_name:   String,
    unload_station_name: String,
    /// Distance units consumed per tick while in transit.
    velocity:            u64,
    /// Fixed storage capacity.
    storage_volume:      i64,
    oil_volume:          i64,
    direction:           TrainDirection,

    /// Lifecycle state.  Mutated by the manager layer and by stations.
    pub state: TrainState,
    /// Remaining transit distance.  Set by the manager at dispatch.
    pub coord: u64,
}

impl Train {
    /// Create a train waiting at its load station with an empty storage.
    pub fn new(
        name:                impl Into<String>,
        load_station_name:   impl Into<String>,
        unload_station_name: impl Into<String>,
        velocity:            u64,
        storage_volume:      i64,
    ) -> Self {
        Self {
            name:                name.into(),
            load_station_name:   load_station_name.into(),
            unload_station_name: unload_station_name.into(),
            velocity,
            storage_volume,
            oil_volume:          0,
            direction:           TrainDirection::ToLoadStation,
            state:               TrainState::Wait,
            coord:               0,
        }
    }

    /// Create the ephemeral unloader train an entrepot drains itself into.
    ///
    /// Velocity 0, empty storage, and a sentinel (empty) unload-station name:
    /// the unloader never travels and never enters the fleet roster.
    pub fn unloader(station_name: &str, storage_volume: i64) -> Self {
        let mut train = Train::new(
            format!("{station_name}-unloader"),
            station_name,
            "",
            0,
            storage_volume,
        );
        train.state = TrainState::InCargoProcess;
        train
    }

    // ── Construction overrides ────────────────────────────────────────────

    pub fn with_state(mut self, state: TrainState) -> Self {
        self.state = state;
        self
    }

    pub fn with_direction(mut self, direction: TrainDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_oil(mut self, oil_volume: i64) -> Self {
        self.oil_volume = oil_volume;
        self
    }

    pub fn with_coord(mut self, coord: u64) -> Self {
        self.coord = coord;
        self
    }

    // ── Identity accessors ────────────────────────────────────────────────

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn load_station_name(&self) -> &str {
        &self.load_station_name
    }

    pub fn unload_station_name(&self) -> &str {
        &self.unload_station_name
    }

    pub fn velocity(&self) -> u64 {
        self.velocity
    }

    pub fn storage_volume(&self) -> i64 {
        self.storage_volume
    }

    pub fn oil_volume(&self) -> i64 {
        self.oil_volume
    }

    pub fn direction(&self) -> TrainDirection {
        self.direction
    }

    // ── Oil transfer primitives ───────────────────────────────────────────

    /// Add up to `amount` oil, capped at capacity.
    ///
    /// Returns the unabsorbed excess (`amount` minus what was added), so the
    /// caller can credit it back to wherever the oil came from.
    pub fn fill_storage(&mut self, amount: i64) -> i64 {
        if self.oil_volume + amount <= self.storage_volume {
            self.oil_volume += amount;
            0
        } else {
            let excess = amount - (self.storage_volume - self.oil_volume);
            self.oil_volume = self.storage_volume;
            excess
        }
    }

    /// Remove up to `amount` oil, floored at zero.
    ///
    /// Returns the shortfall (`amount` minus what was available); the amount
    /// actually drained is `amount - shortfall`.
    pub fn empty_storage(&mut self, amount: i64) -> i64 {
        if self.oil_volume - amount >= 0 {
            self.oil_volume -= amount;
            0
        } else {
            let shortfall = amount - self.oil_volume;
            self.oil_volume = 0;
            shortfall
        }
    }

    pub fn is_full(&self) -> bool {
        self.oil_volume == self.storage_volume
    }

    pub fn is_empty(&self) -> bool {
        self.oil_volume == 0
    }

    // ── State machine ─────────────────────────────────────────────────────

    /// Flip the travel direction.  Called by the manager when a `Ready`
    /// train is dispatched back the other way.
    pub fn change_direction(&mut self) {
        self.direction = match self.direction {
            TrainDirection::ToLoadStation => TrainDirection::ToUnloadStation,
            TrainDirection::ToUnloadStation => TrainDirection::ToLoadStation,
        };
    }

    /// Advance the train's own state by one tick.
    ///
    /// Only `Transit` self-transitions: the train moves `velocity` units and
    /// becomes `Arrived` when it runs out of distance.  Every other state
    /// waits for an external transition.
    pub fn update(&mut self) {
        match self.state {
            TrainState::Transit => {
                self.coord = self.coord.saturating_sub(self.velocity);
                if self.coord == 0 {
                    self.state = TrainState::Arrived;
                }
            }
            TrainState::Wait
            | TrainState::Ready
            | TrainState::Arrived
            | TrainState::InCargoProcess => {}
        }
    }
}
