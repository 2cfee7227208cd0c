//! `TrainFleet` — the arena that owns every roster train.
//!
//! Managers and stations refer to trains exclusively by [`TrainId`] (the
//! arena index), which sidesteps shared mutable references: whoever holds
//! `&mut TrainFleet` for the current phase may mutate trains, and nobody
//! else can.  The roster is immutable after construction — arena order is
//! the roster order used by every per-tick pass.

use rustc_hash::FxHashMap;

use oil_core::TrainId;

use crate::error::{TrainError, TrainResult};
use crate::train::Train;

pub struct TrainFleet {
    trains:  Vec<Train>,
    by_name: FxHashMap<String, TrainId>,
}

impl TrainFleet {
    /// Build the fleet from the configured roster.
    ///
    /// Duplicate train names are a construction-time error.
    pub fn new(trains: Vec<Train>) -> TrainResult<Self> {
        let mut by_name = FxHashMap::default();
        for (i, train) in trains.iter().enumerate() {
            let id = TrainId(i as u32);
            if by_name.insert(train.name().to_owned(), id).is_some() {
                return Err(TrainError::DuplicateName(train.name().to_owned()));
            }
        }
        Ok(Self { trains, by_name })
    }

    pub fn len(&self) -> usize {
        self.trains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trains.is_empty()
    }

    /// Roster IDs in arena (roster) order.
    pub fn ids(&self) -> impl Iterator<Item = TrainId> + '_ {
        (0..self.trains.len()).map(|i| TrainId(i as u32))
    }

    /// Look up a train by name.
    pub fn find(&self, name: &str) -> Option<TrainId> {
        self.by_name.get(name).copied()
    }

    /// Borrow a train.  Panics on an out-of-range ID (a logic error — IDs
    /// only come from this fleet).
    #[inline]
    pub fn get(&self, id: TrainId) -> &Train {
        &self.trains[id.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: TrainId) -> &mut Train {
        &mut self.trains[id.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (TrainId, &Train)> {
        self.trains
            .iter()
            .enumerate()
            .map(|(i, t)| (TrainId(i as u32), t))
    }
}
