//! Collecting entrepot: drains docked trains into storage and empties its
//! own storage through an ephemeral unloader train.

use oil_core::TrainId;
use oil_train::{Train, TrainFleet, TrainState};

use crate::snapshot::{EntrepotInfo, StationInfo, TrackInfo};
use crate::station::{place_in_first_free, Occupant, Station, Track};

/// An entrepot station where oil is unloaded.
///
/// N tracks.  Roster trains docked here are drained at `filling_speed` per
/// tick into storage.  When the combined oil on site reaches `unload_limit`,
/// the entrepot spawns its own zero-velocity unloader train on a free track
/// and pushes `emptying_speed` per tick into it; a full unloader vanishes
/// together with its cargo.  The unloader is owned here — it never enters
/// the fleet — and its slot carries the [`Occupant::Unloader`] tag.
pub struct Entrepot {
    station_name:   String,
    oil_volume:     i64,
    tracks:         Vec<Track>,
    /// Rate drained from storage into the unloader.
    emptying_speed: i64,
    /// Rate drained from each docked roster train into storage.
    filling_speed:  i64,
    /// Storage cap used by the admission check.
    storage_volume: i64,
    /// Unloader capacity; also the combined-volume threshold that triggers
    /// spawning one.
    unload_limit:   i64,
    unloader:       Option<Train>,
    /// Oil moved per track last tick, for the snapshot.
    last_collected: Vec<Option<i64>>,
}

impl Entrepot {
    pub fn new(
        station_name:   impl Into<String>,
        oil_volume:     i64,
        tracks_num:     usize,
        emptying_speed: i64,
        filling_speed:  i64,
        storage_volume: i64,
        unload_limit:   i64,
    ) -> Self {
        Self {
            station_name: station_name.into(),
            oil_volume,
            tracks: vec![None; tracks_num],
            emptying_speed,
            filling_speed,
            storage_volume,
            unload_limit,
            unloader: None,
            last_collected: vec![None; tracks_num],
        }
    }

    /// Combined oil on site (storage plus every occupant's load) and the
    /// number of free tracks, in one pass.
    fn combined_oil(&self, fleet: &TrainFleet) -> (i64, usize) {
        let mut sum = self.oil_volume;
        let mut free = 0;
        for track in &self.tracks {
            match track {
                None => free += 1,
                Some(Occupant::Roster(id)) => sum += fleet.get(*id).oil_volume(),
                Some(Occupant::Unloader) => {
                    sum += self.unloader.as_ref().map_or(0, Train::oil_volume)
                }
            }
        }
        (sum, free)
    }

    /// Admission check: the incoming train's load must fit under the storage
    /// cap together with everything already on site, and if that total would
    /// call for an unloader that does not exist yet, one extra free track
    /// must remain for it — otherwise a single admission could starve the
    /// unloader's slot.
    fn pre_simulate(&self, fleet: &TrainFleet, train: TrainId) -> bool {
        let (on_site, free_tracks) = self.combined_oil(fleet);
        let sum = on_site + fleet.get(train).oil_volume();

        if free_tracks == 0 {
            return false;
        }
        if sum > self.storage_volume {
            return false;
        }
        if sum >= self.unload_limit && self.unloader.is_none() && free_tracks < 2 {
            return false;
        }
        true
    }

    fn spawn_unloader(&mut self, fleet: &TrainFleet) {
        let (sum, free_tracks) = self.combined_oil(fleet);
        if self.unloader.is_some() || free_tracks == 0 {
            return;
        }
        if sum < self.unload_limit {
            return;
        }
        let net_rate = self.filling_speed - self.emptying_speed;
        if net_rate < 0 {
            // net_rate < 0 implies emptying_speed > filling_speed >= 0.
            let has_steps = self.oil_volume / net_rate.abs();
            let need_steps = (self.unload_limit + self.emptying_speed - 1) / self.emptying_speed;
            if has_steps < need_steps {
                return;
            }
        }
        if place_in_first_free(&mut self.tracks, Occupant::Unloader).is_some() {
            self.unloader = Some(Train::unloader(&self.station_name, self.unload_limit));
        }
    }

    fn transfer_oil(&mut self, fleet: &mut TrainFleet) {
        let mut collected = 0;
        self.last_collected = vec![None; self.tracks.len()];
        for (i, track) in self.tracks.iter().enumerate() {
            match track {
                None => {}
                Some(Occupant::Unloader) => {
                    if let Some(unloader) = self.unloader.as_mut() {
                        let moved =
                            self.emptying_speed - unloader.fill_storage(self.emptying_speed);
                        collected -= moved;
                        self.last_collected[i] = Some(moved);
                    }
                }
                Some(Occupant::Roster(id)) => {
                    let train = fleet.get_mut(*id);
                    let moved = self.filling_speed - train.empty_storage(self.filling_speed);
                    collected += moved;
                    self.last_collected[i] = Some(moved);
                }
            }
        }
        self.oil_volume += collected;
    }

    fn depart_trains(&mut self, fleet: &mut TrainFleet) {
        for i in 0..self.tracks.len() {
            match self.tracks[i] {
                None => {}
                Some(Occupant::Unloader) => {
                    if self.unloader.as_ref().is_some_and(Train::is_full) {
                        // The unloader vanishes with its cargo.
                        self.tracks[i] = None;
                        self.unloader = None;
                    }
                }
                Some(Occupant::Roster(id)) => {
                    let train = fleet.get_mut(id);
                    if train.is_empty() {
                        train.state = TrainState::Ready;
                        self.tracks[i] = None;
                    }
                }
            }
        }
    }
}

impl Station for Entrepot {
    fn station_name(&self) -> &str {
        &self.station_name
    }

    fn oil_volume(&self) -> i64 {
        self.oil_volume
    }

    fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    fn add_train_to_track(&mut self, train: TrainId, fleet: &mut TrainFleet) -> bool {
        if !self.pre_simulate(fleet, train) {
            return false;
        }
        let _slot = place_in_first_free(&mut self.tracks, Occupant::Roster(train));
        debug_assert!(_slot.is_some(), "pre_simulate guarantees a free slot");
        fleet.get_mut(train).state = TrainState::InCargoProcess;
        true
    }

    fn update(&mut self, fleet: &mut TrainFleet) {
        self.spawn_unloader(fleet);
        self.transfer_oil(fleet);
        self.depart_trains(fleet);
    }

    fn info(&self, fleet: &TrainFleet) -> StationInfo {
        let tracks = self
            .tracks
            .iter()
            .zip(&self.last_collected)
            .map(|(track, collected)| {
                let (train_name, storage) = match track {
                    None => (None, None),
                    Some(Occupant::Roster(id)) => {
                        let train = fleet.get(*id);
                        (Some(train.name().to_owned()), Some(train.oil_volume()))
                    }
                    Some(Occupant::Unloader) => {
                        let unloader = self.unloader.as_ref();
                        (
                            unloader.map(|u| u.name().to_owned()),
                            unloader.map(Train::oil_volume),
                        )
                    }
                };
                TrackInfo {
                    train_name,
                    oil_collected: *collected,
                    storage,
                }
            })
            .collect();
        StationInfo::Entrepot(EntrepotInfo {
            oil_amt: self.oil_volume,
            tracks,
        })
    }
}
