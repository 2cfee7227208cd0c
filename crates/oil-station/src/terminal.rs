//! Producing terminal: mines oil into storage and loads the docked train.

use rand_distr::Normal;

use oil_core::{StationRng, TrainId};
use oil_train::{TrainFleet, TrainState};

use crate::error::{StationError, StationResult};
use crate::snapshot::{StationInfo, TerminalInfo};
use crate::station::{Occupant, Station, Track};

/// A terminal station where oil is produced.
///
/// Exactly one track.  Each tick it samples production from a Normal
/// distribution, pushes `emptying_speed` oil into the docked train, and
/// dispatches the train once full.
///
/// The production draw is deliberately not clamped at zero: a negative draw
/// shrinks storage, exactly as the modeled field data does.  Storage can
/// therefore go negative; the admission projection treats that as "no oil".
#[derive(Debug)]
pub struct Terminal {
    station_name:    String,
    oil_volume:      i64,
    tracks:          Vec<Track>,
    /// Oil pushed to the docked train per tick.
    emptying_speed:  i64,
    /// Mean of the per-tick production draw; also used by the admission
    /// projection as the expected refill rate.
    mean_prod_speed: i64,
    production:      Normal<f64>,
    rng:             StationRng,
    last_oil_mined:  Option<i64>,
    last_oil_given:  Option<i64>,
}

impl Terminal {
    /// Build a terminal.  `tracks_num` must be exactly 1; a negative
    /// `std_prod_speed` is rejected by the distribution.
    pub fn new(
        station_name:    impl Into<String>,
        oil_volume:      i64,
        tracks_num:      usize,
        emptying_speed:  i64,
        mean_prod_speed: i64,
        std_prod_speed:  i64,
        rng:             StationRng,
    ) -> StationResult<Self> {
        let station_name = station_name.into();
        if tracks_num != 1 {
            return Err(StationError::TerminalTrackCount {
                station: station_name,
                got:     tracks_num,
            });
        }
        let production = Normal::new(mean_prod_speed as f64, std_prod_speed as f64)
            .map_err(|e| StationError::InvalidProduction {
                station: station_name.clone(),
                reason:  e.to_string(),
            })?;
        Ok(Self {
            station_name,
            oil_volume,
            tracks: vec![None; tracks_num],
            emptying_speed,
            mean_prod_speed,
            production,
            rng,
            last_oil_mined: None,
            last_oil_given: None,
        })
    }

    /// Admission projection: can the station keep loading `train` until it
    /// is full?
    ///
    /// Storage already covering the train's whole capacity admits outright.
    /// Otherwise the net rate `mean_prod_speed - emptying_speed` decides:
    /// non-negative means storage only grows net-of-loading; negative means
    /// the station runs dry eventually, so it must hold enough steps of
    /// drain to finish the load.  Production variance is not modeled here —
    /// this is a projection, not a guarantee.
    fn pre_simulate(&self, fleet: &TrainFleet, train: TrainId) -> bool {
        let capacity = fleet.get(train).storage_volume();
        if self.oil_volume >= capacity {
            return true;
        }
        let net_rate = self.mean_prod_speed - self.emptying_speed;
        if net_rate >= 0 {
            return true;
        }
        // net_rate < 0 implies emptying_speed > mean_prod_speed >= 0.
        let has_steps = self.oil_volume / net_rate.abs();
        let need_steps = (capacity + self.emptying_speed - 1) / self.emptying_speed;
        has_steps >= need_steps
    }

    fn mine_oil(&mut self) {
        let mined = self.rng.sample_volume(&self.production);
        self.last_oil_mined = Some(mined);
        self.oil_volume += mined;
    }

    fn fill_train(&mut self, fleet: &mut TrainFleet) {
        self.last_oil_given = None;
        let Some(Occupant::Roster(id)) = self.tracks[0] else {
            return;
        };
        let train = fleet.get_mut(id);
        if self.oil_volume - self.emptying_speed > 0 {
            let excess = train.fill_storage(self.emptying_speed);
            self.oil_volume -= self.emptying_speed - excess;
            self.last_oil_given = Some(self.emptying_speed - excess);
        } else {
            // Not a full rate's worth left: offer whatever storage holds.
            let offer = self.oil_volume;
            let excess = train.fill_storage(offer);
            self.last_oil_given = Some(offer - excess);
            self.oil_volume = excess;
        }
    }

    fn dispatch_full_train(&mut self, fleet: &mut TrainFleet) {
        if let Some(Occupant::Roster(id)) = self.tracks[0] {
            let train = fleet.get_mut(id);
            if train.is_full() {
                train.state = TrainState::Ready;
                self.tracks[0] = None;
            }
        }
    }
}

impl Station for Terminal {
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
        if self.tracks[0].is_some() {
            return false;
        }
        if !self.pre_simulate(fleet, train) {
            return false;
        }
        fleet.get_mut(train).state = TrainState::InCargoProcess;
        self.tracks[0] = Some(Occupant::Roster(train));
        true
    }

    fn update(&mut self, fleet: &mut TrainFleet) {
        self.mine_oil();
        self.fill_train(fleet);
        self.dispatch_full_train(fleet);
    }

    fn info(&self, fleet: &TrainFleet) -> StationInfo {
        let (train_name, train_storage) = match self.tracks[0] {
            Some(Occupant::Roster(id)) => {
                let train = fleet.get(id);
                (Some(train.name().to_owned()), Some(train.oil_volume()))
            }
            _ => (None, None),
        };
        StationInfo::Terminal(TerminalInfo {
            oil_amt:       self.oil_volume,
            oil_mined:     self.last_oil_mined,
            train_name,
            oil_collected: self.last_oil_given,
            train_storage,
        })
    }
}
