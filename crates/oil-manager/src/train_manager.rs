//! `TrainManager` — per-tick train orchestration.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use oil_core::TrainId;
use oil_train::{TrainDirection, TrainFleet, TrainState};

use crate::distance::DistanceTable;
use crate::error::{ManagerError, ManagerResult};
use crate::station_manager::StationManager;

/// Reporting record for one completed loading/unloading episode.
///
/// Emitted once, the tick after the train leaves the station, and consumed
/// by the snapshot sinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CargoRecord {
    pub train_name:   String,
    /// The station the train just departed.
    pub station_name: String,
    /// Ticks the train spent in the cargo episode.
    pub cargo_time:   i64,
}

/// Sentinel for "no cargo episode currently tracked".
const CARGO_IDLE: i64 = -1;

/// Orchestrates train movement, admission, and FIFO queueing.
///
/// The tick is two-phase: a precondition-and-self-update pass over the
/// roster, then a drain pass over the per-station buffers.  A buffer is
/// strict FIFO with head-of-line blocking — a train that cannot be admitted
/// blocks everyone behind it, preserving first-arrived-first-served
/// fairness.
pub struct TrainManager {
    distances:    DistanceTable,
    /// Station names in registration order — the drain pass order.
    buffer_order: Vec<String>,
    buffers:      FxHashMap<String, VecDeque<TrainId>>,
    /// Per-train cargo-episode tick counter, `CARGO_IDLE` when not tracked.
    /// Reporting bookkeeping only; never feeds back into the simulation.
    cargo_time:   Vec<i64>,
}

impl TrainManager {
    /// Build the manager and validate every train's route against the
    /// station registry and distance table.
    pub fn new(
        fleet:     &TrainFleet,
        stations:  &StationManager,
        distances: DistanceTable,
    ) -> ManagerResult<Self> {
        for (_, train) in fleet.iter() {
            for station in [train.load_station_name(), train.unload_station_name()] {
                if !stations.contains(station) {
                    return Err(ManagerError::UnknownRouteStation {
                        train:   train.name().to_owned(),
                        station: station.to_owned(),
                    });
                }
            }
            if distances
                .get(train.load_station_name(), train.unload_station_name())
                .is_none()
            {
                return Err(ManagerError::MissingDistance {
                    from: train.load_station_name().to_owned(),
                    to:   train.unload_station_name().to_owned(),
                });
            }
        }

        let buffer_order: Vec<String> =
            stations.station_names().map(str::to_owned).collect();
        let buffers = buffer_order
            .iter()
            .map(|name| (name.clone(), VecDeque::new()))
            .collect();

        Ok(Self {
            distances,
            buffer_order,
            buffers,
            cargo_time: vec![CARGO_IDLE; fleet.len()],
        })
    }

    /// Trains currently parked in the named station's buffer.
    pub fn queued_count(&self, station: &str) -> usize {
        self.buffers.get(station).map_or(0, VecDeque::len)
    }

    // ── Tick phases ───────────────────────────────────────────────────────

    /// Phase-1 state transitions for one roster train.  Trains parked in a
    /// buffer sit in `Wait` and fall through untouched.
    fn set_train_preconditions(
        &mut self,
        id:       TrainId,
        fleet:    &mut TrainFleet,
        stations: &mut StationManager,
    ) -> ManagerResult<()> {
        match fleet.get(id).state {
            TrainState::Ready => {
                let train = fleet.get_mut(id);
                train.change_direction();
                train.state = TrainState::Transit;
                let distance = self
                    .distances
                    .get(train.load_station_name(), train.unload_station_name())
                    .ok_or_else(|| ManagerError::MissingDistance {
                        from: train.load_station_name().to_owned(),
                        to:   train.unload_station_name().to_owned(),
                    })?;
                train.coord = distance;
                self.cargo_time[id.index()] += 1;
            }
            TrainState::Arrived => {
                let train = fleet.get(id);
                let arrived = match train.direction() {
                    TrainDirection::ToLoadStation => train.load_station_name().to_owned(),
                    TrainDirection::ToUnloadStation => train.unload_station_name().to_owned(),
                };
                let Some(buffer) = self.buffers.get(&arrived) else {
                    return Err(ManagerError::UnknownStation(arrived));
                };
                // A non-empty buffer short-circuits the admission attempt:
                // strict FIFO, no bypass even if admission would succeed.
                let must_queue = !buffer.is_empty()
                    || !stations.add_train_to_station(&arrived, id, fleet)?;
                if must_queue {
                    fleet.get_mut(id).state = TrainState::Wait;
                    if let Some(buffer) = self.buffers.get_mut(&arrived) {
                        buffer.push_back(id);
                    }
                } else {
                    // Fresh cargo episode: the admission tick counts as 1.
                    self.cargo_time[id.index()] = 1;
                }
            }
            TrainState::InCargoProcess => {
                self.cargo_time[id.index()] += 1;
            }
            TrainState::Wait | TrainState::Transit => {}
        }
        Ok(())
    }

    /// Run one manager tick over the whole roster.
    pub fn update(
        &mut self,
        fleet:    &mut TrainFleet,
        stations: &mut StationManager,
    ) -> ManagerResult<()> {
        // ── Phase 1: preconditions + self-update, roster order ────────────
        let roster: Vec<TrainId> = fleet.ids().collect();
        for id in roster {
            self.set_train_preconditions(id, fleet, stations)?;
            fleet.get_mut(id).update();
        }

        // ── Phase 2: drain buffers, head-of-line blocking ─────────────────
        for station in &self.buffer_order {
            loop {
                let Some(head) = self
                    .buffers
                    .get(station)
                    .and_then(|buffer| buffer.front().copied())
                else {
                    break;
                };
                if !stations.add_train_to_station(station, head, fleet)? {
                    break;
                }
                self.cargo_time[head.index()] += 1;
                if let Some(buffer) = self.buffers.get_mut(station) {
                    buffer.pop_front();
                }
            }
        }
        Ok(())
    }

    // ── Reporting ─────────────────────────────────────────────────────────

    /// Emit a cargo-duration record for every train that just departed a
    /// station (now in `Transit` with a live counter), resetting each
    /// counter to the idle sentinel.
    pub fn trains_info(&mut self, fleet: &TrainFleet) -> Vec<CargoRecord> {
        let mut records = Vec::new();
        for (id, train) in fleet.iter() {
            if train.state != TrainState::Transit || self.cargo_time[id.index()] == CARGO_IDLE {
                continue;
            }
            // Direction already flipped at dispatch, so the just-departed
            // station is the opposite endpoint.
            let station_name = match train.direction() {
                TrainDirection::ToLoadStation => train.unload_station_name(),
                TrainDirection::ToUnloadStation => train.load_station_name(),
            };
            records.push(CargoRecord {
                train_name:   train.name().to_owned(),
                station_name: station_name.to_owned(),
                cargo_time:   self.cargo_time[id.index()],
            });
            self.cargo_time[id.index()] = CARGO_IDLE;
        }
        records
    }
}
