//! `StationManager` — the station registry.

use rustc_hash::FxHashMap;

use oil_core::{StationId, TrainId};
use oil_station::{Station, StationRecord};
use oil_train::TrainFleet;

use crate::error::{ManagerError, ManagerResult};

/// Owns every station for the lifetime of the run.
///
/// Registration order is preserved: per-tick updates, snapshot emission, and
/// the train manager's buffer-drain pass all walk stations in the order they
/// were configured.
pub struct StationManager {
    stations: Vec<Box<dyn Station>>,
    by_name:  FxHashMap<String, StationId>,
}

impl StationManager {
    /// Build the registry.  Duplicate station names are a construction-time
    /// error.
    pub fn new(stations: Vec<Box<dyn Station>>) -> ManagerResult<Self> {
        let mut by_name = FxHashMap::default();
        for (i, station) in stations.iter().enumerate() {
            let name = station.station_name().to_owned();
            if by_name.insert(name, StationId(i as u32)).is_some() {
                return Err(ManagerError::DuplicateStation(
                    station.station_name().to_owned(),
                ));
            }
        }
        Ok(Self { stations, by_name })
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Station names in registration order.
    pub fn station_names(&self) -> impl Iterator<Item = &str> {
        self.stations.iter().map(|s| s.station_name())
    }

    /// Borrow a station by name (read-only, for inspection).
    pub fn get(&self, name: &str) -> Option<&dyn Station> {
        self.by_name
            .get(name)
            .map(|id| self.stations[id.index()].as_ref())
    }

    /// Run one tick of every station's oil-balance logic.  No ordering
    /// dependency exists between stations within a tick.
    pub fn update(&mut self, fleet: &mut TrainFleet) {
        for station in &mut self.stations {
            station.update(fleet);
        }
    }

    /// Delegate an admission attempt to the named station.
    ///
    /// An unknown name is a fatal logic error; `Ok(false)` is ordinary
    /// backpressure.
    pub fn add_train_to_station(
        &mut self,
        name:  &str,
        train: TrainId,
        fleet: &mut TrainFleet,
    ) -> ManagerResult<bool> {
        let id = self
            .by_name
            .get(name)
            .ok_or_else(|| ManagerError::UnknownStation(name.to_owned()))?;
        Ok(self.stations[id.index()].add_train_to_track(train, fleet))
    }

    /// Ordered snapshots, one per station, tagged by name.
    pub fn stations_info(&self, fleet: &TrainFleet) -> Vec<StationRecord> {
        self.stations
            .iter()
            .map(|station| StationRecord {
                station_name: station.station_name().to_owned(),
                info:         station.info(fleet),
            })
            .collect()
    }
}
