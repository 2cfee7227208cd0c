//! Fluent builder for constructing a [`Sim`] from configuration records.

use oil_core::{SimConfig, StationId, StationRng};
use oil_config::{DistanceRecord, EntrepotRecord, TerminalRecord, TrainRecord};
use oil_manager::{DistanceTable, StationManager, TrainManager};
use oil_station::{Entrepot, Station, Terminal};
use oil_train::TrainFleet;

use crate::{Sim, SimResult};

/// Assembles a scenario and surfaces every construction-time error before
/// the first tick: duplicate names, a terminal with more than one track, a
/// bad production distribution, a route through an unknown station, or a
/// missing distance entry.
///
/// Stations register in the order given, terminals first — registration
/// order drives snapshot order and the buffer-drain pass.  Each terminal
/// gets its own RNG seeded from `config.seed` and its registration index,
/// so runs are reproducible per seed.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .terminals(load_terminals(path_a)?)
///     .entrepots(load_entrepots(path_b)?)
///     .trains(load_trains(path_c)?)
///     .distances(load_distances(path_d)?)
///     .build()?;
/// sim.run(&mut sink)?;
/// ```
pub struct SimBuilder {
    config:    SimConfig,
    terminals: Vec<TerminalRecord>,
    entrepots: Vec<EntrepotRecord>,
    trains:    Vec<TrainRecord>,
    distances: Vec<DistanceRecord>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            terminals: Vec::new(),
            entrepots: Vec::new(),
            trains:    Vec::new(),
            distances: Vec::new(),
        }
    }

    pub fn terminals(mut self, terminals: Vec<TerminalRecord>) -> Self {
        self.terminals = terminals;
        self
    }

    pub fn entrepots(mut self, entrepots: Vec<EntrepotRecord>) -> Self {
        self.entrepots = entrepots;
        self
    }

    pub fn trains(mut self, trains: Vec<TrainRecord>) -> Self {
        self.trains = trains;
        self
    }

    pub fn distances(mut self, distances: Vec<DistanceRecord>) -> Self {
        self.distances = distances;
        self
    }

    /// Validate the scenario and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        let Self {
            config,
            terminals,
            entrepots,
            trains,
            distances,
        } = self;

        // ── Stations, registration order = given order ────────────────────
        let mut stations: Vec<Box<dyn Station>> =
            Vec::with_capacity(terminals.len() + entrepots.len());
        for (i, record) in terminals.into_iter().enumerate() {
            let rng = StationRng::new(config.seed, StationId(i as u32));
            stations.push(Box::new(Terminal::new(
                record.station_name,
                record.oil_volume,
                record.tracks_num,
                record.emptying_speed,
                record.mean_prod_speed,
                record.std_prod_speed,
                rng,
            )?));
        }
        for record in entrepots {
            stations.push(Box::new(Entrepot::new(
                record.station_name,
                record.oil_volume,
                record.tracks_num,
                record.emptying_speed,
                record.filling_speed,
                record.storage_volume,
                record.unload_limit,
            )));
        }
        let stations = StationManager::new(stations)?;

        // ── Fleet and routes ──────────────────────────────────────────────
        let fleet = TrainFleet::new(
            trains.into_iter().map(TrainRecord::into_train).collect(),
        )?;

        let mut table = DistanceTable::new();
        for edge in &distances {
            table.insert(&edge.point_a_name, &edge.point_b_name, edge.distance);
        }
        let trains = TrainManager::new(&fleet, &stations, table)?;

        Ok(Sim {
            clock: config.make_clock(),
            config,
            fleet,
            stations,
            trains,
        })
    }
}
