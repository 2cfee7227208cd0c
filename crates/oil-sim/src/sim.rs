//! The `Sim` struct and its tick loop.

use oil_core::{SimClock, SimConfig};
use oil_manager::{StationManager, TrainManager};
use oil_train::TrainFleet;

use crate::sink::SnapshotSink;
use crate::SimResult;

/// The simulation driver.
///
/// Owns the clock, the train fleet, and both managers; create via
/// [`SimBuilder`][crate::SimBuilder].  The tick order is fixed: train
/// orchestration first, station oil balance second, snapshot third.
pub struct Sim {
    /// Run window and seed.
    pub config: SimConfig,

    /// Simulation clock — tracks the current tick and maps to wall time.
    pub clock: SimClock,

    /// The roster arena.  Stations and managers borrow it per phase.
    pub fleet: TrainFleet,

    /// Station registry.
    pub stations: StationManager,

    /// Train orchestration: dispatch, admission, FIFO buffers.
    pub trains: TrainManager,
}

impl Sim {
    /// Run from the current tick through `config.end_unix_secs`, inclusive,
    /// emitting one snapshot per tick to `sink`.
    pub fn run<S: SnapshotSink>(&mut self, sink: &mut S) -> SimResult<()> {
        while self.clock.current_unix_secs() <= self.config.end_unix_secs {
            self.step(sink)?;
        }
        sink.finish();
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores the end
    /// bound, does not call `finish`).  Useful for tests and incremental
    /// stepping.
    pub fn run_ticks<S: SnapshotSink>(&mut self, n: u64, sink: &mut S) -> SimResult<()> {
        for _ in 0..n {
            self.step(sink)?;
        }
        Ok(())
    }

    fn step<S: SnapshotSink>(&mut self, sink: &mut S) -> SimResult<()> {
        self.trains.update(&mut self.fleet, &mut self.stations)?;
        self.stations.update(&mut self.fleet);

        let stations_info = self.stations.stations_info(&self.fleet);
        let cargo_info = self.trains.trains_info(&self.fleet);
        sink.insert_data(
            self.clock.current_tick,
            self.clock.current_unix_secs(),
            &stations_info,
            &cargo_info,
        );

        self.clock.advance();
        Ok(())
    }
}
