//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `terminal_snapshots.csv` — one row per terminal per tick
//! - `entrepot_snapshots.csv` — one row per entrepot track per tick
//! - `cargo_episodes.csv` — one row per completed cargo episode

use std::fmt::Display;
use std::fs::File;
use std::path::Path;

use csv::Writer;

use oil_core::Tick;
use oil_manager::CargoRecord;
use oil_sim::SnapshotSink;
use oil_station::{StationInfo, StationRecord};

use crate::error::{OutputError, OutputResult};

fn opt<T: Display>(value: &Option<T>) -> String {
    value.as_ref().map(T::to_string).unwrap_or_default()
}

/// Writes simulation snapshots to three CSV files.
pub struct CsvSink {
    terminals:  Writer<File>,
    entrepots:  Writer<File>,
    episodes:   Writer<File>,
    last_error: Option<OutputError>,
    finished:   bool,
}

impl CsvSink {
    /// Open (or create) the three CSV files in `dir` and write the header
    /// rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut terminals = Writer::from_path(dir.join("terminal_snapshots.csv"))?;
        terminals.write_record([
            "tick",
            "unix_time_secs",
            "station_name",
            "oil_amt",
            "oil_mined",
            "train_name",
            "oil_collected",
            "train_storage",
        ])?;

        let mut entrepots = Writer::from_path(dir.join("entrepot_snapshots.csv"))?;
        entrepots.write_record([
            "tick",
            "unix_time_secs",
            "station_name",
            "oil_amt",
            "track",
            "train_name",
            "oil_collected",
            "train_storage",
        ])?;

        let mut episodes = Writer::from_path(dir.join("cargo_episodes.csv"))?;
        episodes.write_record([
            "tick",
            "unix_time_secs",
            "train_name",
            "station_name",
            "cargo_time",
        ])?;

        Ok(Self {
            terminals,
            entrepots,
            episodes,
            last_error: None,
            finished: false,
        })
    }

    /// Take the stored write error (if any) after the run.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }

    fn write_tick(
        &mut self,
        tick:      Tick,
        unix_secs: i64,
        stations:  &[StationRecord],
        cargo:     &[CargoRecord],
    ) -> OutputResult<()> {
        let tick = tick.0.to_string();
        let unix = unix_secs.to_string();

        for record in stations {
            match &record.info {
                StationInfo::Terminal(info) => {
                    self.terminals.write_record(&[
                        tick.clone(),
                        unix.clone(),
                        record.station_name.clone(),
                        info.oil_amt.to_string(),
                        opt(&info.oil_mined),
                        opt(&info.train_name),
                        opt(&info.oil_collected),
                        opt(&info.train_storage),
                    ])?;
                }
                StationInfo::Entrepot(info) => {
                    for (i, track) in info.tracks.iter().enumerate() {
                        self.entrepots.write_record(&[
                            tick.clone(),
                            unix.clone(),
                            record.station_name.clone(),
                            info.oil_amt.to_string(),
                            i.to_string(),
                            opt(&track.train_name),
                            opt(&track.oil_collected),
                            opt(&track.storage),
                        ])?;
                    }
                }
            }
        }

        for episode in cargo {
            self.episodes.write_record(&[
                tick.clone(),
                unix.clone(),
                episode.train_name.clone(),
                episode.station_name.clone(),
                episode.cargo_time.to_string(),
            ])?;
        }
        Ok(())
    }
}

impl SnapshotSink for CsvSink {
    fn insert_data(
        &mut self,
        tick:      Tick,
        unix_secs: i64,
        stations:  &[StationRecord],
        cargo:     &[CargoRecord],
    ) {
        let result = self.write_tick(tick, unix_secs, stations, cargo);
        self.store_err(result);
    }

    fn finish(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;
        let result = self
            .terminals
            .flush()
            .and_then(|()| self.entrepots.flush())
            .and_then(|()| self.episodes.flush())
            .map_err(OutputError::from);
        self.store_err(result);
    }
}
