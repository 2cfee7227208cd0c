//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` in the configured output directory with
//! three tables keyed by station name — `terminal_snapshots`,
//! `entrepot_snapshots` (one row per track), and `cargo_episodes`.
//!
//! A cargo episode is stored as an arrival/departure interval: the record is
//! emitted at departure time, so `arrival_unix` is the snapshot timestamp
//! and `departure_unix` adds the episode duration.

use std::path::Path;

use rusqlite::Connection;

use oil_core::{SimConfig, Tick};
use oil_manager::CargoRecord;
use oil_sim::SnapshotSink;
use oil_station::{StationInfo, StationRecord};

use crate::error::{OutputError, OutputResult};

/// Writes simulation snapshots to an SQLite database.
pub struct SqliteSink {
    conn:               Connection,
    tick_duration_secs: u32,
    last_error:         Option<OutputError>,
    finished:           bool,
}

impl SqliteSink {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path, config: &SimConfig) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS terminal_snapshots (
                 tick           INTEGER NOT NULL,
                 unix_time_secs INTEGER NOT NULL,
                 station_name   TEXT    NOT NULL,
                 oil_amt        INTEGER NOT NULL,
                 oil_mined      INTEGER,
                 train_name     TEXT,
                 oil_collected  INTEGER,
                 train_storage  INTEGER
             );
             CREATE TABLE IF NOT EXISTS entrepot_snapshots (
                 tick           INTEGER NOT NULL,
                 unix_time_secs INTEGER NOT NULL,
                 station_name   TEXT    NOT NULL,
                 oil_amt        INTEGER NOT NULL,
                 track          INTEGER NOT NULL,
                 train_name     TEXT,
                 oil_collected  INTEGER,
                 train_storage  INTEGER
             );
             CREATE TABLE IF NOT EXISTS cargo_episodes (
                 train_name     TEXT    NOT NULL,
                 station_name   TEXT    NOT NULL,
                 arrival_unix   INTEGER NOT NULL,
                 departure_unix INTEGER NOT NULL
             );",
        )?;

        Ok(Self {
            conn,
            tick_duration_secs: config.tick_duration_secs,
            last_error: None,
            finished: false,
        })
    }

    /// Take the stored write error (if any) after the run.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
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
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut terminal_stmt = tx.prepare_cached(
                "INSERT INTO terminal_snapshots \
                 (tick, unix_time_secs, station_name, oil_amt, oil_mined, \
                  train_name, oil_collected, train_storage) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;
            let mut entrepot_stmt = tx.prepare_cached(
                "INSERT INTO entrepot_snapshots \
                 (tick, unix_time_secs, station_name, oil_amt, track, \
                  train_name, oil_collected, train_storage) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;
            let mut episode_stmt = tx.prepare_cached(
                "INSERT INTO cargo_episodes \
                 (train_name, station_name, arrival_unix, departure_unix) \
                 VALUES (?1, ?2, ?3, ?4)",
            )?;

            for record in stations {
                match &record.info {
                    StationInfo::Terminal(info) => {
                        terminal_stmt.execute(rusqlite::params![
                            tick.0,
                            unix_secs,
                            record.station_name,
                            info.oil_amt,
                            info.oil_mined,
                            info.train_name,
                            info.oil_collected,
                            info.train_storage,
                        ])?;
                    }
                    StationInfo::Entrepot(info) => {
                        for (i, track) in info.tracks.iter().enumerate() {
                            entrepot_stmt.execute(rusqlite::params![
                                tick.0,
                                unix_secs,
                                record.station_name,
                                info.oil_amt,
                                i as i64,
                                track.train_name,
                                track.oil_collected,
                                track.storage,
                            ])?;
                        }
                    }
                }
            }

            for episode in cargo {
                let departure =
                    unix_secs + episode.cargo_time * self.tick_duration_secs as i64;
                episode_stmt.execute(rusqlite::params![
                    episode.train_name,
                    episode.station_name,
                    unix_secs,
                    departure,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }
}

impl SnapshotSink for SqliteSink {
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
            .conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")
            .map_err(OutputError::from);
        self.store_err(result);
    }
}
