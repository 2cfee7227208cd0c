//! Console reporting sink — a per-tick human-readable dump.

use std::fmt::Display;

use oil_core::Tick;
use oil_manager::CargoRecord;
use oil_sim::SnapshotSink;
use oil_station::{StationInfo, StationRecord};

/// Prints every snapshot to stdout.  The console is the "no persistence
/// configured" reporting mode; it never fails.
#[derive(Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

fn opt<T: Display>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "-".to_owned(),
    }
}

impl SnapshotSink for ConsoleSink {
    fn insert_data(
        &mut self,
        tick:      Tick,
        unix_secs: i64,
        stations:  &[StationRecord],
        cargo:     &[CargoRecord],
    ) {
        println!("{tick} (unix {unix_secs})");
        for record in stations {
            match &record.info {
                StationInfo::Terminal(info) => {
                    println!(
                        "  {}: oil={} mined={} train={} collected={} train_oil={}",
                        record.station_name,
                        info.oil_amt,
                        opt(&info.oil_mined),
                        opt(&info.train_name),
                        opt(&info.oil_collected),
                        opt(&info.train_storage),
                    );
                }
                StationInfo::Entrepot(info) => {
                    let tracks: Vec<String> = info
                        .tracks
                        .iter()
                        .map(|t| {
                            format!(
                                "[{} collected={} oil={}]",
                                opt(&t.train_name),
                                opt(&t.oil_collected),
                                opt(&t.storage),
                            )
                        })
                        .collect();
                    println!(
                        "  {}: oil={} tracks={}",
                        record.station_name,
                        info.oil_amt,
                        tracks.join(" "),
                    );
                }
            }
        }
        for episode in cargo {
            println!(
                "  {} departed {} after {} tick(s) of cargo handling",
                episode.train_name, episode.station_name, episode.cargo_time,
            );
        }
    }
}
