//! smallfield — smallest runnable oilsim scenario.
//!
//! Two producing terminals feed one three-track entrepot through three
//! tankers over a 30-day run.  Snapshots go to the console by default, or to
//! CSV files with `smallfield --csv <dir>`.

use std::io::Cursor;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;

use oil_config::{
    load_distances_reader, load_entrepots_reader, load_sim_config_reader,
    load_terminals_reader, load_trains_reader,
};
use oil_output::{ConsoleSink, CsvSink};
use oil_sim::SimBuilder;

// ── Scenario ──────────────────────────────────────────────────────────────────

// 30 days at 1 tick/hour, inclusive end bound.
const SIM_JSON: &str = r#"{
  "start_unix_secs": 1700000000,
  "end_unix_secs":   1702592000,
  "seed":            42
}"#;

const TERMINALS_JSON: &str = r#"[
  { "station_name": "north-field", "oil_volume": 500, "tracks_num": 1,
    "emptying_speed": 60, "mean_prod_speed": 80, "std_prod_speed": 10 },
  { "station_name": "star-ridge", "oil_volume": 800, "tracks_num": 1,
    "emptying_speed": 60, "mean_prod_speed": 65, "std_prod_speed": 5 }
]"#;

const ENTREPOTS_JSON: &str = r#"[
  { "station_name": "polar-harbor", "oil_volume": 0, "tracks_num": 3,
    "emptying_speed": 120, "filling_speed": 90,
    "storage_volume": 5000, "unload_limit": 2000 }
]"#;

const TRAINS_JSON: &str = r#"[
  { "name": "tanker-1", "load_station_name": "north-field",
    "unload_station_name": "polar-harbor", "velocity": 55,
    "storage_volume": 900, "state": "ready", "direction": "to_unload_station" },
  { "name": "tanker-2", "load_station_name": "star-ridge",
    "unload_station_name": "polar-harbor", "velocity": 50,
    "storage_volume": 700, "state": "ready", "direction": "to_unload_station" },
  { "name": "tanker-3", "load_station_name": "north-field",
    "unload_station_name": "polar-harbor", "velocity": 60,
    "storage_volume": 600, "state": "transit", "direction": "to_load_station",
    "coord": 240 }
]"#;

const DISTANCES_JSON: &str = r#"[
  { "point_a_name": "north-field", "point_b_name": "polar-harbor", "distance": 440 },
  { "point_a_name": "star-ridge",  "point_b_name": "polar-harbor", "distance": 520 }
]"#;

// ── main ──────────────────────────────────────────────────────────────────────

fn parse_csv_dir() -> Option<PathBuf> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("--csv") => Some(PathBuf::from(
            args.next().unwrap_or_else(|| "output".to_owned()),
        )),
        _ => None,
    }
}

fn main() -> Result<()> {
    let config = load_sim_config_reader(Cursor::new(SIM_JSON))?;
    let terminals = load_terminals_reader(Cursor::new(TERMINALS_JSON))?;
    let entrepots = load_entrepots_reader(Cursor::new(ENTREPOTS_JSON))?;
    let trains = load_trains_reader(Cursor::new(TRAINS_JSON))?;
    let distances = load_distances_reader(Cursor::new(DISTANCES_JSON))?;

    println!("=== smallfield — oilsim ===");
    println!(
        "Stations: {} terminals + {} entrepot  |  Trains: {}  |  Ticks: {}  |  Seed: {}",
        terminals.len(),
        entrepots.len(),
        trains.len(),
        config.total_ticks(),
        config.seed,
    );

    let mut sim = SimBuilder::new(config.clone())
        .terminals(terminals)
        .entrepots(entrepots)
        .trains(trains)
        .distances(distances)
        .build()?;

    let started = Instant::now();
    match parse_csv_dir() {
        Some(dir) => {
            std::fs::create_dir_all(&dir)?;
            let mut sink = CsvSink::new(&dir)?;
            sim.run(&mut sink)?;
            if let Some(e) = sink.take_error() {
                return Err(e.into());
            }
            println!(
                "Wrote {} ticks of snapshots to {} in {:.2?}",
                config.total_ticks(),
                dir.display(),
                started.elapsed(),
            );
        }
        None => {
            sim.run(&mut ConsoleSink::new())?;
            println!("Simulated {} ticks in {:.2?}", config.total_ticks(), started.elapsed());
        }
    }

    Ok(())
}
