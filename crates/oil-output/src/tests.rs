//! Integration tests for the output sinks.

use oil_core::Tick;
use oil_manager::CargoRecord;
use oil_station::{EntrepotInfo, StationInfo, StationRecord, TerminalInfo, TrackInfo};

fn terminal_snapshot() -> StationRecord {
    StationRecord {
        station_name: "field".to_owned(),
        info: StationInfo::Terminal(TerminalInfo {
            oil_amt:       1_050,
            oil_mined:     Some(100),
            train_name:    Some("t1".to_owned()),
            oil_collected: Some(50),
            train_storage: Some(150),
        }),
    }
}

fn entrepot_snapshot() -> StationRecord {
    StationRecord {
        station_name: "harbor".to_owned(),
        info: StationInfo::Entrepot(EntrepotInfo {
            oil_amt: 200,
            tracks:  vec![
                TrackInfo {
                    train_name:    Some("t2".to_owned()),
                    oil_collected: Some(50),
                    storage:       Some(350),
                },
                TrackInfo {
                    train_name:    None,
                    oil_collected: None,
                    storage:       None,
                },
            ],
        }),
    }
}

fn episode() -> CargoRecord {
    CargoRecord {
        train_name:   "t1".to_owned(),
        station_name: "field".to_owned(),
        cargo_time:   3,
    }
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use oil_sim::SnapshotSink;

    use crate::csv::CsvSink;

    use super::*;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _sink = CsvSink::new(dir.path()).unwrap();
        assert!(dir.path().join("terminal_snapshots.csv").exists());
        assert!(dir.path().join("entrepot_snapshots.csv").exists());
        assert!(dir.path().join("cargo_episodes.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut sink = CsvSink::new(dir.path()).unwrap();
        sink.finish();
        assert!(sink.take_error().is_none());

        let mut rdr =
            csv::Reader::from_path(dir.path().join("terminal_snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            [
                "tick",
                "unix_time_secs",
                "station_name",
                "oil_amt",
                "oil_mined",
                "train_name",
                "oil_collected",
                "train_storage"
            ]
        );
    }

    #[test]
    fn csv_snapshot_round_trip() {
        let dir = tmp();
        let mut sink = CsvSink::new(dir.path()).unwrap();
        sink.insert_data(
            Tick(5),
            5 * 3_600,
            &[terminal_snapshot(), entrepot_snapshot()],
            &[episode()],
        );
        sink.finish();
        assert!(sink.take_error().is_none());

        let mut terminals =
            csv::Reader::from_path(dir.path().join("terminal_snapshots.csv")).unwrap();
        let rows: Vec<_> = terminals.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "5"); // tick
        assert_eq!(&rows[0][2], "field");
        assert_eq!(&rows[0][4], "100"); // oil_mined

        // One row per entrepot track; the empty slot serialises blank fields.
        let mut entrepots =
            csv::Reader::from_path(dir.path().join("entrepot_snapshots.csv")).unwrap();
        let rows: Vec<_> = entrepots.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][4], "0"); // track index
        assert_eq!(&rows[0][5], "t2");
        assert_eq!(&rows[1][5], "");
        assert_eq!(&rows[1][7], "");

        let mut episodes =
            csv::Reader::from_path(dir.path().join("cargo_episodes.csv")).unwrap();
        let rows: Vec<_> = episodes.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][2], "t1");
        assert_eq!(&rows[0][4], "3"); // cargo_time
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut sink = CsvSink::new(dir.path()).unwrap();
        sink.finish();
        sink.finish();
        assert!(sink.take_error().is_none());
    }
}

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use tempfile::TempDir;

    use oil_core::SimConfig;
    use oil_sim::SnapshotSink;
    use rusqlite::Connection;

    use crate::sqlite::SqliteSink;

    use super::*;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn config() -> SimConfig {
        SimConfig {
            start_unix_secs:    0,
            end_unix_secs:      24 * 3_600,
            tick_duration_secs: 3_600,
            seed:               42,
        }
    }

    #[test]
    fn sqlite_schema_and_rows() {
        let dir = tmp();
        let mut sink = SqliteSink::new(dir.path(), &config()).unwrap();
        sink.insert_data(
            Tick(5),
            5 * 3_600,
            &[terminal_snapshot(), entrepot_snapshot()],
            &[episode()],
        );
        sink.finish();
        assert!(sink.take_error().is_none());

        let conn = Connection::open(dir.path().join("output.db")).unwrap();
        let terminals: i64 = conn
            .query_row("SELECT COUNT(*) FROM terminal_snapshots", [], |r| r.get(0))
            .unwrap();
        assert_eq!(terminals, 1);

        let tracks: i64 = conn
            .query_row("SELECT COUNT(*) FROM entrepot_snapshots", [], |r| r.get(0))
            .unwrap();
        assert_eq!(tracks, 2);
    }

    #[test]
    fn sqlite_episode_interval() {
        let dir = tmp();
        let mut sink = SqliteSink::new(dir.path(), &config()).unwrap();
        sink.insert_data(Tick(5), 5 * 3_600, &[], &[episode()]);
        sink.finish();

        let conn = Connection::open(dir.path().join("output.db")).unwrap();
        let (arrival, departure): (i64, i64) = conn
            .query_row(
                "SELECT arrival_unix, departure_unix FROM cargo_episodes",
                [],
                |r| Ok((r.get(0)?, r.get(1)?)),
            )
            .unwrap();
        assert_eq!(arrival, 18_000);
        // 3 ticks of cargo handling at 3600 s each.
        assert_eq!(departure, 18_000 + 3 * 3_600);
    }
}
