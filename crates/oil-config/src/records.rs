//! Plain configuration records, one per entity kind.

use serde::Deserialize;

use oil_train::{Train, TrainDirection, TrainState};

/// Construction parameters for a producing terminal.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TerminalRecord {
    pub station_name:    String,
    /// Initial storage level.
    pub oil_volume:      i64,
    /// Must be 1 — kept explicit so scenario files stay self-describing.
    pub tracks_num:      usize,
    pub emptying_speed:  i64,
    pub mean_prod_speed: i64,
    pub std_prod_speed:  i64,
}

/// Construction parameters for a collecting entrepot.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EntrepotRecord {
    pub station_name:   String,
    /// Initial storage level.
    pub oil_volume:     i64,
    pub tracks_num:     usize,
    pub emptying_speed: i64,
    pub filling_speed:  i64,
    pub storage_volume: i64,
    pub unload_limit:   i64,
}

/// Construction parameters for a roster train.
///
/// `state` and `direction` are snake_case strings (`"wait"`, `"transit"`,
/// `"to_load_station"`, …); they and the initial `oil_volume`/`coord` are
/// optional and default to a parked, empty train.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TrainRecord {
    pub name:                String,
    pub load_station_name:   String,
    pub unload_station_name: String,
    pub velocity:            u64,
    pub storage_volume:      i64,
    #[serde(default)]
    pub state:               TrainState,
    #[serde(default)]
    pub direction:           TrainDirection,
    #[serde(default)]
    pub oil_volume:          i64,
    #[serde(default)]
    pub coord:               u64,
}

impl TrainRecord {
    /// Build the domain train this record describes.
    pub fn into_train(self) -> Train {
        Train::new(
            self.name,
            self.load_station_name,
            self.unload_station_name,
            self.velocity,
            self.storage_volume,
        )
        .with_state(self.state)
        .with_direction(self.direction)
        .with_oil(self.oil_volume)
        .with_coord(self.coord)
    }
}

/// One undirected distance edge between two stations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DistanceRecord {
    pub point_a_name: String,
    pub point_b_name: String,
    pub distance:     u64,
}
