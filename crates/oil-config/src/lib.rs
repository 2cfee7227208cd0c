//! `oil-config` — scenario configuration records and their JSON loaders.
//!
//! A scenario is four record sets (terminals, entrepots, trains, distances)
//! plus the run window, each in its own JSON file:
//!
//! ```json
//! [
//!   { "station_name": "north-field", "oil_volume": 0, "tracks_num": 1,
//!     "emptying_speed": 60, "mean_prod_speed": 80, "std_prod_speed": 10 }
//! ]
//! ```
//!
//! Every loader comes in two flavors: `load_xxx(path)` for files and
//! `load_xxx_reader(r)` for any `Read` source (tests pass a
//! `std::io::Cursor`, applications may embed scenarios as string
//! constants).  Records are plain data — entity construction and
//! cross-record validation happen in `oil-sim`'s builder.

pub mod error;
pub mod loader;
pub mod records;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{ConfigError, ConfigResult};
pub use loader::{
    load_distances, load_distances_reader, load_entrepots, load_entrepots_reader,
    load_sim_config, load_sim_config_reader, load_terminals, load_terminals_reader,
    load_trains, load_trains_reader,
};
pub use records::{DistanceRecord, EntrepotRecord, TerminalRecord, TrainRecord};
