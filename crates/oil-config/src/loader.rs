//! JSON loaders for the scenario record sets.

use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;

use oil_core::SimConfig;

use crate::error::ConfigResult;
use crate::records::{DistanceRecord, EntrepotRecord, TerminalRecord, TrainRecord};

fn from_file<T: DeserializeOwned>(path: &Path) -> ConfigResult<T> {
    let file = std::fs::File::open(path)?;
    Ok(serde_json::from_reader(file)?)
}

fn from_reader<T: DeserializeOwned, R: Read>(reader: R) -> ConfigResult<T> {
    Ok(serde_json::from_reader(reader)?)
}

/// Load terminal records from a JSON array file.
pub fn load_terminals(path: &Path) -> ConfigResult<Vec<TerminalRecord>> {
    from_file(path)
}

/// Like [`load_terminals`] but accepts any `Read` source.
pub fn load_terminals_reader<R: Read>(reader: R) -> ConfigResult<Vec<TerminalRecord>> {
    from_reader(reader)
}

/// Load entrepot records from a JSON array file.
pub fn load_entrepots(path: &Path) -> ConfigResult<Vec<EntrepotRecord>> {
    from_file(path)
}

/// Like [`load_entrepots`] but accepts any `Read` source.
pub fn load_entrepots_reader<R: Read>(reader: R) -> ConfigResult<Vec<EntrepotRecord>> {
    from_reader(reader)
}

/// Load train records from a JSON array file.
pub fn load_trains(path: &Path) -> ConfigResult<Vec<TrainRecord>> {
    from_file(path)
}

/// Like [`load_trains`] but accepts any `Read` source.
pub fn load_trains_reader<R: Read>(reader: R) -> ConfigResult<Vec<TrainRecord>> {
    from_reader(reader)
}

/// Load distance edges from a JSON array file.
pub fn load_distances(path: &Path) -> ConfigResult<Vec<DistanceRecord>> {
    from_file(path)
}

/// Like [`load_distances`] but accepts any `Read` source.
pub fn load_distances_reader<R: Read>(reader: R) -> ConfigResult<Vec<DistanceRecord>> {
    from_reader(reader)
}

/// Load the run window and seed from a JSON object file.
pub fn load_sim_config(path: &Path) -> ConfigResult<SimConfig> {
    from_file(path)
}

/// Like [`load_sim_config`] but accepts any `Read` source.
pub fn load_sim_config_reader<R: Read>(reader: R) -> ConfigResult<SimConfig> {
    from_reader(reader)
}
