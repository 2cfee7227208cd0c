//! Plain snapshot types handed to the reporting sinks.
//!
//! Shapes mirror what each variant can say about itself after a tick; `None`
//! fields mean "no train was involved this tick".

/// Snapshot of a producing terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalInfo {
    /// Storage level after this tick.
    pub oil_amt: i64,
    /// Oil mined this tick; `None` before the first update.
    pub oil_mined: Option<i64>,
    /// Name of the docked train, if any.
    pub train_name: Option<String>,
    /// Oil actually loaded into the docked train this tick.
    pub oil_collected: Option<i64>,
    /// The docked train's storage level.
    pub train_storage: Option<i64>,
}

/// Snapshot of one entrepot track slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackInfo {
    /// Occupant name; `None` for an empty slot.
    pub train_name: Option<String>,
    /// Oil moved through this slot this tick (kept even if the occupant
    /// departed at the end of the tick).
    pub oil_collected: Option<i64>,
    /// The occupant's storage level.
    pub storage: Option<i64>,
}

/// Snapshot of a collecting entrepot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrepotInfo {
    /// Storage level after this tick.
    pub oil_amt: i64,
    /// One entry per track slot, in track order.
    pub tracks: Vec<TrackInfo>,
}

/// Variant-shaped station snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StationInfo {
    Terminal(TerminalInfo),
    Entrepot(EntrepotInfo),
}

/// A station snapshot tagged by the station it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationRecord {
    pub station_name: String,
    pub info: StationInfo,
}
