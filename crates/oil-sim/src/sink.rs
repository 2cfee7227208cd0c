//! The snapshot sink seam between the core and its reporting collaborators.

use oil_core::Tick;
use oil_manager::CargoRecord;
use oil_station::StationRecord;

/// Receives one snapshot per tick from [`Sim::run`][crate::Sim::run].
///
/// The sink is injected — the core never owns a connection or file handle
/// lifecycle.  Methods are infallible from the driver's perspective;
/// file-backed sinks in `oil-output` store their first error internally and
/// expose it after the run.
pub trait SnapshotSink {
    /// Called once per tick, after both manager updates.
    ///
    /// `stations` is ordered by station registration; `cargo` holds the
    /// cargo episodes that completed since the previous tick.
    fn insert_data(
        &mut self,
        tick:      Tick,
        unix_secs: i64,
        stations:  &[StationRecord],
        cargo:     &[CargoRecord],
    );

    /// Called once after the final tick.  Idempotent.
    fn finish(&mut self) {}
}

/// A [`SnapshotSink`] that discards everything.  Use when you need to call
/// `run` but don't care about output.
pub struct NoopSink;

impl SnapshotSink for NoopSink {
    fn insert_data(
        &mut self,
        _tick:      Tick,
        _unix_secs: i64,
        _stations:  &[StationRecord],
        _cargo:     &[CargoRecord],
    ) {
    }
}
