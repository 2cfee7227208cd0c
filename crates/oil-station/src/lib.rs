//! `oil-station` — track-owning stations and their oil-balance logic.
//!
//! Two station variants share the [`Station`] contract:
//!
//! | Variant      | Role     | Per-tick `update`                                  |
//! |--------------|----------|----------------------------------------------------|
//! | [`Terminal`] | producer | mine oil, load the docked train, dispatch it full  |
//! | [`Entrepot`] | consumer | spawn unloader, drain docked trains, dispatch empty|
//!
//! Each station owns a fixed row of track slots.  A slot holds an
//! [`Occupant`]: either a roster train (by `TrainId`) or the entrepot's own
//! ephemeral unloader — an explicit tag, so "is this the unloader?" is a
//! pattern match rather than an identity comparison.
//!
//! Admission (`add_train_to_track`) is check-then-place inside one call and
//! returns plain `bool`: a refusal is backpressure for the manager's FIFO
//! buffers, never an error.

pub mod entrepot;
pub mod error;
pub mod snapshot;
pub mod station;
pub mod terminal;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use entrepot::Entrepot;
pub use error::{StationError, StationResult};
pub use snapshot::{EntrepotInfo, StationInfo, StationRecord, TerminalInfo, TrackInfo};
pub use station::{Occupant, Station, Track};
pub use terminal::Terminal;
