//! `oil-train` — the train entity and its state machine.
//!
//! A [`Train`] cycles forever between its load and unload stations:
//!
//! ```text
//!          ┌──────────────────────────────────────────────┐
//!          ▼                                              │
//!  Wait ─(admitted)─▶ InCargoProcess ─(full/empty)─▶ Ready
//!          ▲                                              │
//!          │                                   (dispatch) │
//!   (station busy)                                        ▼
//!       Arrived ◀──────(coord reaches 0)────────────── Transit
//! ```
//!
//! The only self-driven transition is `Transit → Arrived` inside
//! [`Train::update`]; every other edge is imposed by the manager layer or by
//! a station.  All oil movement goes through [`Train::fill_storage`] and
//! [`Train::empty_storage`] so volumes are conserved by construction.
//!
//! [`TrainFleet`] is the arena that owns every roster train for the whole
//! run, indexed by `TrainId`.  Stations and managers refer to trains only by
//! ID; the ephemeral unloader train (see `oil-station`) never enters it.

pub mod error;
pub mod fleet;
pub mod state;
pub mod train;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::TrainError;
pub use fleet::TrainFleet;
pub use state::{TrainDirection, TrainState};
pub use train::Train;
