//! `oil-manager` — the orchestration layer.
//!
//! Two registries share the per-tick work:
//!
//! - [`StationManager`] owns every station and fans `update` out to them.
//! - [`TrainManager`] owns the per-tick train pass: dispatching `Ready`
//!   trains onto the distance table, admitting `Arrived` trains (or parking
//!   them in a per-station FIFO buffer), and draining those buffers in
//!   strict first-arrived-first-served order.
//!
//! Both registries are immutable after construction; duplicate names and
//! unknown route endpoints are construction-time errors.  Within one tick,
//! the driver calls `TrainManager::update` and then `StationManager::update`
//! with exclusive access to the fleet, which makes every
//! check-then-place admission atomic.

pub mod distance;
pub mod error;
pub mod station_manager;
pub mod train_manager;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use distance::DistanceTable;
pub use error::{ManagerError, ManagerResult};
pub use station_manager::StationManager;
pub use train_manager::{CargoRecord, TrainManager};
