//! `oil-core` — foundational types for the `oilsim` logistics simulator.
//!
//! This crate is a dependency of every other `oil-*` crate.  It intentionally
//! has no `oil-*` dependencies and minimal external ones (only `rand` and
//! `rand_distr`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module   | Contents                                  |
//! |----------|-------------------------------------------|
//! | [`ids`]  | `TrainId`, `StationId`                    |
//! | [`time`] | `Tick`, `SimClock`, `SimConfig`           |
//! | [`rng`]  | `StationRng` (per-station deterministic)  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |
//!           | Required by `oil-config`.                           |

pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{StationId, TrainId};
pub use rng::StationRng;
pub use time::{SimClock, SimConfig, Tick};
