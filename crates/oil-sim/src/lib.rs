//! `oil-sim` — tick loop orchestrator for the oilsim simulator.
//!
//! # One tick
//!
//! ```text
//! while clock.current_unix_secs() <= config.end_unix_secs:   (inclusive)
//!   ① TrainManager::update    — dispatch Ready trains, admit Arrived
//!                               trains, drain the FIFO buffers
//!   ② StationManager::update  — mine, transfer, and dispatch per station
//!   ③ snapshot                — stations_info + trains_info handed to the
//!                               configured SnapshotSink
//!   ④ clock.advance()         — one simulated hour
//! ```
//!
//! The driver owns the fleet and both managers, threading `&mut` access
//! through each phase — one tick is a bulk-synchronous step by construction.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use oil_sim::{NoopSink, SimBuilder};
//!
//! let mut sim = SimBuilder::new(config)
//!     .terminals(terminals)
//!     .entrepots(entrepots)
//!     .trains(trains)
//!     .distances(distances)
//!     .build()?;
//! sim.run(&mut NoopSink)?;
//! ```

pub mod builder;
pub mod error;
pub mod sim;
pub mod sink;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use sim::Sim;
pub use sink::{NoopSink, SnapshotSink};
