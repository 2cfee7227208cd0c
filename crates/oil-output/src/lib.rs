//! `oil-output` — snapshot sinks for the oilsim simulator.
//!
//! Three backends implement `oil_sim::SnapshotSink`:
//!
//! | Backend        | Feature  | Output                                                                   |
//! |----------------|----------|--------------------------------------------------------------------------|
//! | [`ConsoleSink`]| *(none)* | human-readable per-tick report on stdout                                 |
//! | [`CsvSink`]    | *(none)* | `terminal_snapshots.csv`, `entrepot_snapshots.csv`, `cargo_episodes.csv` |
//! | [`SqliteSink`] | `sqlite` | `output.db`                                                              |
//!
//! Sink methods are infallible from the driver's perspective — the
//! file-backed sinks store their first write error internally; check with
//! `take_error()` after the run:
//!
//! ```rust,ignore
//! use oil_output::CsvSink;
//!
//! let mut sink = CsvSink::new(Path::new("./output"))?;
//! sim.run(&mut sink)?;
//! if let Some(e) = sink.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod console;
pub mod csv;
pub mod error;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use console::ConsoleSink;
pub use csv::CsvSink;
pub use error::{OutputError, OutputResult};

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteSink;
