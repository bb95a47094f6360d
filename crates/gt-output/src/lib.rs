//! `gt-output` — simulation output recording for the gridtown simulation.
//!
//! The live scene never persists anything: the renderer reads poses straight
//! off the sim.  Recording exists for headless runs — tuning the controllers,
//! eyeballing trajectories in a plotting tool, regression-diffing two seeds.
//!
//! One backend is provided:
//!
//! | Backend | Files created                             |
//! |---------|-------------------------------------------|
//! | CSV     | `agent_poses.csv`, `step_summaries.csv`   |
//!
//! The backend implements [`OutputWriter`] and is driven by
//! [`SimOutputObserver`], which implements `gt_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use gt_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run_fixed(3600, 1.0 / 60.0, &mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AgentKind, PoseRow, StepSummaryRow};
pub use writer::OutputWriter;
