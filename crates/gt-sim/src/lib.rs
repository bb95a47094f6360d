//! `gt-sim` — tick-loop orchestrator for the gridtown simulation.
//!
//! # The per-frame step
//!
//! ```text
//! CitySim::step(now_secs):
//!   ① Clock    — clamp the wall-clock delta to max_step_secs; accumulate
//!                absolute simulation time t.
//!   ② Vehicles — lane grouping, signal gating, car-following integration.
//!   ③ Walkers  — signal-complement gating, probabilistic crossing turns.
//!   ④ Roamers  — lookahead steering around the obstacle field.
//! ```
//!
//! The signal board is consulted by ② and ③ but is a pure function of `t`,
//! so the phase both controllers see within one step is identical by
//! construction.  All mutable state lives inside [`CitySim`]; the
//! controllers are free functions borrowing disjoint parts of it, and
//! nothing runs outside the single host thread.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use gt_core::WorldConfig;
//! use gt_sim::{CityBuilder, NoopObserver};
//!
//! let mut sim = CityBuilder::new(WorldConfig::default())
//!     .obstacles(obstacles)
//!     .build()?;
//! // once per rendering frame:
//! sim.step(now_secs);
//! for pose in sim.vehicle_poses() { /* hand to the renderer */ }
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::CityBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::CitySim;
