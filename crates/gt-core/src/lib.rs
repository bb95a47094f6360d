//! `gt-core` — foundational types for the `gridtown` city simulation.
//!
//! This crate is a dependency of every other `gt-*` crate.  It intentionally
//! has no `gt-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                            |
//! |-------------|-----------------------------------------------------|
//! | [`axis`]    | `Axis`, `Dir`, axis-aligned heading helpers         |
//! | [`vec2`]    | `Vec2` ground-plane coordinate                      |
//! | [`ids`]     | `VehicleId`, `PedestrianId`, `RoamerId`             |
//! | [`time`]    | `StepClock`, `Step`                                 |
//! | [`rng`]     | `AgentRng` (per-agent), `SimRng` (global)           |
//! | [`config`]  | `WorldConfig`                                       |
//! | [`error`]   | `CoreError`, `CoreResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                   |
//! |---------|----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.      |

pub mod axis;
pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;
pub mod vec2;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use axis::{Axis, Dir, axis_heading};
pub use config::WorldConfig;
pub use error::{CoreError, CoreResult};
pub use ids::{PedestrianId, RoamerId, VehicleId};
pub use rng::{AgentRng, SimRng};
pub use time::{Step, StepClock};
pub use vec2::Vec2;
