//! `gt-agent` — the three agent populations.
//!
//! Each agent kind is a plain record type held in a homogeneous `Vec`; one
//! update function per kind lives in `gt-traffic` (vehicles, pedestrians)
//! and `gt-roam` (roamers).  There is no shared agent trait — the kinds
//! share nothing beyond "has a pose", and composition keeps each controller
//! a simple loop over its own store.
//!
//! | Module         | Contents                                 |
//! |----------------|------------------------------------------|
//! | [`pose`]       | `Pose` — the per-agent output record     |
//! | [`vehicle`]    | `Vehicle`, `VehicleKind`                 |
//! | [`pedestrian`] | `Pedestrian`                             |
//! | [`roamer`]     | `Roamer`                                 |

pub mod pedestrian;
pub mod pose;
pub mod roamer;
pub mod vehicle;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use pedestrian::Pedestrian;
pub use pose::Pose;
pub use roamer::Roamer;
pub use vehicle::{Vehicle, VehicleKind};
