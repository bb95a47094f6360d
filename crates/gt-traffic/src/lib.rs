//! `gt-traffic` — the two street-bound behavior controllers.
//!
//! Both controllers are free functions over the simulation context's own
//! stores: they take `&mut` agent slices plus `&` references to the static
//! world, and are called once per tick by the stepper.  Neither holds state
//! between ticks.
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`lane`]     | `LaneKey` and per-tick lane grouping                  |
//! | [`flow`]     | `FlowParams`, [`step_vehicles`] — car-following model |
//! | [`crossing`] | `CrossingParams`, [`step_pedestrians`]                |

pub mod crossing;
pub mod flow;
pub mod lane;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use crossing::{CrossingParams, step_pedestrians};
pub use flow::{FlowParams, step_vehicles};
pub use lane::{LaneKey, group_lanes};
