//! `gt-roam` — steering and collision avoidance for free-roaming agents.
//!
//! Roamers are the only agents not bound to the street grid: each carries a
//! continuous heading and wanders the open ground, swerving around the
//! static obstacle field.  The whole module is two free functions —
//! [`step_roamers`] for the per-tick update and [`find_safe_spot`] for
//! initial placement — plus their tuning constants in [`SteerParams`].

pub mod steer;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use steer::{SteerParams, find_safe_spot, step_roamers};
