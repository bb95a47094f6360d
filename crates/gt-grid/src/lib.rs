//! `gt-grid` — the static world the agents move through.
//!
//! Three read-only structures, all built once when the scene is built:
//!
//! | Module       | Contents                                             |
//! |--------------|------------------------------------------------------|
//! | [`grid`]     | `GridSpec` (wrap / snap / next-crossing), `CrossingId` |
//! | [`signal`]   | `SignalTiming`, `SignalBoard`, `SignalPhase`         |
//! | [`obstacle`] | `Obstacle`, `ObstacleField` (R-tree indexed)         |
//!
//! Nothing in this crate mutates during a tick; the controllers in
//! `gt-traffic` and `gt-roam` hold `&` references to these values while
//! mutating their own agent stores.

pub mod grid;
pub mod obstacle;
pub mod signal;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use grid::{CrossingId, GridSpec};
pub use obstacle::{Obstacle, ObstacleField};
pub use signal::{SignalBoard, SignalPhase, SignalTiming};
