//! The pedestrian crossing controller.
//!
//! Pedestrians yield whenever vehicles hold any claim on a crossing (green
//! or amber).  There is no gap enforcement between pedestrians — they may
//! overlap, which reads fine at sidewalk densities.

use gt_agent::Pedestrian;
use gt_core::{AgentRng, Dir, axis_heading};
use gt_grid::{GridSpec, SignalBoard};

// ── CrossingParams ───────────────────────────────────────────────────────────

/// Tuning constants for pedestrian crossing behavior.
#[derive(Copy, Clone, Debug)]
pub struct CrossingParams {
    /// A pedestrian closer than this to a crossing it may not enter stops.
    pub stop_distance: f32,
    /// Within this distance of a crossing a turn may trigger.
    pub turn_distance: f32,
    /// Per-tick probability of turning when at a crossing and free to move.
    pub turn_chance: f64,
}

impl Default for CrossingParams {
    fn default() -> Self {
        Self {
            stop_distance: 3.0,
            turn_distance: 0.6,
            turn_chance: 0.25,
        }
    }
}

// ── Controller ───────────────────────────────────────────────────────────────

/// Advance every pedestrian by one tick.
///
/// `rngs` is the per-agent RNG store, parallel to `pedestrians`; turn
/// decisions draw from each pedestrian's own stream so they replay exactly
/// under the same seed.
pub fn step_pedestrians(
    pedestrians: &mut [Pedestrian],
    rngs: &mut [AgentRng],
    signals: &SignalBoard,
    grid: &GridSpec,
    params: &CrossingParams,
    dt: f32,
    t: f64,
) {
    for (p, rng) in pedestrians.iter_mut().zip(rngs.iter_mut()) {
        let cross = grid.next_crossing(p.along, p.dir);
        let dist = (cross - p.along).abs();
        let id = grid.crossing_for(p.axis, cross, p.lane);

        // Binary gate: full stride or standing still.
        let blocked = dist < params.stop_distance && !signals.may_cross(p.axis, id, t);
        if !blocked {
            p.along = grid.wrap(p.along + p.dir.sign() * p.speed * dt);
        }

        // Probabilistic turn onto the crossing street.  Permitted while
        // still mid-approach — a pedestrian may turn away from a crossing
        // rather than wait at it, which keeps crowds from freezing.
        if dist < params.turn_distance && !blocked && rng.gen_bool(params.turn_chance) {
            turn(p, rng, grid);
        }
    }
}

/// Pivot a pedestrian onto the perpendicular street.
///
/// The old along-coordinate becomes the new perpendicular one, snapped to
/// the grid line so the pedestrian stays aligned with the crosswalk; the
/// old sidewalk line becomes the new along-coordinate.
fn turn(p: &mut Pedestrian, rng: &mut AgentRng, grid: &GridSpec) {
    p.axis = p.axis.cross();
    p.dir = if rng.gen_bool(0.5) { Dir::Plus } else { Dir::Minus };
    let new_along = p.lane;
    p.lane = grid.snap(p.along);
    p.along = new_along;
    p.heading = axis_heading(p.axis, p.dir);
}
