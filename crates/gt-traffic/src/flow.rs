//! The car-following vehicle flow controller.
//!
//! A simplified model: perception is instantaneous (no reaction-time delay)
//! and braking is a fixed rate rather than physics.  The braking rate
//! exceeds the acceleration rate, which is what keeps followers from
//! rear-ending leaders at normal spawn densities.

use gt_agent::Vehicle;
use gt_grid::{GridSpec, SignalBoard};

use crate::lane::group_lanes;

// ── FlowParams ───────────────────────────────────────────────────────────────

/// Tuning constants for the car-following model.
#[derive(Copy, Clone, Debug)]
pub struct FlowParams {
    /// A vehicle closer than this to a crossing it may not enter wants to
    /// stop.
    pub stop_distance: f32,
    /// Minimum bumper-to-bumper gap to the lane leader.
    pub min_gap: f32,
    /// Acceleration toward the target speed, units/s².
    pub accel: f32,
    /// Deceleration toward the target speed, units/s².  Larger than
    /// `accel` so stopping wins.
    pub brake: f32,
}

impl Default for FlowParams {
    fn default() -> Self {
        Self {
            stop_distance: 10.0,
            min_gap: 6.0,
            accel: 24.0,
            brake: 36.0,
        }
    }
}

// ── Controller ───────────────────────────────────────────────────────────────

/// Advance every vehicle by one tick.
///
/// Decisions are taken against the pre-step snapshot (lane order and
/// positions at tick start), then all vehicles integrate — so the outcome
/// does not depend on iteration order within the tick.
pub fn step_vehicles(
    vehicles: &mut [Vehicle],
    signals: &SignalBoard,
    grid: &GridSpec,
    params: &FlowParams,
    dt: f32,
    t: f64,
) {
    let lanes = group_lanes(vehicles, grid);

    // Decision pass: who wants to stop?
    let mut want_stop = vec![false; vehicles.len()];
    for group in lanes.values() {
        for (rank, &i) in group.iter().enumerate() {
            let v = &vehicles[i];

            // Red signal ahead?
            let cross = grid.next_crossing(v.along, v.dir);
            let dist = (cross - v.along).abs();
            if dist < params.stop_distance {
                let id = grid.crossing_for(v.axis, cross, v.lane);
                if !signals.right_of_way(v.axis, id, t) {
                    want_stop[i] = true;
                }
            }

            // Leader too close?  (rank 0 is the lane leader and has none)
            if rank > 0 {
                let leader = &vehicles[group[rank - 1]];
                let gap = (leader.along - v.along) * v.dir.sign()
                    - 0.5 * leader.length()
                    - 0.5 * v.length();
                if gap < params.min_gap {
                    want_stop[i] = true;
                }
            }
        }
    }

    // Integration pass: asymmetric approach to the target speed, then move.
    for (v, &stop) in vehicles.iter_mut().zip(&want_stop) {
        let target = if stop { 0.0 } else { v.max_speed };
        let rate = if target > v.speed { params.accel } else { -params.brake };
        v.speed = (v.speed + rate * dt).clamp(0.0, v.max_speed);
        v.along = grid.wrap(v.along + v.dir.sign() * v.speed * dt);
    }
}
