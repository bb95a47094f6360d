//! Lookahead hazard detection and lateral steering.
//!
//! # The maneuver state machine
//!
//! A roamer is either *wandering* (`avoid_timer <= 0`) or *avoiding*
//! (`avoid_timer > 0`, committed to one turn direction).  The commitment is
//! the point: re-deciding the turn side every tick while both sides look
//! similar makes agents oscillate head-on into the obstacle.  Once a side is
//! chosen, the agent keeps turning that way until the timer runs out; the
//! timer drains faster as soon as a shortened lookahead no longer sees the
//! hazard.

use gt_agent::Roamer;
use gt_core::{AgentRng, SimRng, Vec2};
use gt_grid::{GridSpec, ObstacleField};

// ── SteerParams ──────────────────────────────────────────────────────────────

/// Tuning constants for the steering module.
#[derive(Copy, Clone, Debug)]
pub struct SteerParams {
    /// How far ahead along the current heading the hazard probe looks.
    pub look_ahead: f32,
    /// Angular offset of the two candidate escape headings, radians.
    pub deflection: f32,
    /// Turn rate while a maneuver is active, radians per second.
    pub turn_rate: f32,
    /// Spacing of the free-distance probes along a candidate heading.
    pub probe_step: f32,
    /// Number of free-distance probes per candidate heading.
    pub probe_count: u32,
    /// Wander jitter amplitude, radians per second.
    pub jitter: f32,
    /// Inflation margin for the tentative-move safety test.
    pub safety_margin: f32,
    /// Base avoidance window, seconds.
    pub avoid_secs: f32,
    /// Randomized extension of the avoidance window, seconds.
    pub avoid_jitter_secs: f32,
    /// Shortened window forced by a rejected move, seconds.
    pub reject_avoid_secs: f32,
    /// Keep-out distance from the world rim.
    pub edge_margin: f32,
    /// Retry budget for the initial placement search.
    pub place_retries: u32,
}

impl Default for SteerParams {
    fn default() -> Self {
        Self {
            look_ahead: 10.0,
            deflection: 0.6,
            turn_rate: 0.9,
            probe_step: 4.0,
            probe_count: 4,
            jitter: 0.04,
            safety_margin: 2.0,
            avoid_secs: 0.6,
            avoid_jitter_secs: 0.6,
            reject_avoid_secs: 0.4,
            edge_margin: 5.0,
            place_retries: 200,
        }
    }
}

// ── Probes ───────────────────────────────────────────────────────────────────

/// Does the point `dist` ahead along `heading` land inside an obstacle?
#[inline]
fn hazard_ahead(field: &ObstacleField, pos: Vec2, heading: f32, dist: f32) -> bool {
    !field.is_clear(pos.translate(heading, dist), 0.0)
}

/// Count clear probe points at increasing distance along `heading`.
/// Higher score = more open ground that way.
fn free_score(field: &ObstacleField, pos: Vec2, heading: f32, params: &SteerParams) -> u32 {
    let mut score = 0;
    for k in 1..=params.probe_count {
        let d = params.probe_step * k as f32;
        if field.is_clear(pos.translate(heading, d), 0.0) {
            score += 1;
        }
    }
    score
}

// ── Controller ───────────────────────────────────────────────────────────────

/// Advance every roamer by one tick.
///
/// `rngs` is the per-agent RNG store, parallel to `roamers`.
pub fn step_roamers(
    roamers: &mut [Roamer],
    rngs: &mut [AgentRng],
    field: &ObstacleField,
    grid: &GridSpec,
    params: &SteerParams,
    dt: f32,
) {
    for (r, rng) in roamers.iter_mut().zip(rngs.iter_mut()) {
        // New hazard, no maneuver in progress: pick the freer side and
        // commit to it for a randomized window.
        if r.avoid_timer <= 0.0 && hazard_ahead(field, r.pos, r.heading, params.look_ahead) {
            let left = free_score(field, r.pos, r.heading + params.deflection, params);
            let right = free_score(field, r.pos, r.heading - params.deflection, params);
            r.turn_bias = if left > right { 1 } else { -1 };
            r.avoid_timer = params.avoid_secs + rng.random::<f32>() * params.avoid_jitter_secs;
        }

        if r.avoid_timer > 0.0 {
            r.heading += r.turn_bias as f32 * params.turn_rate * dt;
            r.avoid_timer -= dt;
            // hazard already cleared at a shorter lookahead: wind down faster
            if !hazard_ahead(field, r.pos, r.heading, params.look_ahead * 0.8) {
                r.avoid_timer -= 0.5 * dt;
            }
        } else {
            // natural wandering so idle paths are not perfectly straight
            r.heading += (rng.random::<f32>() - 0.5) * params.jitter * dt;
            r.turn_bias = 0;
        }

        // Tentative move; commit only if the destination is safe.
        let next = r.pos.translate(r.heading, r.speed * dt);
        if field.is_clear(next, params.safety_margin) {
            r.pos.x = grid.clamp_inside(next.x, params.edge_margin);
            r.pos.z = grid.clamp_inside(next.z, params.edge_margin);
        } else {
            // Rejected: stay put this tick, force a turn toward the current
            // bias (or a random side if none is chosen) on a short window.
            let side = if r.turn_bias != 0 {
                r.turn_bias
            } else if rng.gen_bool(0.5) {
                1
            } else {
                -1
            };
            r.turn_bias = side;
            r.heading += side as f32 * params.turn_rate * dt;
            r.avoid_timer = params.reject_avoid_secs;
        }
    }
}

// ── Placement ────────────────────────────────────────────────────────────────

/// Bounded-retry search for a spawn point outside every exclusion zone.
///
/// Samples uniformly over the world; the first clear point wins.  If the
/// budget runs out (the field covers essentially everything), falls back to
/// the world centre rather than failing — a roamer inside an obstacle
/// degrades the animation, not the tick loop.
pub fn find_safe_spot(
    rng: &mut SimRng,
    grid: &GridSpec,
    field: &ObstacleField,
    params: &SteerParams,
) -> Vec2 {
    let half = grid.half_extent;
    for _ in 0..params.place_retries {
        let p = Vec2::new(rng.gen_range(-half..half), rng.gen_range(-half..half));
        if field.is_clear(p, 0.0) {
            return p;
        }
    }
    Vec2::ZERO
}
