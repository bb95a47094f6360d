//! Roaming-agent records and spawning.

use std::f32::consts::TAU;

use gt_core::{SimRng, Vec2};

use crate::Pose;

/// Ambling-speed band in world units per second.
pub const SPEED_RANGE: (f32, f32) = (12.0, 16.0);

/// A free-heading agent wandering the open ground between obstacles.
///
/// Unlike vehicles and pedestrians, a roamer is not bound to the street
/// grid: it carries a continuous heading and is steered by the
/// collision-avoidance module in `gt-roam`.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roamer {
    pub pos: Vec2,
    /// Ground-plane heading in radians.
    pub heading: f32,
    pub speed: f32,
    /// Committed turn direction while avoiding: -1, 0 (none), or +1.
    pub turn_bias: i8,
    /// Seconds remaining in the current avoidance maneuver; ≤ 0 when
    /// wandering freely.
    pub avoid_timer: f32,
}

impl Roamer {
    /// Spawn at `pos` (already verified safe by the placement search) with a
    /// random heading.
    pub fn spawn(rng: &mut SimRng, pos: Vec2) -> Self {
        Self {
            pos,
            heading: rng.gen_range(0.0..TAU),
            speed: rng.gen_range(SPEED_RANGE.0..SPEED_RANGE.1),
            turn_bias: 0,
            avoid_timer: 0.0,
        }
    }

    /// Rendering pose.
    pub fn pose(&self) -> Pose {
        Pose::new(self.pos, self.heading)
    }
}
