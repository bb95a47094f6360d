//! Pedestrian records and spawning.

use gt_core::{Axis, Dir, SimRng, Vec2, axis_heading};
use gt_grid::GridSpec;

use crate::Pose;

/// Distance from a street centre-line to the sidewalk a pedestrian walks
/// on.  Well under half a grid cell, so the crossing lookup still rounds to
/// the street being followed.
pub const SIDEWALK_OFFSET: f32 = 10.4;

/// Walking-speed band in world units per second.
pub const SPEED_RANGE: (f32, f32) = (1.2, 2.8);

/// One pedestrian.
///
/// Same shape as a vehicle minus the acceleration state: pedestrian speed is
/// binary-gated (full speed or stopped) each tick, so only the nominal
/// walking speed is stored.  Unlike a vehicle, `axis`, `dir`, and `lane` all
/// change when the pedestrian turns at a crossing, and the stored `heading`
/// is updated to match.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pedestrian {
    pub axis: Axis,
    pub dir: Dir,
    /// Perpendicular coordinate — the sidewalk line being walked.  Includes
    /// the sidewalk offset, so it is *near* a grid line, not on one.
    pub lane: f32,
    /// Scalar position along the travel axis.
    pub along: f32,
    /// Nominal walking speed; the crossing controller gates it to zero.
    pub speed: f32,
    /// Rendering heading, recomputed on each turn.
    pub heading: f32,
}

impl Pedestrian {
    /// Spawn a pedestrian at the upstream rim of a random sidewalk.
    pub fn spawn(rng: &mut SimRng, grid: &GridSpec) -> Self {
        let axis = if rng.gen_bool(0.5) { Axis::X } else { Axis::Z };
        let dir = if rng.gen_bool(0.5) { Dir::Plus } else { Dir::Minus };
        let side = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        let lane =
            grid.snap(rng.gen_range(-grid.half_extent..grid.half_extent)) + side * SIDEWALK_OFFSET;
        let along = match dir {
            Dir::Plus => -grid.half_extent,
            Dir::Minus => grid.half_extent,
        };
        Self {
            axis,
            dir,
            lane,
            along,
            speed: rng.gen_range(SPEED_RANGE.0..SPEED_RANGE.1),
            heading: axis_heading(axis, dir),
        }
    }

    /// Rendering pose.
    pub fn pose(&self) -> Pose {
        let position = match self.axis {
            Axis::X => Vec2::new(self.along, self.lane),
            Axis::Z => Vec2::new(self.lane, self.along),
        };
        Pose::new(position, self.heading)
    }
}
