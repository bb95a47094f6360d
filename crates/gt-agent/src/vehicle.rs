//! Vehicle records and spawning.

use gt_core::{Axis, Dir, SimRng, Vec2, axis_heading};
use gt_grid::GridSpec;

use crate::Pose;

// ── VehicleKind ──────────────────────────────────────────────────────────────

/// The three body styles in circulation, each with its own footprint and
/// speed band.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VehicleKind {
    Car,
    Bus,
    Truck,
}

impl VehicleKind {
    /// Body length along the travel axis, in world units.  Used for
    /// bumper-to-bumper gap computation.
    #[inline]
    pub fn length(self) -> f32 {
        match self {
            VehicleKind::Car => 4.0,
            VehicleKind::Bus => 9.0,
            VehicleKind::Truck => 7.0,
        }
    }

    /// Cruising-speed band in world units per second.
    #[inline]
    pub fn speed_range(self) -> (f32, f32) {
        match self {
            VehicleKind::Car => (16.0, 30.0),
            VehicleKind::Bus => (12.0, 18.0),
            VehicleKind::Truck => (10.0, 16.0),
        }
    }

    fn pick(rng: &mut SimRng) -> Self {
        match rng.gen_range(0u32..3) {
            0 => VehicleKind::Car,
            1 => VehicleKind::Bus,
            _ => VehicleKind::Truck,
        }
    }
}

// ── Vehicle ──────────────────────────────────────────────────────────────────

/// One vehicle.  Created at spawn, mutated every tick by the flow
/// controller, never destroyed — the toroidal world recycles it.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vehicle {
    pub kind: VehicleKind,
    pub axis: Axis,
    pub dir: Dir,
    /// Perpendicular coordinate — the street centre-line the vehicle drives
    /// on.  Fixed for its lifetime (no lane changing).
    pub lane: f32,
    /// Scalar position along the travel axis.
    pub along: f32,
    /// Current speed, kept in `[0, max_speed]` by the flow controller.
    pub speed: f32,
    pub max_speed: f32,
}

impl Vehicle {
    /// Spawn a vehicle on a random street at the `-half_extent` rim,
    /// rolling at 60 % of its cruising speed.
    pub fn spawn(rng: &mut SimRng, grid: &GridSpec) -> Self {
        let kind = VehicleKind::pick(rng);
        let axis = if rng.gen_bool(0.5) { Axis::X } else { Axis::Z };
        let dir = if rng.gen_bool(0.5) { Dir::Plus } else { Dir::Minus };
        let lane = grid.snap(rng.gen_range(-grid.half_extent..grid.half_extent));
        let (lo, hi) = kind.speed_range();
        let max_speed = rng.gen_range(lo..hi);
        Self {
            kind,
            axis,
            dir,
            lane,
            along: -grid.half_extent,
            speed: max_speed * 0.6,
            max_speed,
        }
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.kind.length()
    }

    /// Rendering pose; heading follows the travel direction.
    pub fn pose(&self) -> Pose {
        let position = match self.axis {
            Axis::X => Vec2::new(self.along, self.lane),
            Axis::Z => Vec2::new(self.lane, self.along),
        };
        Pose::new(position, axis_heading(self.axis, self.dir))
    }
}
