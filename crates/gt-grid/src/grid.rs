//! Street-grid geometry.
//!
//! Streets are centre-lines on every multiple of `cell_size`, on both axes,
//! across a square world of side `2 * half_extent`.  The world is toroidal
//! for axis-aligned travellers: a coordinate stepping past `+half_extent`
//! re-enters at exactly `-half_extent` (and symmetrically), which recycles
//! vehicles and pedestrians forever without spawning or despawning.

use std::fmt;

use gt_core::{Axis, Dir};

// ── GridSpec ─────────────────────────────────────────────────────────────────

/// Geometry of the street grid.  Immutable once created.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSpec {
    /// Spacing between adjacent grid lines, in world units.
    pub cell_size: f32,
    /// Positions live in `[-half_extent, +half_extent]` on both axes.
    pub half_extent: f32,
}

impl GridSpec {
    pub fn new(cell_size: f32, half_extent: f32) -> Self {
        Self { cell_size, half_extent }
    }

    /// Wrap a coordinate into the toroidal world.
    ///
    /// An overflow past `+half_extent` lands on exactly `-half_extent`
    /// (and symmetrically) — the wrap is a jump to the opposite rim, not a
    /// modulo, matching how the renderer recycles meshes at the world edge.
    #[inline]
    pub fn wrap(&self, p: f32) -> f32 {
        if p > self.half_extent {
            -self.half_extent
        } else if p < -self.half_extent {
            self.half_extent
        } else {
            p
        }
    }

    /// Clamp a coordinate to `margin` units inside the world rim.
    ///
    /// Roaming agents do not wrap; they are kept away from the edge so
    /// their lookahead probes stay meaningful.
    #[inline]
    pub fn clamp_inside(&self, p: f32, margin: f32) -> f32 {
        p.clamp(-self.half_extent + margin, self.half_extent - margin)
    }

    /// The nearest grid-line coordinate.
    #[inline]
    pub fn snap(&self, p: f32) -> f32 {
        (p / self.cell_size).round() * self.cell_size
    }

    /// Coordinate of the next grid crossing at or ahead of `p` in the
    /// direction of travel.  A position exactly on a grid line is its own
    /// next crossing (distance zero).
    #[inline]
    pub fn next_crossing(&self, p: f32, dir: Dir) -> f32 {
        match dir {
            Dir::Plus => (p / self.cell_size).ceil() * self.cell_size,
            Dir::Minus => (p / self.cell_size).floor() * self.cell_size,
        }
    }

    /// Index of the grid line nearest to `p` (0 at the world centre,
    /// negative toward `-half_extent`).
    #[inline]
    pub fn line_index(&self, p: f32) -> i32 {
        (p / self.cell_size).round() as i32
    }

    /// Number of grid lines from the centre to one rim.
    #[inline]
    pub fn lines_per_side(&self) -> i32 {
        (self.half_extent / self.cell_size).floor() as i32
    }

    /// Identify the crossing a traveller is approaching: `cross` is the
    /// coordinate along its travel axis, `lane` its perpendicular
    /// coordinate (sidewalk offsets round to the nearest line).
    #[inline]
    pub fn crossing_for(&self, axis: Axis, cross: f32, lane: f32) -> CrossingId {
        match axis {
            Axis::X => CrossingId::new(self.line_index(cross), self.line_index(lane)),
            Axis::Z => CrossingId::new(self.line_index(lane), self.line_index(cross)),
        }
    }
}

// ── CrossingId ───────────────────────────────────────────────────────────────

/// Identifies an intersection by its grid-line indices on each axis.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrossingId {
    pub ix: i32,
    pub iz: i32,
}

impl CrossingId {
    #[inline]
    pub fn new(ix: i32, iz: i32) -> Self {
        Self { ix, iz }
    }
}

impl fmt::Display for CrossingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.ix, self.iz)
    }
}
