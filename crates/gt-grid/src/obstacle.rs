//! Static obstacle registry.
//!
//! # Spatial index
//!
//! Obstacles are circles on the ground plane, populated once at scene build
//! and queried many times per tick by the steering module (lookahead probes,
//! candidate scoring, move safety).  An R-tree (via `rstar`) over the
//! obstacle centres keeps each query local: `is_clear` searches within
//! `max_radius + margin` of the probe point and runs the exact circle test
//! only on the handful of candidates that returns.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use gt_core::Vec2;

// ── Obstacle ─────────────────────────────────────────────────────────────────

/// A circular exclusion zone (a pyramid base, a plaza, a monument).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obstacle {
    pub center: Vec2,
    /// Agents must stay at least this far from `center`.
    pub radius: f32,
}

impl Obstacle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }
}

// ── R-tree entry ─────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: the obstacle centre as a 2-D point, with the
/// radius carried alongside for the exact test.
#[derive(Clone)]
struct ObstacleEntry {
    point: [f32; 2], // [x, z]
    radius: f32,
}

impl RTreeObject for ObstacleEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for ObstacleEntry {
    /// Squared Euclidean distance to the obstacle *centre* — the radius is
    /// applied by the caller, which lets one tree serve queries at any
    /// inflation margin.
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = self.point[0] - point[0];
        let dz = self.point[1] - point[1];
        dx * dx + dz * dz
    }
}

// ── ObstacleField ────────────────────────────────────────────────────────────

/// Immutable set of circular obstacles with an R-tree index.
pub struct ObstacleField {
    tree: RTree<ObstacleEntry>,
    /// Largest radius in the set; bounds every query window.
    max_radius: f32,
    count: usize,
}

impl ObstacleField {
    /// Bulk-load the field from the scene's obstacle list.
    pub fn new(obstacles: impl IntoIterator<Item = Obstacle>) -> Self {
        let entries: Vec<ObstacleEntry> = obstacles
            .into_iter()
            .map(|o| ObstacleEntry {
                point: [o.center.x, o.center.z],
                radius: o.radius,
            })
            .collect();
        let max_radius = entries.iter().map(|e| e.radius).fold(0.0, f32::max);
        let count = entries.len();
        Self {
            tree: RTree::bulk_load(entries),
            max_radius,
            count,
        }
    }

    /// A field with no obstacles — every point is clear.
    pub fn empty() -> Self {
        Self::new(std::iter::empty())
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Is `p` outside every obstacle's exclusion zone inflated by `margin`?
    pub fn is_clear(&self, p: Vec2, margin: f32) -> bool {
        if self.count == 0 {
            return true;
        }
        let reach = self.max_radius + margin;
        let probe = [p.x, p.z];
        for entry in self.tree.locate_within_distance(probe, reach * reach) {
            let keep_out = entry.radius + margin;
            if entry.distance_2(&probe) < keep_out * keep_out {
                return false;
            }
        }
        true
    }
}
