//! The per-agent output record.

use gt_core::Vec2;

/// What the renderer reads once per tick for every agent: where it is and
/// which way it faces.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose {
    pub position: Vec2,
    /// Ground-plane heading in radians (0 = +x, π/2 = +z).
    pub heading: f32,
}

impl Pose {
    pub fn new(position: Vec2, heading: f32) -> Self {
        Self { position, heading }
    }
}
