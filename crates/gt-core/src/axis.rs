//! Travel axes and directions on the rectilinear street grid.
//!
//! Streets run along two perpendicular ground-plane axes, arbitrarily
//! labelled `X` and `Z` to match the coordinates handed to the renderer.
//! Every vehicle and pedestrian travels along exactly one axis in one of two
//! directions; roaming agents are the only free-heading agents and do not
//! use these types.

use std::f32::consts::{FRAC_PI_2, PI};
use std::fmt;

// ── Axis ─────────────────────────────────────────────────────────────────────

/// One of the two perpendicular travel axes of the street grid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    X,
    Z,
}

impl Axis {
    /// The perpendicular axis (`X` ↔ `Z`).
    #[inline]
    pub fn cross(self) -> Axis {
        match self {
            Axis::X => Axis::Z,
            Axis::Z => Axis::X,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Z => write!(f, "z"),
        }
    }
}

// ── Dir ──────────────────────────────────────────────────────────────────────

/// Direction of travel along an axis.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dir {
    /// Toward increasing coordinates.
    Plus,
    /// Toward decreasing coordinates.
    Minus,
}

impl Dir {
    /// The signed unit step for position integration: `+1.0` or `-1.0`.
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Dir::Plus => 1.0,
            Dir::Minus => -1.0,
        }
    }
}

impl fmt::Display for Dir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dir::Plus => write!(f, "+"),
            Dir::Minus => write!(f, "-"),
        }
    }
}

// ── Heading ──────────────────────────────────────────────────────────────────

/// Ground-plane heading angle in radians for an axis-aligned traveller.
///
/// Follows the convention of [`Vec2::from_heading`](crate::Vec2::from_heading):
/// 0 points along +x and angles grow toward +z.  The renderer converts this
/// to whatever mesh rotation it needs.
#[inline]
pub fn axis_heading(axis: Axis, dir: Dir) -> f32 {
    match (axis, dir) {
        (Axis::X, Dir::Plus) => 0.0,
        (Axis::X, Dir::Minus) => PI,
        (Axis::Z, Dir::Plus) => FRAC_PI_2,
        (Axis::Z, Dir::Minus) => -FRAC_PI_2,
    }
}
