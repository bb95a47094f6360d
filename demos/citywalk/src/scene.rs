//! Obstacle layout for the citywalk demo scene.
//!
//! A handful of circular exclusion zones standing in for the monuments and
//! plazas the real scene scatters across the open ground.  The street grid
//! itself needs no layout here — it is implied by `WorldConfig`.

use gt_core::Vec2;
use gt_grid::Obstacle;

/// Build the demo's static obstacle list.
pub fn build_obstacles() -> Vec<Obstacle> {
    vec![
        Obstacle::new(Vec2::new(220.0, 180.0), 45.0),
        Obstacle::new(Vec2::new(-340.0, 120.0), 30.0),
        Obstacle::new(Vec2::new(-120.0, -420.0), 60.0),
        Obstacle::new(Vec2::new(400.0, -250.0), 35.0),
        Obstacle::new(Vec2::new(60.0, 500.0), 25.0),
    ]
}
