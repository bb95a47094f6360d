//! Top-level world configuration.
//!
//! One value describes everything the simulation needs from the scene:
//! street-grid geometry, signal density, agent population sizes, and the
//! step clamp.  The scene-building collaborator fills this in (typically
//! from its own constants) and hands it to the builder; defaults reproduce
//! the reference city scene.

use crate::{CoreError, CoreResult};

/// Parameters of the simulated world.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldConfig {
    /// Master RNG seed.  The same seed always produces the same city.
    pub seed: u64,

    /// Spacing between adjacent grid lines (street centre-lines), in world
    /// units.  Crossings sit on every multiple of this value.
    pub cell_size: f32,

    /// Half the world's side length.  Positions live in
    /// `[-half_extent, +half_extent]` on both axes and wrap toroidally.
    pub half_extent: f32,

    /// Every `signal_every`-th grid line (on both axes) carries signalled
    /// crossings; all other crossings are uncontrolled.
    pub signal_every: u32,

    /// Upper bound on a single step's delta, in seconds.  Bounds the
    /// catch-up jump after the host loop was paused.
    pub max_step_secs: f32,

    /// Population sizes.
    pub vehicles: usize,
    pub pedestrians: usize,
    pub roamers: usize,

    /// Invoke the observer's snapshot hook every N steps; 0 disables
    /// snapshots entirely.
    pub snapshot_every: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            cell_size: 80.0,
            half_extent: 800.0,
            signal_every: 4,
            max_step_secs: 0.05,
            vehicles: 40,
            pedestrians: 320,
            roamers: 12,
            snapshot_every: 0,
        }
    }
}

impl WorldConfig {
    /// Check the geometric parameters for internal consistency.
    ///
    /// Population sizes may be zero (a scene can disable any agent kind);
    /// geometry may not degenerate.
    pub fn validate(&self) -> CoreResult<()> {
        if !(self.cell_size > 0.0) {
            return Err(CoreError::Config(format!(
                "cell_size must be positive, got {}",
                self.cell_size
            )));
        }
        if self.half_extent < self.cell_size {
            return Err(CoreError::Config(format!(
                "half_extent {} is smaller than one grid cell ({})",
                self.half_extent, self.cell_size
            )));
        }
        if !(self.max_step_secs > 0.0) {
            return Err(CoreError::Config(format!(
                "max_step_secs must be positive, got {}",
                self.max_step_secs
            )));
        }
        if self.signal_every == 0 {
            return Err(CoreError::Config("signal_every must be at least 1".into()));
        }
        Ok(())
    }
}
