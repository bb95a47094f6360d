//! Simulation observer trait for progress reporting and data collection.

use gt_agent::{Pedestrian, Roamer, Vehicle};
use gt_core::Step;

/// Callbacks invoked by [`CitySim::step`][crate::CitySim::step] around each
/// tick.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Observer methods return nothing: the
/// tick loop must never fail, so observers that can error (file writers)
/// store their errors internally and surface them after the run.
pub trait SimObserver {
    /// Called after the clock sample, before any controller runs.
    fn on_step_start(&mut self, _step: Step) {}

    /// Called after all three controllers have run.
    ///
    /// `stepno` counts clock samples from simulation start.
    fn on_step_end(&mut self, _step: Step, _stepno: u64) {}

    /// Called every `config.snapshot_every` steps (never when 0) with
    /// read-only access to all three agent stores.
    fn on_snapshot(
        &mut self,
        _stepno: u64,
        _t: f64,
        _vehicles: &[Vehicle],
        _pedestrians: &[Pedestrian],
        _roamers: &[Roamer],
    ) {
    }

    /// Called once by [`run_fixed`][crate::CitySim::run_fixed] after its
    /// final step (per-frame hosts simply stop calling `step`).
    fn on_sim_end(&mut self, _t: f64) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to drive the sim
/// but don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
