//! The `CitySim` context and its per-frame step.

use tracing::trace;

use gt_agent::{Pedestrian, Pose, Roamer, Vehicle};
use gt_core::{AgentRng, Axis, Step, StepClock, WorldConfig};
use gt_grid::{CrossingId, GridSpec, ObstacleField, SignalBoard, SignalPhase};
use gt_roam::SteerParams;
use gt_traffic::{CrossingParams, FlowParams};

use crate::SimObserver;

/// The whole simulation in one value.
///
/// Owns every entity collection and the static world; all mutation happens
/// inside [`step`][Self::step], called once per rendering frame from the
/// host's single thread.  Controllers receive disjoint borrows of these
/// fields, so there is no shared hidden state and no locking.
///
/// Create via [`CityBuilder`][crate::CityBuilder].
pub struct CitySim {
    /// World parameters the sim was built from.
    pub config: WorldConfig,

    /// Wall-clock sampling; owns absolute simulation time.
    pub clock: StepClock,

    // ── Static world (read-only after build) ──────────────────────────────
    pub grid: GridSpec,
    pub signals: SignalBoard,
    pub obstacles: ObstacleField,

    // ── Agent stores ──────────────────────────────────────────────────────
    pub vehicles: Vec<Vehicle>,
    pub pedestrians: Vec<Pedestrian>,
    pub roamers: Vec<Roamer>,

    // ── Controller tuning (defaults match the reference scene) ────────────
    pub flow: FlowParams,
    pub crossing: CrossingParams,
    pub steer: SteerParams,

    /// Per-agent RNG stores, parallel to `pedestrians` / `roamers`.
    pub(crate) pedestrian_rngs: Vec<AgentRng>,
    pub(crate) roamer_rngs: Vec<AgentRng>,

    pub(crate) enabled: bool,
}

impl CitySim {
    // ── Toggling ──────────────────────────────────────────────────────────

    /// Enable or disable the simulation.
    ///
    /// Disabling merely makes [`step`][Self::step] a no-op; every agent
    /// keeps its exact state and resumes from it.  The step clamp absorbs
    /// the wall-clock gap on resume.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Advance the simulation by one frame.
    ///
    /// `now_secs` is the host's monotonic clock.  Returns the step actually
    /// taken, or `None` while the simulation is toggled off.
    pub fn step(&mut self, now_secs: f64) -> Option<Step> {
        self.step_with(now_secs, &mut crate::NoopObserver)
    }

    /// [`step`][Self::step] with observer callbacks.
    pub fn step_with<O: SimObserver>(&mut self, now_secs: f64, observer: &mut O) -> Option<Step> {
        if !self.enabled {
            return None;
        }

        let step = self.clock.sample(now_secs);
        observer.on_step_start(step);
        trace!(dt = step.dt, t = step.t, "step");

        // Fixed controller order; ② and ③ both read the signal board as a
        // pure function of `step.t`, so the order between them is cosmetic.
        gt_traffic::step_vehicles(
            &mut self.vehicles,
            &self.signals,
            &self.grid,
            &self.flow,
            step.dt,
            step.t,
        );
        gt_traffic::step_pedestrians(
            &mut self.pedestrians,
            &mut self.pedestrian_rngs,
            &self.signals,
            &self.grid,
            &self.crossing,
            step.dt,
            step.t,
        );
        gt_roam::step_roamers(
            &mut self.roamers,
            &mut self.roamer_rngs,
            &self.obstacles,
            &self.grid,
            &self.steer,
            step.dt,
        );

        let stepno = self.clock.steps();
        observer.on_step_end(step, stepno);
        if self.config.snapshot_every > 0 && stepno.is_multiple_of(self.config.snapshot_every) {
            observer.on_snapshot(stepno, step.t, &self.vehicles, &self.pedestrians, &self.roamers);
        }

        Some(step)
    }

    /// Drive `steps` frames at a fixed cadence of `step_secs` per frame.
    ///
    /// A convenience for tests and headless runs; interactive hosts call
    /// [`step`][Self::step] from their own render loop instead.  Calls
    /// `on_sim_end` after the final step.
    pub fn run_fixed<O: SimObserver>(&mut self, steps: u64, step_secs: f64, observer: &mut O) {
        let mut now = self.clock.last_now().unwrap_or(0.0);
        for _ in 0..steps {
            now += step_secs;
            self.step_with(now, observer);
        }
        observer.on_sim_end(self.clock.elapsed_secs());
    }

    // ── Outputs ───────────────────────────────────────────────────────────

    /// Accumulated simulation seconds.
    pub fn elapsed_secs(&self) -> f64 {
        self.clock.elapsed_secs()
    }

    /// Rendering poses for all vehicles, in store order.
    pub fn vehicle_poses(&self) -> impl Iterator<Item = Pose> + '_ {
        self.vehicles.iter().map(Vehicle::pose)
    }

    /// Rendering poses for all pedestrians, in store order.
    pub fn pedestrian_poses(&self) -> impl Iterator<Item = Pose> + '_ {
        self.pedestrians.iter().map(Pedestrian::pose)
    }

    /// Rendering poses for all roamers, in store order.
    pub fn roamer_poses(&self) -> impl Iterator<Item = Pose> + '_ {
        self.roamers.iter().map(Roamer::pose)
    }

    /// Lamp colour shown to `axis` traffic at `crossing` right now, for
    /// indicator rendering.  `None` for unsignalized crossings.
    pub fn lamp(&self, axis: Axis, crossing: CrossingId) -> Option<SignalPhase> {
        self.signals.lamp(axis, crossing, self.clock.elapsed_secs())
    }
}
