//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use gt_agent::{Pedestrian, Roamer, Vehicle};
use gt_core::Step;
use gt_sim::SimObserver;

use crate::row::{AgentKind, PoseRow, StepSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes agent poses and step summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value — the tick loop must never fail on an I/O
/// hiccup.  After the run, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer: W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after the run.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_step_end(&mut self, step: Step, stepno: u64) {
        let row = StepSummaryRow { stepno, t: step.t, dt: step.dt };
        let result = self.writer.write_step_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(
        &mut self,
        stepno: u64,
        _t: f64,
        vehicles: &[Vehicle],
        pedestrians: &[Pedestrian],
        roamers: &[Roamer],
    ) {
        let total = vehicles.len() + pedestrians.len() + roamers.len();
        let mut rows = Vec::with_capacity(total);

        for (i, v) in vehicles.iter().enumerate() {
            let pose = v.pose();
            rows.push(PoseRow {
                kind: AgentKind::Vehicle,
                agent_id: i as u32,
                stepno,
                x: pose.position.x,
                z: pose.position.z,
                heading: pose.heading,
                speed: v.speed,
            });
        }
        for (i, p) in pedestrians.iter().enumerate() {
            let pose = p.pose();
            rows.push(PoseRow {
                kind: AgentKind::Pedestrian,
                agent_id: i as u32,
                stepno,
                x: pose.position.x,
                z: pose.position.z,
                heading: pose.heading,
                speed: p.speed,
            });
        }
        for (i, r) in roamers.iter().enumerate() {
            rows.push(PoseRow {
                kind: AgentKind::Roamer,
                agent_id: i as u32,
                stepno,
                x: r.pos.x,
                z: r.pos.z,
                heading: r.heading,
                speed: r.speed,
            });
        }

        if !rows.is_empty() {
            let result = self.writer.write_poses(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _t: f64) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
