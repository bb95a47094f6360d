//! Wall-clock sampling for the per-frame stepper.
//!
//! # Design
//!
//! Unlike schedule-driven simulations that advance an integer tick counter,
//! this simulation is driven by the host's render loop: the collaborator
//! hands us a monotonic `now_secs` once per frame and we derive the step
//! from it.  Two rules make that robust:
//!
//! - The per-step delta is clamped to `max_step_secs`.  After the host
//!   pauses the loop (toggle off, inactive tab) the first sample would
//!   otherwise produce a huge catch-up jump; the clamp turns it into one
//!   ordinary step.
//! - Absolute simulation time is the *accumulated sum of clamped deltas*,
//!   not the raw wall clock.  Signal phases are a pure function of this
//!   time, so a pause neither skips nor replays any part of a cycle.

/// One advance of the simulation: the clamped delta and the absolute
/// simulation time at the *end* of the step.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    /// Clamped elapsed seconds since the previous sample.
    pub dt: f32,
    /// Accumulated simulation seconds.
    pub t: f64,
}

/// Converts monotonic wall-clock samples into clamped simulation steps.
///
/// Cheap to copy; holds no heap data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepClock {
    /// Upper bound on a single step's delta, in seconds.
    max_step_secs: f32,
    /// Wall-clock value of the previous sample; `None` before the first.
    last_now: Option<f64>,
    /// Accumulated simulation seconds (sum of clamped deltas).
    elapsed: f64,
    /// Number of samples taken.
    steps: u64,
}

impl StepClock {
    pub fn new(max_step_secs: f32) -> Self {
        Self {
            max_step_secs,
            last_now: None,
            elapsed: 0.0,
            steps: 0,
        }
    }

    /// Sample the host clock and produce the next [`Step`].
    ///
    /// The first sample after construction yields `dt = 0` (there is no
    /// previous instant to diff against).  A non-monotonic `now_secs` is
    /// treated the same way rather than producing a negative delta.
    pub fn sample(&mut self, now_secs: f64) -> Step {
        let dt = match self.last_now {
            None => 0.0,
            Some(prev) => (now_secs - prev).max(0.0).min(self.max_step_secs as f64) as f32,
        };
        self.last_now = Some(now_secs);
        self.elapsed += dt as f64;
        self.steps += 1;
        Step { dt, t: self.elapsed }
    }

    /// Accumulated simulation seconds.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed
    }

    /// Number of samples taken so far.
    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Wall-clock value of the most recent sample, if any.
    #[inline]
    pub fn last_now(&self) -> Option<f64> {
        self.last_now
    }

    #[inline]
    pub fn max_step_secs(&self) -> f32 {
        self.max_step_secs
    }
}
