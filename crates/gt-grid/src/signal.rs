//! Traffic-signal phase scheduling.
//!
//! # Design
//!
//! A signal's phase is never stored: it is a pure function of absolute
//! simulation time and the crossing's fixed `phase_offset`,
//!
//!   tt = (t + phase_offset) mod cycle
//!
//! partitioned into per-axis windows.  Two calls with identical arguments
//! can never disagree, and the board needs no per-tick update — the vehicle
//! and pedestrian controllers simply query it with the current time.
//!
//! # Failure policy
//!
//! A crossing with no registered offset is uncontrolled: both vehicles and
//! pedestrians pass freely.  Lookups fail open, never blocked, so a scene
//! that registers signals sparsely (or not at all) still animates.

use rustc_hash::FxHashMap;

use gt_core::Axis;

use crate::CrossingId;

// ── SignalPhase ──────────────────────────────────────────────────────────────

/// Lamp colour shown to one axis, for indicator rendering.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SignalPhase {
    Green,
    Amber,
    Red,
}

// ── SignalTiming ─────────────────────────────────────────────────────────────

/// The shared cycle split, in seconds.
///
/// Axis X holds right-of-way during `[0, green)` and amber during
/// `[green, green + amber)`; axis Z holds right-of-way for the remainder of
/// the cycle.  Amber counts as "vehicles may proceed, pedestrians must not".
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SignalTiming {
    pub cycle: f32,
    pub green: f32,
    pub amber: f32,
}

impl Default for SignalTiming {
    fn default() -> Self {
        Self { cycle: 8.0, green: 5.0, amber: 1.0 }
    }
}

impl SignalTiming {
    /// Seconds of the cycle during which axis Z proceeds.
    #[inline]
    pub fn red(&self) -> f32 {
        self.cycle - self.green - self.amber
    }

    /// Phase-local time for a crossing with the given offset.
    #[inline]
    fn local(&self, t: f64, phase_offset: f32) -> f32 {
        ((t + phase_offset as f64) % self.cycle as f64) as f32
    }
}

// ── SignalBoard ──────────────────────────────────────────────────────────────

/// Registry of signalled crossings and their phase offsets.
///
/// Populated once at scene build; read-only afterwards.
pub struct SignalBoard {
    timing: SignalTiming,
    offsets: FxHashMap<CrossingId, f32>,
}

impl SignalBoard {
    pub fn new(timing: SignalTiming) -> Self {
        Self { timing, offsets: FxHashMap::default() }
    }

    /// Register a signalled crossing.  Re-registering replaces the offset.
    pub fn register(&mut self, crossing: CrossingId, phase_offset: f32) {
        self.offsets.insert(crossing, phase_offset);
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn timing(&self) -> SignalTiming {
        self.timing
    }

    /// Iterate all registered crossings (for indicator rendering).
    pub fn crossings(&self) -> impl Iterator<Item = CrossingId> + '_ {
        self.offsets.keys().copied()
    }

    /// May vehicles travelling along `axis` proceed through `crossing` at
    /// time `t`?  Green and amber both count as yes.  Unregistered
    /// crossings are always free.
    pub fn right_of_way(&self, axis: Axis, crossing: CrossingId, t: f64) -> bool {
        let Some(&offset) = self.offsets.get(&crossing) else {
            return true;
        };
        let tt = self.timing.local(t, offset);
        match axis {
            Axis::X => tt < self.timing.green + self.timing.amber,
            Axis::Z => tt >= self.timing.green + self.timing.amber,
        }
    }

    /// May pedestrians walking along `axis` step across `crossing` at time
    /// `t`?  The complement of the vehicle claim — amber already blocks —
    /// except at unregistered crossings, which are free for everyone.
    pub fn may_cross(&self, axis: Axis, crossing: CrossingId, t: f64) -> bool {
        if !self.offsets.contains_key(&crossing) {
            return true;
        }
        !self.right_of_way(axis, crossing, t)
    }

    /// Lamp colour shown to `axis` traffic at `crossing`, or `None` for an
    /// unregistered crossing (no signal head to render).
    pub fn lamp(&self, axis: Axis, crossing: CrossingId, t: f64) -> Option<SignalPhase> {
        let &offset = self.offsets.get(&crossing)?;
        let tt = self.timing.local(t, offset);
        let split = self.timing.green + self.timing.amber;
        Some(match axis {
            Axis::X if tt < self.timing.green => SignalPhase::Green,
            Axis::X if tt < split => SignalPhase::Amber,
            Axis::X => SignalPhase::Red,
            Axis::Z if tt >= split => SignalPhase::Green,
            Axis::Z => SignalPhase::Red,
        })
    }
}
