//! Per-tick lane grouping.
//!
//! Vehicles sharing a line of travel — same axis, same direction, same
//! street — form a lane.  The grouping is recomputed from scratch every
//! tick: at tens of vehicles a hash-group plus an O(n log n) sort per lane
//! is far cheaper than maintaining an incremental index would be worth.

use rustc_hash::FxHashMap;

use gt_agent::Vehicle;
use gt_core::{Axis, Dir};
use gt_grid::GridSpec;

/// The tuple identifying a single line of travel.
///
/// The perpendicular coordinate is keyed by grid-line index rather than raw
/// float so the key hashes exactly (lanes sit on snapped centre-lines).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct LaneKey {
    pub axis: Axis,
    pub dir: Dir,
    pub line: i32,
}

impl LaneKey {
    pub fn of(vehicle: &Vehicle, grid: &GridSpec) -> Self {
        Self {
            axis: vehicle.axis,
            dir: vehicle.dir,
            line: grid.line_index(vehicle.lane),
        }
    }
}

/// Group vehicle indices by lane, each group sorted leader-first (greatest
/// progress along the travel direction first), so a follower's leader is
/// simply the previous element of its group.
pub fn group_lanes(vehicles: &[Vehicle], grid: &GridSpec) -> FxHashMap<LaneKey, Vec<usize>> {
    let mut lanes: FxHashMap<LaneKey, Vec<usize>> = FxHashMap::default();
    for (i, v) in vehicles.iter().enumerate() {
        lanes.entry(LaneKey::of(v, grid)).or_default().push(i);
    }
    for group in lanes.values_mut() {
        group.sort_unstable_by(|&a, &b| {
            let ka = vehicles[a].along * vehicles[a].dir.sign();
            let kb = vehicles[b].along * vehicles[b].dir.sign();
            kb.total_cmp(&ka)
        });
    }
    lanes
}
