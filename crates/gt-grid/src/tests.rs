//! Unit tests for grid geometry, signal scheduling, and the obstacle field.

#[cfg(test)]
mod grid {
    use gt_core::{Axis, Dir};

    use crate::{CrossingId, GridSpec};

    fn spec() -> GridSpec {
        GridSpec::new(80.0, 800.0)
    }

    #[test]
    fn wrap_maps_overflow_to_opposite_rim() {
        let g = spec();
        assert_eq!(g.wrap(800.5), -800.0);
        assert_eq!(g.wrap(-801.0), 800.0);
        assert_eq!(g.wrap(799.0), 799.0);
        // the rim itself is inside the world
        assert_eq!(g.wrap(800.0), 800.0);
    }

    #[test]
    fn snap_rounds_to_nearest_line() {
        let g = spec();
        assert_eq!(g.snap(79.0), 80.0);
        assert_eq!(g.snap(-119.0), -80.0);
        assert_eq!(g.snap(40.1), 80.0);
        assert_eq!(g.snap(39.9), 0.0);
    }

    #[test]
    fn next_crossing_respects_direction() {
        let g = spec();
        assert_eq!(g.next_crossing(10.0, Dir::Plus), 80.0);
        assert_eq!(g.next_crossing(10.0, Dir::Minus), 0.0);
        assert_eq!(g.next_crossing(-10.0, Dir::Plus), 0.0);
        assert_eq!(g.next_crossing(-10.0, Dir::Minus), -80.0);
        // exactly on a line: the line is its own next crossing both ways
        assert_eq!(g.next_crossing(160.0, Dir::Plus), 160.0);
        assert_eq!(g.next_crossing(160.0, Dir::Minus), 160.0);
    }

    #[test]
    fn crossing_for_swaps_axes() {
        let g = spec();
        // X traveller: cross coordinate is x, lane is z
        assert_eq!(g.crossing_for(Axis::X, 160.0, -80.0), CrossingId::new(2, -1));
        // Z traveller: cross coordinate is z, lane is x
        assert_eq!(g.crossing_for(Axis::Z, 160.0, -80.0), CrossingId::new(-1, 2));
    }

    #[test]
    fn sidewalk_offset_rounds_to_lane_line() {
        let g = spec();
        // pedestrians walk 10.4 units off the centre-line; the crossing
        // lookup still resolves to the street they follow
        assert_eq!(g.line_index(80.0 + 10.4), 1);
        assert_eq!(g.line_index(80.0 - 10.4), 1);
    }

    #[test]
    fn clamp_inside_keeps_edge_margin() {
        let g = spec();
        assert_eq!(g.clamp_inside(900.0, 5.0), 795.0);
        assert_eq!(g.clamp_inside(-900.0, 5.0), -795.0);
        assert_eq!(g.clamp_inside(0.0, 5.0), 0.0);
    }
}

#[cfg(test)]
mod signal {
    use gt_core::Axis;

    use crate::{CrossingId, SignalBoard, SignalPhase, SignalTiming};

    fn board_with(offset: f32) -> (SignalBoard, CrossingId) {
        let mut board = SignalBoard::new(SignalTiming::default());
        let id = CrossingId::new(0, 0);
        board.register(id, offset);
        (board, id)
    }

    #[test]
    fn reference_cycle_windows() {
        // cycle 8, green 5, amber 1, offset 0:
        // t = 0   → X proceeds
        // t = 5.5 → amber (X still proceeds, pedestrians blocked)
        // t = 6.5 → Z proceeds
        let (board, id) = board_with(0.0);

        assert!(board.right_of_way(Axis::X, id, 0.0));
        assert!(!board.right_of_way(Axis::Z, id, 0.0));

        assert!(board.right_of_way(Axis::X, id, 5.5));
        assert_eq!(board.lamp(Axis::X, id, 5.5), Some(SignalPhase::Amber));
        assert!(!board.may_cross(Axis::X, id, 5.5));

        assert!(board.right_of_way(Axis::Z, id, 6.5));
        assert!(!board.right_of_way(Axis::X, id, 6.5));
    }

    #[test]
    fn axes_are_mutually_exclusive() {
        let (board, id) = board_with(0.0);
        for i in 0..800 {
            let t = i as f64 * 0.01;
            let x = board.right_of_way(Axis::X, id, t);
            let z = board.right_of_way(Axis::Z, id, t);
            assert_ne!(x, z, "both axes claimed the crossing at t = {t}");
        }
    }

    #[test]
    fn phase_is_periodic() {
        let (board, id) = board_with(2.5);
        let cycle = board.timing().cycle as f64;
        for i in 0..100 {
            let t = i as f64 * 0.37;
            assert_eq!(
                board.right_of_way(Axis::X, id, t),
                board.right_of_way(Axis::X, id, t + cycle),
            );
            assert_eq!(
                board.lamp(Axis::Z, id, t),
                board.lamp(Axis::Z, id, t + cycle),
            );
        }
    }

    #[test]
    fn phase_offset_shifts_the_cycle() {
        let (board, id) = board_with(6.0);
        // local phase at t = 0 is 6.0 → inside the Z window
        assert!(board.right_of_way(Axis::Z, id, 0.0));
        // at t = 2 the cycle wraps back to the X window
        assert!(board.right_of_way(Axis::X, id, 2.0));
    }

    #[test]
    fn unregistered_crossing_fails_open() {
        let board = SignalBoard::new(SignalTiming::default());
        let id = CrossingId::new(3, -2);
        for i in 0..20 {
            let t = i as f64 * 0.5;
            assert!(board.right_of_way(Axis::X, id, t));
            assert!(board.right_of_way(Axis::Z, id, t));
            assert!(board.may_cross(Axis::X, id, t));
            assert!(board.may_cross(Axis::Z, id, t));
        }
        assert_eq!(board.lamp(Axis::X, id, 0.0), None);
    }

    #[test]
    fn pedestrian_gate_is_complement_of_vehicle_claim() {
        let (board, id) = board_with(0.0);
        for i in 0..800 {
            let t = i as f64 * 0.01;
            for axis in [Axis::X, Axis::Z] {
                assert_eq!(
                    board.may_cross(axis, id, t),
                    !board.right_of_way(axis, id, t),
                );
            }
        }
    }

    #[test]
    fn lamp_windows_per_axis() {
        let (board, id) = board_with(0.0);
        assert_eq!(board.lamp(Axis::X, id, 0.0), Some(SignalPhase::Green));
        assert_eq!(board.lamp(Axis::X, id, 4.9), Some(SignalPhase::Green));
        assert_eq!(board.lamp(Axis::X, id, 5.2), Some(SignalPhase::Amber));
        assert_eq!(board.lamp(Axis::X, id, 7.0), Some(SignalPhase::Red));
        assert_eq!(board.lamp(Axis::Z, id, 1.0), Some(SignalPhase::Red));
        assert_eq!(board.lamp(Axis::Z, id, 6.5), Some(SignalPhase::Green));
    }
}

#[cfg(test)]
mod obstacle {
    use gt_core::Vec2;

    use crate::{Obstacle, ObstacleField};

    fn field() -> ObstacleField {
        ObstacleField::new([
            Obstacle::new(Vec2::new(0.0, 0.0), 10.0),
            Obstacle::new(Vec2::new(100.0, 0.0), 20.0),
        ])
    }

    #[test]
    fn empty_field_is_everywhere_clear() {
        let f = ObstacleField::empty();
        assert!(f.is_clear(Vec2::ZERO, 0.0));
        assert!(f.is_clear(Vec2::new(1e6, -1e6), 50.0));
    }

    #[test]
    fn inside_and_outside() {
        let f = field();
        assert!(!f.is_clear(Vec2::new(5.0, 0.0), 0.0));
        assert!(f.is_clear(Vec2::new(15.0, 0.0), 0.0));
        assert!(!f.is_clear(Vec2::new(90.0, 0.0), 0.0)); // big obstacle
    }

    #[test]
    fn margin_inflates_every_zone() {
        let f = field();
        // 12 units out is clear at margin 0 but inside at margin 5
        assert!(f.is_clear(Vec2::new(12.0, 0.0), 0.0));
        assert!(!f.is_clear(Vec2::new(12.0, 0.0), 5.0));
    }

    #[test]
    fn boundary_is_clear() {
        let f = field();
        // exactly on the exclusion radius counts as outside
        assert!(f.is_clear(Vec2::new(10.0, 0.0), 0.0));
    }

    #[test]
    fn per_obstacle_radii_respected() {
        let f = field();
        // 14 units from the small obstacle: clear; 14 from the big one: not
        assert!(f.is_clear(Vec2::new(0.0, 14.0), 0.0));
        assert!(!f.is_clear(Vec2::new(100.0, 14.0), 0.0));
    }
}
