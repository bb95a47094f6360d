//! Fluent builder for constructing a [`CitySim`].

use tracing::debug;

use gt_agent::{Pedestrian, Roamer, Vehicle};
use gt_core::{AgentRng, SimRng, StepClock, WorldConfig};
use gt_grid::{CrossingId, GridSpec, Obstacle, ObstacleField, SignalBoard, SignalTiming};
use gt_roam::{SteerParams, find_safe_spot};
use gt_traffic::{CrossingParams, FlowParams};

use crate::{CitySim, SimResult};

/// Spread of the random per-crossing phase offset, in seconds.  Less than a
/// full cycle so neighbouring signals stay loosely syncopated rather than
/// uniformly random across the whole cycle.
const PHASE_OFFSET_SPREAD: f32 = 6.0;

/// Stream base for roamer RNGs, keeping them disjoint from pedestrian
/// streams at any population size.
const ROAMER_STREAM_BASE: u64 = 1 << 32;

/// Fluent builder for [`CitySim`].
///
/// # Required inputs
///
/// - [`WorldConfig`] — geometry, populations, seed.
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                  |
/// |-----------------|------------------------------------------|
/// | `.obstacles(v)` | No obstacles (roamers wander freely)     |
/// | `.timing(t)`    | 8 s cycle, 5 s green, 1 s amber          |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = CityBuilder::new(WorldConfig::default())
///     .obstacles(scene_obstacles)
///     .build()?;
/// ```
pub struct CityBuilder {
    config: WorldConfig,
    obstacles: Vec<Obstacle>,
    timing: SignalTiming,
}

impl CityBuilder {
    pub fn new(config: WorldConfig) -> Self {
        Self {
            config,
            obstacles: Vec::new(),
            timing: SignalTiming::default(),
        }
    }

    /// Supply the scene's static obstacle list (populated once at scene
    /// build; read-only afterwards).
    pub fn obstacles(mut self, obstacles: Vec<Obstacle>) -> Self {
        self.obstacles = obstacles;
        self
    }

    /// Override the signal cycle split (tests compress it; scenes keep the
    /// default).
    pub fn timing(mut self, timing: SignalTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Validate the configuration, lay out signals, and spawn all agent
    /// populations deterministically from the seed.
    pub fn build(self) -> SimResult<CitySim> {
        self.config.validate()?;
        let config = self.config;

        let grid = GridSpec::new(config.cell_size, config.half_extent);
        let mut rng = SimRng::new(config.seed);

        // ── Signals: every Nth grid line on both axes ─────────────────────
        //
        // Counted from the -half_extent rim so the pattern is stable under
        // world resizes that keep the rim on a grid line.
        let n = grid.lines_per_side();
        let every = config.signal_every as i32;
        let mut signals = SignalBoard::new(self.timing);
        for ix in -n..=n {
            if (ix + n) % every != 0 {
                continue;
            }
            for iz in -n..=n {
                if (iz + n) % every != 0 {
                    continue;
                }
                let offset = rng.random::<f32>() * PHASE_OFFSET_SPREAD;
                signals.register(CrossingId::new(ix, iz), offset);
            }
        }

        // ── Obstacles ─────────────────────────────────────────────────────
        let obstacles = ObstacleField::new(self.obstacles);

        // ── Populations ───────────────────────────────────────────────────
        let vehicles: Vec<Vehicle> = (0..config.vehicles)
            .map(|_| Vehicle::spawn(&mut rng, &grid))
            .collect();

        let pedestrians: Vec<Pedestrian> = (0..config.pedestrians)
            .map(|_| Pedestrian::spawn(&mut rng, &grid))
            .collect();
        let pedestrian_rngs: Vec<AgentRng> = (0..config.pedestrians)
            .map(|i| AgentRng::new(config.seed, i as u64))
            .collect();

        let steer = SteerParams::default();
        let roamers: Vec<Roamer> = (0..config.roamers)
            .map(|_| {
                let pos = find_safe_spot(&mut rng, &grid, &obstacles, &steer);
                Roamer::spawn(&mut rng, pos)
            })
            .collect();
        let roamer_rngs: Vec<AgentRng> = (0..config.roamers)
            .map(|i| AgentRng::new(config.seed, ROAMER_STREAM_BASE + i as u64))
            .collect();

        debug!(
            signals = signals.len(),
            obstacles = obstacles.len(),
            vehicles = vehicles.len(),
            pedestrians = pedestrians.len(),
            roamers = roamers.len(),
            "city built"
        );

        Ok(CitySim {
            clock: StepClock::new(config.max_step_secs),
            grid,
            signals,
            obstacles,
            vehicles,
            pedestrians,
            roamers,
            flow: FlowParams::default(),
            crossing: CrossingParams::default(),
            steer,
            pedestrian_rngs,
            roamer_rngs,
            enabled: true,
            config,
        })
    }
}
