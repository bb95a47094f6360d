//! citywalk — headless demo for the gridtown city simulation.
//!
//! Drives the full simulation (vehicles, pedestrians, roamers, signals) at a
//! fixed 60 Hz cadence for a configurable number of simulated seconds,
//! records pose snapshots to CSV, and prints a small summary.  The
//! interactive scene calls `CitySim::step` from its render loop instead of
//! `run_fixed`; everything else is identical.

mod scene;

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use gt_core::{Axis, Step, WorldConfig};
use gt_grid::{CrossingId, SignalPhase};
use gt_output::{CsvWriter, OutputWriter, SimOutputObserver};
use gt_sim::{CityBuilder, SimObserver};

use scene::build_obstacles;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED: u64 = 42;
const SIM_SECS: u64 = 120;
const FRAME_SECS: f64 = 1.0 / 60.0;
const SNAPSHOT_EVERY: u64 = 30; // every half simulated second

// ── Observer wrapper to count rows ───────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner: SimOutputObserver<W>,
    pose_rows: usize,
    summary_rows: usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, pose_rows: 0, summary_rows: 0 }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_step_end(&mut self, step: Step, stepno: u64) {
        self.summary_rows += 1;
        self.inner.on_step_end(step, stepno);
    }

    fn on_snapshot(
        &mut self,
        stepno: u64,
        t: f64,
        vehicles: &[gt_agent::Vehicle],
        pedestrians: &[gt_agent::Pedestrian],
        roamers: &[gt_agent::Roamer],
    ) {
        self.pose_rows += vehicles.len() + pedestrians.len() + roamers.len();
        self.inner.on_snapshot(stepno, t, vehicles, pedestrians, roamers);
    }

    fn on_sim_end(&mut self, t: f64) {
        self.inner.on_sim_end(t);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("citywalk=info,gt_sim=debug")
        .init();

    println!("=== citywalk — gridtown city simulation ===");
    println!("Seed: {SEED}  |  Simulated: {SIM_SECS} s at 60 Hz");
    println!();

    // 1. World configuration — the reference scene's geometry and counts.
    let config = WorldConfig {
        seed: SEED,
        snapshot_every: SNAPSHOT_EVERY,
        ..WorldConfig::default()
    };

    // 2. Static obstacle field.
    let obstacles = build_obstacles();
    println!("Obstacles: {}", obstacles.len());

    // 3. Build the simulation.
    let mut sim = CityBuilder::new(config).obstacles(obstacles).build()?;
    tracing::info!(
        signals = sim.signals.len(),
        vehicles = sim.vehicles.len(),
        pedestrians = sim.pedestrians.len(),
        roamers = sim.roamers.len(),
        "scene assembled"
    );

    // 4. Set up CSV output.
    std::fs::create_dir_all("output/citywalk")?;
    let writer = CsvWriter::new(Path::new("output/citywalk"))?;
    let mut obs = CountingObserver::new(SimOutputObserver::new(writer));

    // 5. Run.
    let steps = (SIM_SECS as f64 / FRAME_SECS) as u64;
    let t0 = Instant::now();
    sim.run_fixed(steps, FRAME_SECS, &mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 6. Summary.
    println!();
    println!(
        "Simulated {:.0} s in {:.3} s wall ({:.0}x real time)",
        sim.elapsed_secs(),
        elapsed.as_secs_f64(),
        sim.elapsed_secs() / elapsed.as_secs_f64()
    );
    println!("  agent_poses.csv     : {} rows", obs.pose_rows);
    println!("  step_summaries.csv  : {} rows", obs.summary_rows);
    println!();

    // 7. Signal lamp sample.
    println!("{:<14} {:<8} {:<8}", "Crossing", "X lamp", "Z lamp");
    println!("{}", "-".repeat(32));
    for crossing in sim.signals.crossings().take(5).collect::<Vec<CrossingId>>() {
        println!(
            "{:<14} {:<8} {:<8}",
            crossing.to_string(),
            lamp_str(sim.lamp(Axis::X, crossing)),
            lamp_str(sim.lamp(Axis::Z, crossing)),
        );
    }
    println!();

    // 8. Final roamer positions.
    println!("{:<8} {:<18} {:<10}", "Roamer", "Position", "Heading");
    println!("{}", "-".repeat(38));
    for (i, pose) in sim.roamer_poses().enumerate() {
        println!("{:<8} {:<18} {:<10.2}", i, pose.position.to_string(), pose.heading);
    }

    Ok(())
}

fn lamp_str(lamp: Option<SignalPhase>) -> &'static str {
    match lamp {
        Some(SignalPhase::Green) => "green",
        Some(SignalPhase::Amber) => "amber",
        Some(SignalPhase::Red) => "red",
        None => "-",
    }
}
