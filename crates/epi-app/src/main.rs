//! epi-app — windowed host for the epidemic particle field.
//!
//! Owns the run loop: macroquad paces the frames, and each frame passes the
//! wall-clock timestamp into [`Simulation::step`].  All simulation logic
//! lives in `epi-sim`; this binary only binds the drawing surface and prints
//! status-count changes to the console.

mod surface;

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use macroquad::prelude::{get_time, next_frame, screen_height, screen_width, Conf};

use epi_core::{Bounds, SimParams, SimTime};
use epi_sim::{FrameObserver, FrameStats, SimulationBuilder};

use surface::MacroquadSurface;

// ── Window ────────────────────────────────────────────────────────────────────

const WINDOW_WIDTH:  i32 = 1280;
const WINDOW_HEIGHT: i32 = 720;

fn window_conf() -> Conf {
    Conf {
        window_title: "particle field".to_owned(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        ..Default::default()
    }
}

// ── Console observer ──────────────────────────────────────────────────────────

/// Prints one line whenever the status counts change.
#[derive(Default)]
struct ConsoleObserver {
    last: Option<FrameStats>,
}

impl FrameObserver for ConsoleObserver {
    fn on_frame_end(&mut self, now: SimTime, stats: &FrameStats) {
        let changed = self.last.is_none_or(|prev| {
            (prev.healthy, prev.infected, prev.recovered)
                != (stats.healthy, stats.infected, stats.recovered)
        });
        if changed {
            println!(
                "[{now}] healthy {:>3}  infected {:>3}  recovered {:>3}",
                stats.healthy, stats.infected, stats.recovered
            );
        }
        self.last = Some(*stats);
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[macroquad::main(window_conf)]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("fatal: {err:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Viewport dimensions are captured once; resize is not tracked.
    let params = SimParams {
        bounds: Bounds::new(screen_width(), screen_height()),
        rng_seed: wall_clock_seed()?,
        ..Default::default()
    };

    let mut sim = SimulationBuilder::new(params).build()?;
    let mut surface = MacroquadSurface;
    let mut observer = ConsoleObserver::default();

    loop {
        let now = SimTime::from_secs_f64(get_time());
        sim.step(now, &mut surface, &mut observer);
        next_frame().await;
    }
}

/// A fresh seed per launch so every run shows a different field.
fn wall_clock_seed() -> Result<u64> {
    let since_epoch = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock before Unix epoch")?;
    Ok(since_epoch.as_millis() as u64)
}
