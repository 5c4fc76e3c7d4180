//! Simulation parameters — the explicit context object.
//!
//! Every tunable lives here and is passed to whatever needs it (spawn,
//! linker, frame loop) instead of being read from ambient globals.  The
//! struct is built literally by the host at startup and never mutated after
//! construction; there is no file or environment configuration layer.

use crate::{CoreError, CoreResult, Vec2};

// ── Bounds ────────────────────────────────────────────────────────────────────

/// The canvas extent agents move and bounce within.
///
/// Captured once from the host viewport at startup; resize is not tracked.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub width:  f32,
    pub height: f32,
}

impl Bounds {
    #[inline]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// `true` if `p` lies inside (or on the edge of) the bounds.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }
}

// ── SimParams ─────────────────────────────────────────────────────────────────

/// All tunables for one simulation run.
///
/// `Default` carries the canonical constants; hosts typically override only
/// `bounds` (from the viewport) and `rng_seed`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimParams {
    /// Number of agents created at startup.  Fixed for the process lifetime.
    pub population: usize,

    /// Disc radius used when drawing every agent.
    pub agent_radius: f32,

    /// Maximum distance at which two agents are visually linked.
    pub safe_distance: f32,

    /// Maximum distance at which an infected agent transmits.
    pub infection_distance: f32,

    /// Per-agent probability of spawning already infected.
    pub seed_infection_rate: f64,

    /// Per-agent probability of zero speed ("stay at home").
    pub stay_home_rate: f64,

    /// Delay from infection to recovery, in milliseconds.
    pub recovery_delay_ms: u64,

    /// Canvas extent, captured once at startup.
    pub bounds: Bounds,

    /// Master RNG seed.  The same seed always produces the same initial field.
    pub rng_seed: u64,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            population:          100,
            agent_radius:        5.0,
            safe_distance:       130.0,
            infection_distance:  20.0,
            seed_infection_rate: 0.25,
            stay_home_rate:      0.1,
            recovery_delay_ms:   14_000,
            bounds:              Bounds::new(800.0, 600.0),
            rng_seed:            0,
        }
    }
}

impl SimParams {
    /// Check the parameter set is runnable.
    ///
    /// Rejects an empty population and degenerate bounds; everything else
    /// (rates outside [0, 1], zero radii) degrades gracefully and is left to
    /// the caller's judgment.
    pub fn validate(&self) -> CoreResult<()> {
        if self.population == 0 {
            return Err(CoreError::Config("population must be at least 1".into()));
        }
        if self.bounds.width <= 0.0 || self.bounds.height <= 0.0 {
            return Err(CoreError::Config(format!(
                "bounds must be positive, got {}x{}",
                self.bounds.width, self.bounds.height
            )));
        }
        Ok(())
    }
}
