//! One simulated particle: position, velocity, and infection status.

use epi_core::{Bounds, Rgb, SimParams, SimRng, Vec2};

use crate::surface::Surface;

// ── HealthStatus ──────────────────────────────────────────────────────────────

/// Infection state machine.  Transitions are forward-only:
/// `Healthy → Infected → Recovered`, with no path back.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum HealthStatus {
    #[default]
    Healthy,
    Infected,
    Recovered,
}

impl HealthStatus {
    /// The display color for this status.
    #[inline]
    pub fn color(self) -> Rgb {
        match self {
            HealthStatus::Healthy   => Rgb::WHITE,
            HealthStatus::Infected  => Rgb::GREEN,
            HealthStatus::Recovered => Rgb::HOT_PINK,
        }
    }

    #[inline]
    pub fn is_infected(self) -> bool {
        self == HealthStatus::Infected
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            HealthStatus::Healthy   => "healthy",
            HealthStatus::Infected  => "infected",
            HealthStatus::Recovered => "recovered",
        };
        f.write_str(s)
    }
}

// ── Agent ─────────────────────────────────────────────────────────────────────

/// One particle in the field.
///
/// Agents are created once at startup by the builder and never destroyed.
/// The [`Simulation`][crate::Simulation] exclusively owns the agent vector;
/// recovery deadlines live in the simulation's queue, not in the agent.
#[derive(Clone, Debug)]
pub struct Agent {
    /// Current position in canvas coordinates.
    pub pos: Vec2,

    /// Per-frame displacement.  Magnitude is fixed at spawn (0 or 1) and the
    /// direction is never re-randomized; only the sign of a component flips
    /// on a wall bounce.
    pub vel: Vec2,

    /// Disc radius, identical for every agent.
    pub radius: f32,

    /// Current display color.  Written on every status transition and kept
    /// equal to `status.color()`.
    pub color: Rgb,

    pub status: HealthStatus,
}

impl Agent {
    /// Spawn a healthy agent at a uniform-random position within the bounds.
    ///
    /// Speed is 0 with probability `stay_home_rate`, else 1.  The heading is
    /// sampled as a whole number of degrees in [0, 360) and fed unconverted
    /// into `cos`/`sin`, so directions alias mod 2π rather than covering the
    /// circle uniformly.  Converting the angle changes the look of the field;
    /// the aliased headings are the intended behavior.
    ///
    /// Outbreak seeding is not done here; the builder routes it through
    /// [`Simulation::infect`][crate::Simulation::infect] so the recovery
    /// deadline is queued exactly once.
    pub fn spawn(params: &SimParams, rng: &mut SimRng) -> Agent {
        let pos = Vec2::new(
            rng.gen_range(0.0..params.bounds.width),
            rng.gen_range(0.0..params.bounds.height),
        );
        let speed: f32 = if rng.gen_bool(params.stay_home_rate) { 0.0 } else { 1.0 };
        let heading = rng.gen_range(0u32..360) as f32;
        let vel = Vec2::new(heading.cos(), heading.sin()) * speed;

        Agent {
            pos,
            vel,
            radius: params.agent_radius,
            color: HealthStatus::Healthy.color(),
            status: HealthStatus::Healthy,
        }
    }

    /// Attempt the `Healthy → Infected` transition.
    ///
    /// Returns `true` if the transition happened; `false` (and no state
    /// change) when the agent is already infected or recovered.  The caller
    /// queues the recovery deadline on a `true` return — that split keeps
    /// "exactly one deadline per infection" a structural property.
    #[must_use]
    pub fn infect(&mut self) -> bool {
        if self.status != HealthStatus::Healthy {
            return false;
        }
        self.status = HealthStatus::Infected;
        self.color = HealthStatus::Infected.color();
        true
    }

    /// `Infected → Recovered`.  No further transitions are possible.
    pub fn recover(&mut self) {
        self.status = HealthStatus::Recovered;
        self.color = HealthStatus::Recovered.color();
    }

    /// Advance one frame: bounce off the walls, then move.
    ///
    /// The boundary check precedes the position advance — a component is
    /// negated on the frame the position is found outside the bounds, and
    /// the agent moves with the corrected velocity the same frame.
    pub fn update(&mut self, bounds: Bounds) {
        if self.pos.x > bounds.width || self.pos.x < 0.0 {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y > bounds.height || self.pos.y < 0.0 {
            self.vel.y = -self.vel.y;
        }
        self.pos += self.vel;

        // The color field is pub; re-assert while infected so a stray write
        // cannot survive past one frame.
        if self.status.is_infected() {
            self.color = HealthStatus::Infected.color();
        }
    }

    /// Render a filled disc at the current position in the current color.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_disc(self.pos, self.radius, self.color);
    }
}
