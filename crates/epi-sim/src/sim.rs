//! The `Simulation` struct and its per-frame step.

use epi_core::{AgentId, SimParams, SimTime};

use crate::agent::{Agent, HealthStatus};
use crate::linker::link_from;
use crate::observer::{FrameObserver, FrameStats};
use crate::recovery::RecoveryQueue;
use crate::surface::Surface;
use crate::{SimError, SimResult};

/// The particle-field simulation.
///
/// Owns the agent vector, the recovery deadline queue, and the last frame
/// timestamp.  The host owns the run loop and calls [`step`][Self::step]
/// once per displayed frame; the simulation never schedules itself and
/// never reads a clock.
///
/// Create via [`SimulationBuilder`][crate::SimulationBuilder].
pub struct Simulation {
    /// Immutable after construction.
    pub params: SimParams,

    /// The fixed population, indexed by `AgentId`.  Agents are never added
    /// or removed after construction.
    pub agents: Vec<Agent>,

    /// Pending infected → recovered deadlines.  Exactly one entry is pushed
    /// per successful infection.
    pub recoveries: RecoveryQueue,

    /// Timestamp of the most recent `step` call.
    pub now: SimTime,
}

impl Simulation {
    // ── Public API ────────────────────────────────────────────────────────

    /// Advance one frame at timestamp `now`.
    ///
    /// Callers pass a monotonically non-decreasing timestamp; frame pacing
    /// is entirely the host's concern.  Phases:
    ///
    /// 1. recover every agent whose deadline is ≤ `now`;
    /// 2. clear the surface;
    /// 3. for every agent in collection order: update, link while infected,
    ///    draw.  Status writes land immediately, so an agent infected early
    ///    in the pass links (and can transmit) later in the same pass;
    /// 4. report [`FrameStats`] to the observer.
    pub fn step<S, O>(&mut self, now: SimTime, surface: &mut S, observer: &mut O)
    where
        S: Surface + ?Sized,
        O: FrameObserver,
    {
        observer.on_frame_start(now);
        self.now = now;

        // ── Phase 1: due recoveries ───────────────────────────────────────
        let due = self.recoveries.drain_due(now);
        for &id in &due {
            self.agents[id.index()].recover();
        }

        // ── Phase 2: clear ────────────────────────────────────────────────
        surface.clear();

        // ── Phase 3: update, link, draw ───────────────────────────────────
        let bounds = self.params.bounds;
        let mut new_infections = 0;
        for i in 0..self.agents.len() {
            self.agents[i].update(bounds);

            if self.agents[i].status.is_infected() {
                new_infections += link_from(
                    AgentId(i as u32),
                    &mut self.agents,
                    now,
                    &self.params,
                    &mut self.recoveries,
                    surface,
                );
            }

            self.agents[i].draw(surface);
        }

        // ── Phase 4: stats ────────────────────────────────────────────────
        let stats = self.frame_stats(new_infections, due.len());
        observer.on_frame_end(now, &stats);
    }

    /// Infect one agent through the canonical transition path.
    ///
    /// Used by the builder for outbreak seeding and by hosts or tests to set
    /// up scenarios.  A no-op on an already-infected or recovered agent; on
    /// a successful transition the recovery deadline
    /// `now + recovery_delay_ms` is queued.
    pub fn infect(&mut self, agent: AgentId, now: SimTime) -> SimResult<()> {
        let population = self.agents.len();
        let a = self
            .agents
            .get_mut(agent.index())
            .ok_or(SimError::AgentNotFound { id: agent, population })?;

        if a.infect() {
            self.recoveries
                .push(now.offset(self.params.recovery_delay_ms), agent);
        }
        Ok(())
    }

    /// Current (healthy, infected, recovered) counts.
    pub fn counts(&self) -> (usize, usize, usize) {
        let mut counts = (0, 0, 0);
        for agent in &self.agents {
            match agent.status {
                HealthStatus::Healthy   => counts.0 += 1,
                HealthStatus::Infected  => counts.1 += 1,
                HealthStatus::Recovered => counts.2 += 1,
            }
        }
        counts
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn frame_stats(&self, new_infections: usize, recoveries: usize) -> FrameStats {
        let (healthy, infected, recovered) = self.counts();
        FrameStats {
            healthy,
            infected,
            recovered,
            new_infections,
            recoveries,
        }
    }
}
