//! Fluent builder for constructing a [`Simulation`].

use epi_core::{AgentId, SimParams, SimRng, SimTime};

use crate::agent::Agent;
use crate::recovery::RecoveryQueue;
use crate::sim::Simulation;
use crate::SimResult;

/// Validating builder for [`Simulation`].
///
/// Spawns the population from the seeded RNG and seeds the initial outbreak
/// (probability `seed_infection_rate` per agent, at `SimTime::ZERO`) through
/// [`Simulation::infect`], so every seeded agent has its recovery deadline
/// queued exactly once.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimulationBuilder::new(SimParams {
///     bounds: Bounds::new(1280.0, 720.0),
///     rng_seed: 42,
///     ..Default::default()
/// })
/// .build()?;
/// ```
pub struct SimulationBuilder {
    params: SimParams,
}

impl SimulationBuilder {
    pub fn new(params: SimParams) -> Self {
        Self { params }
    }

    /// Validate the parameters, spawn the population, and seed the outbreak.
    pub fn build(self) -> SimResult<Simulation> {
        self.params.validate()?;

        let mut rng = SimRng::new(self.params.rng_seed);
        let population = self.params.population;

        let agents: Vec<Agent> = (0..population)
            .map(|_| Agent::spawn(&self.params, &mut rng))
            .collect();

        let mut sim = Simulation {
            params: self.params,
            agents,
            recoveries: RecoveryQueue::new(),
            now: SimTime::ZERO,
        };

        // Seed the initial outbreak through the canonical infect path.
        for i in 0..population as u32 {
            if rng.gen_bool(sim.params.seed_infection_rate) {
                sim.infect(AgentId(i), SimTime::ZERO)?;
            }
        }

        Ok(sim)
    }
}
