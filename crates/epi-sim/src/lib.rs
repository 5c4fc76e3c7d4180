//! `epi-sim` — frame loop orchestrator for the epidemic particle field.
//!
//! # Frame phases
//!
//! The host owns the run loop and calls [`Simulation::step`] once per
//! displayed frame with the current wall-clock timestamp:
//!
//! ```text
//! step(now, surface, observer):
//!   ① Recoveries — drain the deadline queue up to `now`; due agents
//!                  transition Infected → Recovered.
//!   ② Clear      — wipe the drawing surface.
//!   ③ Agents     — for every agent in collection order:
//!                    update (bounce + advance)
//!                    link   (only while infected: fading lines + transmission)
//!                    draw   (filled disc)
//!   ④ Stats      — report status counts to the observer.
//! ```
//!
//! There is no termination condition: the loop runs until the host stops
//! calling `step`.  Because the core never reads a clock or schedules its own
//! callbacks, a test harness drives it by calling `step` with synthetic
//! timestamps.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use epi_core::{Bounds, SimParams, SimTime};
//! use epi_sim::{NoopObserver, NullSurface, SimulationBuilder};
//!
//! let params = SimParams {
//!     bounds: Bounds::new(1280.0, 720.0),
//!     rng_seed: 42,
//!     ..Default::default()
//! };
//! let mut sim = SimulationBuilder::new(params).build()?;
//! sim.step(SimTime::ZERO, &mut NullSurface, &mut NoopObserver);
//! ```

pub mod agent;
pub mod builder;
pub mod error;
pub mod linker;
pub mod observer;
pub mod recovery;
pub mod sim;
pub mod surface;


pub use agent::{Agent, HealthStatus};
pub use builder::SimulationBuilder;
pub use error::{SimError, SimResult};
pub use linker::{link_alpha, link_from};
pub use observer::{FrameObserver, FrameStats, NoopObserver};
pub use recovery::RecoveryQueue;
pub use sim::Simulation;
pub use surface::{NullSurface, Surface};
