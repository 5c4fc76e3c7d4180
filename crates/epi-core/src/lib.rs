//! `epi-core` — foundational types for the epidemic particle-field simulation.
//!
//! This crate is a dependency of every other `epi-*` crate.  It intentionally
//! has no `epi-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                           |
//! |-------------|----------------------------------------------------|
//! | [`ids`]     | `AgentId`                                          |
//! | [`vec2`]    | `Vec2`, Euclidean distance                         |
//! | [`color`]   | `Rgb` + the three status colors                    |
//! | [`time`]    | `SimTime` (millisecond timestamps)                 |
//! | [`rng`]     | `SimRng` (seeded, deterministic)                   |
//! | [`params`]  | `SimParams`, `Bounds`                              |
//! | [`error`]   | `CoreError`, `CoreResult`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to public value types. |

pub mod color;
pub mod error;
pub mod ids;
pub mod params;
pub mod rng;
pub mod time;
pub mod vec2;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use color::Rgb;
pub use error::{CoreError, CoreResult};
pub use ids::AgentId;
pub use params::{Bounds, SimParams};
pub use rng::SimRng;
pub use time::SimTime;
pub use vec2::Vec2;
