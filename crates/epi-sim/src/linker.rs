//! Proximity linker — fading lines between nearby agents, plus transmission.

use epi_core::{AgentId, SimParams, SimTime};

use crate::agent::Agent;
use crate::recovery::RecoveryQueue;
use crate::surface::Surface;

/// Stroke width of every link line, in surface units.
const LINK_WIDTH: f32 = 1.0;

/// Line opacity for a pair at `distance`: 1 when coincident, linearly down
/// to 0 at `safe_distance`.
#[inline]
pub fn link_alpha(distance: f32, safe_distance: f32) -> f32 {
    (1.0 - distance / safe_distance).clamp(0.0, 1.0)
}

/// Scan the whole collection from one infected agent: stroke a faded line to
/// every agent within the safe distance, and transmit to those within the
/// infection distance.
///
/// Returns the number of new infections, each of which has had its recovery
/// deadline (`now + recovery_delay_ms`) pushed onto `recoveries`.
///
/// The scan includes `origin` itself: self-distance is 0, so the pass
/// strokes a zero-length full-alpha segment and the infection attempt is a
/// no-op.  Transmission is one-directional — only `origin` infects — and
/// infecting an already-infected or recovered agent changes nothing, so the
/// outcome is independent of evaluation order (stroke order aside).
pub fn link_from<S: Surface + ?Sized>(
    origin:     AgentId,
    agents:     &mut [Agent],
    now:        SimTime,
    params:     &SimParams,
    recoveries: &mut RecoveryQueue,
    surface:    &mut S,
) -> usize {
    let from = agents[origin.index()].pos;
    let color = agents[origin.index()].color;
    let infectious = agents[origin.index()].status.is_infected();

    let mut new_infections = 0;
    for (j, other) in agents.iter_mut().enumerate() {
        // Cheap box rejection before the square root: anything outside the
        // axis-aligned box is certainly beyond the safe distance.
        if !other.pos.within_box(from, params.safe_distance) {
            continue;
        }
        let d = from.distance(other.pos);
        if d > params.safe_distance {
            continue;
        }

        if infectious && d < params.infection_distance && other.infect() {
            recoveries.push(now.offset(params.recovery_delay_ms), AgentId(j as u32));
            new_infections += 1;
        }

        surface.stroke_line(
            from,
            other.pos,
            LINK_WIDTH,
            color,
            link_alpha(d, params.safe_distance),
        );
    }
    new_infections
}
