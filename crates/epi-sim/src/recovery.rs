//! `RecoveryQueue` — deadline queue for the infected → recovered transition.
//!
//! # Why this exists
//!
//! Each successful infection schedules exactly one future event: the agent's
//! recovery, a fixed delay later.  A fire-and-forget host timer per agent
//! could not be inspected or driven from tests.  The queue inverts that:
//! infection records a deadline, and the frame loop
//! drains every deadline that has come due at the start of each frame.
//! Recovery timing is then a pure function of the timestamps passed to
//! [`Simulation::step`][crate::Simulation::step].
//!
//! # Performance note
//!
//! `BTreeMap` gives O(log W) insert where W = number of distinct deadlines
//! enqueued.  Deadlines are spawn-time plus a fixed delay, so W never exceeds
//! the population; at ~100 agents the constant is tiny.

use std::collections::BTreeMap;

use epi_core::{AgentId, SimTime};

/// A priority queue mapping recovery deadlines → agents due at that instant.
#[derive(Default)]
pub struct RecoveryQueue {
    inner: BTreeMap<SimTime, Vec<AgentId>>,
    /// Cached total entry count for O(1) `len()`.
    total: usize,
}

impl RecoveryQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `agent` to recover at `deadline`.
    ///
    /// The simulation pushes at most one entry per agent: the infection
    /// transition is idempotent, and only a successful transition schedules.
    pub fn push(&mut self, deadline: SimTime, agent: AgentId) {
        self.inner.entry(deadline).or_default().push(agent);
        self.total += 1;
    }

    /// Remove and return every agent whose deadline is ≤ `now`, in ascending
    /// deadline order.
    ///
    /// Frame timestamps are not integer ticks, so a frame rarely lands on a
    /// deadline exactly; draining everything due keeps recoveries from being
    /// skipped when frames straddle them.
    pub fn drain_due(&mut self, now: SimTime) -> Vec<AgentId> {
        if self.next_deadline().is_none_or(|d| d > now) {
            return vec![];
        }
        // split_off keeps the strictly-later entries; what remains is due.
        let later = self.inner.split_off(&SimTime(now.0 + 1));
        let due = std::mem::replace(&mut self.inner, later);

        let agents: Vec<AgentId> = due.into_values().flatten().collect();
        self.total -= agents.len();
        agents
    }

    /// The earliest queued deadline, or `None` if the queue is empty.
    pub fn next_deadline(&self) -> Option<SimTime> {
        self.inner.keys().next().copied()
    }

    /// Total number of queued (deadline, agent) entries.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
