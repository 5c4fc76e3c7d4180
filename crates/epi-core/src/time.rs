//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically non-decreasing millisecond timestamp supplied by
//! the host once per frame.  The simulation never reads a system clock: all
//! scheduling (recovery deadlines) is arithmetic on `SimTime`, which keeps
//! every time-dependent behavior reproducible in tests by passing synthetic
//! timestamps.
//!
//! Using an integer millisecond as the canonical unit means deadline
//! arithmetic is exact (no floating-point drift) and comparisons are O(1).

use std::fmt;

/// An absolute simulation timestamp in milliseconds.
///
/// Stored as `u64`: at 1 ms resolution a u64 lasts ~585 million years, far
/// longer than any window stays open.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub u64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0);

    /// Return the timestamp `ms` milliseconds after `self`.
    #[inline]
    pub fn offset(self, ms: u64) -> SimTime {
        SimTime(self.0 + ms)
    }

    /// Milliseconds elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: SimTime) -> u64 {
        self.0 - earlier.0
    }

    /// Construct from fractional seconds (e.g. a host frame clock).
    /// Negative inputs clamp to zero.
    #[inline]
    pub fn from_secs_f64(secs: f64) -> SimTime {
        SimTime((secs.max(0.0) * 1000.0) as u64)
    }
}

impl std::ops::Add<u64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: u64) -> SimTime {
        SimTime(self.0 + rhs)
    }
}

impl std::ops::Sub for SimTime {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: SimTime) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}
