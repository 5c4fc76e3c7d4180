//! Frame observer trait for progress reporting and data collection.

use epi_core::SimTime;

/// Status counts and transition totals for one completed frame.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub healthy:   usize,
    pub infected:  usize,
    pub recovered: usize,

    /// Transmissions that happened during this frame's link pass.
    pub new_infections: usize,

    /// Recovery deadlines that came due at the start of this frame.
    pub recoveries: usize,
}

/// Callbacks invoked by [`Simulation::step`][crate::Simulation::step] at the
/// frame boundaries.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — console counter
///
/// ```rust,ignore
/// struct CountPrinter;
///
/// impl FrameObserver for CountPrinter {
///     fn on_frame_end(&mut self, now: SimTime, stats: &FrameStats) {
///         if stats.new_infections > 0 || stats.recoveries > 0 {
///             println!("{now}: {stats:?}");
///         }
///     }
/// }
/// ```
pub trait FrameObserver {
    /// Called at the very start of a frame, before recoveries are drained.
    fn on_frame_start(&mut self, _now: SimTime) {}

    /// Called after the frame's update/link/draw pass completes.
    fn on_frame_end(&mut self, _now: SimTime, _stats: &FrameStats) {}
}

/// A [`FrameObserver`] that does nothing.  Use when you need to call `step`
/// but don't want progress callbacks.
pub struct NoopObserver;

impl FrameObserver for NoopObserver {}
