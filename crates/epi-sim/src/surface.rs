//! The drawing-surface capability consumed by the simulation.
//!
//! The core never talks to a windowing or graphics API directly: everything
//! it needs from the host is these three calls.  The app crate binds them to
//! a real 2D raster backend; tests substitute a recording implementation,
//! and [`NullSurface`] runs the simulation headless.

use epi_core::{Rgb, Vec2};

/// A 2D raster target the simulation draws one frame onto.
///
/// Implementations are stateful between calls within a frame (the frame loop
/// clears once, then issues strokes and discs); nothing persists across
/// frames.
pub trait Surface {
    /// Wipe the whole surface to the background.
    fn clear(&mut self);

    /// Stroke a straight line segment.  `alpha` is in [0, 1]; a zero-length
    /// segment (from == to) is valid and may rasterize to nothing.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgb, alpha: f32);

    /// Fill a disc of `radius` centered at `center`.
    fn fill_disc(&mut self, center: Vec2, radius: f32, color: Rgb);
}

/// A [`Surface`] that draws nothing.  Use to run the simulation headless.
pub struct NullSurface;

impl Surface for NullSurface {
    fn clear(&mut self) {}
    fn stroke_line(&mut self, _from: Vec2, _to: Vec2, _width: f32, _color: Rgb, _alpha: f32) {}
    fn fill_disc(&mut self, _center: Vec2, _radius: f32, _color: Rgb) {}
}
