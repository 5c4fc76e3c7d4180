//! Macroquad binding for the simulation's drawing-surface capability.

use epi_core::{Rgb, Vec2};
use epi_sim::Surface;
use macroquad::prelude as mq;

/// A [`Surface`] that draws onto the macroquad window.
///
/// Stateless: macroquad's immediate-mode calls carry everything per call, so
/// nothing needs restoring between strokes.
pub struct MacroquadSurface;

impl Surface for MacroquadSurface {
    fn clear(&mut self) {
        mq::clear_background(mq::BLACK);
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgb, alpha: f32) {
        mq::draw_line(from.x, from.y, to.x, to.y, width, convert(color, alpha));
    }

    fn fill_disc(&mut self, center: Vec2, radius: f32, color: Rgb) {
        mq::draw_circle(center.x, center.y, radius, convert(color, 1.0));
    }
}

#[inline]
fn convert(color: Rgb, alpha: f32) -> mq::Color {
    mq::Color::new(
        color.r as f32 / 255.0,
        color.g as f32 / 255.0,
        color.b as f32 / 255.0,
        alpha,
    )
}
