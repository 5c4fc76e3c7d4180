//! 8-bit RGB color type.
//!
//! Alpha is not stored here: stroke opacity varies per call in the link pass,
//! so the drawing surface takes `(Rgb, alpha)` pairs instead.

/// An opaque 8-bit-per-channel color.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Healthy agents.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    /// Infected agents.
    pub const GREEN: Rgb = Rgb::new(0, 128, 0);
    /// Recovered agents.
    pub const HOT_PINK: Rgb = Rgb::new(255, 105, 180);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
