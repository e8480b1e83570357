//! RGB color type
//!
//! Channels are stored as fractions of full intensity so the same type
//! serves both 8-bit and 16-bit inputs.

use super::scale_round;

/// A color as red, green and blue fractions.
///
/// Values are in the range 0.0..=1.0 (mapping to 0..=255 for 8-bit and
/// 0..=65535 for 16-bit channels).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    /// Red channel (0.0..=1.0)
    pub r: f64,
    /// Green channel (0.0..=1.0)
    pub g: f64,
    /// Blue channel (0.0..=1.0)
    pub b: f64,
}

impl Rgb {
    /// Create a new Rgb color from fractional channel values.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create an Rgb color from channel values on a `0..=max` scale.
    ///
    /// # Example
    /// ```
    /// use color_adjust::Rgb;
    /// let half = Rgb::from_scaled([0.0, 32767.5, 65535.0], 65535.0);
    /// assert_eq!(half.g, 0.5);
    /// ```
    #[inline]
    pub fn from_scaled(channels: [f64; 3], max: f64) -> Self {
        Self {
            r: channels[0] / max,
            g: channels[1] / max,
            b: channels[2] / max,
        }
    }

    /// Convert to integer channels on a `0..=max` scale.
    ///
    /// Rounds half-to-even.
    #[inline]
    pub fn to_scaled(self, max: f64) -> [u32; 3] {
        [
            scale_round(self.r, max),
            scale_round(self.g, max),
            scale_round(self.b, max),
        ]
    }

    /// Complement every channel (`1 - c`).
    #[inline]
    pub fn inverted(self) -> Self {
        Self {
            r: 1.0 - self.r,
            g: 1.0 - self.g,
            b: 1.0 - self.b,
        }
    }

    #[inline]
    pub(crate) fn max_channel(self) -> f64 {
        self.r.max(self.g).max(self.b)
    }

    #[inline]
    pub(crate) fn min_channel(self) -> f64 {
        self.r.min(self.g).min(self.b)
    }
}
