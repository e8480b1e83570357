//! HSV color type, the canonical pivot for every conversion
//!
//! All five external formats convert into an [`Hsv`] and back out of it,
//! and all adjustments operate on it.

use super::rgb::Rgb;
use super::{hue_from_rgb, scale_round};

/// Scale of the external hue, saturation and value integers.
const HSV_SCALE: [f64; 3] = [360.0, 100.0, 100.0];

fn unit(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

/// A color as hue, saturation and value fractions.
///
/// Every component is kept inside 0.0..=1.0: the constructor clamps, so
/// out-of-range inputs saturate at the boundary instead of propagating.
///
/// # Components
///
/// - `h`: Hue as a fraction of a full turn (0.0 = red, 1/3 = green, 2/3 = blue)
/// - `s`: Saturation (0.0 = grey, 1.0 = fully saturated)
/// - `v`: Value (0.0 = black, 1.0 = full brightness)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    /// Hue fraction (0.0..=1.0)
    pub h: f64,
    /// Saturation fraction (0.0..=1.0)
    pub s: f64,
    /// Value fraction (0.0..=1.0)
    pub v: f64,
}

impl Hsv {
    /// Create a new Hsv color, clamping each component to 0.0..=1.0.
    /// NaN components become 0.0.
    ///
    /// # Example
    /// ```
    /// use color_adjust::Hsv;
    /// let hsv = Hsv::new(0.5, 1.4, -0.1);
    /// assert_eq!((hsv.h, hsv.s, hsv.v), (0.5, 1.0, 0.0));
    /// ```
    #[inline]
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self {
            h: unit(h),
            s: unit(s),
            v: unit(v),
        }
    }

    /// Create an Hsv color from degrees and percentages (`[0..360, 0..100, 0..100]`).
    #[inline]
    pub fn from_scaled(components: [f64; 3]) -> Self {
        Self::new(
            components[0] / HSV_SCALE[0],
            components[1] / HSV_SCALE[1],
            components[2] / HSV_SCALE[2],
        )
    }

    /// Convert to rounded degrees and percentages.
    #[inline]
    pub fn to_scaled(self) -> [u32; 3] {
        [
            scale_round(self.h, HSV_SCALE[0]),
            scale_round(self.s, HSV_SCALE[1]),
            scale_round(self.v, HSV_SCALE[2]),
        ]
    }

    /// Return a copy with the saturation replaced (and clamped).
    #[inline]
    pub fn with_saturation(self, s: f64) -> Self {
        Self::new(self.h, s, self.v)
    }

    /// Return a copy with the value replaced (and clamped).
    #[inline]
    pub fn with_value(self, v: f64) -> Self {
        Self::new(self.h, self.s, v)
    }
}

impl From<Rgb> for Hsv {
    /// Classical RGB -> HSV: value is the largest channel, saturation is
    /// the spread over the largest channel, hue comes from which channel
    /// dominates.
    fn from(rgb: Rgb) -> Self {
        let max = rgb.max_channel();
        let min = rgb.min_channel();
        let range = max - min;

        if range == 0.0 {
            return Self::new(0.0, 0.0, max);
        }

        Self::new(hue_from_rgb(rgb, max, range), range / max, max)
    }
}

impl From<Hsv> for Rgb {
    /// Classical HSV -> RGB over the six hue sectors.
    fn from(hsv: Hsv) -> Self {
        let Hsv { h, s, v } = hsv;
        if s == 0.0 {
            return Rgb::new(v, v, v);
        }

        let sector = (h * 6.0).trunc();
        let f = h * 6.0 - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        match (sector as i64).rem_euclid(6) {
            0 => Rgb::new(v, t, p),
            1 => Rgb::new(q, v, p),
            2 => Rgb::new(p, v, t),
            3 => Rgb::new(p, q, v),
            4 => Rgb::new(t, p, v),
            _ => Rgb::new(v, p, q),
        }
    }
}
