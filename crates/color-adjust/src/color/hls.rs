//! HLS color type
//!
//! Hue, lightness, saturation. Only used at the format boundary: HLS input
//! goes HLS -> RGB -> HSV, HLS output goes HSV -> RGB -> HLS.

use super::rgb::Rgb;
use super::{hue_from_rgb, scale_round, wrap_hue};

const HLS_SCALE: [f64; 3] = [360.0, 100.0, 100.0];

const ONE_THIRD: f64 = 1.0 / 3.0;
const ONE_SIXTH: f64 = 1.0 / 6.0;
const TWO_THIRDS: f64 = 2.0 / 3.0;

/// A color as hue, lightness and saturation fractions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hls {
    /// Hue fraction (0.0..=1.0)
    pub h: f64,
    /// Lightness fraction (0.0 = black, 0.5 = pure hue, 1.0 = white)
    pub l: f64,
    /// Saturation fraction (0.0..=1.0)
    pub s: f64,
}

impl Hls {
    #[inline]
    pub fn new(h: f64, l: f64, s: f64) -> Self {
        Self { h, l, s }
    }

    /// Create an Hls color from degrees and percentages (`[0..360, 0..100, 0..100]`).
    ///
    /// Lightness and saturation are clamped to 0.0..=1.0 so the m1/m2
    /// arithmetic stays finite.
    #[inline]
    pub fn from_scaled(components: [f64; 3]) -> Self {
        Self {
            h: components[0] / HLS_SCALE[0],
            l: (components[1] / HLS_SCALE[1]).clamp(0.0, 1.0),
            s: (components[2] / HLS_SCALE[2]).clamp(0.0, 1.0),
        }
    }

    /// Convert to rounded degrees and percentages.
    #[inline]
    pub fn to_scaled(self) -> [u32; 3] {
        [
            scale_round(self.h, HLS_SCALE[0]),
            scale_round(self.l, HLS_SCALE[1]),
            scale_round(self.s, HLS_SCALE[2]),
        ]
    }
}

impl From<Rgb> for Hls {
    fn from(rgb: Rgb) -> Self {
        let max = rgb.max_channel();
        let min = rgb.min_channel();
        let sum = max + min;
        let range = max - min;
        let l = sum / 2.0;

        if range == 0.0 {
            return Self::new(0.0, l, 0.0);
        }

        let s = if l <= 0.5 {
            range / sum
        } else {
            range / (2.0 - max - min)
        };

        Self::new(hue_from_rgb(rgb, max, range), l, s)
    }
}

impl From<Hls> for Rgb {
    fn from(hls: Hls) -> Self {
        let Hls { h, l, s } = hls;
        if s == 0.0 {
            return Rgb::new(l, l, l);
        }

        let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let m1 = 2.0 * l - m2;

        Rgb::new(
            hue_ramp(m1, m2, h + ONE_THIRD),
            hue_ramp(m1, m2, h),
            hue_ramp(m1, m2, h - ONE_THIRD),
        )
    }
}

/// Piecewise-linear channel intensity for a hue offset.
fn hue_ramp(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = wrap_hue(hue);
    if hue < ONE_SIXTH {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < TWO_THIRDS {
        m1 + (m2 - m1) * (TWO_THIRDS - hue) * 6.0
    } else {
        m1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rgb_close(a: Rgb, b: Rgb) {
        assert!(
            (a.r - b.r).abs() < 1e-9 && (a.g - b.g).abs() < 1e-9 && (a.b - b.b).abs() < 1e-9,
            "expected {b:?}, got {a:?}"
        );
    }

    #[test]
    fn test_pure_red_to_hls() {
        let hls = Hls::from(Rgb::new(1.0, 0.0, 0.0));
        assert_eq!(hls, Hls::new(0.0, 0.5, 1.0));
    }

    #[test]
    fn test_light_color_uses_upper_saturation_branch() {
        // l > 0.5 divides by (2 - max - min)
        let hls = Hls::from(Rgb::new(1.0, 0.5, 0.5));
        assert_eq!(hls.l, 0.75);
        assert!((hls.s - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_from_scaled_clamps_lightness_and_saturation() {
        let hls = Hls::from_scaled([90.0, 1e308, -5.0]);
        assert_eq!(hls, Hls::new(0.25, 1.0, 0.0));
    }

    #[test]
    fn test_grey_to_hls() {
        let hls = Hls::from(Rgb::new(0.3, 0.3, 0.3));
        assert_eq!(hls, Hls::new(0.0, 0.3, 0.0));
    }

    #[test]
    fn test_hls_to_rgb_primaries() {
        assert_rgb_close(Rgb::from(Hls::new(0.0, 0.5, 1.0)), Rgb::new(1.0, 0.0, 0.0));
        assert_rgb_close(
            Rgb::from(Hls::new(ONE_THIRD, 0.5, 1.0)),
            Rgb::new(0.0, 1.0, 0.0),
        );
        assert_rgb_close(
            Rgb::from(Hls::new(TWO_THIRDS, 0.5, 1.0)),
            Rgb::new(0.0, 0.0, 1.0),
        );
    }

    #[test]
    fn test_hls_round_trip_through_rgb() {
        let original = Rgb::new(0.2, 0.6, 0.9);
        let back = Rgb::from(Hls::from(original));
        assert_rgb_close(back, original);
    }

    #[test]
    fn test_scaled() {
        let hls = Hls::from_scaled([180.0, 50.0, 100.0]);
        assert_eq!(hls, Hls::new(0.5, 0.5, 1.0));
        assert_eq!(hls.to_scaled(), [180, 50, 100]);
    }
}
