//! Color model types and conversions between them
//!
//! Every model here stores `f64` components in the unit interval. The
//! external integer scales (0..=255, 0..=65535, 0..=360, 0..=100) only exist
//! at the edges, via `from_scaled` / `to_scaled`.
//!
//! # Color Models
//!
//! - [`Rgb`]: red, green, blue fractions
//! - [`Hsv`]: hue, saturation, value fractions (the canonical pivot)
//! - [`Hls`]: hue, lightness, saturation fractions
//!
//! # Example
//!
//! ```
//! use color_adjust::{Hsv, Rgb};
//!
//! let red = Rgb::from_scaled([255.0, 0.0, 0.0], 255.0);
//! let hsv = Hsv::from(red);
//! assert_eq!((hsv.h, hsv.s, hsv.v), (0.0, 1.0, 1.0));
//!
//! let back = Rgb::from(hsv);
//! assert_eq!(back.to_scaled(255.0), [255, 0, 0]);
//! ```

mod hls;
mod hsv;
mod rgb;

pub use hls::Hls;
pub use hsv::Hsv;
pub use rgb::Rgb;

/// Multiply a unit fraction by `max` and round half-to-even.
///
/// Negative results saturate at zero.
#[inline]
pub(crate) fn scale_round(x: f64, max: f64) -> u32 {
    (x * max).round_ties_even().max(0.0) as u32
}

/// Reduce a hue fraction into [0, 1).
#[inline]
pub(crate) fn wrap_hue(h: f64) -> f64 {
    h.rem_euclid(1.0)
}

/// Shared hue computation for the RGB -> HSV and RGB -> HLS transforms.
///
/// `max` and `range` are the largest channel and the spread between the
/// largest and smallest channel; `range` must be non-zero.
pub(crate) fn hue_from_rgb(rgb: Rgb, max: f64, range: f64) -> f64 {
    let rc = (max - rgb.r) / range;
    let gc = (max - rgb.g) / range;
    let bc = (max - rgb.b) / range;

    let h = if rgb.r == max {
        bc - gc
    } else if rgb.g == max {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };
    wrap_hue(h / 6.0)
}
