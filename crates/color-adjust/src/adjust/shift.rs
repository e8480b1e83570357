//! Channel shifts and inversion over canonical HSV.

use super::operation::Operation;
use crate::color::{Hsv, Rgb};

/// The HSV channel a percentage adjustment moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Saturation,
    Value,
}

/// Add a signed fractional delta to one channel, clamping to 0.0..=1.0.
///
/// Hitting the boundary saturates silently; it never wraps around.
///
/// # Example
/// ```
/// use color_adjust::{shift, Channel, Hsv};
///
/// let grey = Hsv::new(0.0, 0.0, 0.5);
/// assert_eq!(shift(grey, Channel::Value, 0.25).v, 0.75);
/// assert_eq!(shift(grey, Channel::Value, 0.9).v, 1.0);
/// ```
#[inline]
pub fn shift(hsv: Hsv, channel: Channel, delta: f64) -> Hsv {
    match channel {
        Channel::Saturation => hsv.with_saturation(hsv.s + delta),
        Channel::Value => hsv.with_value(hsv.v + delta),
    }
}

/// Full-color inversion: complement each RGB channel and come back to HSV.
#[inline]
pub fn invert(hsv: Hsv) -> Hsv {
    Hsv::from(Rgb::from(hsv).inverted())
}

/// Apply `operation` with a percentage in (-100, 100).
///
/// Darken and desaturate are lighten and saturate with the sign flipped.
/// `percent` is ignored for [`Operation::Invert`].
pub fn apply(hsv: Hsv, operation: Operation, percent: i32) -> Hsv {
    let delta = f64::from(percent) / 100.0;
    match operation {
        Operation::Lighten => shift(hsv, Channel::Value, delta),
        Operation::Darken => shift(hsv, Channel::Value, -delta),
        Operation::Saturate => shift(hsv, Channel::Saturation, delta),
        Operation::Desaturate => shift(hsv, Channel::Saturation, -delta),
        Operation::Invert => invert(hsv),
    }
}
