//! One-call entry points.
//!
//! Each takes the color, the percentage (except [`invert`]), an input
//! format tag (empty string to infer) and an output format tag.

use super::error::AdjustError;
use super::request::AdjustmentRequest;
use crate::adjust::Operation;
use crate::format::{ColorValue, RawColor};

fn run(
    operation: Operation,
    color: RawColor,
    percent: i32,
    input_format: &str,
    output_format: &str,
) -> Result<ColorValue, AdjustError> {
    AdjustmentRequest::new(color)
        .percent(percent)
        .input_format(input_format)
        .output_format(output_format)
        .apply(operation)
}

/// Raise the HSV value by `percent`.
///
/// ```
/// use color_adjust::{lighten, ColorValue};
/// let out = lighten("#000000", 25, "", "HEX").unwrap();
/// assert_eq!(out, ColorValue::Hex("#404040".to_string()));
/// ```
pub fn lighten(
    color: impl Into<RawColor>,
    percent: i32,
    input_format: &str,
    output_format: &str,
) -> Result<ColorValue, AdjustError> {
    run(Operation::Lighten, color.into(), percent, input_format, output_format)
}

/// Lower the HSV value by `percent`; `darken(c, p)` equals `lighten(c, -p)`.
pub fn darken(
    color: impl Into<RawColor>,
    percent: i32,
    input_format: &str,
    output_format: &str,
) -> Result<ColorValue, AdjustError> {
    run(Operation::Darken, color.into(), percent, input_format, output_format)
}

/// Raise the HSV saturation by `percent`.
pub fn saturate(
    color: impl Into<RawColor>,
    percent: i32,
    input_format: &str,
    output_format: &str,
) -> Result<ColorValue, AdjustError> {
    run(Operation::Saturate, color.into(), percent, input_format, output_format)
}

/// Lower the HSV saturation by `percent`; `desaturate(c, p)` equals `saturate(c, -p)`.
pub fn desaturate(
    color: impl Into<RawColor>,
    percent: i32,
    input_format: &str,
    output_format: &str,
) -> Result<ColorValue, AdjustError> {
    run(Operation::Desaturate, color.into(), percent, input_format, output_format)
}

/// Complement every RGB channel.
///
/// ```
/// use color_adjust::{invert, ColorValue};
/// let out = invert("#ff0000", "", "HEX").unwrap();
/// assert_eq!(out, ColorValue::Hex("#00ffff".to_string()));
/// ```
pub fn invert(
    color: impl Into<RawColor>,
    input_format: &str,
    output_format: &str,
) -> Result<ColorValue, AdjustError> {
    run(Operation::Invert, color.into(), 0, input_format, output_format)
}
