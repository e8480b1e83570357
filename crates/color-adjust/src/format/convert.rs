//! Conversion between the external formats and the canonical [`Hsv`].
//!
//! Dispatch is a `match` on [`ColorFormat`]; each arm names the chain of
//! model conversions the format goes through.

use super::raw::ParsedColor;
use super::tag::ColorFormat;
use super::value::ColorValue;
use crate::color::{Hls, Hsv, Rgb};

/// Convert a validated input color into canonical HSV.
///
/// HEX bytes and RGB channels are divided by their channel maximum, HSV is
/// rescaled directly, and HLS goes through RGB. The result is clamped to
/// the unit cube.
pub fn to_canonical(format: ColorFormat, color: &ParsedColor) -> Hsv {
    let components = match *color {
        ParsedColor::Hex(bytes) => {
            return Hsv::from(Rgb::from_scaled(bytes.map(f64::from), rgb_max(ColorFormat::Hex)));
        }
        ParsedColor::Triple(components) => components,
    };

    match format {
        ColorFormat::Hsv => Hsv::from_scaled(components),
        ColorFormat::Hls => Hsv::from(Rgb::from(Hls::from_scaled(components))),
        rgb => Hsv::from(Rgb::from_scaled(components, rgb_max(rgb))),
    }
}

/// Convert canonical HSV into the requested output format.
pub fn from_canonical(hsv: Hsv, format: ColorFormat) -> ColorValue {
    match format {
        ColorFormat::Hex => ColorValue::from_bytes(Rgb::from(hsv).to_scaled(rgb_max(format))),
        ColorFormat::Rgb8 | ColorFormat::Rgb16 => {
            ColorValue::Triple(Rgb::from(hsv).to_scaled(rgb_max(format)))
        }
        ColorFormat::Hsv => ColorValue::Triple(hsv.to_scaled()),
        ColorFormat::Hls => ColorValue::Triple(Hls::from(Rgb::from(hsv)).to_scaled()),
    }
}

fn rgb_max(format: ColorFormat) -> f64 {
    format.channel_max().unwrap_or(255.0)
}
