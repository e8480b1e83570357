//! The five external color formats.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// External representation of a color value.
///
/// Parsing is case-insensitive and ignores surrounding whitespace; the
/// canonical spelling is the uppercase tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ColorFormat {
    /// `#rrggbb` hexadecimal string
    #[default]
    Hex,
    /// 8-bit channels, 0..=255
    Rgb8,
    /// 16-bit channels, 0..=65535
    Rgb16,
    /// Hue 0..=360, saturation and value 0..=100
    Hsv,
    /// Hue 0..=360, lightness and saturation 0..=100
    Hls,
}

impl ColorFormat {
    pub const ALL: [ColorFormat; 5] = [
        ColorFormat::Hex,
        ColorFormat::Rgb8,
        ColorFormat::Rgb16,
        ColorFormat::Hsv,
        ColorFormat::Hls,
    ];

    /// Human-readable list of accepted tags, for error messages.
    pub const EXPECTED: &'static str = r#""HEX", "RGB8", "RGB16", "HSV", or "HLS""#;

    pub fn as_str(self) -> &'static str {
        match self {
            ColorFormat::Hex => "HEX",
            ColorFormat::Rgb8 => "RGB8",
            ColorFormat::Rgb16 => "RGB16",
            ColorFormat::Hsv => "HSV",
            ColorFormat::Hls => "HLS",
        }
    }

    /// Full-scale value of each RGB channel, for the RGB formats.
    pub fn channel_max(self) -> Option<f64> {
        match self {
            ColorFormat::Hex | ColorFormat::Rgb8 => Some(255.0),
            ColorFormat::Rgb16 => Some(65535.0),
            ColorFormat::Hsv | ColorFormat::Hls => None,
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a tag names none of the five formats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFormat(pub String);

impl fmt::Display for UnknownFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown color format \"{}\" (expected one of {})",
            self.0,
            ColorFormat::EXPECTED
        )
    }
}

impl std::error::Error for UnknownFormat {}

impl FromStr for ColorFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        ColorFormat::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| UnknownFormat(s.to_string()))
    }
}

impl TryFrom<String> for ColorFormat {
    type Error = UnknownFormat;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ColorFormat> for String {
    fn from(format: ColorFormat) -> Self {
        format.as_str().to_string()
    }
}
