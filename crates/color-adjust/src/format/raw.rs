//! Unvalidated color input and its validated form.

use serde::{Deserialize, Serialize};

/// A color value as supplied by the caller, before validation.
///
/// Text is only meaningful for [`ColorFormat::Hex`](super::ColorFormat::Hex);
/// every other format expects exactly three numeric components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawColor {
    /// A hex string such as `"#ff8800"` or `" ff8800 "`
    Text(String),
    /// A sequence of numbers, e.g. `[255, 136, 0]`
    Components(Vec<f64>),
}

impl From<&str> for RawColor {
    fn from(s: &str) -> Self {
        RawColor::Text(s.to_string())
    }
}

impl From<String> for RawColor {
    fn from(s: String) -> Self {
        RawColor::Text(s)
    }
}

impl From<Vec<f64>> for RawColor {
    fn from(components: Vec<f64>) -> Self {
        RawColor::Components(components)
    }
}

impl From<&[f64]> for RawColor {
    fn from(components: &[f64]) -> Self {
        RawColor::Components(components.to_vec())
    }
}

impl From<[f64; 3]> for RawColor {
    fn from(c: [f64; 3]) -> Self {
        RawColor::Components(c.to_vec())
    }
}

impl From<[u8; 3]> for RawColor {
    fn from(c: [u8; 3]) -> Self {
        RawColor::Components(c.iter().map(|&v| f64::from(v)).collect())
    }
}

impl From<[u16; 3]> for RawColor {
    fn from(c: [u16; 3]) -> Self {
        RawColor::Components(c.iter().map(|&v| f64::from(v)).collect())
    }
}

impl From<[i32; 3]> for RawColor {
    fn from(c: [i32; 3]) -> Self {
        RawColor::Components(c.iter().map(|&v| f64::from(v)).collect())
    }
}

impl From<[u32; 3]> for RawColor {
    fn from(c: [u32; 3]) -> Self {
        RawColor::Components(c.iter().map(|&v| f64::from(v)).collect())
    }
}

impl From<(i32, i32, i32)> for RawColor {
    fn from((a, b, c): (i32, i32, i32)) -> Self {
        RawColor::Components(vec![f64::from(a), f64::from(b), f64::from(c)])
    }
}

/// A color whose shape has been checked against its input format.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedColor {
    /// Three bytes decoded from a 6-digit hex string
    Hex([u8; 3]),
    /// Three numeric components in the input format's own scale
    Triple([f64; 3]),
}
