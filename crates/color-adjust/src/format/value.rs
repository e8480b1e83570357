//! Result of an adjustment in the requested output format.

use std::fmt;

use serde::Serialize;

/// A color in its output representation.
///
/// HEX output is a lowercase `#rrggbb` string; every other format is an
/// integer triple in that format's scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ColorValue {
    Hex(String),
    Triple([u32; 3]),
}

impl ColorValue {
    /// Build the hex form from 8-bit channels.
    pub fn from_bytes(bytes: [u32; 3]) -> Self {
        ColorValue::Hex(format!(
            "#{:02x}{:02x}{:02x}",
            bytes[0], bytes[1], bytes[2]
        ))
    }

    pub fn as_hex(&self) -> Option<&str> {
        match self {
            ColorValue::Hex(s) => Some(s),
            ColorValue::Triple(_) => None,
        }
    }

    pub fn as_triple(&self) -> Option<[u32; 3]> {
        match self {
            ColorValue::Hex(_) => None,
            ColorValue::Triple(t) => Some(*t),
        }
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorValue::Hex(s) => f.write_str(s),
            ColorValue::Triple([a, b, c]) => write!(f, "({a}, {b}, {c})"),
        }
    }
}
