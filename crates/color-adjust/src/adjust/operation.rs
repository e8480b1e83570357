//! The five adjustment operations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An adjustment applied to a color in canonical HSV space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Raise value by the percentage
    Lighten,
    /// Lower value by the percentage
    Darken,
    /// Raise saturation by the percentage
    Saturate,
    /// Lower saturation by the percentage
    Desaturate,
    /// Complement every RGB channel; the percentage is ignored
    Invert,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::Lighten,
        Operation::Darken,
        Operation::Saturate,
        Operation::Desaturate,
        Operation::Invert,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Lighten => "lighten",
            Operation::Darken => "darken",
            Operation::Saturate => "saturate",
            Operation::Desaturate => "desaturate",
            Operation::Invert => "invert",
        }
    }

    /// Whether the operation uses the percentage at all.
    pub fn takes_percent(self) -> bool {
        !matches!(self, Operation::Invert)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| format!("unknown operation \"{s}\""))
    }
}
