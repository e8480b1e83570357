//! Error type for the color-adjust public API.
//!
//! Every variant is raised by validation, before any conversion runs.

use std::fmt;

use thiserror::Error;

use crate::format::ColorFormat;

/// Which format argument an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatRole {
    Input,
    Output,
}

impl fmt::Display for FormatRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatRole::Input => write!(f, "input format"),
            FormatRole::Output => write!(f, "output format"),
        }
    }
}

/// Validation failure for an adjustment request.
///
/// # Example
///
/// ```
/// use color_adjust::{lighten, AdjustError};
///
/// let err = lighten("#000000", 100, "", "HEX").unwrap_err();
/// assert!(matches!(err, AdjustError::InvalidPercent { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AdjustError {
    /// Percent is not a number or lies outside (-100, 100)
    #[error("percent must be a number strictly between -100 and 100, got {value}")]
    InvalidPercent { value: String },

    /// Format tag names none of the five formats
    #[error("{role} must be one of {}, got \"{tag}\"", ColorFormat::EXPECTED)]
    InvalidFormat { role: FormatRole, tag: String },

    /// Color value has the wrong type for its format (or none can be inferred)
    #[error("{0}")]
    InvalidArgumentType(String),

    /// HEX string is not 6 characters after stripping spaces and '#'
    #[error("HEX values must be 6 characters long, got {len} in \"{value}\"")]
    InvalidHexLength { value: String, len: usize },

    /// HEX string has the right length but contains non-hex characters
    #[error("HEX value \"{value}\" contains a non-hexadecimal character")]
    InvalidHexDigit { value: String },

    /// Non-HEX color is not exactly three finite numbers
    #[error("color must be 3 numbers for input format \"{format}\", got {len}")]
    InvalidColorShape { format: ColorFormat, len: usize },
}

impl AdjustError {
    pub(crate) fn percent(value: impl ToString) -> Self {
        AdjustError::InvalidPercent {
            value: value.to_string(),
        }
    }
}
