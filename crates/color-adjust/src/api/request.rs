//! AdjustmentRequest builder -- validation plus the convert/adjust/convert
//! pipeline.
//!
//! A request is validated once, then run once:
//!
//! ```text
//! validate -> to_canonical -> adjust::apply -> from_canonical
//! ```

use super::error::{AdjustError, FormatRole};
use crate::adjust::{self, Operation};
use crate::color::Hsv;
use crate::format::{from_canonical, to_canonical, ColorFormat, ColorValue, ParsedColor, RawColor};

/// Percentage used when the caller does not supply one.
pub const DEFAULT_PERCENT: i32 = 25;

/// One color adjustment, described but not yet validated.
///
/// Format tags are kept as text until [`validate()`](Self::validate) so
/// that a bad tag surfaces as [`AdjustError::InvalidFormat`]. Both `&str`
/// and [`ColorFormat`] are accepted.
///
/// # Example
///
/// ```
/// use color_adjust::{AdjustmentRequest, ColorFormat, ColorValue};
///
/// let out = AdjustmentRequest::new([0, 0, 0])
///     .percent(25)
///     .input_format(ColorFormat::Hsv)
///     .output_format("hsv")
///     .saturate()
///     .unwrap();
///
/// assert_eq!(out, ColorValue::Triple([0, 25, 0]));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AdjustmentRequest {
    color: RawColor,
    percent: i32,
    input_format: Option<String>,
    output_format: String,
}

/// A request that passed validation, ready to run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedRequest {
    pub color: ParsedColor,
    pub percent: i32,
    pub input: ColorFormat,
    pub output: ColorFormat,
}

impl AdjustmentRequest {
    /// Start a request with percent 25, an inferred input format and HEX output.
    pub fn new(color: impl Into<RawColor>) -> Self {
        Self {
            color: color.into(),
            percent: DEFAULT_PERCENT,
            input_format: None,
            output_format: ColorFormat::Hex.to_string(),
        }
    }

    #[inline]
    pub fn percent(mut self, percent: i32) -> Self {
        self.percent = percent;
        self
    }

    /// Set the input format tag. An empty tag means "infer from the color".
    #[inline]
    pub fn input_format(mut self, tag: impl ToString) -> Self {
        self.input_format = Some(tag.to_string());
        self
    }

    #[inline]
    pub fn output_format(mut self, tag: impl ToString) -> Self {
        self.output_format = tag.to_string();
        self
    }

    /// Check percent, output format, input format and color shape, in that
    /// order, stopping at the first failure.
    pub fn validate(&self) -> Result<ValidatedRequest, AdjustError> {
        let percent = validate_percent(self.percent)?;
        let output = parse_format(&self.output_format, FormatRole::Output)?;
        let input = match self.input_format.as_deref().map(str::trim) {
            None | Some("") => infer_format(&self.color)?,
            Some(tag) => parse_format(tag, FormatRole::Input)?,
        };
        let color = parse_color(&self.color, input)?;

        Ok(ValidatedRequest {
            color,
            percent,
            input,
            output,
        })
    }

    /// Validate and run `operation`.
    ///
    /// The percentage is not checked for [`Operation::Invert`], which
    /// ignores it.
    pub fn apply(&self, operation: Operation) -> Result<ColorValue, AdjustError> {
        let validated = if operation.takes_percent() {
            self.validate()?
        } else {
            self.clone().percent(0).validate()?
        };
        Ok(validated.run(operation))
    }

    pub fn lighten(&self) -> Result<ColorValue, AdjustError> {
        self.apply(Operation::Lighten)
    }

    pub fn darken(&self) -> Result<ColorValue, AdjustError> {
        self.apply(Operation::Darken)
    }

    pub fn saturate(&self) -> Result<ColorValue, AdjustError> {
        self.apply(Operation::Saturate)
    }

    pub fn desaturate(&self) -> Result<ColorValue, AdjustError> {
        self.apply(Operation::Desaturate)
    }

    pub fn invert(&self) -> Result<ColorValue, AdjustError> {
        self.apply(Operation::Invert)
    }
}

impl ValidatedRequest {
    /// The input color in canonical HSV.
    pub fn canonical(&self) -> Hsv {
        to_canonical(self.input, &self.color)
    }

    /// Run the pipeline for `operation`. Infallible once validated.
    pub fn run(&self, operation: Operation) -> ColorValue {
        let adjusted = adjust::apply(self.canonical(), operation, self.percent);
        from_canonical(adjusted, self.output)
    }
}

/// Parse percent text as an integer in (-100, 100).
///
/// # Example
/// ```
/// use color_adjust::parse_percent;
/// assert_eq!(parse_percent(" -40 "), Ok(-40));
/// assert!(parse_percent("lots").is_err());
/// assert!(parse_percent("100").is_err());
/// ```
pub fn parse_percent(text: &str) -> Result<i32, AdjustError> {
    let percent = text
        .trim()
        .parse::<i32>()
        .map_err(|_| AdjustError::percent(format!("\"{text}\"")))?;
    validate_percent(percent)
}

fn validate_percent(percent: i32) -> Result<i32, AdjustError> {
    if -100 < percent && percent < 100 {
        Ok(percent)
    } else {
        Err(AdjustError::percent(percent))
    }
}

fn parse_format(tag: &str, role: FormatRole) -> Result<ColorFormat, AdjustError> {
    tag.parse().map_err(|_| AdjustError::InvalidFormat {
        role,
        tag: tag.to_string(),
    })
}

/// Text means HEX, three numbers mean RGB8; nothing else can be inferred.
fn infer_format(color: &RawColor) -> Result<ColorFormat, AdjustError> {
    match color {
        RawColor::Text(_) => Ok(ColorFormat::Hex),
        RawColor::Components(c) if c.len() == 3 => Ok(ColorFormat::Rgb8),
        RawColor::Components(c) => Err(AdjustError::InvalidArgumentType(format!(
            "color must be a hex string or 3 numbers to infer its format, got {} numbers",
            c.len()
        ))),
    }
}

fn parse_color(color: &RawColor, format: ColorFormat) -> Result<ParsedColor, AdjustError> {
    match (format, color) {
        (ColorFormat::Hex, RawColor::Text(text)) => parse_hex(text).map(ParsedColor::Hex),
        (ColorFormat::Hex, RawColor::Components(_)) => Err(AdjustError::InvalidArgumentType(
            "color must be a string for input format \"HEX\"".to_string(),
        )),
        (format, RawColor::Text(_)) => Err(AdjustError::InvalidArgumentType(format!(
            "color must be a sequence of 3 numbers for input format \"{format}\""
        ))),
        (format, RawColor::Components(c)) => match c.as_slice() {
            [a, b, c] if a.is_finite() && b.is_finite() && c.is_finite() => {
                Ok(ParsedColor::Triple([*a, *b, *c]))
            }
            [_, _, _] => Err(AdjustError::InvalidArgumentType(
                "color components must be finite numbers".to_string(),
            )),
            _ => Err(AdjustError::InvalidColorShape {
                format,
                len: c.len(),
            }),
        },
    }
}

/// Strip spaces and '#' from both ends, then decode three hex bytes.
fn parse_hex(text: &str) -> Result<[u8; 3], AdjustError> {
    let digits = text.trim_matches([' ', '#']);

    let len = digits.chars().count();
    if len != 6 {
        return Err(AdjustError::InvalidHexLength {
            value: digits.to_string(),
            len,
        });
    }

    let invalid = || AdjustError::InvalidHexDigit {
        value: digits.to_string(),
    };
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
    Ok([byte(0)?, byte(2)?, byte(4)?])
}
