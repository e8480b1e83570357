//! color-adjust: color conversion and percentage adjustments
//!
//! Converts colors between five representations and nudges them lighter,
//! darker, more or less saturated, or inverts them.
//!
//! # Quick Start
//!
//! The one-call functions mirror the command-line operations:
//!
//! ```
//! use color_adjust::{darken, invert, lighten, ColorValue};
//!
//! assert_eq!(lighten("#000000", 25, "", "HEX").unwrap().to_string(), "#404040");
//! assert_eq!(darken("#ffffff", 50, "", "HEX").unwrap().to_string(), "#808080");
//! assert_eq!(invert("#ff0000", "", "HEX").unwrap().to_string(), "#00ffff");
//! ```
//!
//! # Request Builder
//!
//! [`AdjustmentRequest`] keeps the defaults (percent 25, inferred input,
//! HEX output) and can be reused for several operations:
//!
//! ```
//! use color_adjust::{AdjustmentRequest, ColorFormat, ColorValue};
//!
//! let request = AdjustmentRequest::new([200, 40, 40])
//!     .percent(10)
//!     .output_format(ColorFormat::Hls);
//!
//! let lighter = request.lighten().unwrap();
//! let duller = request.desaturate().unwrap();
//! assert!(matches!(lighter, ColorValue::Triple(_)));
//! assert_ne!(lighter, duller);
//! ```
//!
//! # Formats
//!
//! | Tag     | Input                                  | Output           |
//! |---------|----------------------------------------|------------------|
//! | `HEX`   | 6 hex digits, `#` and spaces stripped  | `#rrggbb`        |
//! | `RGB8`  | 3 numbers, 0..=255                     | integer triple   |
//! | `RGB16` | 3 numbers, 0..=65535                   | integer triple   |
//! | `HSV`   | hue 0..=360, sat/value 0..=100         | integer triple   |
//! | `HLS`   | hue 0..=360, light/sat 0..=100         | integer triple   |
//!
//! Tags are case-insensitive. Without an input tag, text is read as HEX
//! and three numbers as RGB8.
//!
//! # Pipeline
//!
//! ```text
//! RawColor --validate--> ParsedColor --to_canonical--> Hsv in [0,1]^3
//!                                                        |
//!                                                  adjust::apply
//!                                                        |
//! ColorValue <--------------from_canonical-------------- Hsv in [0,1]^3
//! ```
//!
//! Every external format passes through canonical [`Hsv`]. Adjustments
//! add `percent / 100` to one channel and clamp to the unit interval; they
//! never wrap. Integer outputs are rounded half-to-even.
//!
//! Out-of-range input components (an RGB8 channel of 300, say) pass
//! validation and are clamped when they enter canonical HSV.

pub mod adjust;
pub mod api;
pub mod color;
pub mod format;


pub use adjust::{shift, Channel, Operation};
pub use api::{
    darken, desaturate, invert, lighten, parse_percent, saturate, AdjustError,
    AdjustmentRequest, FormatRole, ValidatedRequest, DEFAULT_PERCENT,
};
pub use color::{Hls, Hsv, Rgb};
pub use format::{from_canonical, to_canonical, ColorFormat, ColorValue, ParsedColor, RawColor};
