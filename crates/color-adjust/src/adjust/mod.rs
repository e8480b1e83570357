//! Percentage adjustments over canonical HSV
//!
//! Lighten/darken move the value channel, saturate/desaturate move the
//! saturation channel, and invert complements the color in RGB. All of
//! them return a new [`Hsv`](crate::Hsv) inside the unit cube.

mod operation;
mod shift;

pub use operation::Operation;
pub use shift::{apply, invert, shift, Channel};
