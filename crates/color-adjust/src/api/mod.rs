//! Public API: the request builder, the one-call operations and the
//! error type.

mod error;
mod ops;
mod request;

pub use error::{AdjustError, FormatRole};
pub use ops::{darken, desaturate, invert, lighten, saturate};
pub use request::{parse_percent, AdjustmentRequest, ValidatedRequest, DEFAULT_PERCENT};
