//! External color formats and the conversions in and out of canonical HSV
//!
//! - [`ColorFormat`]: the five format tags
//! - [`RawColor`]: caller input before validation
//! - [`ColorValue`]: the converted result
//! - [`to_canonical`] / [`from_canonical`]: the format <-> HSV transforms

mod convert;
mod raw;
mod tag;
mod value;

pub use convert::{from_canonical, to_canonical};
pub use raw::{ParsedColor, RawColor};
pub use tag::{ColorFormat, UnknownFormat};
pub use value::ColorValue;
