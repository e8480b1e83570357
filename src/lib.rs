//! Hueshift - lighten, darken, saturate, desaturate or invert a color
//!
//! Command-line front end over the `color-adjust` crate.
//! This library exposes modules for integration testing.

pub mod display;
pub mod error;
pub mod models;
pub mod services;
