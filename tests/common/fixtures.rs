//! Test fixtures and constants.

/// Colors with known results
pub mod colors {
    pub const BLACK: &str = "#000000";
    pub const WHITE: &str = "#ffffff";
    pub const RED: &str = "#ff0000";
    pub const CYAN: &str = "#00ffff";
    pub const SLATE_BLUE: &str = "#6a5acd";
}

/// Config that switches output to HSV and the default percent to 50
pub const HSV_CONFIG: &str = "percent: 50\noutput: HSV\n";

/// Config that sends everything to the window surface
pub const WINDOW_CONFIG: &str = "window: true\n";

/// Config that is not valid YAML
pub const BROKEN_CONFIG: &str = "percent: [1, 2\n";
