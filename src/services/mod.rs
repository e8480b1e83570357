pub mod color_args;
pub mod runner;

pub use color_args::parse_color_arg;
pub use runner::{build_request, run_operation, ColorArgs, Outcome};
