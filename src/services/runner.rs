//! Runs one command-line operation through the color-adjust pipeline.

use serde::Serialize;

use color_adjust::{parse_percent, AdjustmentRequest, ColorValue, Operation};

use super::color_args::parse_color_arg;
use crate::error::CliError;
use crate::models::AppConfig;

/// Arguments for one operation, as typed on the command line
#[derive(Debug, Clone, Default)]
pub struct ColorArgs {
    pub color: String,
    /// Percent text; `None` uses the configured default
    pub percent: Option<String>,
    /// Input format tag; `None` infers from the color
    pub input: Option<String>,
    /// Output format tag; `None` uses the configured default
    pub output: Option<String>,
}

/// Result of a successful run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub input: String,
    pub operation: Operation,
    pub result: ColorValue,
}

impl Outcome {
    /// One-line human-readable report
    pub fn message(&self) -> String {
        format!("{} is now {}", self.input, self.result)
    }
}

/// Build the request for `operation` from CLI arguments and config defaults.
pub fn build_request(
    operation: Operation,
    args: &ColorArgs,
    config: &AppConfig,
) -> Result<AdjustmentRequest, CliError> {
    let percent = match (&args.percent, operation.takes_percent()) {
        (Some(text), true) => parse_percent(text)?,
        (None, true) => config.percent,
        (_, false) => 0,
    };

    let mut request = AdjustmentRequest::new(parse_color_arg(&args.color))
        .percent(percent)
        .output_format(args.output.as_deref().unwrap_or(&config.output));
    if let Some(input) = &args.input {
        request = request.input_format(input);
    }
    Ok(request)
}

/// Validate and run `operation`.
pub fn run_operation(
    operation: Operation,
    args: &ColorArgs,
    config: &AppConfig,
) -> Result<Outcome, CliError> {
    let request = build_request(operation, args, config)?;
    let validated = request.validate()?;

    tracing::debug!(
        %operation,
        input = %validated.input,
        output = %validated.output,
        percent = validated.percent,
        "Validated request"
    );
    let canonical = validated.canonical();
    tracing::debug!(h = canonical.h, s = canonical.s, v = canonical.v, "Canonical HSV");

    let result = validated.run(operation);
    tracing::debug!(%result, "Adjusted color");

    Ok(Outcome {
        input: args.color.clone(),
        operation,
        result,
    })
}
