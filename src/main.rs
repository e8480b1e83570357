use clap::{error::ErrorKind, Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use color_adjust::{ColorFormat, Operation};
use hueshift::display::{self, MessageKind, Surface};
use hueshift::error::CliError;
use hueshift::models::{AppConfig, CONFIG_ENV};
use hueshift::services::{run_operation, ColorArgs};

#[derive(Parser)]
#[command(name = "hueshift", version)]
#[command(about = "A collection of commands which take a color, alter it, and print the resulting color")]
struct Cli {
    /// YAML file with default percent, output format and window setting
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Lightens the given color (raises HSV value)
    Lighten(AdjustArgs),
    /// Darkens the given color (lowers HSV value)
    Darken(AdjustArgs),
    /// Saturates the given color (raises HSV saturation)
    Saturate(AdjustArgs),
    /// Desaturates the given color (lowers HSV saturation)
    Desaturate(AdjustArgs),
    /// Inverts the given color (complements each RGB channel)
    Invert(CommonArgs),
}

#[derive(Args)]
struct AdjustArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Percent by which to change the color, strictly between -100 and 100 [default: 25]
    #[arg(short, long, allow_hyphen_values = true)]
    percent: Option<String>,
}

#[derive(Args)]
struct CommonArgs {
    /// The initial color: hex ("#ff8800") or three numbers ("255,136,0")
    #[arg(allow_hyphen_values = true)]
    color: String,

    /// Format of the input: HEX, RGB8, RGB16, HSV or HLS [default: HEX for text, RGB8 for numbers]
    #[arg(short, long)]
    input: Option<String>,

    /// Format to return: HEX, RGB8, RGB16, HSV or HLS [default: HEX]
    #[arg(short, long)]
    output: Option<String>,

    /// Show the result, help or error in a framed window
    #[arg(short, long)]
    window: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

impl Commands {
    fn into_parts(self) -> (Operation, CommonArgs, Option<String>) {
        match self {
            Commands::Lighten(a) => (Operation::Lighten, a.common, a.percent),
            Commands::Darken(a) => (Operation::Darken, a.common, a.percent),
            Commands::Saturate(a) => (Operation::Saturate, a.common, a.percent),
            Commands::Desaturate(a) => (Operation::Desaturate, a.common, a.percent),
            Commands::Invert(common) => (Operation::Invert, common, None),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::DisplayHelp && window_requested() => {
            display::show(
                Surface::Window,
                MessageKind::Help,
                &help_title(std::env::args().skip(1)),
                &e.render().to_string(),
            )?;
            return Ok(());
        }
        Err(e) => e.exit(),
    };

    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hueshift=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Some(command) => run_adjust_command(command, cli.config.as_deref())?,
        None => run_status_command(cli.config.as_deref())?,
    }
    Ok(())
}

/// `-w` / `--window` anywhere on the command line, for help requested
/// before clap has produced a parsed `Cli`
fn window_requested() -> bool {
    std::env::args().any(|a| a == "-w" || a == "--window")
}

/// Title for a help frame: the subcommand being asked about, if any
fn help_title(args: impl Iterator<Item = String>) -> String {
    args.filter_map(|a| a.parse::<Operation>().ok().filter(|op| op.as_str() == a))
        .next()
        .map_or_else(|| "hueshift".to_string(), |op| op.as_str().to_string())
}

/// Run one color operation and show the result (or error) on the chosen surface
fn run_adjust_command(command: Commands, config_path: Option<&Path>) -> Result<(), CliError> {
    let (operation, common, percent) = command.into_parts();
    let mut surface = Surface::new(common.window);

    let result = AppConfig::load(config_path)
        .map_err(CliError::from)
        .and_then(|config| {
            surface = Surface::new(common.window || config.window);
            render_outcome(operation, &common, percent, &config)
        });

    match result {
        Ok(message) => {
            display::show(surface, MessageKind::Output, operation.as_str(), &message)?;
            Ok(())
        }
        Err(e) => {
            tracing::debug!(%operation, error = ?e, "Operation failed");
            display::show(
                surface,
                MessageKind::Error,
                operation.as_str(),
                &display::error_report(&e),
            )?;
            std::process::exit(1);
        }
    }
}

/// Run the operation and format its outcome as text or JSON
fn render_outcome(
    operation: Operation,
    common: &CommonArgs,
    percent: Option<String>,
    config: &AppConfig,
) -> Result<String, CliError> {
    let args = ColorArgs {
        color: common.color.clone(),
        percent,
        input: common.input.clone(),
        output: common.output.clone(),
    };

    let outcome = run_operation(operation, &args, config)?;
    if common.json {
        Ok(serde_json::to_string_pretty(&outcome)?)
    } else {
        Ok(outcome.message())
    }
}

/// Display version, configured defaults and available commands
fn run_status_command(config_path: Option<&Path>) -> Result<(), CliError> {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config = AppConfig::load(config_path)?;

    println!("Hueshift v{VERSION}");
    println!("Lighten, darken, saturate, desaturate or invert a color\n");

    let source = match config_path {
        Some(path) => path.display().to_string(),
        None => std::env::var(CONFIG_ENV)
            .map(|p| format!("{p} (from {CONFIG_ENV})"))
            .unwrap_or_else(|_| "(defaults)".to_string()),
    };

    println!("Configuration:");
    println!("  Source  = {source}");
    println!("  Percent = {}", config.percent);
    println!("  Output  = {}", config.output);
    println!("  Window  = {}", config.window);

    let formats: Vec<&str> = ColorFormat::ALL.iter().map(|f| f.as_str()).collect();
    println!("\nFormats: {}", formats.join(", "));

    println!("\nCommands:");
    println!("  hueshift lighten     Lightens the given color");
    println!("  hueshift darken      Darkens the given color");
    println!("  hueshift saturate    Saturates the given color");
    println!("  hueshift desaturate  Desaturates the given color");
    println!("  hueshift invert      Inverts the given color");
    println!("\nRun 'hueshift --help' for more details.");
    Ok(())
}
