//! Check the WCAG contrast between a text color and a background color.

use std::process::ExitCode;

use anyhow::{Context as _, Result};
use clap::{Parser, ValueEnum};
use contrast::{Color, Level, TextSize};

mod report;

use report::Report;

/// Exit code when the pair does not meet the level given with `--require`.
const EXIT_BELOW_REQUIRED: u8 = 3;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RequiredLevel {
    Aa,
    Aaa,
}

impl From<RequiredLevel> for Level {
    fn from(value: RequiredLevel) -> Self {
        match value {
            RequiredLevel::Aa => Level::AA,
            RequiredLevel::Aaa => Level::AAA,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "contrast-check",
    version,
    about = "Calculate the WCAG 2.x contrast ratio between two colors.",
    after_help = "Colors can be written as hex (#rgb, #rrggbb, with optional alpha), \
                  rgb(), hsl(), hwb() or one of the basic CSS color names."
)]
struct Args {
    /// The text color.
    foreground: String,
    /// The background color.
    background: String,
    /// How to print the result.
    #[arg(long, value_enum, default_value_t = Format::Text, env = "CONTRAST_FORMAT")]
    format: Format,
    /// Exit with code 3 if the pair does not meet this level.
    #[arg(long, value_enum)]
    require: Option<RequiredLevel>,
    /// Apply the large text thresholds to `--require`.
    #[arg(long, requires = "require")]
    large: bool,
    /// Log debug output to stderr. `RUST_LOG` takes precedence.
    #[arg(short, long)]
    verbose: bool,
}

fn parse_color(value: &str, which: &str) -> Result<Color> {
    value
        .parse::<Color>()
        .with_context(|| format!("invalid {which} color `{value}`"))
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let foreground = parse_color(&args.foreground, "foreground")?;
    let background = parse_color(&args.background, "background")?;

    if foreground.alpha().is_some() || background.alpha().is_some() {
        log::warn!("alpha is ignored, colors are evaluated as if opaque");
    }

    let result = foreground.contrast_ratio(&background);
    log::debug!("{foreground} on {background}: {result}");

    let report = Report::new(&foreground, &background, &result);
    match args.format {
        Format::Text => print!("{report}"),
        Format::Json => println!(
            "{}",
            serde_json::to_string_pretty(&report).context("failed to serialize report")?
        ),
    }

    if let Some(required) = args.require {
        let level = Level::from(required);
        let size = if args.large {
            TextSize::Large
        } else {
            TextSize::Normal
        };

        if !result.passes(level, size) {
            log::info!(
                "{result} is below the {}:1 required for {level} with {size} text",
                level.min_ratio(size)
            );
            return Ok(ExitCode::from(EXIT_BELOW_REQUIRED));
        }
    }

    Ok(ExitCode::SUCCESS)
}
