//! Recommend command - compute a bedtime for the given inputs.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};
use time::Time;
use tracing::debug;

use bedtime_core::inference::{ArtifactSleepModel, BuiltinSleepModel};
use bedtime_core::{
    default_wake_time, parse_clock, predict, BedtimeRecommendation, CoffeeIntake,
    RecommendationOutput, SleepAmount, SleepModel,
};

use super::ExitCode;
use crate::config::AppConfig;
use crate::output::{JsonOutput, TextOutput, PREDICTION_FAILED_MESSAGE};

/// Output format for recommendations.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable sentence
    #[default]
    Text,
    /// One JSON object per recommendation
    Json,
}

/// Parse and validate a `HH:MM` wake time.
pub(crate) fn parse_wake(s: &str) -> Result<Time, String> {
    parse_clock(s).map_err(|e| format!("{e:#}"))
}

/// Parse and validate a sleep amount (4.0-12.0 hours, steps of 0.25).
pub(crate) fn parse_sleep(s: &str) -> Result<SleepAmount, String> {
    let hours: f64 = s.parse().map_err(|_| format!("'{s}' is not a valid number"))?;
    SleepAmount::new(hours).map_err(|e| format!("{e:#}"))
}

/// Parse and validate a coffee intake (1-20 cups).
pub(crate) fn parse_coffee(s: &str) -> Result<CoffeeIntake, String> {
    let cups: u32 = s.parse().map_err(|_| format!("'{s}' is not a valid count"))?;
    CoffeeIntake::new(cups).map_err(|e| format!("{e:#}"))
}

/// Shared arguments for computing a recommendation.
#[derive(Args, Clone)]
pub struct RecommendArgs {
    /// Wake-up time (HH:MM, 24-hour)
    #[arg(short, long, value_parser = parse_wake)]
    pub wake: Option<Time>,

    /// Desired sleep in hours (4.0-12.0, steps of 0.25)
    #[arg(short, long, value_parser = parse_sleep)]
    pub sleep: Option<SleepAmount>,

    /// Daily coffee intake in cups (1-20)
    #[arg(short, long, value_parser = parse_coffee)]
    pub coffee: Option<CoffeeIntake>,

    /// Sleep model artifact (safetensors); built-in coefficients if omitted
    #[arg(long, value_name = "PATH")]
    pub model: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Pretty-print JSON output (only affects --format json)
    #[arg(long)]
    pub pretty: bool,
}

impl RecommendArgs {
    /// Builds recommend arguments from interactive-mode starting inputs.
    #[must_use]
    pub fn from_interactive(args: &super::interactive::InteractiveArgs) -> Self {
        Self {
            wake: args.wake,
            sleep: args.sleep,
            coffee: args.coffee,
            model: args.model.clone(),
            format: None,
            pretty: false,
        }
    }

    /// Apply configuration file values, respecting CLI precedence.
    ///
    /// Layering priority (lowest to highest):
    /// 1. Hardcoded defaults (in accessor methods)
    /// 2. Config file values (XDG, then project-local)
    /// 3. CLI arguments (already set on self)
    ///
    /// # Errors
    ///
    /// Returns an error if a config value is outside its input domain.
    pub fn with_config(mut args: Self, config: &AppConfig) -> Result<Self> {
        if args.wake.is_none() {
            if let Some(ref s) = config.inputs.wake {
                args.wake = Some(parse_clock(s)?);
            }
        }
        if args.sleep.is_none() {
            if let Some(hours) = config.inputs.sleep {
                args.sleep = Some(SleepAmount::new(hours)?);
            }
        }
        if args.coffee.is_none() {
            if let Some(cups) = config.inputs.coffee {
                args.coffee = Some(CoffeeIntake::new(cups)?);
            }
        }

        if args.model.is_none() {
            args.model.clone_from(&config.model.path);
        }

        if args.format.is_none() {
            args.format = config.output.format.as_ref().and_then(|s| match s.as_str() {
                "text" => Some(OutputFormat::Text),
                "json" => Some(OutputFormat::Json),
                _ => None,
            });
        }
        if !args.pretty {
            args.pretty = config.output.pretty.unwrap_or(false);
        }

        Ok(args)
    }

    /// Get the wake time with fallback to the 07:00 default.
    pub fn wake(&self) -> Time {
        self.wake.unwrap_or_else(default_wake_time)
    }

    /// Get the sleep amount with fallback to 8.0 hours.
    pub fn sleep(&self) -> SleepAmount {
        self.sleep.unwrap_or_default()
    }

    /// Get the coffee intake with fallback to one cup.
    pub fn coffee(&self) -> CoffeeIntake {
        self.coffee.unwrap_or_default()
    }

    /// Get the output format with fallback to text.
    pub fn format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }
}

/// Result of running the recommend command.
pub struct RecommendResult {
    /// Exit code.
    pub exit_code: ExitCode,
}

/// Builds the sleep model: artifact-backed when a path is given, built-in
/// coefficients otherwise.
///
/// Both variants construct lazily, so any model failure surfaces through
/// the prediction path and its fixed failure message.
pub fn build_model(path: Option<&std::path::Path>) -> Box<dyn SleepModel> {
    match path {
        Some(p) => {
            debug!("Using sleep model artifact {}", p.display());
            Box::new(ArtifactSleepModel::new(p))
        }
        None => Box::new(BuiltinSleepModel::new()),
    }
}

/// Run the recommend command.
///
/// Expects `args` to have been processed through `with_config()` first to
/// apply configuration file settings.
///
/// # Errors
///
/// Returns an error only for output failures; model failures are rendered
/// as the fixed message and reported through the exit code.
pub fn run(args: &RecommendArgs) -> Result<RecommendResult> {
    let output: Box<dyn RecommendationOutput> = match args.format() {
        OutputFormat::Text => Box::new(TextOutput::stdout()),
        OutputFormat::Json => Box::new(JsonOutput::stdout(args.pretty)),
    };

    let model = build_model(args.model.as_deref());

    let wake = args.wake();
    let sleep = args.sleep();
    let coffee = args.coffee();

    match predict(wake, sleep, coffee, model.as_ref()) {
        Ok(bedtime) => {
            let mut rec =
                BedtimeRecommendation::new(wake, sleep, coffee, bedtime, slept_seconds(wake, bedtime));
            rec.timestamp = Some(iso_timestamp());
            output.write(&rec)?;
            output.flush()?;
            Ok(RecommendResult {
                exit_code: ExitCode::Success,
            })
        }
        Err(e) => {
            debug!("prediction failed: {e:#}");
            println!("{PREDICTION_FAILED_MESSAGE}");
            Ok(RecommendResult {
                exit_code: ExitCode::PredictionFailed,
            })
        }
    }
}

/// Recover the predicted sleep duration from the two clock values, wrapping
/// across midnight.
fn slept_seconds(wake: Time, bedtime: Time) -> f64 {
    let seconds = (wake - bedtime).as_seconds_f64();
    if seconds < 0.0 {
        seconds + 86_400.0
    } else {
        seconds
    }
}

/// Generate ISO 8601 UTC timestamp (RFC 3339 format).
fn iso_timestamp() -> String {
    match time::OffsetDateTime::now_utc().format(&time::format_description::well_known::Rfc3339) {
        Ok(ts) => ts,
        Err(e) => {
            debug!("Timestamp format failed: {e}");
            String::from("1970-01-01T00:00:00Z")
        }
    }
}
