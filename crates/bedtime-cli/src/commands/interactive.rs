//! Interactive mode - edit inputs, recompute after every change.
//!
//! The original program recomputed the bedtime on every form edit; this is
//! the same contract over stdin. Each accepted edit triggers exactly one
//! synchronous prediction, and an invalid edit leaves the inputs unchanged.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use time::Time;
use tracing::debug;

use bedtime_core::{format_clock, predict, CoffeeIntake, SleepAmount, SleepModel};

use super::recommend::build_model;
use super::ExitCode;
use crate::config::AppConfig;
use crate::output::{IDEAL_BEDTIME_PREFIX, PREDICTION_FAILED_MESSAGE};

/// Arguments for the interactive command.
#[derive(Args, Clone)]
pub struct InteractiveArgs {
    /// Starting wake-up time (HH:MM, 24-hour)
    #[arg(short, long, value_parser = super::recommend::parse_wake)]
    pub wake: Option<Time>,

    /// Starting sleep amount in hours
    #[arg(short, long, value_parser = super::recommend::parse_sleep)]
    pub sleep: Option<SleepAmount>,

    /// Starting coffee intake in cups
    #[arg(short, long, value_parser = super::recommend::parse_coffee)]
    pub coffee: Option<CoffeeIntake>,

    /// Sleep model artifact (safetensors); built-in coefficients if omitted
    #[arg(long, value_name = "PATH")]
    pub model: Option<PathBuf>,
}

/// Run the interactive command against stdin/stdout.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run(args: &InteractiveArgs, config: &AppConfig) -> Result<ExitCode> {
    let mut recommend_args = crate::commands::recommend::RecommendArgs::from_interactive(args);
    recommend_args =
        crate::commands::recommend::RecommendArgs::with_config(recommend_args, config)?;

    let model = build_model(recommend_args.model.as_deref());

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    session(
        recommend_args.wake(),
        recommend_args.sleep(),
        recommend_args.coffee(),
        model.as_ref(),
        stdin.lock(),
        &mut stdout.lock(),
    )
}

/// The interactive session loop, parameterized over I/O for testing.
///
/// # Errors
///
/// Returns an error if reading or writing fails.
pub fn session<R: BufRead, W: Write>(
    mut wake: Time,
    mut sleep: SleepAmount,
    mut coffee: CoffeeIntake,
    model: &dyn SleepModel,
    input: R,
    output: &mut W,
) -> Result<ExitCode> {
    // Initial render, like the original form's compute-on-appear.
    let mut last_ok = render(wake, sleep, coffee, model, output)?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((c, r)) => (c, r.trim()),
            None => (line, ""),
        };

        match command {
            "quit" | "exit" => break,
            "show" => {
                last_ok = render(wake, sleep, coffee, model, output)?;
            }
            "wake" => match bedtime_core::parse_clock(rest) {
                Ok(t) => {
                    wake = t;
                    last_ok = render(wake, sleep, coffee, model, output)?;
                }
                Err(e) => writeln!(output, "error: {e:#}")?,
            },
            "sleep" => match rest.parse::<f64>().map_err(anyhow::Error::from).and_then(SleepAmount::new) {
                Ok(s) => {
                    sleep = s;
                    last_ok = render(wake, sleep, coffee, model, output)?;
                }
                Err(e) => writeln!(output, "error: {e:#}")?,
            },
            "coffee" => match rest.parse::<u32>().map_err(anyhow::Error::from).and_then(CoffeeIntake::new) {
                Ok(c) => {
                    coffee = c;
                    last_ok = render(wake, sleep, coffee, model, output)?;
                }
                Err(e) => writeln!(output, "error: {e:#}")?,
            },
            other => {
                writeln!(
                    output,
                    "error: unknown command '{other}' (wake/sleep/coffee/show/quit)"
                )?;
            }
        }
    }

    Ok(if last_ok {
        ExitCode::Success
    } else {
        ExitCode::PredictionFailed
    })
}

/// Compute and print one recommendation line. Returns whether it succeeded.
fn render<W: Write>(
    wake: Time,
    sleep: SleepAmount,
    coffee: CoffeeIntake,
    model: &dyn SleepModel,
    output: &mut W,
) -> Result<bool> {
    match predict(wake, sleep, coffee, model) {
        Ok(bedtime) => {
            writeln!(output, "{IDEAL_BEDTIME_PREFIX}{}", format_clock(bedtime))?;
            Ok(true)
        }
        Err(e) => {
            debug!("prediction failed: {e:#}");
            writeln!(output, "{PREDICTION_FAILED_MESSAGE}")?;
            Ok(false)
        }
    }
}
