//! Model command - inspect the sleep model artifact.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use bedtime_core::inference::{ArtifactSleepModel, SleepRegressor};
use bedtime_core::SleepModel;

/// Arguments for the model command
#[derive(Args)]
pub struct ModelArgs {
    #[command(subcommand)]
    pub command: ModelCommand,
}

/// Model subcommands
#[derive(Subcommand)]
pub enum ModelCommand {
    /// Print the coefficients of the model that would be used
    Info {
        /// Sleep model artifact (safetensors); built-in if omitted
        #[arg(long, value_name = "PATH")]
        model: Option<PathBuf>,
    },
    /// Load an artifact and verify it produces predictions
    Check {
        /// Sleep model artifact (safetensors)
        #[arg(long, value_name = "PATH")]
        model: PathBuf,
    },
}

/// Run the model command.
///
/// # Errors
///
/// Returns an error if the artifact cannot be loaded or run. Unlike the
/// recommend path, failures here are reported in full: this is a management
/// command, not the user-facing form.
pub fn run(args: &ModelArgs) -> Result<()> {
    match args.command {
        ModelCommand::Info { ref model } => info(model.as_deref()),
        ModelCommand::Check { ref model } => check(model),
    }
}

fn info(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            let artifact = ArtifactSleepModel::new(p);
            let regressor = artifact
                .load()
                .with_context(|| format!("Failed to load artifact: {}", p.display()))?;
            print_coefficients(regressor, &format!("artifact: {}", p.display()))
        }
        None => {
            let regressor = SleepRegressor::builtin()?;
            print_coefficients(&regressor, "built-in")
        }
    }
}

fn print_coefficients(regressor: &SleepRegressor, source: &str) -> Result<()> {
    let (wake, sleep, coffee, bias) = regressor.coefficients()?;
    println!("Sleep model ({source})");
    println!();
    println!("  wake weight:   {wake:>12.6} s per wake-second");
    println!("  sleep weight:  {sleep:>12.3} s per desired hour");
    println!("  coffee weight: {coffee:>12.3} s per daily cup");
    println!("  bias:          {bias:>12.3} s");
    Ok(())
}

fn check(path: &Path) -> Result<()> {
    let artifact = ArtifactSleepModel::new(path);
    let regressor = artifact
        .load()
        .with_context(|| format!("Artifact is not usable: {}", path.display()))?;

    // One inference with the default form inputs.
    let seconds = regressor.estimate_sleep_duration(25_200.0, 8.0, 1.0)?;
    println!(
        "ok: {} predicts {seconds:.0}s of sleep for the default inputs",
        path.display()
    );

    Ok(())
}
