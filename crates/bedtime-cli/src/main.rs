//! Bedtime CLI - Recommended bedtime from a pre-trained sleep model.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;

use commands::{Cli, Commands, ExitCode};
use config::AppConfig;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = AppConfig::load();

    let exit_code = match cli.command {
        Some(Commands::Recommend(args)) => run_recommend(args, &config),
        Some(Commands::Interactive(args)) => {
            match commands::interactive::run(&args, &config) {
                Ok(code) => code,
                Err(e) => {
                    eprintln!("error: {e:#}");
                    ExitCode::Error
                }
            }
        }
        Some(Commands::Model(ref args)) => match commands::model::run(args) {
            Ok(()) => ExitCode::Success,
            Err(e) => {
                eprintln!("error: {e:#}");
                ExitCode::Error
            }
        },
        // Default behavior: recommend with flattened args. All inputs have
        // defaults, so a bare invocation works like the original form's
        // initial render.
        None => run_recommend(cli.recommend, &config),
    };

    exit_code.into()
}

fn run_recommend(args: commands::recommend::RecommendArgs, config: &AppConfig) -> ExitCode {
    let args = match commands::recommend::RecommendArgs::with_config(args, config) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("error: {e:#}");
            return ExitCode::Error;
        }
    };
    match commands::recommend::run(&args) {
        Ok(result) => result.exit_code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::Error
        }
    }
}
