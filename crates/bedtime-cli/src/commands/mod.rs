//! CLI command definitions and handlers.

pub mod interactive;
pub mod model;
pub mod recommend;

use clap::{Parser, Subcommand};

/// Bedtime - recommended bedtime from a pre-trained sleep model
#[derive(Parser)]
#[command(name = "bedtime")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Shared recommend arguments (inputs, model, output flags).
    #[command(flatten)]
    pub recommend: recommend::RecommendArgs,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Compute a recommended bedtime for the given inputs
    Recommend(recommend::RecommendArgs),
    /// Edit inputs interactively, recomputing after every change
    Interactive(interactive::InteractiveArgs),
    /// Inspect the sleep model artifact
    Model(model::ModelArgs),
}

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// A recommendation was produced.
    Success,
    /// The model failed; the fixed error message was shown.
    PredictionFailed,
    /// Usage or configuration error.
    Error,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        match code {
            ExitCode::Success => Self::from(0),
            ExitCode::PredictionFailed => Self::from(1),
            ExitCode::Error => Self::from(2),
        }
    }
}
