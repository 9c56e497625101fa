//! Output adapters for rendering recommendations.

mod json;
mod text;

pub use json::JsonOutput;
pub use text::TextOutput;

/// Prefix for the success line in text output.
pub const IDEAL_BEDTIME_PREFIX: &str = "Your ideal bedtime is ";

/// The one fixed user-visible message for any prediction failure. The
/// underlying cause is never shown or subdivided.
pub const PREDICTION_FAILED_MESSAGE: &str = "Sorry, there was an error calculating your bedtime";
