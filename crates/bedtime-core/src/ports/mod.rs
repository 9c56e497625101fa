//! Port definitions for hexagonal architecture.
//!
//! These traits define the boundaries between the domain core and external
//! adapters: the pre-trained model on one side, the presentation layer's
//! output on the other.

mod result_output;
mod sleep_model;

pub use result_output::RecommendationOutput;
pub use sleep_model::SleepModel;
