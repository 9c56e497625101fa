//! Test support utilities for the bedtime recommendation tool.
//!
//! Provides mock implementations of the core ports so tests can substitute
//! the sleep model and capture rendered recommendations.
//!
//! # Example
//!
//! ```
//! use bedtime_test_support::{MockRecommendationOutput, StubSleepModel};
//!
//! // A model that always predicts exactly eight hours of sleep
//! let model = StubSleepModel::new(8.0 * 3600.0);
//!
//! // An output that captures what would be rendered
//! let output = MockRecommendationOutput::new();
//! ```

mod mocks;

pub use mocks::{FailingSleepModel, MockRecommendationOutput, RecordingSleepModel, StubSleepModel};
