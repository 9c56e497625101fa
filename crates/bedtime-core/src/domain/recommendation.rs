//! Recommendation result type.

use serde::{Deserialize, Serialize};
use time::Time;

use super::{format_clock, CoffeeIntake, SleepAmount};

/// A successful bedtime recommendation.
///
/// Transient: recomputed on every input change and handed to an output
/// adapter for one render, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BedtimeRecommendation {
    /// Wake time the recommendation was computed for (`HH:MM`).
    pub wake_time: String,
    /// Desired sleep duration in hours.
    pub sleep_hours: f64,
    /// Daily coffee intake in cups.
    pub coffee_cups: u32,
    /// Recommended bedtime (`HH:MM`), possibly on the previous day.
    pub bedtime: String,
    /// Sleep duration the model predicted, in seconds.
    pub predicted_sleep_seconds: f64,
    /// Timestamp of computation (RFC 3339), filled in by the caller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl BedtimeRecommendation {
    /// Creates a recommendation from the inputs and the predicted bedtime.
    #[must_use]
    pub fn new(
        wake: Time,
        sleep: SleepAmount,
        coffee: CoffeeIntake,
        bedtime: Time,
        predicted_sleep_seconds: f64,
    ) -> Self {
        Self {
            wake_time: format_clock(wake),
            sleep_hours: sleep.hours(),
            coffee_cups: coffee.cups(),
            bedtime: format_clock(bedtime),
            predicted_sleep_seconds,
            timestamp: None,
        }
    }
}
