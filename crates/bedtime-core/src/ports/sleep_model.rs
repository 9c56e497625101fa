//! Sleep model port.

/// Port for the opaque pre-trained sleep regression model.
///
/// The model maps (wake time, desired sleep, coffee intake) to an estimate
/// of the sleep duration the user actually needs. Its internals are out of
/// scope; the predictor only depends on this numeric contract, which allows
/// substituting a stub in tests.
pub trait SleepModel: Send + Sync {
    /// Estimates the needed sleep duration in seconds.
    ///
    /// # Arguments
    ///
    /// * `wake_seconds` - Wake time as seconds since midnight
    /// * `sleep_hours` - Desired sleep duration in hours
    /// * `coffee_count` - Daily coffee intake in cups
    ///
    /// All inputs are floats per the model's input contract, including the
    /// cup count.
    ///
    /// # Errors
    ///
    /// Returns an error if the model cannot produce a prediction.
    fn estimate_sleep_duration(
        &self,
        wake_seconds: f64,
        sleep_hours: f64,
        coffee_count: f64,
    ) -> anyhow::Result<f64>;
}
