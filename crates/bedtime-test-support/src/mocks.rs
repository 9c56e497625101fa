//! Mock implementations of core port traits.

use std::sync::{Arc, Mutex, PoisonError};

use bedtime_core::domain::BedtimeRecommendation;
use bedtime_core::ports::{RecommendationOutput, SleepModel};

/// Mock implementation of `SleepModel` returning a fixed duration.
pub struct StubSleepModel {
    seconds: f64,
}

impl StubSleepModel {
    /// Creates a stub that always predicts the given duration in seconds.
    #[must_use]
    pub fn new(seconds: f64) -> Self {
        Self { seconds }
    }
}

impl SleepModel for StubSleepModel {
    fn estimate_sleep_duration(&self, _: f64, _: f64, _: f64) -> anyhow::Result<f64> {
        Ok(self.seconds)
    }
}

/// Mock implementation of `SleepModel` that always fails.
pub struct FailingSleepModel;

impl SleepModel for FailingSleepModel {
    fn estimate_sleep_duration(&self, _: f64, _: f64, _: f64) -> anyhow::Result<f64> {
        anyhow::bail!("stub model failure")
    }
}

/// Mock implementation of `SleepModel` that records every invocation.
///
/// Returns a fixed duration and tracks the raw inputs for assertions.
pub struct RecordingSleepModel {
    seconds: f64,
    calls: Arc<Mutex<Vec<(f64, f64, f64)>>>,
}

impl RecordingSleepModel {
    /// Creates a recording model returning the given duration.
    #[must_use]
    pub fn new(seconds: f64) -> Self {
        Self {
            seconds,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns all recorded `(wake_seconds, sleep_hours, coffee_count)` calls.
    #[must_use]
    pub fn calls(&self) -> Vec<(f64, f64, f64)> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the number of invocations.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls().len()
    }
}

impl SleepModel for RecordingSleepModel {
    fn estimate_sleep_duration(
        &self,
        wake_seconds: f64,
        sleep_hours: f64,
        coffee_count: f64,
    ) -> anyhow::Result<f64> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((wake_seconds, sleep_hours, coffee_count));
        Ok(self.seconds)
    }
}

/// Mock implementation of `RecommendationOutput` for testing.
///
/// Captures recommendations for later assertions.
pub struct MockRecommendationOutput {
    written: Arc<Mutex<Vec<BedtimeRecommendation>>>,
    flush_count: Arc<Mutex<usize>>,
}

impl MockRecommendationOutput {
    /// Creates a new mock output.
    #[must_use]
    pub fn new() -> Self {
        Self {
            written: Arc::new(Mutex::new(Vec::new())),
            flush_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Returns all captured recommendations.
    #[must_use]
    pub fn written(&self) -> Vec<BedtimeRecommendation> {
        self.written
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the number of times `flush()` was called.
    #[must_use]
    pub fn flush_count(&self) -> usize {
        *self
            .flush_count
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MockRecommendationOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationOutput for MockRecommendationOutput {
    fn write(&self, rec: &BedtimeRecommendation) -> anyhow::Result<()> {
        self.written
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(rec.clone());
        Ok(())
    }

    fn flush(&self) -> anyhow::Result<()> {
        if let Ok(mut c) = self.flush_count.lock() {
            *c += 1;
        }
        Ok(())
    }
}
