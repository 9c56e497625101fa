//! Bedtime predictor.
//!
//! The one piece of real logic: convert the wake time to the model's input
//! space, delegate to the injected model, and subtract the predicted sleep
//! duration from the wake time. Pure and deterministic given the model.

use thiserror::Error;
use time::{Duration, Time};
use tracing::debug;

use crate::domain::{CoffeeIntake, SleepAmount};
use crate::ports::SleepModel;

/// Prediction failure.
///
/// All model failures collapse into this single category; construction and
/// prediction errors alike are not distinguished. The cause is kept as the
/// error source for logs but callers render one fixed message.
#[derive(Debug, Error)]
#[error("failed to calculate a bedtime")]
pub struct PredictionError(#[source] anyhow::Error);

impl From<anyhow::Error> for PredictionError {
    fn from(cause: anyhow::Error) -> Self {
        Self(cause)
    }
}

/// Computes the recommended bedtime for the given inputs.
///
/// The wake time enters the model as seconds since midnight (seconds within
/// the minute are ignored); the cup count is widened to a float per the
/// model's input contract. The model's predicted sleep duration is then
/// subtracted from the wake time, wrapping backward across midnight when the
/// bedtime falls on the previous day.
///
/// # Errors
///
/// Returns [`PredictionError`] if the model fails or yields a duration
/// outside a single day (negative, 24 hours or more, or non-finite).
pub fn predict(
    wake: Time,
    sleep: SleepAmount,
    coffee: CoffeeIntake,
    model: &dyn SleepModel,
) -> Result<Time, PredictionError> {
    let wake_seconds = f64::from(wake.hour()) * 3600.0 + f64::from(wake.minute()) * 60.0;

    let predicted = model.estimate_sleep_duration(wake_seconds, sleep.hours(), f64::from(coffee.cups()))?;
    // The model estimates one night's sleep. A negative, day-or-longer, or
    // non-finite duration is a model failure, not something to clamp.
    if !(0.0..86_400.0).contains(&predicted) {
        return Err(anyhow::anyhow!("model returned an unusable duration: {predicted}").into());
    }
    debug!(wake_seconds, predicted, "model prediction");

    Ok(wake - Duration::seconds_f64(predicted))
}
