//! Sleep model inference.
//!
//! The shipped [`SleepModel`](crate::ports::SleepModel) implementation: a
//! linear regression head over the three input features, loaded either from
//! a safetensors artifact or from built-in placeholder coefficients.

mod loader;
mod regressor;

pub use loader::{load_safetensors, LazyModel};
pub use regressor::{
    ArtifactSleepModel, BuiltinSleepModel, SleepRegressor, BIAS, COFFEE_WEIGHT, SLEEP_WEIGHT,
    WAKE_WEIGHT,
};
