//! Linear sleep regressor.
//!
//! The pre-trained model is a single linear head over the raw feature vector
//! `[wake_seconds, sleep_hours, coffee_count]`, producing the estimated
//! sleep duration in seconds. Inference always runs on CPU; there is no GPU
//! path for a four-parameter model.

// Allow common ML code patterns
#![allow(clippy::cast_possible_truncation)]

use std::path::Path;

use anyhow::{Context, Result};
use candle_core::{DType, Device, Module, Tensor};
use candle_nn::{linear, Linear, VarBuilder};
use once_cell::sync::OnceCell;

use super::LazyModel;
use crate::ports::SleepModel;

/// Built-in coefficient: seconds of sleep per wake-second.
pub const WAKE_WEIGHT: f32 = 1.86e-3;
/// Built-in coefficient: seconds of sleep per desired hour.
pub const SLEEP_WEIGHT: f32 = 3471.1;
/// Built-in coefficient: seconds of sleep per daily cup.
pub const COFFEE_WEIGHT: f32 = 148.5;
/// Built-in intercept in seconds.
pub const BIAS: f32 = 643.2;

/// Sleep duration regressor.
///
/// Input: `[wake_seconds, sleep_hours, coffee_count]` as f32
/// Output: estimated sleep duration in seconds
pub struct SleepRegressor {
    linear: Linear,
    device: Device,
}

impl SleepRegressor {
    /// Creates a regressor from artifact weights.
    ///
    /// Expects tensors `linear.weight` (shape `[1, 3]`) and `linear.bias`
    /// (shape `[1]`).
    ///
    /// # Errors
    ///
    /// Returns an error if the weights are missing or have the wrong shape.
    #[allow(clippy::needless_pass_by_value)]
    pub fn new(vb: VarBuilder) -> Result<Self> {
        let device = vb.device().clone();
        let linear = linear(3, 1, vb.pp("linear")).context("Failed to build regression head")?;
        Ok(Self { linear, device })
    }

    /// Creates a regressor from the built-in placeholder coefficients.
    ///
    /// Stands in for the original pre-trained artifact while satisfying the
    /// same numeric contract.
    ///
    /// # Errors
    ///
    /// Returns an error if the coefficient tensors cannot be constructed.
    pub fn builtin() -> Result<Self> {
        let device = Device::Cpu;
        let weight = Tensor::new(&[[WAKE_WEIGHT, SLEEP_WEIGHT, COFFEE_WEIGHT]], &device)?;
        let bias = Tensor::new(&[BIAS], &device)?;
        Ok(Self {
            linear: Linear::new(weight, Some(bias)),
            device,
        })
    }

    /// Returns the model coefficients as
    /// `(wake_weight, sleep_weight, coffee_weight, bias)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the weight tensors cannot be read back.
    pub fn coefficients(&self) -> Result<(f32, f32, f32, f32)> {
        let weights = self.linear.weight().flatten_all()?.to_vec1::<f32>()?;
        let [wake, sleep, coffee] = weights.as_slice() else {
            anyhow::bail!("regression head has {} weights, expected 3", weights.len());
        };
        let bias = match self.linear.bias() {
            Some(b) => b.flatten_all()?.get(0)?.to_scalar::<f32>()?,
            None => 0.0,
        };
        Ok((*wake, *sleep, *coffee, bias))
    }

    fn forward(&self, features: [f32; 3]) -> Result<f64> {
        let input = Tensor::new(&[features], &self.device)?;
        let output = self.linear.forward(&input)?;
        let seconds = output
            .to_dtype(DType::F32)?
            .flatten_all()?
            .get(0)?
            .to_scalar::<f32>()?;
        Ok(f64::from(seconds))
    }
}

impl SleepModel for SleepRegressor {
    fn estimate_sleep_duration(
        &self,
        wake_seconds: f64,
        sleep_hours: f64,
        coffee_count: f64,
    ) -> Result<f64> {
        self.forward([wake_seconds as f32, sleep_hours as f32, coffee_count as f32])
            .context("Sleep regressor inference failed")
    }
}

/// Sleep model using the built-in coefficients, constructed on first use.
///
/// Construction is deferred like the artifact path, so a coefficient
/// failure surfaces through the prediction path instead of needing its own
/// error handling at every call site.
#[derive(Default)]
pub struct BuiltinSleepModel {
    lazy: OnceCell<SleepRegressor>,
}

impl BuiltinSleepModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SleepModel for BuiltinSleepModel {
    fn estimate_sleep_duration(
        &self,
        wake_seconds: f64,
        sleep_hours: f64,
        coffee_count: f64,
    ) -> Result<f64> {
        self.lazy
            .get_or_try_init(SleepRegressor::builtin)?
            .estimate_sleep_duration(wake_seconds, sleep_hours, coffee_count)
    }
}

/// Sleep model backed by a safetensors artifact on disk.
///
/// The artifact is loaded lazily on the first prediction, so a missing or
/// corrupt file surfaces through the same failure path as a prediction
/// error, matching the original program's single guarded block.
pub struct ArtifactSleepModel {
    lazy: LazyModel<SleepRegressor>,
}

impl ArtifactSleepModel {
    /// Creates an artifact-backed model. The file is not touched yet.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            lazy: LazyModel::new(path, Device::Cpu, SleepRegressor::new),
        }
    }

    /// Loads the artifact now and returns the regressor.
    ///
    /// # Errors
    ///
    /// Returns an error if the artifact cannot be read or has the wrong
    /// shape.
    pub fn load(&self) -> Result<&SleepRegressor> {
        self.lazy.get()
    }
}

impl SleepModel for ArtifactSleepModel {
    fn estimate_sleep_duration(
        &self,
        wake_seconds: f64,
        sleep_hours: f64,
        coffee_count: f64,
    ) -> Result<f64> {
        self.lazy
            .get()?
            .estimate_sleep_duration(wake_seconds, sleep_hours, coffee_count)
    }
}
