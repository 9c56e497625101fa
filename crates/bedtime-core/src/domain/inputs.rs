//! Validated user inputs.
//!
//! The predictor performs no clamping; these constructors are the only way
//! to obtain the input types, so every value reaching the model is already
//! within its declared bounds.

use anyhow::Result;

/// Desired sleep duration in hours.
///
/// Valid values lie in `4.0..=12.0` in steps of a quarter hour, matching the
/// granularity the input form offered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SleepAmount(f64);

impl SleepAmount {
    /// Minimum accepted hours.
    pub const MIN: f64 = 4.0;
    /// Maximum accepted hours.
    pub const MAX: f64 = 12.0;
    /// Input granularity in hours.
    pub const STEP: f64 = 0.25;

    /// Creates a validated sleep amount.
    ///
    /// # Errors
    ///
    /// Returns an error if `hours` is outside `4.0..=12.0` or not a multiple
    /// of 0.25.
    pub fn new(hours: f64) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&hours) {
            anyhow::bail!("sleep amount must be {}-{} hours, got {hours}", Self::MIN, Self::MAX);
        }
        let quarters = hours / Self::STEP;
        if (quarters - quarters.round()).abs() > 1e-9 {
            anyhow::bail!("sleep amount must be a multiple of {} hours, got {hours}", Self::STEP);
        }
        Ok(Self(hours))
    }

    /// Returns the amount in hours.
    #[must_use]
    pub const fn hours(self) -> f64 {
        self.0
    }
}

impl Default for SleepAmount {
    fn default() -> Self {
        Self(8.0)
    }
}

/// Daily coffee intake as a cup count.
///
/// Valid values lie in `1..=20`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoffeeIntake(u32);

impl CoffeeIntake {
    /// Minimum accepted cup count.
    pub const MIN: u32 = 1;
    /// Maximum accepted cup count.
    pub const MAX: u32 = 20;

    /// Creates a validated coffee intake.
    ///
    /// # Errors
    ///
    /// Returns an error if `cups` is outside `1..=20`.
    pub fn new(cups: u32) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&cups) {
            anyhow::bail!("coffee intake must be {}-{} cups, got {cups}", Self::MIN, Self::MAX);
        }
        Ok(Self(cups))
    }

    /// Returns the cup count.
    #[must_use]
    pub const fn cups(self) -> u32 {
        self.0
    }
}

impl Default for CoffeeIntake {
    fn default() -> Self {
        Self(1)
    }
}
