//! Bedtime Core - Domain logic and sleep model inference
//!
//! This crate contains the core domain types, the sleep model port, the
//! bedtime predictor, and the candle-based regression model implementation.

pub mod domain;
pub mod inference;
pub mod ports;
pub mod predictor;

pub use domain::{
    default_wake_time, format_clock, parse_clock, BedtimeRecommendation, CoffeeIntake, SleepAmount,
};
pub use ports::{RecommendationOutput, SleepModel};
pub use predictor::{predict, PredictionError};
