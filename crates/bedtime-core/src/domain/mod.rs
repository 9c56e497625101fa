//! Core domain types for bedtime recommendation.

mod clock;
mod inputs;
mod recommendation;

pub use clock::{default_wake_time, format_clock, parse_clock};
pub use inputs::{CoffeeIntake, SleepAmount};
pub use recommendation::BedtimeRecommendation;
