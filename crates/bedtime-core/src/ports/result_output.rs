//! Recommendation output port for writing results.

use crate::domain::BedtimeRecommendation;

/// Port for rendering bedtime recommendations.
pub trait RecommendationOutput: Send + Sync {
    /// Writes a single recommendation.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write(&self, rec: &BedtimeRecommendation) -> anyhow::Result<()>;

    /// Flushes any buffered output.
    ///
    /// # Errors
    ///
    /// Returns an error if flushing fails.
    fn flush(&self) -> anyhow::Result<()>;
}
