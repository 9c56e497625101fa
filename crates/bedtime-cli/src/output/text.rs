//! Human-readable text output adapter.

use anyhow::Result;
use bedtime_core::{BedtimeRecommendation, RecommendationOutput};
use std::io::{self, Write};
use std::sync::Mutex;

use super::IDEAL_BEDTIME_PREFIX;

/// Text output adapter rendering the original form's result line.
pub struct TextOutput {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl TextOutput {
    /// Creates a new text output writing to stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    /// Creates a new text output writing to the given writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write + Send>) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }
}

impl RecommendationOutput for TextOutput {
    #[allow(clippy::significant_drop_tightening)]
    fn write(&self, rec: &BedtimeRecommendation) -> Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| anyhow::anyhow!("Lock poisoned: {e}"))?;
        writeln!(writer, "{IDEAL_BEDTIME_PREFIX}{}", rec.bedtime)?;
        Ok(())
    }

    #[allow(clippy::significant_drop_tightening)]
    fn flush(&self) -> Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| anyhow::anyhow!("Lock poisoned: {e}"))?;
        writer.flush()?;
        Ok(())
    }
}
