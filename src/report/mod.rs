//! Reporting of session summaries
//!
//! - [`SummaryFlags`] marks angle errors that exceed the configured limits
//! - [`render`] lays a summary out as three localized rows for display
//! - [`export`] writes the tab-delimited report file

pub mod export;
pub mod render;

pub use crate::config::ErrorThresholds;
pub use export::write_report;
pub use render::{summary_rows, ReportRow};

use crate::analysis::SessionSummary;

/// Which angle errors of a summary exceed their limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SummaryFlags {
    pub thdg: bool,
    pub roll: bool,
    pub pitch: bool,
}

impl SummaryFlags {
    pub fn evaluate(summary: &SessionSummary, thresholds: &ErrorThresholds) -> Self {
        Self {
            thdg: thresholds.heading_exceeded(summary.thdg.error_arcseconds()),
            roll: thresholds.attitude_exceeded(summary.roll.error_arcseconds()),
            pitch: thresholds.attitude_exceeded(summary.pitch.error_arcseconds()),
        }
    }

    /// True if any error is flagged
    pub fn any(&self) -> bool {
        self.thdg || self.roll || self.pitch
    }
}
