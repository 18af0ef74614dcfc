//! Display layout of a session summary
//!
//! A summary is shown as three fixed rows:
//!
//! | left             | angle            | deviation |
//! |------------------|------------------|-----------|
//! | heading          | true heading     | X         |
//! | mean temperature | roll             | Y         |
//! | duration         | pitch            | Z         |
//!
//! Each angle is followed by its error cell, which carries a flag so the
//! caller can highlight it.

use rust_i18n::t;

use super::SummaryFlags;
use crate::analysis::{AngleDecomposition, SessionSummary};

/// One display row of a summary
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub label: String,
    pub value: String,
    pub angle_label: String,
    pub angle: String,
    pub error: String,
    /// The error exceeds its limit
    pub flagged: bool,
    pub axis: &'static str,
    pub deviation: f64,
}

impl ReportRow {
    fn new(
        label: String,
        value: String,
        angle_label: String,
        angle: &AngleDecomposition,
        flagged: bool,
        axis: &'static str,
        deviation: f64,
    ) -> Self {
        Self {
            label,
            value,
            angle_label,
            angle: format!(
                "{}°{:>2}'{:>2}\"",
                angle.degree_label(),
                angle.minute,
                angle.second
            ),
            error: angle.error_label(),
            flagged,
            axis,
            deviation,
        }
    }

    /// Lay the row out in fixed-width columns.
    ///
    /// `style` receives the padded error cell and the flag, and returns the
    /// text to print in its place.
    pub fn line_with<F>(&self, style: F) -> String
    where
        F: FnOnce(String, bool) -> String,
    {
        let error = style(format!("{:>12}", self.error), self.flagged);
        format!(
            "{:<16}{:>10}{:>10}{:>14}{}{:>6}{:>10.4}",
            self.label, self.value, self.angle_label, self.angle, error, self.axis, self.deviation
        )
    }
}

/// Build the three display rows of a summary in the current language
pub fn summary_rows(summary: &SessionSummary, flags: &SummaryFlags) -> [ReportRow; 3] {
    [
        ReportRow::new(
            t!("report.heading").to_string(),
            format!("{}°", summary.heading),
            t!("report.thdg").to_string(),
            &summary.thdg,
            flags.thdg,
            "X",
            summary.deviation.x,
        ),
        ReportRow::new(
            t!("report.temperature").to_string(),
            format!("{}°C", summary.average_temperature()),
            t!("report.roll").to_string(),
            &summary.roll,
            flags.roll,
            "Y",
            summary.deviation.y,
        ),
        ReportRow::new(
            t!("report.duration").to_string(),
            t!("report.seconds", count = summary.duration).to_string(),
            t!("report.pitch").to_string(),
            &summary.pitch,
            flags.pitch,
            "Z",
            summary.deviation.z,
        ),
    ]
}
