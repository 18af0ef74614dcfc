//! Analysis settings
//!
//! Thresholds used when reporting session summaries. These are persisted as
//! part of [`AppConfig`](super::AppConfig).

use serde::{Deserialize, Serialize};

/// Default heading error limit, arc-seconds (7'12")
pub const DEFAULT_HEADING_ARCSEC: u32 = 432;

/// Default roll / pitch error limit, arc-seconds (1'48")
pub const DEFAULT_ATTITUDE_ARCSEC: u32 = 108;

/// Error limits above which a summary cell is flagged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorThresholds {
    /// Limit for the true heading error
    #[serde(default = "default_heading_arcsec")]
    pub heading_arcsec: u32,

    /// Limit for the roll and pitch errors
    #[serde(default = "default_attitude_arcsec")]
    pub attitude_arcsec: u32,
}

fn default_heading_arcsec() -> u32 {
    DEFAULT_HEADING_ARCSEC
}

fn default_attitude_arcsec() -> u32 {
    DEFAULT_ATTITUDE_ARCSEC
}

impl Default for ErrorThresholds {
    fn default() -> Self {
        Self {
            heading_arcsec: DEFAULT_HEADING_ARCSEC,
            attitude_arcsec: DEFAULT_ATTITUDE_ARCSEC,
        }
    }
}

impl ErrorThresholds {
    /// Check a heading error against its limit (strictly greater is flagged)
    pub fn heading_exceeded(&self, arcsec: u32) -> bool {
        arcsec > self.heading_arcsec
    }

    /// Check a roll or pitch error against its limit
    pub fn attitude_exceeded(&self, arcsec: u32) -> bool {
        arcsec > self.attitude_arcsec
    }
}
