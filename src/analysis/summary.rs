//! Session summary: the fixed-shape result of analyzing one session

use serde::{Deserialize, Serialize};

use super::angle::AngleDecomposition;
use super::stats::{std_dev_by, temperature_mean_by};
use crate::session::Session;
use crate::types::{Axes, COUNTER_ANCHOR};

/// Accuracy figures derived from one session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// True heading at the reference record
    pub thdg: AngleDecomposition,
    pub roll: AngleDecomposition,
    pub pitch: AngleDecomposition,
    /// True heading rounded to whole degrees, in `0..360`
    pub heading: u16,
    /// Counter of the last record
    pub duration: u32,
    /// Gyroscope standard deviation per axis
    pub deviation: Axes<f64>,
    /// Mean gyroscope temperature per axis, whole degrees
    pub temperature: Axes<i32>,
    pub reference_index: usize,
    pub record_count: usize,
}

impl SessionSummary {
    /// Mean of the three axis temperatures, truncated
    pub fn average_temperature(&self) -> i32 {
        let t = self.temperature;
        ((i64::from(t.x) + i64::from(t.y) + i64::from(t.z)) / 3) as i32
    }
}

/// Index of the record the attitude figures are taken from.
///
/// A session that starts past the counter anchor uses its second record;
/// otherwise the first record whose counter equals the anchor; otherwise the
/// last record.
pub fn reference_index(session: &Session) -> usize {
    if session.first().count > COUNTER_ANCHOR {
        return 1.min(session.last_index());
    }
    session
        .iter()
        .position(|r| r.count == COUNTER_ANCHOR)
        .unwrap_or_else(|| session.last_index())
}

/// Analyze a decoded session
pub fn analyze(session: &Session) -> SessionSummary {
    let index = reference_index(session);
    let reference = session.get(index).unwrap_or_else(|| session.last());
    let records = session.records();

    let heading = f64::from(reference.thdg).round().rem_euclid(360.0) as u16;

    SessionSummary {
        thdg: AngleDecomposition::from_degrees(reference.thdg),
        roll: AngleDecomposition::from_degrees(reference.roll),
        pitch: AngleDecomposition::from_degrees(reference.pitch),
        heading,
        duration: u32::from(session.last().count),
        deviation: Axes::new(
            std_dev_by(records, |r| f64::from(r.gyro.x)),
            std_dev_by(records, |r| f64::from(r.gyro.y)),
            std_dev_by(records, |r| f64::from(r.gyro.z)),
        ),
        temperature: Axes::new(
            temperature_mean_by(records, |r| i64::from(r.gyro_temperature.x)),
            temperature_mean_by(records, |r| i64::from(r.gyro_temperature.y)),
            temperature_mean_by(records, |r| i64::from(r.gyro_temperature.z)),
        ),
        reference_index: index,
        record_count: session.len(),
    }
}
