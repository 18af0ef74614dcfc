//! Per-field statistics over a run of records
//!
//! Each function takes a field selector so the same code serves every
//! channel of the record.

use crate::record::Record;

/// Arithmetic mean of the selected field; 0.0 for no records
pub fn mean_by<F>(records: &[Record], field: F) -> f64
where
    F: Fn(&Record) -> f64,
{
    if records.is_empty() {
        return 0.0;
    }
    records.iter().map(&field).sum::<f64>() / records.len() as f64
}

/// Sample standard deviation of the selected field (Bessel's correction).
///
/// Fewer than two records show no spread, so the result is 0.0 rather than
/// a division by zero.
pub fn std_dev_by<F>(records: &[Record], field: F) -> f64
where
    F: Fn(&Record) -> f64,
{
    if records.len() < 2 {
        return 0.0;
    }
    let mean = mean_by(records, &field);
    let squares: f64 = records
        .iter()
        .map(|r| {
            let d = field(r) - mean;
            d * d
        })
        .sum();
    (squares / (records.len() - 1) as f64).sqrt()
}

/// Mean of a raw temperature channel, in whole degrees.
///
/// Sensors report hundredths of a degree; both divisions truncate.
pub fn temperature_mean_by<F>(records: &[Record], field: F) -> i32
where
    F: Fn(&Record) -> i64,
{
    if records.is_empty() {
        return 0;
    }
    let sum: i64 = records.iter().map(field).sum();
    let mean = sum / records.len() as i64 / 100;
    mean.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
