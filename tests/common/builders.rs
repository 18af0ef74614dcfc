//! Test data builders for records and log sources

use std::path::{Path, PathBuf};

use bins_analyzer::record::{binary, text};
use bins_analyzer::{Axes, Record, Representation};

/// Builder for creating test Records
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    pub fn new(count: u16) -> Self {
        Self {
            record: Record {
                count,
                mode: 1,
                system_time: f32::from(count) * 0.1,
                gyro_temperature: Axes::splat(2500),
                ..Default::default()
            },
        }
    }

    pub fn attitude(mut self, thdg: f32, roll: f32, pitch: f32) -> Self {
        self.record.thdg = thdg;
        self.record.roll = roll;
        self.record.pitch = pitch;
        self
    }

    pub fn gyro(mut self, x: f32, y: f32, z: f32) -> Self {
        self.record.gyro = Axes::new(x, y, z);
        self
    }

    pub fn gyro_temperature(mut self, x: i32, y: i32, z: i32) -> Self {
        self.record.gyro_temperature = Axes::new(x, y, z);
        self
    }

    pub fn build(self) -> Record {
        self.record
    }
}

/// Records with consecutive counters `start..=end`
pub fn counter_ramp(start: u16, end: u16) -> Vec<Record> {
    (start..=end)
        .map(|count| RecordBuilder::new(count).attitude(300.1523, -0.5, 1.25).build())
        .collect()
}

/// Encode records as a binary log
pub fn binary_log(records: &[Record]) -> Vec<u8> {
    let mut out = Vec::new();
    for record in records {
        binary::encode_into(record, &mut out);
    }
    out
}

/// Encode records as a text log
pub fn text_log(records: &[Record]) -> String {
    records.iter().map(text::encode).collect()
}

/// Encode records in `representation`
pub fn log_bytes(records: &[Record], representation: Representation) -> Vec<u8> {
    match representation {
        Representation::Binary => binary_log(records),
        Representation::Text => text_log(records).into_bytes(),
    }
}

/// Write a log named `stem` with the representation's extension into `dir`
pub fn write_log(
    dir: &Path,
    stem: &str,
    records: &[Record],
    representation: Representation,
) -> PathBuf {
    let path = dir.join(format!("{}.{}", stem, representation.extension()));
    std::fs::write(&path, log_bytes(records, representation)).unwrap();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_builder() {
        let record = RecordBuilder::new(600)
            .attitude(1.0, 2.0, 3.0)
            .gyro(0.1, 0.2, 0.3)
            .build();

        assert_eq!(record.count, 600);
        assert_eq!(record.pitch, 3.0);
        assert_eq!(record.gyro.y, 0.2);
        assert_eq!(record.gyro_temperature.x, 2500);
    }
}
