//! Record codec
//!
//! A [`Record`] is one measurement epoch of the navigation system. It has two
//! physical encodings with identical field order:
//!
//! - [`binary`]: 301-byte little-endian records (`.dat`)
//! - [`text`]: one tab-delimited line per record with fixed per-field
//!   precision (`.txt`)
//!
//! The field order lives in exactly two places, [`Record::read_fields`] and
//! [`Record::write_fields`]. Both codecs drive those through the
//! [`FieldSource`] / [`FieldSink`] traits, so the layouts cannot drift apart.

pub mod binary;
pub mod error;
pub mod text;

pub use error::{FormatError, FormatResult};

use crate::types::{Axes, OffDiagonal};
use serde::{Deserialize, Serialize};

/// Number of fields in one record
pub const FIELD_COUNT: usize = 79;

/// Size of one binary record in bytes
pub const RECORD_SIZE: usize = 301;

/// Size of the leading counter field in the binary layout
pub const COUNTER_SIZE: usize = 2;

/// How a floating point field is written in the text layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    /// Shortest representation that round-trips
    Plain,
    /// Fixed number of decimals with a sign column
    Fixed(usize),
}

/// One decoded measurement epoch
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Record {
    /// Epoch counter
    pub count: u16,
    /// Operating mode code
    pub mode: u16,
    pub system_time: f32,
    /// Time since the current mode was entered
    pub mode_time: f32,
    pub pitch: f32,
    pub roll: f32,
    pub heading: f32,
    pub azimuth: f32,
    /// True heading in decimal degrees
    pub thdg: f32,
    pub latitude: f32,
    pub longitude: f32,
    pub altitude: f32,
    /// East / North / Up velocity
    pub velocity: Axes<f32>,
    pub delta_attitude: Axes<f32>,
    pub delta_velocity: Axes<f32>,
    pub gyro: Axes<f32>,
    pub accel: Axes<f32>,
    pub coupling_voltage: Axes<f32>,
    pub hf_offset_voltage: Axes<f32>,
    pub output_force: Axes<f32>,
    pub dither_force: Axes<f32>,
    /// Gyroscope temperatures in hundredths of a degree Celsius
    pub gyro_temperature: Axes<i32>,
    pub accel_temperature: Axes<u32>,
    pub block_temperature: Axes<u32>,
    pub drift: Axes<f32>,
    /// Fault bitmask
    pub faults: u16,
    pub gyro_misalignment: OffDiagonal,
    pub gyro_scale: Axes<f32>,
    pub gyro_offset: Axes<f32>,
    pub accel_misalignment: OffDiagonal,
    pub accel_scale: Axes<f32>,
    pub accel_offset: Axes<f32>,
    pub reserved: u8,
    /// Carried through, never verified
    pub checksum: u8,
    pub error: u8,
}

/// Supplies field values in layout order.
pub trait FieldSource {
    fn read_u8(&mut self, field: &'static str) -> FormatResult<u8>;
    fn read_u16(&mut self, field: &'static str) -> FormatResult<u16>;
    fn read_i32(&mut self, field: &'static str) -> FormatResult<i32>;
    fn read_u32(&mut self, field: &'static str) -> FormatResult<u32>;
    fn read_f32(&mut self, field: &'static str) -> FormatResult<f32>;

    fn read_axes_f32(&mut self, field: &'static str) -> FormatResult<Axes<f32>> {
        Ok(Axes::new(
            self.read_f32(field)?,
            self.read_f32(field)?,
            self.read_f32(field)?,
        ))
    }

    fn read_axes_i32(&mut self, field: &'static str) -> FormatResult<Axes<i32>> {
        Ok(Axes::new(
            self.read_i32(field)?,
            self.read_i32(field)?,
            self.read_i32(field)?,
        ))
    }

    fn read_axes_u32(&mut self, field: &'static str) -> FormatResult<Axes<u32>> {
        Ok(Axes::new(
            self.read_u32(field)?,
            self.read_u32(field)?,
            self.read_u32(field)?,
        ))
    }

    fn read_off_diagonal(&mut self, field: &'static str) -> FormatResult<OffDiagonal> {
        let mut terms = [0.0f32; 6];
        for term in &mut terms {
            *term = self.read_f32(field)?;
        }
        Ok(OffDiagonal::from_array(terms))
    }
}

/// Consumes field values in layout order.
pub trait FieldSink {
    fn write_u8(&mut self, value: u8);
    fn write_u16(&mut self, value: u16);
    fn write_i32(&mut self, value: i32);
    fn write_u32(&mut self, value: u32);
    fn write_f32(&mut self, value: f32, style: TextStyle);

    fn write_axes_f32(&mut self, value: &Axes<f32>, style: TextStyle) {
        for v in value.to_array() {
            self.write_f32(v, style);
        }
    }

    fn write_axes_i32(&mut self, value: &Axes<i32>) {
        for v in value.to_array() {
            self.write_i32(v);
        }
    }

    fn write_axes_u32(&mut self, value: &Axes<u32>) {
        for v in value.to_array() {
            self.write_u32(v);
        }
    }

    fn write_off_diagonal(&mut self, value: &OffDiagonal, style: TextStyle) {
        for v in value.to_array() {
            self.write_f32(v, style);
        }
    }
}

impl Record {
    /// Read every field in layout order.
    ///
    /// Struct literal fields are evaluated in source order, so the order
    /// below is the layout.
    pub fn read_fields<S: FieldSource>(source: &mut S) -> FormatResult<Self> {
        Ok(Record {
            count: source.read_u16("count")?,
            mode: source.read_u16("mode")?,
            system_time: source.read_f32("system_time")?,
            mode_time: source.read_f32("mode_time")?,
            pitch: source.read_f32("pitch")?,
            roll: source.read_f32("roll")?,
            heading: source.read_f32("heading")?,
            azimuth: source.read_f32("azimuth")?,
            thdg: source.read_f32("thdg")?,
            latitude: source.read_f32("latitude")?,
            longitude: source.read_f32("longitude")?,
            altitude: source.read_f32("altitude")?,
            velocity: source.read_axes_f32("velocity")?,
            delta_attitude: source.read_axes_f32("delta_attitude")?,
            delta_velocity: source.read_axes_f32("delta_velocity")?,
            gyro: source.read_axes_f32("gyro")?,
            accel: source.read_axes_f32("accel")?,
            coupling_voltage: source.read_axes_f32("coupling_voltage")?,
            hf_offset_voltage: source.read_axes_f32("hf_offset_voltage")?,
            output_force: source.read_axes_f32("output_force")?,
            dither_force: source.read_axes_f32("dither_force")?,
            gyro_temperature: source.read_axes_i32("gyro_temperature")?,
            accel_temperature: source.read_axes_u32("accel_temperature")?,
            block_temperature: source.read_axes_u32("block_temperature")?,
            drift: source.read_axes_f32("drift")?,
            faults: source.read_u16("faults")?,
            gyro_misalignment: source.read_off_diagonal("gyro_misalignment")?,
            gyro_scale: source.read_axes_f32("gyro_scale")?,
            gyro_offset: source.read_axes_f32("gyro_offset")?,
            accel_misalignment: source.read_off_diagonal("accel_misalignment")?,
            accel_scale: source.read_axes_f32("accel_scale")?,
            accel_offset: source.read_axes_f32("accel_offset")?,
            reserved: source.read_u8("reserved")?,
            checksum: source.read_u8("checksum")?,
            error: source.read_u8("error")?,
        })
    }

    /// Write every field in layout order, with the text precision of each.
    pub fn write_fields<S: FieldSink>(&self, sink: &mut S) {
        use TextStyle::{Fixed, Plain};

        sink.write_u16(self.count);
        sink.write_u16(self.mode);
        sink.write_f32(self.system_time, Plain);
        sink.write_f32(self.mode_time, Plain);
        sink.write_f32(self.pitch, Fixed(5));
        sink.write_f32(self.roll, Fixed(5));
        sink.write_f32(self.heading, Fixed(2));
        sink.write_f32(self.azimuth, Fixed(5));
        sink.write_f32(self.thdg, Fixed(5));
        sink.write_f32(self.latitude, Fixed(5));
        sink.write_f32(self.longitude, Fixed(5));
        sink.write_f32(self.altitude, Fixed(2));
        sink.write_axes_f32(&self.velocity, Fixed(5));
        sink.write_axes_f32(&self.delta_attitude, Fixed(5));
        sink.write_axes_f32(&self.delta_velocity, Fixed(5));
        sink.write_axes_f32(&self.gyro, Fixed(2));
        sink.write_axes_f32(&self.accel, Fixed(5));
        sink.write_axes_f32(&self.coupling_voltage, Fixed(2));
        sink.write_axes_f32(&self.hf_offset_voltage, Fixed(2));
        sink.write_axes_f32(&self.output_force, Fixed(1));
        sink.write_axes_f32(&self.dither_force, Fixed(1));
        sink.write_axes_i32(&self.gyro_temperature);
        sink.write_axes_u32(&self.accel_temperature);
        sink.write_axes_u32(&self.block_temperature);
        sink.write_axes_f32(&self.drift, Fixed(0));
        sink.write_u16(self.faults);
        sink.write_off_diagonal(&self.gyro_misalignment, Fixed(2));
        sink.write_axes_f32(&self.gyro_scale, Fixed(5));
        sink.write_axes_f32(&self.gyro_offset, Fixed(5));
        sink.write_off_diagonal(&self.accel_misalignment, Fixed(5));
        // Scale coefficients 1 and 2 are whole-ish numbers, 3 is not
        sink.write_f32(self.accel_scale.x, Fixed(1));
        sink.write_f32(self.accel_scale.y, Fixed(1));
        sink.write_f32(self.accel_scale.z, Fixed(5));
        sink.write_axes_f32(&self.accel_offset, Fixed(5));
        sink.write_u8(self.reserved);
        sink.write_u8(self.checksum);
        sink.write_u8(self.error);
    }
}
