//! Binary record layout
//!
//! Format (301 bytes, little-endian, no padding):
//! - counter, mode: u16
//! - 49 x f32/i32/u32: times, attitude, position, velocity, sensor triads,
//!   temperatures, drift
//! - faults: u16
//! - 24 x f32: misalignment, scale and offset coefficients
//! - reserved, checksum, error: u8

use super::{
    FieldSink, FieldSource, FormatError, FormatResult, Record, TextStyle, COUNTER_SIZE, RECORD_SIZE,
};

/// Cursor over the bytes of one record
struct BinaryReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> BinaryReader<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn take<const N: usize>(&mut self) -> FormatResult<[u8; N]> {
        let end = self.pos + N;
        let bytes = self
            .buf
            .get(self.pos..end)
            .ok_or(FormatError::Truncated {
                expected: RECORD_SIZE,
                found: self.buf.len(),
            })?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        self.pos = end;
        Ok(out)
    }
}

impl FieldSource for BinaryReader<'_> {
    fn read_u8(&mut self, _field: &'static str) -> FormatResult<u8> {
        Ok(self.take::<1>()?[0])
    }

    fn read_u16(&mut self, _field: &'static str) -> FormatResult<u16> {
        Ok(u16::from_le_bytes(self.take()?))
    }

    fn read_i32(&mut self, _field: &'static str) -> FormatResult<i32> {
        Ok(i32::from_le_bytes(self.take()?))
    }

    fn read_u32(&mut self, _field: &'static str) -> FormatResult<u32> {
        Ok(u32::from_le_bytes(self.take()?))
    }

    fn read_f32(&mut self, _field: &'static str) -> FormatResult<f32> {
        Ok(f32::from_le_bytes(self.take()?))
    }
}

struct BinaryWriter<'a> {
    out: &'a mut Vec<u8>,
}

impl FieldSink for BinaryWriter<'_> {
    fn write_u8(&mut self, value: u8) {
        self.out.push(value);
    }

    fn write_u16(&mut self, value: u16) {
        self.out.extend_from_slice(&value.to_le_bytes());
    }

    fn write_i32(&mut self, value: i32) {
        self.out.extend_from_slice(&value.to_le_bytes());
    }

    fn write_u32(&mut self, value: u32) {
        self.out.extend_from_slice(&value.to_le_bytes());
    }

    fn write_f32(&mut self, value: f32, _style: TextStyle) {
        self.out.extend_from_slice(&value.to_le_bytes());
    }
}

/// Decode the record at the start of `buf`.
///
/// Consumes exactly [`RECORD_SIZE`] bytes; anything after that is ignored.
pub fn decode(buf: &[u8]) -> FormatResult<Record> {
    if buf.len() < RECORD_SIZE {
        return Err(FormatError::Truncated {
            expected: RECORD_SIZE,
            found: buf.len(),
        });
    }
    let mut reader = BinaryReader::new(&buf[..RECORD_SIZE]);
    Record::read_fields(&mut reader)
}

/// Read only the leading counter of the record at the start of `buf`
pub fn peek_counter(buf: &[u8]) -> Option<u16> {
    let bytes = buf.get(..COUNTER_SIZE)?;
    bytes.try_into().ok().map(u16::from_le_bytes)
}

/// Append the encoded record to `out`
pub fn encode_into(record: &Record, out: &mut Vec<u8>) {
    out.reserve(RECORD_SIZE);
    record.write_fields(&mut BinaryWriter { out });
}

/// Encode a record into a fresh buffer of [`RECORD_SIZE`] bytes
pub fn encode(record: &Record) -> Vec<u8> {
    let mut out = Vec::with_capacity(RECORD_SIZE);
    encode_into(record, &mut out);
    out
}
