//! Text record layout
//!
//! One record per line, fields separated by a single tab, in the same order
//! as the binary layout. Fixed-precision floats carry a sign column (a space
//! for non-negative values), so columns line up when the file is opened in a
//! spreadsheet with a tab delimiter.

use super::{FieldSink, FieldSource, FormatError, FormatResult, Record, TextStyle, FIELD_COUNT};
use std::fmt::Write;
use std::str::{FromStr, SplitWhitespace};

struct TokenReader<'a> {
    tokens: SplitWhitespace<'a>,
    read: usize,
}

impl<'a> TokenReader<'a> {
    fn new(line: &'a str) -> Self {
        Self {
            tokens: line.split_whitespace(),
            read: 0,
        }
    }

    fn parse<T: FromStr>(&mut self, field: &'static str) -> FormatResult<T> {
        let token = self.tokens.next().ok_or(FormatError::Truncated {
            expected: FIELD_COUNT,
            found: self.read,
        })?;
        self.read += 1;
        token.parse().map_err(|_| FormatError::Malformed {
            field,
            token: token.to_string(),
        })
    }
}

impl FieldSource for TokenReader<'_> {
    fn read_u8(&mut self, field: &'static str) -> FormatResult<u8> {
        self.parse(field)
    }

    fn read_u16(&mut self, field: &'static str) -> FormatResult<u16> {
        self.parse(field)
    }

    fn read_i32(&mut self, field: &'static str) -> FormatResult<i32> {
        self.parse(field)
    }

    fn read_u32(&mut self, field: &'static str) -> FormatResult<u32> {
        self.parse(field)
    }

    fn read_f32(&mut self, field: &'static str) -> FormatResult<f32> {
        self.parse(field)
    }
}

struct TextWriter<'a> {
    out: &'a mut String,
    first: bool,
}

impl TextWriter<'_> {
    fn separator(&mut self) {
        if self.first {
            self.first = false;
        } else {
            self.out.push('\t');
        }
    }

    fn plain(&mut self, value: impl std::fmt::Display) {
        self.separator();
        // Writing into a String cannot fail
        let _ = write!(self.out, "{}", value);
    }
}

impl FieldSink for TextWriter<'_> {
    fn write_u8(&mut self, value: u8) {
        self.plain(value);
    }

    fn write_u16(&mut self, value: u16) {
        self.plain(value);
    }

    fn write_i32(&mut self, value: i32) {
        self.plain(value);
    }

    fn write_u32(&mut self, value: u32) {
        self.plain(value);
    }

    fn write_f32(&mut self, value: f32, style: TextStyle) {
        match style {
            TextStyle::Plain => self.plain(value),
            TextStyle::Fixed(decimals) => {
                self.separator();
                if !value.is_sign_negative() {
                    self.out.push(' ');
                }
                let _ = write!(self.out, "{:.*}", decimals, value);
            }
        }
    }
}

/// Decode one text line into a record.
///
/// Fewer than [`FIELD_COUNT`] tokens is [`FormatError::Truncated`]; a token
/// that does not parse, or any token past the last field, is
/// [`FormatError::Malformed`].
pub fn decode(line: &str) -> FormatResult<Record> {
    let mut reader = TokenReader::new(line);
    let record = Record::read_fields(&mut reader)?;
    match reader.tokens.next() {
        Some(extra) => Err(FormatError::Malformed {
            field: "end of record",
            token: extra.to_string(),
        }),
        None => Ok(record),
    }
}

/// Read only the leading counter of a text line.
///
/// Returns `None` for a blank line.
pub fn peek_counter(line: &str) -> Option<FormatResult<u16>> {
    line.split_whitespace().next().map(|token| {
        token.parse().map_err(|_| FormatError::Malformed {
            field: "count",
            token: token.to_string(),
        })
    })
}

/// Append the encoded record, including the trailing newline, to `out`
pub fn encode_into(record: &Record, out: &mut String) {
    record.write_fields(&mut TextWriter { out, first: true });
    out.push('\n');
}

/// Encode a record as one text line, including the trailing newline
pub fn encode(record: &Record) -> String {
    let mut out = String::with_capacity(512);
    encode_into(record, &mut out);
    out
}
