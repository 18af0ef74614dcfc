//! Session decoder: whole source -> [`Session`]
//!
//! The first epochs of a run come from a sensor that is still warming up.
//! Records are discarded until one whose counter reaches
//! [`STABILIZATION_THRESHOLD`]; that record and everything after it form the
//! session. The same rule applies to both representations.

use std::io::Read;
use std::path::Path;

use super::error::{DecodeError, DecodeResult};
use super::types::Session;
use crate::record::{binary, text, Record, RECORD_SIZE};
use crate::types::{Representation, STABILIZATION_THRESHOLD};

/// Decode a complete source held in memory
pub fn decode(source: &[u8], representation: Representation) -> DecodeResult<Session> {
    let records = match representation {
        Representation::Binary => decode_binary(source)?,
        Representation::Text => decode_text(std::str::from_utf8(source)?)?,
    };
    Session::new(records, representation)
}

/// Read the whole source, then decode it
pub fn read_session<R: Read>(mut reader: R, representation: Representation) -> DecodeResult<Session> {
    let mut source = Vec::new();
    reader.read_to_end(&mut source)?;
    decode(&source, representation)
}

/// Load and decode a log file
pub fn load(path: impl AsRef<Path>, representation: Representation) -> DecodeResult<Session> {
    let source = std::fs::read(path.as_ref())?;
    decode(&source, representation)
}

/// Offset of the first binary record whose counter reaches the threshold
fn find_binary_start(source: &[u8]) -> Option<usize> {
    let mut offset = 0;
    loop {
        let counter = binary::peek_counter(source.get(offset..)?)?;
        if counter >= STABILIZATION_THRESHOLD {
            // The record is re-read from its start, counter included
            return Some(offset);
        }
        offset += RECORD_SIZE;
    }
}

fn decode_binary(source: &[u8]) -> DecodeResult<Vec<Record>> {
    let start = find_binary_start(source).ok_or(DecodeError::NoValidStart)?;
    let body = &source[start..];

    let mut records = Vec::with_capacity(body.len() / RECORD_SIZE + 1);
    for (index, chunk) in body.chunks(RECORD_SIZE).enumerate() {
        let record = binary::decode(chunk).map_err(|e| DecodeError::at_record(index, e))?;
        records.push(record);
    }

    tracing::debug!(
        "Decoded {} binary records, skipped {}",
        records.len(),
        start / RECORD_SIZE
    );
    Ok(records)
}

fn decode_text(source: &str) -> DecodeResult<Vec<Record>> {
    let mut lines = source.lines().filter(|l| !l.trim().is_empty()).peekable();

    let mut skipped = 0usize;
    while let Some(line) = lines.peek() {
        match text::peek_counter(line) {
            Some(Ok(counter)) if counter >= STABILIZATION_THRESHOLD => break,
            Some(Err(e)) => return Err(DecodeError::Format { record: 0, source: e }),
            _ => {
                lines.next();
                skipped += 1;
            }
        }
    }
    if lines.peek().is_none() {
        return Err(DecodeError::NoValidStart);
    }

    let mut records = Vec::new();
    for (index, line) in lines.enumerate() {
        let record = text::decode(line).map_err(|e| DecodeError::at_record(index, e))?;
        records.push(record);
    }

    tracing::debug!(
        "Decoded {} text records, skipped {}",
        records.len(),
        skipped
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::FormatError;
    use std::io::Cursor;

    fn record(count: u16) -> Record {
        Record {
            count,
            thdg: count as f32 / 10.0,
            ..Default::default()
        }
    }

    fn binary_source(counts: &[u16]) -> Vec<u8> {
        let mut out = Vec::new();
        for &count in counts {
            binary::encode_into(&record(count), &mut out);
        }
        out
    }

    fn text_source(counts: &[u16]) -> String {
        let mut out = String::new();
        for &count in counts {
            text::encode_into(&record(count), &mut out);
        }
        out
    }

    #[test]
    fn test_skips_warmup_records() {
        let counts: Vec<u16> = (1..=60).collect();
        for repr in [Representation::Binary, Representation::Text] {
            let source = match repr {
                Representation::Binary => binary_source(&counts),
                Representation::Text => text_source(&counts).into_bytes(),
            };
            let session = decode(&source, repr).unwrap();
            assert_eq!(session.len(), 1, "{}", repr);
            assert_eq!(session.first().count, 60, "{}", repr);
        }
    }

    #[test]
    fn test_keeps_everything_after_start() {
        // A later low counter does not restart the skip
        let source = binary_source(&[3, 59, 75, 10, 76]);
        let session = decode(&source, Representation::Binary).unwrap();
        let counts: Vec<u16> = session.iter().map(|r| r.count).collect();
        assert_eq!(counts, vec![75, 10, 76]);
    }

    #[test]
    fn test_first_record_above_anchor() {
        let source = binary_source(&[700, 701]);
        let session = decode(&source, Representation::Binary).unwrap();
        assert_eq!(session.first().count, 700);
        assert_eq!(session.len(), 2);
    }

    #[test]
    fn test_no_valid_start() {
        let source = binary_source(&[5; 20]);
        assert!(matches!(
            decode(&source, Representation::Binary),
            Err(DecodeError::NoValidStart)
        ));

        let source = text_source(&[5; 20]);
        assert!(matches!(
            decode(source.as_bytes(), Representation::Text),
            Err(DecodeError::NoValidStart)
        ));
    }

    #[test]
    fn test_empty_source() {
        assert!(matches!(
            decode(&[], Representation::Binary),
            Err(DecodeError::NoValidStart)
        ));
        assert!(matches!(
            decode(b"\n\n", Representation::Text),
            Err(DecodeError::NoValidStart)
        ));
    }

    #[test]
    fn test_low_counter_in_partial_record_is_no_valid_start() {
        let mut source = binary_source(&[5, 6]);
        source.truncate(RECORD_SIZE + 100);
        assert!(matches!(
            decode(&source, Representation::Binary),
            Err(DecodeError::NoValidStart)
        ));
    }

    #[test]
    fn test_truncated_binary_tail() {
        let mut source = binary_source(&[60, 61, 62]);
        source.truncate(source.len() - 1);
        match decode(&source, Representation::Binary) {
            Err(DecodeError::Truncated { record, source }) => {
                assert_eq!(record, 2);
                assert_eq!(
                    source,
                    FormatError::Truncated {
                        expected: RECORD_SIZE,
                        found: RECORD_SIZE - 1
                    }
                );
            }
            other => panic!("expected truncation, got {:?}", other),
        }
    }

    #[test]
    fn test_truncated_text_tail() {
        let mut source = text_source(&[60, 61]);
        source.push_str("62\t0\t1.5\n");
        assert!(matches!(
            decode(source.as_bytes(), Representation::Text),
            Err(DecodeError::Truncated { record: 2, .. })
        ));
    }

    #[test]
    fn test_malformed_text_record() {
        let source = text_source(&[60, 61]).replacen("61\t", "61x\t", 1);
        assert!(matches!(
            decode(source.as_bytes(), Representation::Text),
            Err(DecodeError::Format { record: 1, .. })
        ));
    }

    #[test]
    fn test_text_ignores_blank_lines_and_crlf() {
        let source = format!("\n{}\r\n\n", text_source(&[10, 60, 61]).replace('\n', "\r\n"));
        let session = decode(source.as_bytes(), Representation::Text).unwrap();
        assert_eq!(session.len(), 2);
        assert_eq!(session.last().count, 61);
    }

    #[test]
    fn test_invalid_utf8_text() {
        let source = [0x36, 0x30, 0xFF, 0xFE];
        assert!(matches!(
            decode(&source, Representation::Text),
            Err(DecodeError::InvalidText(_))
        ));
    }

    #[test]
    fn test_read_session_from_reader() {
        let source = binary_source(&[59, 60, 61]);
        let session = read_session(Cursor::new(source), Representation::Binary).unwrap();
        assert_eq!(session.representation(), Representation::Binary);
        assert_eq!(session.first().count, 60);
        assert_eq!(session.first().thdg, 6.0);
    }
}
