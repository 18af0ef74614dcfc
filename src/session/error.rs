//! Session-level decode errors.

use crate::record::FormatError;
use crate::types::STABILIZATION_THRESHOLD;
use thiserror::Error;

/// Errors raised while decoding a whole source into a [`Session`](super::Session).
///
/// Decoding is all-or-nothing: none of these come with a partial session.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// No record reaches the stabilization threshold
    #[error("No record reaches counter {}: source too short or corrupt", STABILIZATION_THRESHOLD)]
    NoValidStart,

    /// The source ends inside a record
    #[error("Source ends inside record {record}: {source}")]
    Truncated {
        record: usize,
        #[source]
        source: FormatError,
    },

    /// A record that cannot be decoded
    #[error("Record {record}: {source}")]
    Format {
        record: usize,
        #[source]
        source: FormatError,
    },

    /// Text source that is not UTF-8
    #[error("Text source is not valid UTF-8: {0}")]
    InvalidText(#[from] std::str::Utf8Error),

    /// A session needs at least one record
    #[error("Session contains no records")]
    EmptySession,

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DecodeError {
    /// Wrap a record error at position `record`, keeping truncation distinct
    pub(crate) fn at_record(record: usize, source: FormatError) -> Self {
        match source {
            FormatError::Truncated { .. } => DecodeError::Truncated { record, source },
            FormatError::Malformed { .. } => DecodeError::Format { record, source },
        }
    }
}

pub type DecodeResult<T> = std::result::Result<T, DecodeError>;
