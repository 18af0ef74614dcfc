//! Record-level codec errors.

use thiserror::Error;

/// Errors raised while decoding a single record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Not enough input for a whole record. Units are bytes for the binary
    /// layout and fields for the text layout.
    #[error("Record truncated: expected {expected}, found {found}")]
    Truncated { expected: usize, found: usize },

    /// A token that does not parse as its field's numeric type
    #[error("Malformed field '{field}': {token:?}")]
    Malformed { field: &'static str, token: String },
}

pub type FormatResult<T> = std::result::Result<T, FormatError>;
