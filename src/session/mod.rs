//! Session decoding and encoding
//!
//! A session is the ordered run of records that follows sensor
//! stabilization, decoded from one log source in either representation.
//!
//! # Features
//!
//! - Skip warm-up records until the counter reaches the stabilization threshold
//! - Decode binary (`.dat`) and text (`.txt`) sources all-or-nothing
//! - Re-encode a session in either representation for conversion

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod types;

pub use decoder::{decode, load, read_session};
pub use encoder::{encode, save, write_session};
pub use error::{DecodeError, DecodeResult};
pub use types::Session;
