//! Analysis engine
//!
//! Turns a decoded session into a [`SessionSummary`]:
//! - reference record selection around the counter anchor
//! - degree / minute / second decomposition of attitude angles
//! - gyroscope deviation and mean temperature per axis

pub mod angle;
pub mod stats;
pub mod summary;

pub use angle::AngleDecomposition;
pub use summary::{analyze, reference_index, SessionSummary};
