//! # bins-analyzer: BINS test log decoder and accuracy analyzer
//!
//! Decodes the logs written by a strapdown inertial navigation system during
//! bench runs, converts them between the binary (`.dat`) and text (`.txt`)
//! representations, and derives accuracy figures for each run.
//!
//! ## Architecture
//!
//! - **Record**: fixed 79-field layout, shared by the binary and text codecs
//! - **Session**: whole-source decoding with warm-up records skipped
//! - **Analysis**: reference record selection, angle decomposition, statistics
//! - **Collection / Report**: batch operations over files and report output
//! - **Notices**: user-facing messages go through a caller-supplied sink
//!
//! ## Configuration
//!
//! Configuration is stored in the platform-appropriate data directory under
//! `dev.bins-analyzer`:
//!
//! - **Linux**: `~/.local/share/dev.bins-analyzer/`
//! - **macOS**: `~/Library/Application Support/dev.bins-analyzer/`
//! - **Windows**: `%APPDATA%\dev.bins-analyzer\`
//!
//! ## Example
//!
//! ```ignore
//! use bins_analyzer::{analysis::analyze, session, Representation};
//!
//! let session = session::load("run1.dat", Representation::Binary)?;
//! let summary = analyze(&session);
//! println!("heading {}°, thdg {}", summary.heading, summary.thdg);
//! ```

rust_i18n::i18n!("locales", fallback = "en");

pub mod analysis;
pub mod collection;
pub mod config;
pub mod error;
pub mod i18n;
pub mod notice;
pub mod record;
pub mod report;
pub mod session;
pub mod types;

// Re-export commonly used types
pub use analysis::{analyze, AngleDecomposition, SessionSummary};
pub use collection::{classify_path, CollectionEntry, SessionCollection, SourceKind};
pub use config::{AppConfig, ErrorThresholds};
pub use error::{BinsError, Result, ResultExt};
pub use notice::{Notice, NoticeLevel, NoticeQueue, NoticeSink, TracingSink};
pub use record::{FormatError, Record};
pub use session::{DecodeError, Session};
pub use types::{Axes, OffDiagonal, Representation};
