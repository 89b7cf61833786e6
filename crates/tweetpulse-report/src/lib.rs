//! CSV report writer for scored posts.
//!
//! Serializes `ScoredPost` records into a fixed-schema CSV file
//! (`id,author,text,polarity,label`) followed by a per-label summary line.

pub mod error;
pub mod summary;
pub mod writer;

pub use error::ReportError;
pub use summary::LabelCounts;
pub use writer::{write_report, write_report_to};
