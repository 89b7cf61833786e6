//! CSV serialization of scored posts.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use tweetpulse_core::ScoredPost;

use crate::error::ReportError;
use crate::summary::LabelCounts;

/// One CSV row. Polarity is pre-formatted to three decimal places so the
/// file is stable across runs.
#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    id: &'a str,
    author: &'a str,
    text: &'a str,
    polarity: String,
    label: &'static str,
}

impl<'a> From<&'a ScoredPost> for ReportRow<'a> {
    fn from(record: &'a ScoredPost) -> Self {
        Self {
            id: &record.post.id,
            author: &record.post.author,
            text: &record.post.text,
            polarity: format!("{:.3}", record.polarity),
            label: record.label.as_str(),
        }
    }
}

/// Writes the scored batch to `path` and returns the label tally.
///
/// The destination is truncated on open, so re-running with the same input
/// overwrites deterministically. Field escaping (embedded delimiters, quotes,
/// newlines) is handled by the `csv` crate. After the rows, one summary line
/// `positive:<n>,negative:<n>,neutral:<n>` is appended.
///
/// # Errors
///
/// Returns [`ReportError::Io`] when the destination is not writable and
/// [`ReportError::Csv`] on serialization failure.
pub fn write_report(path: &Path, scored: &[ScoredPost]) -> Result<LabelCounts, ReportError> {
    let mut file = File::create(path)?;
    let counts = write_report_to(&mut file, scored)?;
    file.flush()?;
    tracing::info!(path = %path.display(), rows = scored.len(), "report written");
    Ok(counts)
}

/// Writes header, rows, and summary line to any `Write` sink.
///
/// Split out from [`write_report`] so tests can assert on an in-memory
/// buffer without touching the filesystem.
///
/// # Errors
///
/// Same as [`write_report`].
pub fn write_report_to<W: Write>(
    sink: &mut W,
    scored: &[ScoredPost],
) -> Result<LabelCounts, ReportError> {
    // Header is written explicitly: the csv crate's auto-header only fires
    // on the first `serialize`, which would leave an empty batch headerless.
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(&mut *sink);
    csv_writer.write_record(["id", "author", "text", "polarity", "label"])?;
    for record in scored {
        csv_writer.serialize(ReportRow::from(record))?;
    }
    csv_writer.flush()?;
    drop(csv_writer);

    let counts = LabelCounts::tally(scored);
    writeln!(sink, "{counts}")?;
    Ok(counts)
}
