use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::{Serialize, Serializer};

use crate::data::filter::{select, Question};
use crate::data::model::Song;
use crate::error::{Error, Result};

/// Default report location, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "output.csv";

// ---------------------------------------------------------------------------
// Report rows
// ---------------------------------------------------------------------------

/// One output line. Field names double as the header row.
#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    #[serde(rename = "Artist(s)", serialize_with = "raw_field")]
    artist: &'a [u8],
    #[serde(rename = "Song", serialize_with = "raw_field")]
    title: &'a [u8],
}

/// Emit the field bytes unchanged; a plain `&[u8]` would serialize as a
/// sequence.
fn raw_field<S: Serializer>(bytes: &&[u8], serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_bytes(bytes)
}

/// Counts from one report run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub scanned: usize,
    pub matched: usize,
}

// ---------------------------------------------------------------------------
// Writers
// ---------------------------------------------------------------------------

/// Create (or truncate) `path` and write the report for `question` into it.
pub fn write_report(path: &Path, songs: &[Song], question: Question) -> Result<ReportSummary> {
    let file = File::create(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let summary = write_rows(file, songs, question, path)?;
    log::info!(
        "Wrote {} of {} songs to {} for {question}",
        summary.matched,
        summary.scanned,
        path.display()
    );
    Ok(summary)
}

/// Write the report into any sink. Header first, then matching songs in
/// order. Fields are written verbatim: no quoting, no escaping.
pub fn write_report_to<W: Write>(out: W, songs: &[Song], question: Question) -> Result<ReportSummary> {
    write_rows(out, songs, question, Path::new("<writer>"))
}

fn write_rows<W: Write>(out: W, songs: &[Song], question: Question, target: &Path) -> Result<ReportSummary> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .has_headers(false)
        .from_writer(out);

    // Written by hand so an empty report still carries it.
    writer
        .write_record(["Artist(s)", "Song"])
        .map_err(|e| Error::from_csv(target, e))?;

    let mut matched = 0;
    for song in select(songs, question) {
        let row = ReportRow {
            artist: &song.artist,
            title: &song.title,
        };
        writer.serialize(row).map_err(|e| Error::from_csv(target, e))?;
        matched += 1;
    }

    writer.flush().map_err(|source| Error::Io {
        path: target.to_path_buf(),
        source,
    })?;

    Ok(ReportSummary {
        scanned: songs.len(),
        matched,
    })
}
