use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a report run. All variants are terminal.
#[derive(Error, Debug)]
pub enum Error {
    /// Wrong argument count, unknown key, or missing `key=value` shape.
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("input file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reader/writer failure raised by the csv crate that is not plain I/O.
    #[error("delimited format error on {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Question identifier outside 1..=5 (or not a number at all).
    #[error("invalid question '{0}': expected a number from 1 to 5")]
    InvalidQuestion(String),

    #[error("line {line} is {len} bytes long (maximum is {max})", max = crate::data::loader::MAX_LINE_LEN)]
    LineTooLong { line: u64, len: usize },

    #[error("malformed row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },
}

impl Error {
    /// Map a csv error onto our variants, unwrapping plain I/O failures.
    pub(crate) fn from_csv(path: impl Into<PathBuf>, err: csv::Error) -> Self {
        let path = path.into();
        if matches!(err.kind(), csv::ErrorKind::Io(_)) {
            return Error::Io {
                path,
                source: std::io::Error::from(err),
            };
        }
        Error::Csv { path, source: err }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use std::error::Error as _;
    use std::io;

    use super::*;

    #[test]
    fn csv_io_failure_keeps_its_source_chain() {
        let inner = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let err = Error::from_csv("out.csv", csv::Error::from(inner));
        let Error::Io { path, source } = &err else {
            panic!("expected Io, got {err:?}");
        };
        assert_eq!(path, &PathBuf::from("out.csv"));
        let csv_err = source
            .get_ref()
            .and_then(|e| e.downcast_ref::<csv::Error>())
            .expect("csv error kept as the io source");
        assert!(csv_err.is_io_error());
        assert!(err.source().is_some());
    }

    #[test]
    fn csv_format_failure_stays_csv() {
        let bad_utf8 = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(&b"\xff\n"[..])
            .records()
            .next()
            .and_then(|r| r.err())
            .expect("invalid utf-8 rejected by StringRecord");
        let err = Error::from_csv("in.csv", bad_utf8);
        assert!(matches!(err, Error::Csv { .. }), "{err:?}");
    }
}
