use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use csv::ByteRecord;

use super::model::{Song, SongCollection};
use crate::error::{Error, Result};

/// Longest accepted line, in bytes, not counting the line terminator.
pub const MAX_LINE_LEN: usize = 200;

/// Positional columns of one input line. `streams` is read past and dropped.
const COLUMNS: usize = 8;
const COL_TITLE: usize = 0;
const COL_ARTIST: usize = 1;
const COL_ARTIST_COUNT: usize = 2;
const COL_RELEASE_YEAR: usize = 3;
const COL_PLAYLISTS: usize = 4;
const COL_KEY: usize = 6;
const COL_MODE: usize = 7;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// What to do with numeric columns that are not clean integers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NumericPolicy {
    /// `atoi` rules: leading whitespace, optional sign, leading digits.
    /// No digits at all reads as 0.
    #[default]
    Lenient,
    /// Reject the row with [`Error::MalformedRow`].
    Strict,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    pub numeric_policy: NumericPolicy,
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load every song of a comma-delimited file, in file order.
///
/// Layout per line (no header row, no quoting):
/// `title,artist,artist_count,release_year,playlists,streams,key,mode`
pub fn load_file(path: &Path, opts: &LoadOptions) -> Result<SongCollection> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
        _ => Error::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let songs = read_songs(file, path, opts)?;
    log::info!("Loaded {} songs from {}", songs.len(), path.display());
    Ok(songs)
}

/// Same as [`load_file`] for an already opened source.
pub fn load_from_reader<R: Read>(reader: R, opts: &LoadOptions) -> Result<SongCollection> {
    read_songs(reader, Path::new("<reader>"), opts)
}

// ---------------------------------------------------------------------------
// Row parsing
// ---------------------------------------------------------------------------

fn read_songs<R: Read>(reader: R, source: &Path, opts: &LoadOptions) -> Result<SongCollection> {
    // `\n` only: a bare `\r` is field content, a `\r\n` ending is trimmed below.
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_reader(reader);

    let mut songs = Vec::new();
    let mut record = ByteRecord::new();

    loop {
        match reader.read_byte_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => return Err(Error::from_csv(source, e)),
        }
        let line = record.position().map_or(songs.len() as u64 + 1, |p| p.line());
        if record.len() == 1 && record[0].trim_ascii().is_empty() {
            log::debug!("line {line}: blank, skipped");
            continue;
        }

        let len = line_len(&record);
        if len > MAX_LINE_LEN {
            return Err(Error::LineTooLong { line, len });
        }

        songs.push(parse_song(&record, line, opts.numeric_policy)?);
    }

    Ok(SongCollection::from_songs(songs))
}

/// Raw line length without its terminator. Quoting is off, so fields plus
/// separators reconstruct the line exactly.
fn line_len(record: &ByteRecord) -> usize {
    let len = record.as_slice().len() + record.len().saturating_sub(1);
    match record.iter().last() {
        Some(last) if last.ends_with(b"\r") => len - 1,
        _ => len,
    }
}

fn parse_song(record: &ByteRecord, line: u64, policy: NumericPolicy) -> Result<Song> {
    if record.len() < COLUMNS {
        return Err(Error::MalformedRow {
            line,
            reason: format!("expected {COLUMNS} fields, found {}", record.len()),
        });
    }

    // Length checked above.
    let text = |idx: usize| record[idx].trim_ascii_end().to_vec();
    let number = |idx: usize, name: &str| parse_int(&record[idx], policy, line, name);

    Ok(Song {
        title: text(COL_TITLE),
        artist: text(COL_ARTIST),
        artist_count: number(COL_ARTIST_COUNT, "artist_count")?,
        release_year: number(COL_RELEASE_YEAR, "release_year")?,
        spotify_playlist_count: number(COL_PLAYLISTS, "spotify_playlist_count")?,
        key: text(COL_KEY),
        mode: text(COL_MODE),
    })
}

fn parse_int(field: &[u8], policy: NumericPolicy, line: u64, column: &str) -> Result<i32> {
    let clean = std::str::from_utf8(field)
        .ok()
        .and_then(|s| s.trim().parse::<i32>().ok());
    if let Some(v) = clean {
        return Ok(v);
    }

    let shown = String::from_utf8_lossy(field);
    match policy {
        NumericPolicy::Strict => Err(Error::MalformedRow {
            line,
            reason: format!("{column}: '{shown}' is not an integer"),
        }),
        NumericPolicy::Lenient => {
            let v = atoi(field);
            log::warn!("line {line}: {column} '{shown}' read as {v}");
            Ok(v)
        }
    }
}

/// C `atoi` without the undefined behaviour: out-of-range input saturates.
fn atoi(s: &[u8]) -> i32 {
    let start = s
        .iter()
        .position(|&b| !(b.is_ascii_whitespace() || b == b'\x0b'))
        .unwrap_or(s.len());
    let s = &s[start..];
    let (negative, digits) = match s.first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let limit = i64::from(i32::MAX) + 1;
    let magnitude = digits
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .fold(0i64, |acc, &b| (acc * 10 + i64::from(b - b'0')).min(limit));

    let value = if negative { -magnitude } else { magnitude };
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
