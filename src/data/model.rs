use std::ops::Index;

// ---------------------------------------------------------------------------
// Song – one row of the input table
// ---------------------------------------------------------------------------

/// A single song record (one line of the input file).
///
/// Text columns are kept as raw bytes: input files are not guaranteed to be
/// UTF-8 and every comparison is byte-exact. The `streams` column of the
/// source data is dropped by the loader and has no field here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    /// Track name.
    pub title: Vec<u8>,
    /// One or more artist names joined by a single space.
    pub artist: Vec<u8>,
    pub artist_count: i32,
    pub release_year: i32,
    pub spotify_playlist_count: i32,
    /// Pitch class token, e.g. `A`, `C#`; may be empty.
    pub key: Vec<u8>,
    /// `Major` / `Minor`, trailing whitespace already removed.
    pub mode: Vec<u8>,
}

impl Song {
    /// Iterate over the individual names in the `artist` field.
    pub fn artist_tokens(&self) -> impl Iterator<Item = &[u8]> {
        self.artist
            .split(|&b| b == ARTIST_SEPARATOR)
            .filter(|t| !t.is_empty())
    }

    /// Whole-token check: `name` must equal one of the artist tokens exactly.
    pub fn has_artist_token(&self, name: &[u8]) -> bool {
        self.artist_tokens().any(|t| t == name)
    }
}

/// Separator placed between collaborating artists inside the `artist` field.
pub const ARTIST_SEPARATOR: u8 = b' ';

// ---------------------------------------------------------------------------
// SongCollection – the complete loaded table
// ---------------------------------------------------------------------------

/// All songs of one input file, in file order. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongCollection {
    songs: Vec<Song>,
}

impl SongCollection {
    pub fn from_songs(songs: Vec<Song>) -> Self {
        SongCollection { songs }
    }

    /// Number of songs.
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Song> {
        self.songs.iter()
    }

    pub fn as_slice(&self) -> &[Song] {
        &self.songs
    }
}

impl Index<usize> for SongCollection {
    type Output = Song;

    fn index(&self, idx: usize) -> &Song {
        &self.songs[idx]
    }
}

impl<'a> IntoIterator for &'a SongCollection {
    type Item = &'a Song;
    type IntoIter = std::slice::Iter<'a, Song>;

    fn into_iter(self) -> Self::IntoIter {
        self.songs.iter()
    }
}
