use std::fmt;
use std::str::FromStr;

use super::model::Song;
use crate::error::Error;

// ---------------------------------------------------------------------------
// Question: one of the five fixed selection rules
// ---------------------------------------------------------------------------

/// The fixed questions a report can answer, numbered 1 to 5 on the command
/// line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Question {
    /// Songs by Rae Spoon.
    RaeSpoon,
    /// Songs by Tate McRae.
    TateMcRae,
    /// Songs by The Weeknd in a major key.
    WeekndMajor,
    /// Songs in over 5000 playlists in the key of A or D.
    PopularInAOrD,
    /// Songs from 2021 or 2022 featuring Drake.
    RecentDrake,
}

pub const RAE_SPOON: &[u8] = b"Rae Spoon";
pub const TATE_MCRAE: &[u8] = b"Tate McRae";
pub const THE_WEEKND: &[u8] = b"The Weeknd";
pub const DRAKE: &[u8] = b"Drake";
pub const MAJOR: &[u8] = b"Major";
pub const PLAYLIST_THRESHOLD: i32 = 5000;

impl Question {
    pub const ALL: [Question; 5] = [
        Question::RaeSpoon,
        Question::TateMcRae,
        Question::WeekndMajor,
        Question::PopularInAOrD,
        Question::RecentDrake,
    ];

    /// The command-line identifier (1..=5).
    pub fn number(self) -> u8 {
        match self {
            Question::RaeSpoon => 1,
            Question::TateMcRae => 2,
            Question::WeekndMajor => 3,
            Question::PopularInAOrD => 4,
            Question::RecentDrake => 5,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Question::RaeSpoon => "songs by Rae Spoon",
            Question::TateMcRae => "songs by Tate McRae",
            Question::WeekndMajor => "songs by The Weeknd in major mode",
            Question::PopularInAOrD => "songs in more than 5000 playlists in key A or D",
            Question::RecentDrake => "songs released in 2021 or 2022 featuring Drake",
        }
    }

    /// Whether `song` belongs in this question's report.
    ///
    /// All text comparisons are byte-exact and case-sensitive.
    pub fn matches(self, song: &Song) -> bool {
        match self {
            Question::RaeSpoon => song.artist == RAE_SPOON,
            Question::TateMcRae => song.artist == TATE_MCRAE,
            Question::WeekndMajor => song.artist == THE_WEEKND && song.mode == MAJOR,
            Question::PopularInAOrD => {
                song.spotify_playlist_count > PLAYLIST_THRESHOLD
                    && matches!(song.key.as_slice(), b"A" | b"D")
            }
            Question::RecentDrake => {
                matches!(song.release_year, 2021 | 2022) && song.has_artist_token(DRAKE)
            }
        }
    }
}

impl TryFrom<u8> for Question {
    type Error = Error;

    fn try_from(n: u8) -> Result<Self, Error> {
        Question::ALL
            .into_iter()
            .find(|q| q.number() == n)
            .ok_or_else(|| Error::InvalidQuestion(n.to_string()))
    }
}

impl FromStr for Question {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let n: u8 = s
            .trim()
            .parse()
            .map_err(|_| Error::InvalidQuestion(s.to_string()))?;
        Question::try_from(n)
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "question {} ({})", self.number(), self.description())
    }
}

/// Songs answering `question`, in collection order.
pub fn select<'a, I>(songs: I, question: Question) -> impl Iterator<Item = &'a Song>
where
    I: IntoIterator<Item = &'a Song>,
{
    songs.into_iter().filter(move |s| question.matches(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(title: &str, artist: &str, year: i32, playlists: i32, key: &str, mode: &str) -> Song {
        Song {
            title: title.into(),
            artist: artist.into(),
            artist_count: artist.split(' ').count() as i32,
            release_year: year,
            spotify_playlist_count: playlists,
            key: key.into(),
            mode: mode.into(),
        }
    }

    fn answered_by(s: &Song) -> Vec<u8> {
        Question::ALL
            .into_iter()
            .filter(|q| q.matches(s))
            .map(Question::number)
            .collect()
    }

    #[test]
    fn blinding_lights_matches_three_and_four() {
        let s = song("Blinding Lights", "The Weeknd", 2020, 9000, "A", "Major");
        assert_eq!(answered_by(&s), [3, 4]);
    }

    #[test]
    fn artist_match_is_exact_and_case_sensitive() {
        assert!(Question::RaeSpoon.matches(&song("x", "Rae Spoon", 2012, 0, "", "Minor")));
        assert!(!Question::RaeSpoon.matches(&song("x", "rae spoon", 2012, 0, "", "Minor")));
        assert!(!Question::RaeSpoon.matches(&song("x", "Rae Spoon Tate McRae", 2012, 0, "", "Minor")));
        assert!(Question::TateMcRae.matches(&song("x", "Tate McRae", 2021, 0, "", "Minor")));
        assert!(!Question::TateMcRae.matches(&song("x", "Tate Mcrae", 2021, 0, "", "Minor")));
    }

    #[test]
    fn weeknd_needs_major_mode() {
        assert!(!Question::WeekndMajor.matches(&song("x", "The Weeknd", 2020, 0, "A", "Minor")));
        assert!(!Question::WeekndMajor.matches(&song("x", "The Weeknd", 2020, 0, "A", "major")));
    }

    #[test]
    fn playlist_threshold_is_exclusive() {
        assert!(!Question::PopularInAOrD.matches(&song("x", "y", 2020, 5000, "A", "Major")));
        assert!(Question::PopularInAOrD.matches(&song("x", "y", 2020, 5001, "D", "Minor")));
        assert!(!Question::PopularInAOrD.matches(&song("x", "y", 2020, 9000, "C#", "Minor")));
        assert!(!Question::PopularInAOrD.matches(&song("x", "y", 2020, 9000, "", "Minor")));
    }

    #[test]
    fn drake_is_matched_as_whole_token() {
        let q = Question::RecentDrake;
        assert!(q.matches(&song("x", "Drake", 2022, 0, "", "Major")));
        assert!(q.matches(&song("x", "21 Savage Drake", 2022, 0, "", "Major")));
        assert!(!q.matches(&song("x", "Drakeo", 2022, 0, "", "Major")));
        assert!(!q.matches(&song("x", "Drakeo the Ruler", 2021, 0, "", "Major")));
    }

    #[test]
    fn drake_needs_2021_or_2022() {
        let q = Question::RecentDrake;
        assert!(q.matches(&song("x", "Drake", 2021, 0, "", "Major")));
        assert!(!q.matches(&song("x", "Drake", 2020, 0, "", "Major")));
        assert!(!q.matches(&song("x", "Drake", 2023, 0, "", "Major")));
    }

    #[test]
    fn non_utf8_artist_compares_by_bytes() {
        let mut s = song("Caf\u{e9}", "Drake", 2022, 0, "", "Major");
        s.artist = b"Drake Beyonc\xe9".to_vec();
        assert!(Question::RecentDrake.matches(&s));
        s.artist = b"Rae Spoon\xa0".to_vec();
        assert!(!Question::RaeSpoon.matches(&s));
    }

    #[test]
    fn question_numbers_round_trip() {
        for q in Question::ALL {
            assert_eq!(Question::try_from(q.number()).unwrap(), q);
        }
    }

    #[test]
    fn out_of_range_question_is_rejected() {
        for raw in ["0", "6", "-1", "three", ""] {
            let err = raw.parse::<Question>().unwrap_err();
            assert!(matches!(err, Error::InvalidQuestion(_)), "{raw}: {err:?}");
        }
    }

    #[test]
    fn select_preserves_order() {
        let songs = vec![
            song("b", "Rae Spoon", 2012, 0, "", "Minor"),
            song("skip", "Other", 2012, 0, "", "Minor"),
            song("a", "Rae Spoon", 2013, 0, "", "Major"),
        ];
        let titles: Vec<&[u8]> = select(&songs, Question::RaeSpoon).map(|s| s.title.as_slice()).collect();
        assert_eq!(titles, [&b"b"[..], &b"a"[..]]);
    }
}
