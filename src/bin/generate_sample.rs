use std::path::PathBuf;

use anyhow::{Context, Result};

use song_report::data::model::ARTIST_SEPARATOR;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform in `lo..=hi`.
    fn range(&mut self, lo: u64, hi: u64) -> u64 {
        lo + self.next_u64() % (hi - lo + 1)
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.next_u64() as usize % items.len()]
    }
}

const ARTISTS: &[&str] = &[
    "Rae Spoon",
    "Tate McRae",
    "The Weeknd",
    "Drake",
    "21 Savage",
    "Drakeo the Ruler",
    "Taylor Swift",
    "Bad Bunny",
    "SZA",
    "Future",
];

const WORDS: &[&str] = &[
    "Midnight", "Lights", "Rain", "Ghost", "Heart", "City", "Summer", "Echo", "Fever", "River",
    "Gold", "Static",
];

const KEYS: &[&str] = &["A", "A#", "B", "C#", "D", "D#", "E", "F", "F#", "G", "G#", ""];
const MODES: &[&str] = &["Major", "Minor"];

/// One input line: title,artist,artist_count,year,playlists,streams,key,mode
fn generate_row(rng: &mut SimpleRng) -> Vec<String> {
    let title = format!("{} {}", rng.pick(WORDS), rng.pick(WORDS));

    let n_artists = rng.range(1, 3) as usize;
    let mut artists: Vec<&str> = Vec::with_capacity(n_artists);
    while artists.len() < n_artists {
        let a = rng.pick(ARTISTS);
        if !artists.contains(&a) {
            artists.push(a);
        }
    }
    let artist = artists.join(&char::from(ARTIST_SEPARATOR).to_string());

    vec![
        title,
        artist,
        n_artists.to_string(),
        rng.range(2015, 2023).to_string(),
        rng.range(0, 12_000).to_string(),
        rng.range(1_000_000, 3_000_000_000).to_string(),
        rng.pick(KEYS).to_string(),
        rng.pick(MODES).to_string(),
    ]
}

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let output_path = PathBuf::from(args.next().unwrap_or_else(|| "sample_songs.csv".into()));
    let rows: usize = match args.next() {
        Some(n) => n.parse().with_context(|| format!("row count '{n}' is not a number"))?,
        None => 200,
    };

    let mut rng = SimpleRng::new(42);

    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_path(&output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;

    // Fixed rows so every question has at least one answer.
    let anchors = [
        "Blinding Lights,The Weeknd,1,2020,43899,3703895074,C#,Major",
        "Greedy,Tate McRae,1,2023,2556,367316268,F#,Minor",
        "Hey Why,Rae Spoon,1,2012,35,10000000,G,Minor",
        "Jimmy Cooks,Drake 21 Savage,2,2022,5871,618885532,D,Major",
        "Rich Flex,Drake 21 Savage,2,2022,1963,618885532,B,Minor",
        "Flowers,Miley Cyrus,1,2023,12211,1316855716,A,Major",
    ];
    for line in anchors {
        writer
            .write_record(line.split(','))
            .context("writing anchor row")?;
    }

    for _ in 0..rows.saturating_sub(anchors.len()) {
        writer
            .write_record(generate_row(&mut rng))
            .context("writing generated row")?;
    }
    writer.flush().context("flushing output")?;

    let total = rows.max(anchors.len());
    log::info!("generated {total} rows");
    println!("Wrote {total} songs to {}", output_path.display());
    Ok(())
}
