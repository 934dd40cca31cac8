//! Data layer: song records, loading, and the fixed question filters.
//!
//! Architecture:
//! ```text
//!   songs .csv (8 columns, no header)
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  split lines → SongCollection
//!   └──────────┘
//!        │
//!        ▼
//!   ┌────────────────┐
//!   │ SongCollection  │  Vec<Song>, file order
//!   └────────────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  Question::matches → selected songs
//!   └──────────┘
//! ```

pub mod loader;
pub mod model;
pub mod filter;
