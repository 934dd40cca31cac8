//! Load a song table, answer one of five fixed questions about it, and write
//! the matching artist/title pairs as a two-column report.

pub mod config;
pub mod data;
pub mod error;
pub mod report;

pub use config::Config;
pub use data::filter::Question;
pub use data::model::{Song, SongCollection};
pub use error::{Error, Result};
pub use report::ReportSummary;

/// Load `config.input`, then write the report for `config.question` to
/// `config.output`. Nothing is written if loading fails.
pub fn run(config: &Config) -> Result<ReportSummary> {
    log::info!("Answering {} from {}", config.question, config.input.display());
    let songs = data::loader::load_file(&config.input, &config.load_options())?;
    report::write_report(&config.output, songs.as_slice(), config.question)
}
