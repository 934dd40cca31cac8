use std::process::ExitCode;

use song_report::config::USAGE;
use song_report::{Config, Error};

fn main() -> ExitCode {
    env_logger::init();

    let result = Config::from_args(std::env::args().skip(1))
        .map(Config::with_env)
        .and_then(|config| song_report::run(&config));

    match result {
        Ok(summary) => {
            log::debug!("{summary:?}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            if matches!(e, Error::InvalidArguments(_)) {
                eprintln!("{USAGE}");
            }
            ExitCode::FAILURE
        }
    }
}
