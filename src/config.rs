use std::path::PathBuf;

use crate::data::filter::Question;
use crate::data::loader::{LoadOptions, NumericPolicy};
use crate::error::{Error, Result};
use crate::report::DEFAULT_OUTPUT;

/// Set to `1`/`true` to reject rows whose numeric columns are not integers.
pub const STRICT_ENV: &str = "SONG_REPORT_STRICT";

/// Everything one run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub question: Question,
    pub input: PathBuf,
    pub output: PathBuf,
    pub numeric_policy: NumericPolicy,
}

impl Config {
    pub fn new(question: Question, input: impl Into<PathBuf>) -> Self {
        Config {
            question,
            input: input.into(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            numeric_policy: NumericPolicy::default(),
        }
    }

    /// Build from the command-line arguments (program name excluded).
    ///
    /// Exactly two `key=value` arguments are accepted, `question` and `file`,
    /// in any order.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<S> = args.into_iter().collect();
        if args.len() != 2 {
            return Err(Error::InvalidArguments(format!(
                "expected 2 arguments, got {}",
                args.len()
            )));
        }

        let mut question = None;
        let mut file = None;
        for arg in &args {
            let arg = arg.as_ref();
            let (key, value) = arg
                .split_once('=')
                .ok_or_else(|| Error::InvalidArguments(format!("'{arg}' is not key=value")))?;
            let slot = match key {
                "question" => &mut question,
                "file" => &mut file,
                other => {
                    return Err(Error::InvalidArguments(format!("unknown argument '{other}'")));
                }
            };
            if slot.replace(value.to_string()).is_some() {
                return Err(Error::InvalidArguments(format!("'{key}' given twice")));
            }
        }

        let question = question.ok_or_else(|| Error::InvalidArguments("missing question=<1..5>".into()))?;
        let file = file.ok_or_else(|| Error::InvalidArguments("missing file=<path>".into()))?;
        if file.is_empty() {
            return Err(Error::InvalidArguments("file= needs a path".into()));
        }

        let config = Config::new(question.parse()?, file);
        log::debug!("parsed arguments: {config:?}");
        Ok(config)
    }

    /// Apply overrides from the process environment.
    pub fn with_env(mut self) -> Self {
        if let Ok(v) = std::env::var(STRICT_ENV) {
            self.numeric_policy = policy_from_flag(&v);
        }
        self
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            numeric_policy: self.numeric_policy,
        }
    }
}

fn policy_from_flag(v: &str) -> NumericPolicy {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => NumericPolicy::Strict,
        _ => NumericPolicy::Lenient,
    }
}

pub const USAGE: &str = "usage: song-report question=<1..5> file=<path>";
