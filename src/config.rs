use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use log::{info, warn};

use crate::data::pipeline::Windows;
use crate::data::window::{LONG_WINDOW, SHORT_WINDOW};

/// Viewer settings, read from the environment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewerConfig {
    /// CSV to load instead of the bundled dataset.
    pub data_path: Option<PathBuf>,
    pub windows: Windows,
    /// JSON array of leaderboard documents to start the session with.
    pub leaderboard_snapshot: Option<PathBuf>,
    /// JSON vote document (`support` / `against` counters).
    pub vote_snapshot: Option<PathBuf>,
}

impl ViewerConfig {
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// A positional argument takes precedence over `OVERDOSE_DATA`.
    pub fn with_data_arg(mut self, arg: Option<String>) -> Self {
        if let Some(path) = arg {
            info!("Using dataset from command line: {path}");
            self.data_path = Some(PathBuf::from(path));
        }
        self
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            data_path: lookup("OVERDOSE_DATA").map(PathBuf::from),
            windows: Windows {
                long: try_load_window(&lookup, "TREND_LONG_WINDOW", LONG_WINDOW),
                short: try_load_window(&lookup, "TREND_SHORT_WINDOW", SHORT_WINDOW),
            },
            leaderboard_snapshot: lookup("LEADERBOARD_SNAPSHOT").map(PathBuf::from),
            vote_snapshot: lookup("VOTE_SNAPSHOT").map(PathBuf::from),
        }
    }
}

fn try_load<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value '{raw}': {e}, using default: {default}");
            default
        }),
    }
}

/// Window sizes must be at least one month.
fn try_load_window(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: usize) -> usize {
    match try_load(lookup, key, default) {
        0 => {
            warn!("{key} must be positive, using default: {default}");
            default
        }
        n => n,
    }
}
