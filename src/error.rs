use std::path::PathBuf;

use thiserror::Error;

/// Terminal failures while turning a dataset source into a [`RowSet`].
///
/// Individual bad rows never show up here; the loader drops those silently.
///
/// [`RowSet`]: crate::data::model::RowSet
#[derive(Error, Debug)]
pub enum LoadError {
    /// The dataset file could not be opened or read.
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input is not readable as CSV at all (e.g. a broken header row).
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The header row lacks one of the required fields.
    #[error("Dataset is missing the '{0}' column")]
    MissingColumn(&'static str),
}

#[derive(Error, Debug)]
pub enum LeaderboardError {
    #[error("Player name must not be empty")]
    EmptyName,

    #[error("Malformed leaderboard snapshot: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum VoteError {
    #[error("A vote has already been cast from this ballot")]
    AlreadyVoted,
}
