//! Monthly drug-overdose trends: CSV loading, per-category filtering,
//! chronological monthly means and trailing chart windows, plus the quiz,
//! leaderboard and vote logic the viewer builds on.

pub mod config;
pub mod data;
pub mod error;
pub mod leaderboard;
pub mod trivia;
pub mod votes;
