use std::time::{SystemTime, UNIX_EPOCH};

use overdose_trends::data::index::category_domain;
use overdose_trends::data::model::{CategoryDomain, RowSet, Selection};
use overdose_trends::data::pipeline::{TrendCharts, Windows};
use overdose_trends::leaderboard::Leaderboard;
use overdose_trends::trivia::{generate_questions, Quiz};
use overdose_trends::votes::{Ballot, Vote};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Cleaned dataset; replaced only when a new file is opened.
    pub rows: RowSet,

    /// Drop-down entries derived from `rows`.
    pub domain: CategoryDomain,

    /// Current drop-down choice.
    pub selection: Selection,

    /// Chart windows for `selection` (recomputed on every change).
    pub charts: TrendCharts,

    pub windows: Windows,

    pub ballot: Ballot,

    pub leaderboard: Leaderboard,

    pub quiz: Quiz,

    /// Name typed into the score submission field.
    pub player_name: String,

    /// Whether the finished quiz has already been submitted.
    pub score_submitted: bool,

    pub show_trivia: bool,

    pub show_leaderboard: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(rows: RowSet, windows: Windows, ballot: Ballot, leaderboard: Leaderboard) -> Self {
        let mut state = Self {
            rows: RowSet::default(),
            domain: CategoryDomain::default(),
            selection: Selection::All,
            charts: TrendCharts::default(),
            windows,
            ballot,
            leaderboard,
            quiz: Quiz::new(Vec::new()),
            player_name: String::new(),
            score_submitted: false,
            show_trivia: false,
            show_leaderboard: false,
            status_message: None,
        };
        state.set_rows(rows);
        state
    }

    /// Ingest a newly loaded dataset and reset everything derived from it.
    pub fn set_rows(&mut self, rows: RowSet) {
        self.domain = category_domain(&rows);
        self.quiz = Quiz::new(generate_questions(rows.rows()));
        self.score_submitted = false;
        self.rows = rows;
        self.selection = Selection::All;
        self.status_message = None;
        self.recompute();
    }

    /// Change the category and rebuild both charts.
    pub fn select(&mut self, selection: Selection) {
        if selection != self.selection {
            self.selection = selection;
            self.recompute();
        }
    }

    fn recompute(&mut self) {
        self.charts = TrendCharts::compute(&self.rows, &self.selection, self.windows);
    }

    pub fn vote(&mut self, vote: Vote) {
        if let Err(e) = self.ballot.cast(vote) {
            log::warn!("Vote rejected: {e}");
            self.status_message = Some(e.to_string());
        }
    }

    /// Put the finished quiz on the leaderboard under `player_name`.
    pub fn submit_score(&mut self) {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default();

        match self.leaderboard.submit(
            &self.player_name,
            self.quiz.score(),
            self.quiz.total(),
            timestamp,
        ) {
            Ok(_) => {
                self.score_submitted = true;
                self.show_leaderboard = true;
                self.status_message = None;
            }
            Err(e) => self.status_message = Some(e.to_string()),
        }
    }

    pub fn restart_quiz(&mut self) {
        self.quiz.restart();
        self.score_submitted = false;
    }
}
