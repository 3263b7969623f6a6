use anyhow::{Context, Result};
use eframe::egui;

use overdose_trends::config::ViewerConfig;
use overdose_trends::data::loader::{load_bundled, load_file};
use overdose_trends::data::model::RowSet;
use overdose_trends::leaderboard::Leaderboard;
use overdose_trends::votes::{Ballot, VoteTally};

use crate::color::ChartColors;
use crate::state::AppState;
use crate::ui::{panels, plot, trivia};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct OverdoseTrendsApp {
    pub state: AppState,
    pub colors: ChartColors,
}

impl OverdoseTrendsApp {
    /// Load the configured (or bundled) dataset. A failed load leaves the
    /// charts empty and shows the error in the top bar.
    pub fn new(config: &ViewerConfig) -> Self {
        let (rows, load_error) = match load_rows(config) {
            Ok(rows) => (rows, None),
            Err(e) => {
                log::error!("Failed to load dataset: {e:#}");
                (RowSet::default(), Some(format!("Error: {e:#}")))
            }
        };

        let leaderboard = load_leaderboard(config).unwrap_or_else(|e| {
            log::error!("Failed to load leaderboard snapshot: {e:#}");
            Leaderboard::default()
        });

        let tally = load_votes(config).unwrap_or_else(|e| {
            log::warn!("Failed to load vote snapshot, starting from zero: {e:#}");
            VoteTally::default()
        });

        let mut state = AppState::new(rows, config.windows, Ballot::new(tally), leaderboard);
        state.status_message = load_error;

        Self {
            state,
            colors: ChartColors::default(),
        }
    }
}

fn load_rows(config: &ViewerConfig) -> Result<RowSet> {
    let rows = match &config.data_path {
        Some(path) => load_file(path).with_context(|| format!("loading {}", path.display()))?,
        None => load_bundled().context("loading bundled dataset")?,
    };
    log::info!("Dataset ready: {} rows", rows.len());
    Ok(rows)
}

fn load_leaderboard(config: &ViewerConfig) -> Result<Leaderboard> {
    let Some(path) = &config.leaderboard_snapshot else {
        return Ok(Leaderboard::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    Ok(Leaderboard::from_json(&text)?)
}

fn load_votes(config: &ViewerConfig) -> Result<VoteTally> {
    let Some(path) = &config.vote_snapshot else {
        return Ok(VoteTally::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let tally = VoteTally::from_json(&text)
        .with_context(|| format!("decoding {}", path.display()))?;
    log::info!("Votes so far: {} support, {} against", tally.support, tally.against);
    Ok(tally)
}

impl eframe::App for OverdoseTrendsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: category, votes, quiz ----
        egui::SidePanel::left("control_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: trend charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::trend_charts(ui, &self.state, self.colors);
        });

        // ---- Floating windows ----
        let mut show_trivia = self.state.show_trivia;
        egui::Window::new("Trivia")
            .open(&mut show_trivia)
            .resizable(false)
            .show(ctx, |ui| {
                trivia::quiz_window(ui, &mut self.state);
            });
        self.state.show_trivia = show_trivia && self.state.show_trivia;

        let mut show_leaderboard = self.state.show_leaderboard;
        egui::Window::new("Leaderboard")
            .open(&mut show_leaderboard)
            .show(ctx, |ui| {
                trivia::leaderboard_table(ui, &self.state);
            });
        self.state.show_leaderboard = show_leaderboard && self.state.show_leaderboard;
    }
}
