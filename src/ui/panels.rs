use eframe::egui::{self, Color32, RichText, Ui};

use overdose_trends::data::loader::load_file;
use overdose_trends::votes::Vote;

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – category, votes, quiz
// ---------------------------------------------------------------------------

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Drug");
    ui.separator();

    // Clone so the selection can change while the list is drawn.
    let domain = state.domain.clone();
    let mut chosen = None;
    egui::ComboBox::from_id_salt("category")
        .selected_text(state.selection.label())
        .show_ui(ui, |ui: &mut Ui| {
            for selection in domain.selections() {
                let is_current = selection == state.selection;
                if ui.selectable_label(is_current, selection.label()).clicked() {
                    chosen = Some(selection);
                }
            }
        });
    if let Some(selection) = chosen {
        state.select(selection);
    }

    ui.add_space(12.0);
    ui.heading("Cast Your Vote");
    ui.separator();
    ui.label("Do you support the Chocolate Opioid Initiative?");

    let can_vote = !state.ballot.has_voted();
    ui.horizontal(|ui: &mut Ui| {
        if ui.add_enabled(can_vote, egui::Button::new("✓ Support")).clicked() {
            state.vote(Vote::Support);
        }
        if ui.add_enabled(can_vote, egui::Button::new("✗ Against")).clicked() {
            state.vote(Vote::Against);
        }
    });

    let tally = state.ballot.tally();
    ui.label(format!("Support: {} votes", tally.support));
    ui.label(format!("Against: {} votes", tally.against));
    if state.ballot.has_voted() {
        ui.label(RichText::new("✓ Thank you for voting!").color(Color32::LIGHT_GREEN));
    }

    ui.add_space(12.0);
    ui.heading("Trivia");
    ui.separator();
    ui.horizontal(|ui: &mut Ui| {
        if ui.button("Play").clicked() {
            state.show_trivia = true;
        }
        if ui.button("Leaderboard").clicked() {
            state.show_leaderboard = true;
        }
    });

    ui.add_space(12.0);
    ui.small("Satire. Not medical advice. SAMHSA National Helpline: 1-800-662-4357");
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} rows, {} drugs",
            state.rows.len(),
            state.domain.categories().len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open overdose dataset")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match load_file(&path) {
            Ok(rows) => {
                log::info!("Loaded {} rows from {}", rows.len(), path.display());
                state.set_rows(rows);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
