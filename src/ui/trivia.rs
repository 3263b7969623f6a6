use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use overdose_trends::leaderboard::LEADERBOARD_LIMIT;

use crate::color::chocolate_shades;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Quiz window
// ---------------------------------------------------------------------------

/// Render the current question, or the result screen once finished.
pub fn quiz_window(ui: &mut Ui, state: &mut AppState) {
    if state.quiz.is_finished() {
        result_screen(ui, state);
        return;
    }

    let Some(question) = state.quiz.current().cloned() else {
        return;
    };

    ui.horizontal(|ui: &mut Ui| {
        ui.label(format!(
            "Question {}/{}",
            state.quiz.position() + 1,
            state.quiz.total()
        ));
        ui.separator();
        ui.label(format!("Score: {}", state.quiz.score()));
    });
    ui.separator();
    ui.strong(&question.prompt);
    ui.add_space(6.0);

    let selected = state.quiz.selected();
    for (i, option) in question.options.iter().enumerate() {
        let mut text = RichText::new(option);
        if selected.is_some() {
            if i == question.correct {
                text = text.color(Color32::LIGHT_GREEN);
            } else if selected == Some(i) {
                text = text.color(Color32::LIGHT_RED);
            }
        }
        if ui
            .add_enabled(selected.is_none(), egui::Button::new(text))
            .clicked()
        {
            state.quiz.answer(i);
        }
    }

    if let Some(choice) = state.quiz.selected() {
        ui.add_space(6.0);
        let verdict = if choice == question.correct {
            "✓ Correct!"
        } else {
            "✗ Incorrect"
        };
        ui.strong(verdict);
        ui.label(&question.explanation);
        if ui.button("Next").clicked() {
            state.quiz.advance();
        }
    }
}

fn result_screen(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Quiz Complete!");
    ui.label(format!(
        "{}/{} ({}%)",
        state.quiz.score(),
        state.quiz.total(),
        state.quiz.percentage()
    ));
    ui.separator();

    if state.score_submitted {
        ui.label("Score saved.");
    } else {
        ui.label("Enter your name for the leaderboard:");
        ui.horizontal(|ui: &mut Ui| {
            ui.text_edit_singleline(&mut state.player_name);
            if ui.button("Submit").clicked() {
                state.submit_score();
            }
        });
    }

    ui.horizontal(|ui: &mut Ui| {
        if ui.button("Play Again").clicked() {
            state.restart_quiz();
        }
        if ui.button("Close").clicked() {
            state.show_trivia = false;
        }
    });
}

// ---------------------------------------------------------------------------
// Leaderboard table
// ---------------------------------------------------------------------------

pub fn leaderboard_table(ui: &mut Ui, state: &AppState) {
    ui.label(format!("Top {LEADERBOARD_LIMIT} Players"));

    let top = state.leaderboard.top(LEADERBOARD_LIMIT);
    if top.is_empty() {
        ui.label("No scores yet. Be the first to play!");
        return;
    }

    let medals = chocolate_shades(3);

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::exact(32.0))
        .column(Column::remainder())
        .column(Column::auto())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("#");
            });
            header.col(|ui| {
                ui.strong("Name");
            });
            header.col(|ui| {
                ui.strong("Score");
            });
        })
        .body(|mut body| {
            for (rank, entry) in top.iter().enumerate() {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        let mut text = RichText::new(format!("{}", rank + 1));
                        if let Some(color) = medals.get(rank) {
                            text = text.strong().color(*color);
                        }
                        ui.label(text);
                    });
                    row.col(|ui| {
                        ui.label(&entry.name);
                    });
                    row.col(|ui| {
                        ui.label(format!(
                            "{}/{} ({}%)",
                            entry.score,
                            entry.total,
                            entry.percentage()
                        ));
                    });
                });
            }
        });
}
