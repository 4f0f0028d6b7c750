use eframe::egui;

use crate::app::quiz::QuizPhase;
use crate::app::state::AppState;
use crate::app::theme;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    if state.quiz_attempt.is_some() {
        render_attempt(ui, state);
    } else {
        render_quiz_list(ui, state);
    }
}

fn render_quiz_list(ui: &mut egui::Ui, state: &mut AppState) {
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.add_space(12.0);
        ui.label(
            egui::RichText::new("Quizzes")
                .size(20.0)
                .strong()
                .color(theme::TEXT_LIGHT),
        );
    });
    ui.add_space(8.0);

    if let Some(ref result) = state.quiz_result {
        ui.horizontal(|ui| {
            ui.add_space(12.0);
            ui.colored_label(
                theme::SUCCESS,
                format!("Last attempt: {}/{}", result.score, result.total),
            );
        });
        ui.add_space(8.0);
    }

    if state.quizzes.is_empty() {
        ui.horizontal(|ui| {
            ui.add_space(12.0);
            if state.pending_quizzes.is_some() {
                ui.colored_label(theme::TEXT_SECONDARY, "Loading quizzes...");
                ui.spinner();
            } else {
                ui.colored_label(theme::TEXT_SECONDARY, "No quizzes available.");
            }
        });
        return;
    }

    let mut start = None;
    for quiz in &state.quizzes {
        egui::Frame::default()
            .fill(theme::CARD_BG)
            .inner_margin(egui::Margin::same(10))
            .outer_margin(egui::Margin::symmetric(12, 4))
            .corner_radius(egui::CornerRadius::same(6))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.colored_label(theme::TEXT_LIGHT, egui::RichText::new(&quiz.title).strong());
                    ui.colored_label(
                        theme::TEXT_SECONDARY,
                        format!(
                            "{} questions · {}",
                            quiz.questions.len(),
                            time_limit_label(quiz.time_limit_secs)
                        ),
                    );
                    if ui.button("Start").clicked() {
                        start = Some(quiz.clone());
                    }
                });
            });
    }
    if let Some(quiz) = start {
        state.handle_start_quiz(quiz);
    }
}

fn time_limit_label(secs: u32) -> String {
    if secs < 60 {
        format!("{} sec", secs)
    } else {
        format!("{} min", secs / 60)
    }
}

fn render_attempt(ui: &mut egui::Ui, state: &mut AppState) {
    let (phase, remaining, current, title, question_count) = {
        let attempt = state.quiz_attempt.as_ref().unwrap();
        (
            attempt.phase(),
            attempt.remaining_secs(),
            attempt.current_question(),
            attempt.quiz().title.clone(),
            attempt.quiz().questions.len(),
        )
    };

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.add_space(12.0);
        ui.label(
            egui::RichText::new(&title)
                .size(20.0)
                .strong()
                .color(theme::TEXT_LIGHT),
        );
        if phase == QuizPhase::InProgress {
            let color = if remaining <= 30 {
                theme::ERROR
            } else {
                theme::TEXT_SECONDARY
            };
            ui.colored_label(color, format!("⏱ {}:{:02}", remaining / 60, remaining % 60));
        }
    });
    ui.add_space(8.0);

    if phase == QuizPhase::Submitted {
        ui.horizontal(|ui| {
            ui.add_space(12.0);
            match state.quiz_result {
                Some(ref result) => {
                    ui.colored_label(
                        theme::SUCCESS,
                        format!("Submitted. Score: {}/{}", result.score, result.total),
                    );
                }
                None => {
                    ui.colored_label(theme::TEXT_SECONDARY, "Submitted, grading...");
                    ui.spinner();
                }
            }
            if ui.button("Back to quizzes").clicked() {
                state.quiz_attempt = None;
            }
        });
        return;
    }

    if question_count == 0 {
        ui.horizontal(|ui| {
            ui.add_space(12.0);
            ui.colored_label(theme::TEXT_SECONDARY, "This quiz has no questions.");
            if ui.button("Submit").clicked() {
                state.handle_submit_quiz();
            }
        });
        return;
    }

    let (prompt, choices, selected) = {
        let attempt = state.quiz_attempt.as_ref().unwrap();
        let question = &attempt.quiz().questions[current];
        (
            question.prompt.clone(),
            question.choices.clone(),
            attempt.answers()[current],
        )
    };

    egui::Frame::default()
        .fill(theme::CARD_BG)
        .inner_margin(egui::Margin::same(12))
        .outer_margin(egui::Margin::symmetric(12, 4))
        .corner_radius(egui::CornerRadius::same(6))
        .show(ui, |ui| {
            ui.colored_label(
                theme::TEXT_SECONDARY,
                format!("Question {} of {}", current + 1, question_count),
            );
            ui.colored_label(theme::TEXT_LIGHT, egui::RichText::new(&prompt).size(16.0));
            ui.add_space(8.0);

            for (i, choice) in choices.iter().enumerate() {
                let checked = selected == Some(i);
                if ui.radio(checked, choice).clicked() {
                    if let Some(attempt) = state.quiz_attempt.as_mut() {
                        let _ = attempt.answer(current, i);
                    }
                }
            }
        });

    ui.horizontal(|ui| {
        ui.add_space(12.0);
        // Navigation is free: answering is not required to advance.
        if ui.button("◀ Previous").clicked() {
            if let Some(attempt) = state.quiz_attempt.as_mut() {
                attempt.prev_question();
            }
        }
        if ui.button("Next ▶").clicked() {
            if let Some(attempt) = state.quiz_attempt.as_mut() {
                attempt.next_question();
            }
        }
        ui.add_space(16.0);
        if ui
            .add(
                egui::Button::new(egui::RichText::new("Submit").color(theme::TEXT_LIGHT))
                    .fill(theme::ACCENT),
            )
            .clicked()
        {
            state.handle_submit_quiz();
        }
    });
}
