use eframe::egui;

use crate::app::state::AppState;
use crate::app::theme;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let available_rect = ui.available_rect_before_wrap();
    ui.painter().rect_filled(available_rect, 0.0, theme::BG_DARK);

    ui.scope_builder(egui::UiBuilder::new().max_rect(available_rect), |ui| {
        ui.vertical_centered(|ui| {
            let total_height = 260.0;
            let top_space = (available_rect.height() - total_height).max(0.0) / 2.0;
            ui.add_space(top_space);

            ui.label(
                egui::RichText::new("🎓 UniPortal")
                    .size(32.0)
                    .strong()
                    .color(theme::TEXT_LIGHT),
            );
            ui.add_space(20.0);

            ui.label(
                egui::RichText::new("Sign in")
                    .size(24.0)
                    .color(theme::TEXT_LIGHT),
            );
            ui.add_space(20.0);

            if let Some(ref error) = state.login_error {
                ui.label(egui::RichText::new(error).color(theme::ERROR));
                ui.add_space(10.0);
            }

            let input_width = 280.0;
            let label_width = 80.0;

            ui.horizontal(|ui| {
                ui.add_space((available_rect.width() - input_width - label_width - 20.0) / 2.0);
                ui.add_sized(
                    [label_width, 24.0],
                    egui::Label::new(
                        egui::RichText::new("User id:").color(theme::TEXT_SECONDARY),
                    ),
                );
                ui.add_sized(
                    [input_width, 28.0],
                    egui::TextEdit::singleline(&mut state.user_id_input)
                        .text_color(theme::TEXT_LIGHT),
                );
            });
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.add_space((available_rect.width() - input_width - label_width - 20.0) / 2.0);
                ui.add_sized(
                    [label_width, 24.0],
                    egui::Label::new(egui::RichText::new("Name:").color(theme::TEXT_SECONDARY)),
                );
                ui.add_sized(
                    [input_width, 28.0],
                    egui::TextEdit::singleline(&mut state.username_input)
                        .text_color(theme::TEXT_LIGHT),
                );
            });

            ui.add_space(20.0);

            if ui
                .add_sized(
                    [120.0, 32.0],
                    egui::Button::new(egui::RichText::new("Login").color(theme::TEXT_LIGHT))
                        .fill(theme::ACCENT),
                )
                .clicked()
            {
                state.login_error = None;
                state.handle_login();
            }
        });
    });
}
