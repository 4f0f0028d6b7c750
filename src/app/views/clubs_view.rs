use std::time::Instant;

use eframe::egui;

use crate::app::state::AppState;
use crate::app::theme;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    egui::SidePanel::left("clubs_sidebar")
        .frame(
            egui::Frame::default()
                .fill(theme::PANEL_BG)
                .inner_margin(egui::Margin::same(10)),
        )
        .default_width(220.0)
        .show_inside(ui, |ui| {
            ui.colored_label(
                theme::TEXT_LIGHT,
                egui::RichText::new("Your clubs").size(16.0).strong(),
            );
            ui.add_space(6.0);

            // Debounced search: filtering re-runs only after typing pauses.
            let response = ui.add(
                egui::TextEdit::singleline(&mut state.club_search.input)
                    .hint_text("Search clubs")
                    .text_color(theme::TEXT_LIGHT),
            );
            if response.changed() {
                state.club_search.mark_edited(Instant::now());
            }
            ui.add_space(6.0);

            let mut select: Option<String> = None;
            let mut leave: Option<String> = None;
            for club_id in state.filtered_clubs() {
                let selected = state.selected_club.as_deref() == Some(club_id);
                ui.horizontal(|ui| {
                    if ui.selectable_label(selected, club_id).clicked() {
                        select = Some(club_id.to_string());
                    }
                    if ui.small_button("Leave").clicked() {
                        leave = Some(club_id.to_string());
                    }
                });
            }
            if let Some(club_id) = select {
                state.selected_club = Some(club_id);
            }
            if let Some(club_id) = leave {
                state.handle_leave_club(&club_id);
            }

            ui.add_space(10.0);
            ui.separator();
            ui.colored_label(theme::TEXT_SECONDARY, "Join a club");
            ui.add(
                egui::TextEdit::singleline(&mut state.join_club_input)
                    .hint_text("club id")
                    .text_color(theme::TEXT_LIGHT),
            );
            if ui.button("Join").clicked() {
                state.handle_join_club();
            }
        });

    egui::CentralPanel::default()
        .frame(egui::Frame::default().fill(theme::BG_DARK))
        .show_inside(ui, |ui| {
            let Some(club_id) = state.selected_club.clone() else {
                ui.centered_and_justified(|ui| {
                    ui.colored_label(theme::TEXT_SECONDARY, "Select a club to chat.");
                });
                return;
            };

            ui.colored_label(
                theme::TEXT_LIGHT,
                egui::RichText::new(format!("# {}", club_id)).size(16.0).strong(),
            );
            ui.separator();

            let own_id = state.session.as_ref().map(|s| s.user_id.clone());
            egui::ScrollArea::vertical()
                .stick_to_bottom(true)
                .max_height(ui.available_height() - 48.0)
                .show(ui, |ui| {
                    for message in state.rooms.messages(&club_id) {
                        let own = own_id.as_deref() == Some(message.sender_id.as_str());
                        ui.horizontal(|ui| {
                            ui.colored_label(
                                if own { theme::ACCENT } else { theme::TEXT_SECONDARY },
                                egui::RichText::new(&message.sender_id).strong(),
                            );
                            ui.colored_label(theme::TIMESTAMP, &message.created_at);
                        });
                        ui.colored_label(theme::TEXT_LIGHT, &message.content);
                        ui.add_space(4.0);
                    }
                });

            ui.horizontal(|ui| {
                let send_clicked = ui.button("Send").clicked();
                let input = ui.add_sized(
                    [ui.available_width(), 28.0],
                    egui::TextEdit::singleline(&mut state.message_input)
                        .hint_text("Message")
                        .text_color(theme::TEXT_LIGHT),
                );
                let enter_pressed =
                    input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if send_clicked || enter_pressed {
                    state.handle_send_message();
                }
            });
        });
}
