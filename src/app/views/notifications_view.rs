use eframe::egui;

use crate::app::state::AppState;
use crate::app::theme;
use crate::shared::portal::NotificationKind;

/// Right-hand notifications panel with the unread list and mark-read buttons
pub fn render_panel(ctx: &egui::Context, state: &mut AppState) {
    let frame = egui::Frame::default()
        .fill(theme::PANEL_BG)
        .inner_margin(egui::Margin::same(10));

    egui::SidePanel::right("notifications_panel")
        .frame(frame)
        .default_width(300.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(
                    theme::TEXT_LIGHT,
                    egui::RichText::new("Notifications").size(16.0).strong(),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("✖").clicked() {
                        state.show_notifications_panel = false;
                    }
                });
            });
            ui.separator();

            if state.notifications.items().is_empty() {
                ui.colored_label(theme::TEXT_SECONDARY, "Nothing yet.");
                return;
            }

            let mut mark_read: Option<String> = None;

            egui::ScrollArea::vertical().show(ui, |ui| {
                for notification in state.notifications.items() {
                    egui::Frame::default()
                        .fill(theme::CARD_BG)
                        .inner_margin(egui::Margin::same(8))
                        .outer_margin(egui::Margin::symmetric(0, 3))
                        .corner_radius(egui::CornerRadius::same(4))
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                ui.colored_label(
                                    theme::TEXT_LIGHT,
                                    kind_label(&notification.kind),
                                );
                                if !notification.read {
                                    ui.colored_label(theme::UNREAD_BADGE, "●");
                                }
                            });
                            ui.colored_label(theme::TIMESTAMP, &notification.created_at);
                            if !notification.read {
                                if ui.small_button("Mark read").clicked() {
                                    mark_read = Some(notification.id.clone());
                                }
                            }
                        });
                }
            });

            if let Some(id) = mark_read {
                state.handle_mark_read(&id);
            }
        });
}

fn kind_label(kind: &NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Reaction => "Someone reacted to your post",
        NotificationKind::Comment => "New comment on your post",
        NotificationKind::Mention => "You were mentioned",
        NotificationKind::ClubAnnouncement => "Club announcement",
        NotificationKind::QuizResult => "Quiz result available",
        NotificationKind::System => "System notice",
    }
}
