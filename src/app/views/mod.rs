use eframe::egui;

use crate::app::push::PushStatus;
use crate::app::state::AppState;
use crate::app::theme;
use crate::app::types::AppView;

pub mod auth_view;
pub mod clubs_view;
pub mod feed_view;
pub mod notifications_view;
pub mod quiz_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    let frame_style = egui::Frame::default()
        .fill(theme::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8));

    egui::TopBottomPanel::top("top_panel")
        .frame(frame_style)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(
                    theme::TEXT_LIGHT,
                    egui::RichText::new("🎓 UniPortal").size(18.0).strong(),
                );

                if state.session.is_some() {
                    ui.add_space(16.0);
                    view_button(ui, state, AppView::Feed, "Feed");
                    view_button(ui, state, AppView::Clubs, "Clubs");
                    view_button(ui, state, AppView::Quizzes, "Quizzes");
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(16.0);

                    match state.push_status {
                        Some(PushStatus::Connected) => {
                            ui.colored_label(theme::STATUS_ONLINE, "🟢 Live");
                        }
                        Some(PushStatus::Connecting) | Some(PushStatus::Retrying) => {
                            ui.colored_label(theme::WARNING, "🔄 Connecting");
                        }
                        _ if state.session.is_some() => {
                            ui.colored_label(theme::STATUS_OFFLINE, "🔴 Offline");
                        }
                        _ => {}
                    }

                    ui.add_space(16.0);

                    if let Some(session) = state.session.clone() {
                        if ui.button("Logout").clicked() {
                            state.logout();
                        }
                        ui.colored_label(theme::TEXT_LIGHT, format!("@{}", session.username));

                        // Unread badge toggles the notifications panel.
                        let unread = state.notifications.unread_count();
                        let label = if unread > 0 {
                            format!("🔔 {}", unread)
                        } else {
                            "🔔".to_string()
                        };
                        let button = egui::Button::new(
                            egui::RichText::new(label).color(theme::TEXT_LIGHT),
                        )
                        .fill(if unread > 0 {
                            theme::UNREAD_BADGE
                        } else {
                            theme::TOP_BAR_BG
                        });
                        if ui.add(button).clicked() {
                            state.show_notifications_panel = !state.show_notifications_panel;
                        }
                    }
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    if state.show_notifications_panel && state.session.is_some() {
        notifications_view::render_panel(ctx, state);
    }

    let frame = egui::Frame::default()
        .fill(theme::BG_DARK)
        .inner_margin(egui::Margin::same(0));

    egui::CentralPanel::default()
        .frame(frame)
        .show(ctx, |ui| {
            render_error_banner(ui, state);
            match state.current_view {
                AppView::Auth => auth_view::render(ui, state),
                AppView::Feed => feed_view::render(ui, state),
                AppView::Clubs => clubs_view::render(ui, state),
                AppView::Quizzes => quiz_view::render(ui, state),
            }
        });
}

/// Transient dismissable notice for network/validation failures
fn render_error_banner(ui: &mut egui::Ui, state: &mut AppState) {
    let Some(error) = state.ui_error.clone() else {
        return;
    };
    ui.horizontal(|ui| {
        ui.colored_label(theme::ERROR, format!("⚠ {}", error));
        if ui.small_button("Dismiss").clicked() {
            state.ui_error = None;
        }
    });
}

fn view_button(ui: &mut egui::Ui, state: &mut AppState, view: AppView, label: &str) {
    let selected = state.current_view == view;
    let text = egui::RichText::new(label).color(if selected {
        theme::TEXT_LIGHT
    } else {
        theme::TEXT_SECONDARY
    });
    if ui.selectable_label(selected, text).clicked() {
        state.current_view = view;
    }
}
