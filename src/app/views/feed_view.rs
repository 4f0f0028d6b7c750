use eframe::egui;

use crate::app::state::AppState;
use crate::app::theme;
use crate::shared::portal::ReactionAction;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.add_space(12.0);
        ui.label(
            egui::RichText::new("Campus feed")
                .size(20.0)
                .strong()
                .color(theme::TEXT_LIGHT),
        );
    });
    ui.add_space(8.0);

    if state.feed.is_empty() {
        ui.horizontal(|ui| {
            ui.add_space(12.0);
            if state.pending_feed.is_some() {
                ui.colored_label(theme::TEXT_SECONDARY, "Loading feed...");
                ui.spinner();
            } else {
                ui.colored_label(theme::TEXT_SECONDARY, "No posts yet.");
            }
        });
        return;
    }

    // Collect clicks first; reactions mutate state after the iteration.
    let mut clicked: Option<(String, ReactionAction)> = None;

    egui::ScrollArea::vertical().show(ui, |ui| {
        let posts = state.feed.clone();
        for post in &posts {
            let snapshot = state.reactions.snapshot(&post.id).unwrap_or_default();
            let busy = state.reactions.is_busy(&post.id);

            egui::Frame::default()
                .fill(theme::CARD_BG)
                .inner_margin(egui::Margin::same(10))
                .outer_margin(egui::Margin::symmetric(12, 4))
                .corner_radius(egui::CornerRadius::same(6))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.colored_label(
                            theme::TEXT_LIGHT,
                            egui::RichText::new(&post.author).strong(),
                        );
                        ui.colored_label(theme::TIMESTAMP, &post.created_at);
                    });
                    ui.colored_label(theme::TEXT_LIGHT, &post.content);
                    ui.add_space(6.0);

                    ui.horizontal(|ui| {
                        let like_label = if snapshot.user_liked {
                            format!("👍 {} ✓", snapshot.likes)
                        } else {
                            format!("👍 {}", snapshot.likes)
                        };
                        let dislike_label = if snapshot.user_disliked {
                            format!("👎 {} ✓", snapshot.dislikes)
                        } else {
                            format!("👎 {}", snapshot.dislikes)
                        };

                        // Clicks while a request is in flight are ignored,
                        // not queued; the button stays enabled so the count
                        // keeps rendering normally.
                        if ui.button(like_label).clicked() && !busy {
                            clicked = Some((post.id.clone(), ReactionAction::Like));
                        }
                        if ui.button(dislike_label).clicked() && !busy {
                            clicked = Some((post.id.clone(), ReactionAction::Dislike));
                        }
                        if busy {
                            ui.spinner();
                        }
                    });
                });
        }
    });

    if let Some((post_id, action)) = clicked {
        state.handle_reaction(&post_id, action);
    }
}
