/**
 * UniPortal Desktop App - Main Entry Point
 *
 * Implements eframe::App around the central AppState. Every frame drains the
 * pending channels, runs the poll scheduler, dispatches push events, and
 * advances the quiz countdown before rendering.
 */
use std::time::Instant;

use eframe::egui;
use tracing_subscriber::EnvFilter;
use uniportal::app::{views, AppState};

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "UniPortal",
        options,
        Box::new(|_cc| Ok(Box::new(PortalApp::default()))),
    )
}

/// Main application state
struct PortalApp {
    state: AppState,
}

impl Default for PortalApp {
    fn default() -> Self {
        Self {
            state: AppState::new(),
        }
    }
}

impl eframe::App for PortalApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.on_frame(Instant::now());

        views::render_top_bar(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);

        ctx.request_repaint();
    }
}
