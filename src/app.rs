use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DinoFactsApp {
    pub state: AppState,
}

impl DinoFactsApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for DinoFactsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: query inputs ----
        egui::SidePanel::left("query_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: answers ----
        egui::TopBottomPanel::bottom("results_panel")
            .resizable(true)
            .default_height(280.0)
            .show(ctx, |ui| {
                panels::results(ui, &self.state);
            });

        // ---- Central panel: timeline ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::timeline_plot(ui, &self.state);
        });
    }
}
