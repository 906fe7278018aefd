use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::query::NAME_KEY;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – query inputs
// ---------------------------------------------------------------------------

/// Render the left query panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Queries");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Tallest ----
            ui.strong("Tallest dinosaur");
            if state.tallest.is_empty() {
                ui.label("No dinosaurs loaded.");
            }
            for (name, feet) in &state.tallest {
                ui.label(format!("{name}: {feet:.2} ft"));
            }
            ui.separator();

            // ---- Alive at ----
            ui.strong("Alive at (mya)");
            let mut mya = state.mya;
            if ui
                .add(egui::DragValue::new(&mut mya).speed(0.5).range(0.0..=300.0))
                .changed()
            {
                state.set_mya(mya);
            }

            ui.label("Key");
            let mut key = state.key.clone();
            egui::ComboBox::from_id_salt("alive_key")
                .selected_text(if key.is_empty() { "(id)" } else { key.as_str() })
                .show_ui(ui, |ui: &mut Ui| {
                    ui.selectable_value(&mut key, String::new(), "(id)");
                    ui.selectable_value(&mut key, NAME_KEY.to_string(), NAME_KEY);
                });
            ui.add(egui::TextEdit::singleline(&mut key).hint_text("custom key"));
            if key != state.key {
                state.set_key(key);
            }
            ui.separator();

            // ---- Description ----
            ui.strong("Describe dinosaur");
            let current_id = state.dinosaur_id.clone();
            let current_label = state
                .catalog
                .records
                .iter()
                .find(|r| r.dinosaur_id == current_id)
                .map(|r| r.name.clone())
                .unwrap_or_else(|| current_id.clone());
            let mut picked = None;
            egui::ComboBox::from_id_salt("describe_id")
                .selected_text(current_label)
                .show_ui(ui, |ui: &mut Ui| {
                    for record in &state.catalog.records {
                        if ui
                            .selectable_label(record.dinosaur_id == current_id, &record.name)
                            .clicked()
                        {
                            picked = Some(record.dinosaur_id.clone());
                        }
                    }
                });
            let mut typed = current_id.clone();
            ui.add(egui::TextEdit::singleline(&mut typed).hint_text("dinosaur id"));
            if typed != current_id {
                picked = Some(typed);
            }
            if let Some(id) = picked {
                state.set_dinosaur_id(id);
            }
            ui.separator();

            // ---- Legend ----
            ui.strong("Periods");
            for (period, color) in state.color_map.legend_entries() {
                ui.label(RichText::new(period).color(color));
            }
        });
}

// ---------------------------------------------------------------------------
// Results – description text and alive-at table
// ---------------------------------------------------------------------------

/// Render the description and the alive-at result table.
pub fn results(ui: &mut Ui, state: &AppState) {
    ui.heading("Description");
    ui.label(&state.description);
    ui.separator();

    let what = if state.key() == Some(NAME_KEY) { "Name" } else { "ID" };
    ui.heading(format!(
        "Alive {} mya ({} found)",
        state.mya,
        state.alive.len()
    ));

    TableBuilder::new(ui)
        .striped(true)
        .max_scroll_height(160.0)
        .column(Column::exact(32.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("#");
            });
            header.col(|ui| {
                ui.strong(what);
            });
        })
        .body(|mut body| {
            for (i, value) in state.alive.iter().enumerate() {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label((i + 1).to_string());
                    });
                    row.col(|ui| {
                        ui.label(value);
                    });
                });
            }
        });
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
            if ui.button("Load sample data").clicked() {
                load_sample(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} dinosaurs loaded across {} periods",
            state.catalog.len(),
            state.catalog.periods.len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open dinosaur data")
        .add_filter("Supported files", &["json", "csv", "parquet", "pq"])
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(catalog) => state.set_catalog(catalog),
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

pub fn load_sample(state: &mut AppState) {
    match crate::data::sample::sample_catalog() {
        Ok(catalog) => state.set_catalog(catalog),
        Err(e) => {
            log::error!("Failed to load sample data: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
