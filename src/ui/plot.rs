use eframe::egui::{Color32, Ui};
use egui_plot::{Line, Plot, PlotPoints, VLine};

use crate::state::AppState;

/// Half-width given to point estimates so they show up as short bars.
const POINT_HALF_WIDTH: f64 = 0.5;

// ---------------------------------------------------------------------------
// Timeline plot (central panel)
// ---------------------------------------------------------------------------

/// Render one horizontal span per dinosaur over its `mya` values, with a
/// vertical marker at the queried `mya`.
pub fn timeline_plot(ui: &mut Ui, state: &AppState) {
    if state.catalog.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a file to view dinosaurs  (File → Open…)");
        });
        return;
    }

    Plot::new("timeline_plot")
        .legend(egui_plot::Legend::default())
        .x_axis_label("Million years ago")
        .y_axis_label("Dinosaur")
        .show_y(false)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let row_count = state.catalog.len();
            for (idx, record) in state.catalog.records.iter().enumerate() {
                let (Some(start), Some(end)) = (record.mya.first(), record.mya.latest()) else {
                    continue;
                };
                let (start, end) = if start == end {
                    (start + POINT_HALF_WIDTH, end - POINT_HALF_WIDTH)
                } else {
                    (start, end)
                };

                // Newest entries at the bottom, plotted against negated mya so
                // time runs left to right.
                let y = (row_count - idx) as f64;
                let points: PlotPoints = vec![[-start, y], [-end, y]].into();

                let line = Line::new(points)
                    .name(format!("{} ({} mya)", record.name, record.mya))
                    .color(state.color_map.color_for(&record.period))
                    .width(4.0);

                plot_ui.line(line);
            }

            plot_ui.vline(
                VLine::new(-state.mya)
                    .name(format!("{} mya", state.mya))
                    .color(Color32::LIGHT_RED)
                    .width(1.5),
            );
        });
}
