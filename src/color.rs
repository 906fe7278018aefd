use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: geological period → Color32
// ---------------------------------------------------------------------------

/// Maps each geological period of a catalog to a distinct colour.
#[derive(Debug, Clone, Default)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
}

impl ColorMap {
    /// Build a colour map from the catalog's sorted period set.
    pub fn new(periods: &BTreeSet<String>) -> Self {
        let mapping = periods
            .iter()
            .cloned()
            .zip(generate_palette(periods.len()))
            .collect();
        ColorMap { mapping }
    }

    /// Look up the colour for a period; unknown periods are grey.
    pub fn color_for(&self, period: &str) -> Color32 {
        self.mapping.get(period).copied().unwrap_or(Color32::GRAY)
    }

    /// Return the legend entries (period → colour) for the UI.
    pub fn legend_entries(&self) -> impl Iterator<Item = (&str, Color32)> {
        self.mapping.iter().map(|(p, c)| (p.as_str(), *c))
    }
}
