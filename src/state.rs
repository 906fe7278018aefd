use std::collections::BTreeMap;

use crate::color::ColorMap;
use crate::config::QueryDefaults;
use crate::data::model::DinosaurCatalog;
use crate::data::query::{dinosaur_description, dinosaurs_alive_mya, tallest_dinosaur};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Loaded catalog (empty until a dataset is installed).
    pub catalog: DinosaurCatalog,

    /// Query inputs.
    pub mya: f64,
    /// Alive-at extraction key; empty means "none".
    pub key: String,
    pub dinosaur_id: String,

    /// Cached query answers, recomputed on every input change.
    pub tallest: BTreeMap<String, f64>,
    pub description: String,
    pub alive: Vec<String>,

    /// Period colours for the timeline.
    pub color_map: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Seed the query inputs from configuration.
    pub fn new(defaults: &QueryDefaults) -> Self {
        let mut state = Self {
            mya: defaults.mya,
            key: defaults.key.clone().unwrap_or_default(),
            dinosaur_id: defaults.dinosaur_id.clone(),
            ..Self::default()
        };
        state.requery();
        state
    }

    /// Ingest a newly loaded catalog, rebuild colours and answers.
    pub fn set_catalog(&mut self, catalog: DinosaurCatalog) {
        self.color_map = ColorMap::new(&catalog.periods);
        if self.dinosaur_id.is_empty() {
            if let Some(first) = catalog.records.first() {
                self.dinosaur_id = first.dinosaur_id.clone();
            }
        }
        self.catalog = catalog;
        self.status_message = None;
        self.requery();
    }

    pub fn set_mya(&mut self, mya: f64) {
        self.mya = mya;
        self.requery();
    }

    pub fn set_key(&mut self, key: impl Into<String>) {
        self.key = key.into();
        self.requery();
    }

    pub fn set_dinosaur_id(&mut self, id: impl Into<String>) {
        self.dinosaur_id = id.into();
        self.requery();
    }

    /// The key as passed to the alive-at query.
    pub fn key(&self) -> Option<&str> {
        let key = self.key.trim();
        (!key.is_empty()).then_some(key)
    }

    /// Recompute all three answers from the current inputs.
    pub fn requery(&mut self) {
        let records = &self.catalog.records;
        self.tallest = tallest_dinosaur(records);
        self.description = dinosaur_description(records, self.dinosaur_id.trim());
        self.alive = dinosaurs_alive_mya(records, self.mya, self.key());
        log::debug!(
            "requery: mya={} key={:?} id={:?} → {} alive",
            self.mya,
            self.key(),
            self.dinosaur_id,
            self.alive.len()
        );
    }
}
