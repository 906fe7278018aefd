//! Dinosaur fact queries over an in-memory catalog, plus the egui viewer
//! built on top of them.
//!
//! The three queries live in [`data::query`] and take a plain slice of
//! [`data::model::DinosaurRecord`]; everything else loads, stores, or shows
//! their answers.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod state;
pub mod ui;

pub use data::model::{DinosaurCatalog, DinosaurRecord, Mya};
pub use data::query::{dinosaur_description, dinosaurs_alive_mya, tallest_dinosaur};
