use std::path::Path;

use anyhow::Result;
use dino_facts::data::sample::sample_catalog;
use dino_facts::data::writer::{write_csv, write_json, write_parquet};

/// Write the embedded sample dataset in every format the loader reads.
fn main() -> Result<()> {
    env_logger::init();

    let catalog = sample_catalog()?;

    let outputs: [(&str, fn(&Path, &[dino_facts::DinosaurRecord]) -> Result<()>); 3] = [
        ("sample_dinosaurs.parquet", write_parquet),
        ("sample_dinosaurs.json", write_json),
        ("sample_dinosaurs.csv", write_csv),
    ];

    for (file_name, write) in outputs {
        write(Path::new(file_name), &catalog.records)?;
        log::info!("Wrote {file_name}");
        println!("Wrote {} dinosaurs to {file_name}", catalog.len());
    }

    Ok(())
}
