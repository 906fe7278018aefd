use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{ArrayRef, Float64Array, Float64Builder, ListBuilder, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

use super::model::DinosaurRecord;

// ---------------------------------------------------------------------------
// Writers: the inverse of each loader layout
// ---------------------------------------------------------------------------

/// Write records as a pretty-printed JSON array.
pub fn write_json(path: &Path, records: &[DinosaurRecord]) -> Result<()> {
    let file = std::fs::File::create(path).context("creating JSON file")?;
    serde_json::to_writer_pretty(file, records).context("writing JSON")?;
    Ok(())
}

/// Write records as CSV with `mya` joined by semicolons.
pub fn write_csv(path: &Path, records: &[DinosaurRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV file")?;
    writer.write_record([
        "dinosaurId",
        "name",
        "pronunciation",
        "meaningOfName",
        "diet",
        "lengthInMeters",
        "period",
        "mya",
        "info",
    ])?;

    for record in records {
        let mya = record
            .mya
            .values()
            .iter()
            .map(f64::to_string)
            .collect::<Vec<_>>()
            .join(";");
        let length = record.length_in_meters.to_string();
        writer
            .write_record([
                record.dinosaur_id.as_str(),
                record.name.as_str(),
                record.pronunciation.as_str(),
                record.meaning_of_name.as_deref().unwrap_or(""),
                record.diet.as_deref().unwrap_or(""),
                length.as_str(),
                record.period.as_str(),
                mya.as_str(),
                record.info.as_str(),
            ])
            .with_context(|| format!("writing CSV row for {}", record.dinosaur_id))?;
    }

    writer.flush().context("flushing CSV")?;
    Ok(())
}

/// Build the Arrow batch the Parquet loader expects.
pub fn to_record_batch(records: &[DinosaurRecord]) -> Result<RecordBatch> {
    let mut mya_builder = ListBuilder::new(Float64Builder::new());
    for record in records {
        mya_builder.values().append_slice(record.mya.values());
        mya_builder.append(true);
    }

    let lengths: Vec<f64> = records.iter().map(|r| r.length_in_meters).collect();

    let schema = Arc::new(Schema::new(vec![
        Field::new("dinosaurId", DataType::Utf8, false),
        Field::new("name", DataType::Utf8, false),
        Field::new("pronunciation", DataType::Utf8, false),
        Field::new("meaningOfName", DataType::Utf8, true),
        Field::new("diet", DataType::Utf8, true),
        Field::new("lengthInMeters", DataType::Float64, false),
        Field::new("period", DataType::Utf8, false),
        Field::new(
            "mya",
            DataType::List(Arc::new(Field::new("item", DataType::Float64, true))),
            false,
        ),
        Field::new("info", DataType::Utf8, false),
    ]));

    let columns: Vec<ArrayRef> = vec![
        string_column(records.iter().map(|r| r.dinosaur_id.as_str())),
        string_column(records.iter().map(|r| r.name.as_str())),
        string_column(records.iter().map(|r| r.pronunciation.as_str())),
        optional_string_column(records.iter().map(|r| r.meaning_of_name.as_deref())),
        optional_string_column(records.iter().map(|r| r.diet.as_deref())),
        Arc::new(Float64Array::from(lengths)),
        string_column(records.iter().map(|r| r.period.as_str())),
        Arc::new(mya_builder.finish()),
        string_column(records.iter().map(|r| r.info.as_str())),
    ];

    RecordBatch::try_new(schema, columns).context("building record batch")
}

fn string_column<'a>(values: impl Iterator<Item = &'a str>) -> ArrayRef {
    Arc::new(StringArray::from(values.collect::<Vec<_>>()))
}

fn optional_string_column<'a>(values: impl Iterator<Item = Option<&'a str>>) -> ArrayRef {
    Arc::new(StringArray::from(values.collect::<Vec<_>>()))
}

/// Write records to a single-batch Parquet file.
pub fn write_parquet(path: &Path, records: &[DinosaurRecord]) -> Result<()> {
    let batch = to_record_batch(records)?;
    let file = std::fs::File::create(path).context("creating parquet file")?;
    let mut writer =
        ArrowWriter::try_new(file, batch.schema(), None).context("creating parquet writer")?;
    writer.write(&batch).context("writing parquet batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}
