use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use arrow::array::{Array, AsArray, LargeListArray, ListArray};
use arrow::datatypes::{DataType, Float32Type, Float64Type, Int32Type, Int64Type};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;
use serde_json::Value as JsonValue;

use super::model::{DinosaurCatalog, DinosaurRecord, Mya};
use crate::error::DataError;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a dinosaur catalog from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json`    – `[{ "dinosaurId": ..., "mya": [...], ... }, ...]`
/// * `.csv`     – one record per row, `mya` holds semicolon-separated numbers
/// * `.parquet` – `mya` as a list column, everything else scalar
pub fn load_file(path: &Path) -> Result<DinosaurCatalog> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let catalog = match ext.as_str() {
        "json" => load_json(path),
        "csv" => load_csv(path),
        "parquet" | "pq" => load_parquet(path),
        other => return Err(DataError::UnsupportedFormat(other.to_string()).into()),
    }
    .with_context(|| format!("loading {}", path.display()))?;

    log::info!(
        "Loaded {} dinosaurs across {} periods from {}",
        catalog.len(),
        catalog.periods.len(),
        path.display()
    );
    Ok(catalog)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Parse the records-oriented JSON layout used by the source dataset.
pub fn parse_json(text: &str) -> Result<DinosaurCatalog> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;

    let rows = root.as_array().context("Expected top-level JSON array")?;

    let records = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            DinosaurRecord::deserialize(row).with_context(|| format!("Row {i} is not a dinosaur record"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(DinosaurCatalog::from_records(records))
}

fn load_json(path: &Path) -> Result<DinosaurCatalog> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    parse_json(&text)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

const CSV_COLUMNS: [&str; 7] = [
    "dinosaurId",
    "name",
    "pronunciation",
    "lengthInMeters",
    "period",
    "mya",
    "info",
];

/// CSV layout: header row with the JSON field names.
/// `mya` holds semicolon-separated numbers: `"156;144"` or `"66"`.
/// `meaningOfName` and `diet` are optional columns.
fn load_csv(path: &Path) -> Result<DinosaurCatalog> {
    let reader = csv::Reader::from_path(path).context("opening CSV")?;
    read_csv(reader)
}

fn read_csv<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<DinosaurCatalog> {
    let headers = reader.headers().context("reading CSV headers")?.clone();
    let position = |column: &str| headers.iter().position(|h| h == column);

    let mut required = [0usize; CSV_COLUMNS.len()];
    for (slot, column) in required.iter_mut().zip(CSV_COLUMNS) {
        *slot = position(column).ok_or(DataError::MissingColumn {
            format: "CSV",
            column,
        })?;
    }
    let [id_idx, name_idx, pron_idx, len_idx, period_idx, mya_idx, info_idx] = required;
    let meaning_idx = position("meaningOfName");
    let diet_idx = position("diet");

    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let row = result.with_context(|| format!("CSV row {row_no}"))?;
        let field = |idx: usize| row.get(idx).unwrap_or("").to_string();
        let optional = |idx: Option<usize>| {
            idx.and_then(|i| row.get(i))
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        let length_in_meters = parse_number(row.get(len_idx).unwrap_or(""), row_no, "lengthInMeters")?;
        let mya = parse_semicolon_floats(row.get(mya_idx).unwrap_or(""), row_no)?;

        records.push(DinosaurRecord {
            dinosaur_id: field(id_idx),
            name: field(name_idx),
            pronunciation: field(pron_idx),
            meaning_of_name: optional(meaning_idx),
            diet: optional(diet_idx),
            length_in_meters,
            period: field(period_idx),
            mya: Mya::new(mya),
            info: field(info_idx),
        });
    }

    Ok(DinosaurCatalog::from_records(records))
}

fn parse_number(s: &str, row: usize, column: &'static str) -> Result<f64, DataError> {
    s.trim().parse::<f64>().map_err(|_| DataError::InvalidNumber {
        row,
        column,
        value: s.to_string(),
    })
}

fn parse_semicolon_floats(s: &str, row: usize) -> Result<Vec<f64>, DataError> {
    if s.trim().is_empty() {
        return Ok(Vec::new());
    }
    s.split(';').map(|tok| parse_number(tok, row, "mya")).collect()
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file of dinosaur records.
///
/// Expected schema:
/// - `mya`: List<Float64> or LargeList<Float64> (Float32 items accepted)
/// - `lengthInMeters`: Float64, Float32, Int64 or Int32
/// - `dinosaurId`, `name`, `pronunciation`, `period`, `info`: Utf8
/// - `meaningOfName`, `diet`: optional nullable Utf8
fn load_parquet(path: &Path) -> Result<DinosaurCatalog> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;

        let id_col = required_column(&batch, "dinosaurId")?;
        let name_col = required_column(&batch, "name")?;
        let pron_col = required_column(&batch, "pronunciation")?;
        let len_col = required_column(&batch, "lengthInMeters")?;
        let period_col = required_column(&batch, "period")?;
        let mya_col = required_column(&batch, "mya")?;
        let info_col = required_column(&batch, "info")?;
        let meaning_col = optional_column(&batch, "meaningOfName");
        let diet_col = optional_column(&batch, "diet");

        let offset = records.len();
        for row in 0..batch.num_rows() {
            let row_no = offset + row;
            let text = |col: &Arc<dyn Array>, column: &'static str| -> Result<String, DataError> {
                extract_string(col, row, column)?.ok_or(DataError::NullValue { row: row_no, column })
            };
            let optional_text =
                |col: Option<&Arc<dyn Array>>, column: &'static str| -> Result<Option<String>, DataError> {
                    match col {
                        Some(col) => extract_string(col, row, column),
                        None => Ok(None),
                    }
                };

            let mya = extract_f64_list(mya_col, row)
                .with_context(|| format!("Row {row_no}: failed to read 'mya'"))?;
            let length_in_meters = extract_f64(len_col, row).ok_or(DataError::NullValue {
                row: row_no,
                column: "lengthInMeters",
            })?;

            records.push(DinosaurRecord {
                dinosaur_id: text(id_col, "dinosaurId")?,
                name: text(name_col, "name")?,
                pronunciation: text(pron_col, "pronunciation")?,
                meaning_of_name: optional_text(meaning_col, "meaningOfName")?,
                diet: optional_text(diet_col, "diet")?,
                length_in_meters,
                period: text(period_col, "period")?,
                mya: Mya::new(mya),
                info: text(info_col, "info")?,
            });
        }
    }

    Ok(DinosaurCatalog::from_records(records))
}

// -- Parquet / Arrow helpers --

fn required_column<'a>(
    batch: &'a RecordBatch,
    column: &'static str,
) -> Result<&'a Arc<dyn Array>, DataError> {
    let idx = batch
        .schema()
        .index_of(column)
        .map_err(|_| DataError::MissingColumn {
            format: "Parquet",
            column,
        })?;
    Ok(batch.column(idx))
}

fn optional_column<'a>(batch: &'a RecordBatch, column: &str) -> Option<&'a Arc<dyn Array>> {
    let idx = batch.schema().index_of(column).ok()?;
    Some(batch.column(idx))
}

/// Extract a `Vec<f64>` from a List or LargeList column at the given row.
fn extract_f64_list(col: &Arc<dyn Array>, row: usize) -> Result<Vec<f64>> {
    if col.is_null(row) {
        bail!("null value in list column");
    }

    let values_array = match col.data_type() {
        DataType::List(_) => {
            let list_arr = col
                .as_any()
                .downcast_ref::<ListArray>()
                .context("expected ListArray")?;
            list_arr.value(row)
        }
        DataType::LargeList(_) => {
            let list_arr = col
                .as_any()
                .downcast_ref::<LargeListArray>()
                .context("expected LargeListArray")?;
            list_arr.value(row)
        }
        other => bail!("Expected List or LargeList column, got {other:?}"),
    };

    match values_array.data_type() {
        DataType::Float64 => Ok(values_array
            .as_primitive::<Float64Type>()
            .iter()
            .map(|v| v.unwrap_or(f64::NAN))
            .collect()),
        DataType::Float32 => Ok(values_array
            .as_primitive::<Float32Type>()
            .iter()
            .map(|v| v.map_or(f64::NAN, f64::from))
            .collect()),
        other => bail!("List inner type is {other:?}, expected Float64 or Float32"),
    }
}

/// Extract a numeric cell as `f64`; `None` for nulls and non-numeric columns.
fn extract_f64(col: &Arc<dyn Array>, row: usize) -> Option<f64> {
    if col.is_null(row) {
        return None;
    }
    match col.data_type() {
        DataType::Float64 => Some(col.as_primitive::<Float64Type>().value(row)),
        DataType::Float32 => Some(f64::from(col.as_primitive::<Float32Type>().value(row))),
        DataType::Int64 => Some(col.as_primitive::<Int64Type>().value(row) as f64),
        DataType::Int32 => Some(f64::from(col.as_primitive::<Int32Type>().value(row))),
        _ => None,
    }
}

/// Extract a string cell; `Ok(None)` for nulls.
fn extract_string(
    col: &Arc<dyn Array>,
    row: usize,
    column: &str,
) -> Result<Option<String>, DataError> {
    if col.is_null(row) {
        return Ok(None);
    }
    match col.data_type() {
        DataType::Utf8 => Ok(Some(col.as_string::<i32>().value(row).to_string())),
        DataType::LargeUtf8 => Ok(Some(col.as_string::<i64>().value(row).to_string())),
        other => Err(DataError::UnsupportedColumnType {
            column: column.to_string(),
            data_type: format!("{other:?}"),
        }),
    }
}
