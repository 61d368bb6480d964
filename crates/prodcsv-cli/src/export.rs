//! CSV serialization of product records.

use std::path::Path;

use prodcsv_core::{ProductRecord, FIELD_NAMES};
use serde::Serialize;

use crate::render::{render_cell, render_float, render_list};

/// One CSV data row, with every column already rendered to text.
///
/// Field order must match [`FIELD_NAMES`]; rows are written without serde
/// headers so the header is emitted even for an empty export.
#[derive(Debug, Serialize)]
struct CsvRow {
    allergens: String,
    sku: String,
    vegan: String,
    kosher: String,
    organic: String,
    vegetarian: String,
    gluten_free: String,
    lactose_free: String,
    package_quantity: String,
    unit_size: String,
    net_weight: String,
}

impl From<&ProductRecord> for CsvRow {
    fn from(record: &ProductRecord) -> Self {
        Self {
            allergens: render_list(&record.allergens),
            sku: render_cell(record.sku.as_ref()),
            vegan: render_cell(record.vegan.as_ref()),
            kosher: render_cell(record.kosher.as_ref()),
            organic: render_cell(record.organic.as_ref()),
            vegetarian: render_cell(record.vegetarian.as_ref()),
            gluten_free: render_cell(record.gluten_free.as_ref()),
            lactose_free: render_cell(record.lactose_free.as_ref()),
            package_quantity: render_cell(record.package_quantity.as_ref()),
            unit_size: render_float(record.unit_size),
            net_weight: render_float(record.net_weight),
        }
    }
}

/// Creates (or truncates) `path` and writes the header followed by one row per
/// record, in order. Records are CRLF-terminated and fields are quoted only
/// when they contain a delimiter, quote, or line break.
///
/// # Errors
///
/// Returns [`csv::Error`] if the file cannot be created or written.
pub(crate) fn write_records(records: &[ProductRecord], path: &Path) -> Result<(), csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .quote_style(csv::QuoteStyle::Necessary)
        .from_path(path)?;

    writer.write_record(FIELD_NAMES)?;
    for record in records {
        writer.serialize(CsvRow::from(record))?;
    }
    writer.flush()?;

    tracing::info!(rows = records.len(), path = %path.display(), "wrote product CSV");
    Ok(())
}
