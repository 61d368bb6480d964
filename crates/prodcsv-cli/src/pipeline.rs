//! Fetch → parse → write orchestration for a single export run.
//!
//! Stages run strictly in sequence and every failure aborts the run. The
//! output file is only opened once parsing has succeeded, so a failed run
//! leaves any previous export untouched.

use std::path::Path;

use prodcsv_core::Lang;
use prodcsv_scraper::{parse_catalog, CatalogClient};

use crate::export::write_records;

/// Location of the product catalog document.
pub(crate) const CATALOG_URL: &str =
    "https://storage.googleapis.com/resources-prod-shelftia/scrapers-prueba/product.json";

/// Runs one export and returns the number of data rows written.
///
/// # Errors
///
/// Returns an error naming the failed stage if the fetch, the parse, or the
/// CSV write fails.
pub(crate) async fn run_export(
    client: &CatalogClient,
    url: &str,
    lang: Lang,
    output: &Path,
) -> anyhow::Result<usize> {
    let document = client
        .fetch_catalog(url)
        .await
        .map_err(|e| anyhow::anyhow!("failed to fetch catalog from {url}: {e}"))?;

    let records = parse_catalog(&document, lang)
        .map_err(|e| anyhow::anyhow!("failed to parse catalog for language {lang}: {e}"))?;

    write_records(&records, output)
        .map_err(|e| anyhow::anyhow!("failed to write {}: {e}", output.display()))?;

    Ok(records.len())
}
