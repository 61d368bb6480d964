//! Extraction of localized product attributes from the raw catalog document.
//!
//! The catalog is walked as an untyped [`serde_json::Value`] so that missing
//! or oddly-shaped structure degrades to defaults instead of failing the run.
//! Only two things are fatal: a locale string that is not valid JSON, and a
//! size value that cannot be converted to a number.
//!
//! ## Observed shape
//!
//! ```text
//! { "allVariants": [
//!     { "attributesRaw": [
//!         { "name": "custom_attributes",
//!           "value": { "es-CR": "<json string>", "en-CR": "<json string>" } },
//!         { "name": "...", "value": ... } ] } ] }
//! ```
//!
//! Each locale string decodes to an object of `{ "<attr>": { "value": ... } }`
//! wrappers. `allergens` wraps an array of `{ "name": ... }` objects.

use prodcsv_core::{Lang, ProductRecord};
use serde_json::{Map, Value};

use crate::error::ScraperError;

/// `attributesRaw` entry name that carries the locale-keyed attribute bundle.
pub const CUSTOM_ATTRIBUTES: &str = "custom_attributes";

static NULL: Value = Value::Null;

/// Produces one [`ProductRecord`] per element of `document["allVariants"]`,
/// in document order.
///
/// A missing or non-array `allVariants` yields an empty result.
///
/// # Errors
///
/// Returns [`ScraperError::Variant`] wrapping the first
/// [`ScraperError::NestedDecode`] or [`ScraperError::NumericCoercion`]
/// encountered. No partial result is returned.
pub fn parse_catalog(document: &Value, lang: Lang) -> Result<Vec<ProductRecord>, ScraperError> {
    let Some(variants) = document.get("allVariants").and_then(Value::as_array) else {
        tracing::warn!("catalog has no allVariants array; treating it as empty");
        return Ok(Vec::new());
    };

    tracing::info!(variants = variants.len(), %lang, "parsing catalog variants");

    variants
        .iter()
        .enumerate()
        .map(|(index, variant)| {
            extract_attributes(variant, lang).map_err(|e| ScraperError::Variant {
                index,
                source: Box::new(e),
            })
        })
        .collect()
}

/// Builds the record for a single variant from the `custom_attributes`
/// entries in its `attributesRaw` list.
///
/// Every entry is decoded, in order, into a complete record and replaces the
/// one before it, so the last entry determines every column. A variant with no
/// such entry yields the all-defaults record.
///
/// # Errors
///
/// Propagates errors from [`decode_locale`].
pub fn extract_attributes(variant: &Value, lang: Lang) -> Result<ProductRecord, ScraperError> {
    let entries = variant
        .get("attributesRaw")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    let mut record = ProductRecord::default();
    for entry in entries {
        if entry.get("name").and_then(Value::as_str) != Some(CUSTOM_ATTRIBUTES) {
            tracing::trace!(name = ?entry.get("name"), "skipping attribute entry");
            continue;
        }
        let custom_attributes = entry.get("value").unwrap_or(&NULL);
        record = decode_locale(custom_attributes, lang)?;
    }

    Ok(record)
}

/// Decodes the JSON string stored under `lang` in a `custom_attributes`
/// mapping and projects it onto all eleven output columns.
///
/// A missing key, or a key whose value is not a string, decodes as `"{}"`.
/// Attributes absent from the decoded object (or explicitly `null`) take their
/// defaults: null, an empty allergen list, or `0.0` for the two sizes.
///
/// # Errors
///
/// - [`ScraperError::NestedDecode`]: the locale string is not valid JSON, or
///   holds a number too large for `f64` (such as `1e400`).
/// - [`ScraperError::NumericCoercion`]: `unit_size` or `net_weight` cannot be
///   converted to a number.
pub fn decode_locale(
    custom_attributes: &Value,
    lang: Lang,
) -> Result<ProductRecord, ScraperError> {
    let raw = custom_attributes
        .get(lang.as_key())
        .and_then(Value::as_str)
        .unwrap_or("{}");

    let decoded: Value = serde_json::from_str(raw)
        .map_err(|source| ScraperError::NestedDecode { lang, source })?;

    let empty = Map::new();
    let fields = decoded.as_object().unwrap_or(&empty);
    let attr = |key: &str| wrapped_value(fields, key).filter(|v| !v.is_null()).cloned();
    let size = |key: &'static str| {
        wrapped_value(fields, key).map_or(Ok(0.0), |v| coerce_float(key, v))
    };

    Ok(ProductRecord {
        allergens: wrapped_value(fields, "allergens")
            .map(allergen_names)
            .unwrap_or_default(),
        sku: attr("sku"),
        vegan: attr("vegan"),
        kosher: attr("kosher"),
        organic: attr("organic"),
        vegetarian: attr("vegetarian"),
        gluten_free: attr("gluten_free"),
        lactose_free: attr("lactose_free"),
        package_quantity: attr("package_quantity"),
        unit_size: size("unit_size")?,
        net_weight: size("net_weight")?,
    })
}

/// Converts an attribute value to `f64` the permissive way: numbers as-is,
/// `null` as `0.0`, booleans as `1.0`/`0.0`, and strings parsed after
/// trimming surrounding whitespace.
///
/// # Errors
///
/// Returns [`ScraperError::NumericCoercion`] for arrays, objects, and strings
/// that do not parse as a float.
pub fn coerce_float(field: &'static str, value: &Value) -> Result<f64, ScraperError> {
    let not_numeric = || ScraperError::NumericCoercion {
        field,
        value: value.to_string(),
    };

    match value {
        Value::Null => Ok(0.0),
        Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        Value::Number(n) => n.as_f64().ok_or_else(not_numeric),
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| not_numeric()),
        Value::Array(_) | Value::Object(_) => Err(not_numeric()),
    }
}

/// Returns `fields[key]["value"]` when the wrapper is an object carrying a
/// `value` key.
fn wrapped_value<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    fields.get(key)?.as_object()?.get("value")
}

fn allergen_names(value: &Value) -> Vec<Value> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .map(|item| item.get("name").cloned().unwrap_or(Value::Null))
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
