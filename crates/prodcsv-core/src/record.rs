use serde_json::Value;

/// Output column names, in the fixed order they appear in the CSV header.
pub const FIELD_NAMES: [&str; 11] = [
    "allergens",
    "sku",
    "vegan",
    "kosher",
    "organic",
    "vegetarian",
    "gluten_free",
    "lactose_free",
    "package_quantity",
    "unit_size",
    "net_weight",
];

/// One flattened row of localized product attributes, produced per catalog
/// variant.
///
/// Extraction is best-effort: apart from the two numeric sizes, attribute
/// values are carried through exactly as they appeared in the source JSON
/// (usually a string, boolean, or number). `None` means the attribute was
/// absent or explicitly `null`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductRecord {
    /// Allergen names in source order, duplicates preserved. An allergen
    /// entry without a `name` contributes `Value::Null`.
    pub allergens: Vec<Value>,
    pub sku: Option<Value>,
    pub vegan: Option<Value>,
    pub kosher: Option<Value>,
    pub organic: Option<Value>,
    pub vegetarian: Option<Value>,
    pub gluten_free: Option<Value>,
    pub lactose_free: Option<Value>,
    pub package_quantity: Option<Value>,
    /// Defaults to `0.0` when absent.
    pub unit_size: f64,
    /// Defaults to `0.0` when absent.
    pub net_weight: f64,
}
