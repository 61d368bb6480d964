//! Textual rendering of record values into CSV cells.
//!
//! Cells use the canonical forms operators already see from the existing
//! export: `True`/`False` for booleans, an empty cell for null, `250.0` for
//! integral floats, and bracketed literals such as `['Milk', 'Soy']` for
//! sequences.

use std::fmt::Write as _;

use serde_json::{Number, Value};

/// Renders a scalar column. Absent and `null` values become an empty cell;
/// strings are written verbatim.
pub(crate) fn render_cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => repr(other),
    }
}

/// Renders a sequence column as a bracketed literal.
pub(crate) fn render_list(items: &[Value]) -> String {
    let mut out = String::new();
    write_list(items, &mut out);
    out
}

/// Renders a float with a trailing `.0` when integral, and in exponent form
/// (`1e+16`, `1e-05`) outside `[1e-4, 1e16)`.
#[allow(clippy::float_cmp)]
pub(crate) fn render_float(f: f64) -> String {
    if f.is_nan() {
        return "nan".to_string();
    }
    if f.is_infinite() {
        let text = if f > 0.0 { "inf" } else { "-inf" };
        return text.to_string();
    }

    let magnitude = f.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let sci = format!("{f:e}");
        if let Some((mantissa, exp)) = sci.split_once('e') {
            let exp: i32 = exp.parse().unwrap_or_default();
            let sign = if exp < 0 { '-' } else { '+' };
            return format!("{mantissa}e{sign}{:02}", exp.unsigned_abs());
        }
        return sci;
    }

    if f.trunc() == f {
        format!("{f:.1}")
    } else {
        format!("{f}")
    }
}

/// Integers outside the `i64`/`u64` range are already stored as `f64` by the
/// JSON parser and therefore render like floats.
fn render_number(n: &Number) -> String {
    if n.is_f64() {
        n.as_f64().map_or_else(|| n.to_string(), render_float)
    } else {
        n.to_string()
    }
}

fn repr(value: &Value) -> String {
    let mut out = String::new();
    write_repr(value, &mut out);
    out
}

fn write_repr(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("None"),
        Value::Bool(true) => out.push_str("True"),
        Value::Bool(false) => out.push_str("False"),
        Value::Number(n) => out.push_str(&render_number(n)),
        Value::String(s) => write_quoted(s, out),
        Value::Array(items) => write_list(items, out),
        Value::Object(map) => {
            out.push('{');
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_quoted(key, out);
                out.push_str(": ");
                write_repr(item, out);
            }
            out.push('}');
        }
    }
}

fn write_list(items: &[Value], out: &mut String) {
    out.push('[');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_repr(item, out);
    }
    out.push(']');
}

/// Single-quoted unless the text contains a single quote and no double quote.
fn write_quoted(s: &str, out: &mut String) {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_ascii_control() => {
                let _ = write!(out, "\\x{:02x}", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out.push(quote);
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn absent_and_null_cells_are_empty() {
        assert_eq!(render_cell(None), "");
        assert_eq!(render_cell(Some(&Value::Null)), "");
    }

    #[test]
    fn booleans_are_capitalised() {
        assert_eq!(render_cell(Some(&json!(true))), "True");
        assert_eq!(render_cell(Some(&json!(false))), "False");
    }

    #[test]
    fn strings_are_verbatim() {
        assert_eq!(render_cell(Some(&json!("ABC123"))), "ABC123");
        assert_eq!(render_cell(Some(&json!("it's"))), "it's");
    }

    #[test]
    fn integers_keep_their_digits() {
        assert_eq!(render_cell(Some(&json!(6))), "6");
        assert_eq!(render_cell(Some(&json!(-12))), "-12");
    }

    #[test]
    fn json_floats_use_float_rendering() {
        assert_eq!(render_cell(Some(&json!(2.0))), "2.0");
        assert_eq!(render_cell(Some(&json!(0.75))), "0.75");
    }

    #[test]
    fn container_cells_use_literal_syntax() {
        assert_eq!(render_cell(Some(&json!([1, "a"]))), "[1, 'a']");
        assert_eq!(render_cell(Some(&json!({"n": null}))), "{'n': None}");
    }

    #[test]
    fn object_keys_keep_document_order() {
        let value: Value = serde_json::from_str(r#"{"b": 1, "a": true}"#).unwrap();
        assert_eq!(render_cell(Some(&value)), "{'b': 1, 'a': True}");
    }

    #[test]
    fn integers_beyond_u64_render_as_floats() {
        let value: Value = serde_json::from_str("100000000000000000000").unwrap();
        assert_eq!(render_cell(Some(&value)), "1e+20");
    }

    #[test]
    fn empty_list() {
        assert_eq!(render_list(&[]), "[]");
    }

    #[test]
    fn list_of_names() {
        assert_eq!(
            render_list(&[json!("Milk"), json!("Soy"), json!("Milk")]),
            "['Milk', 'Soy', 'Milk']"
        );
    }

    #[test]
    fn list_with_missing_name() {
        assert_eq!(render_list(&[json!("Nuts"), Value::Null]), "['Nuts', None]");
    }

    #[test]
    fn list_quotes_apostrophes_with_double_quotes() {
        assert_eq!(render_list(&[json!("Tree nut's")]), "[\"Tree nut's\"]");
        assert_eq!(
            render_list(&[json!("both ' and \"")]),
            "['both \\' and \"']"
        );
    }

    #[test]
    fn list_escapes_control_characters() {
        assert_eq!(render_list(&[json!("a\nb\\c")]), "['a\\nb\\\\c']");
        assert_eq!(render_list(&[json!("\u{1}")]), "['\\x01']");
    }

    #[test]
    fn float_integral_values_get_decimal() {
        assert_eq!(render_float(0.0), "0.0");
        assert_eq!(render_float(250.0), "250.0");
        assert_eq!(render_float(-3.0), "-3.0");
        assert_eq!(render_float(1e15), "1000000000000000.0");
    }

    #[test]
    fn float_fractional_values_are_shortest() {
        assert_eq!(render_float(0.1), "0.1");
        assert_eq!(render_float(12.5), "12.5");
        assert_eq!(render_float(0.0001), "0.0001");
    }

    #[test]
    fn float_extremes_use_signed_exponent() {
        assert_eq!(render_float(1e16), "1e+16");
        assert_eq!(render_float(2.5e20), "2.5e+20");
        assert_eq!(render_float(1e-5), "1e-05");
        assert_eq!(render_float(-1.5e-7), "-1.5e-07");
        assert_eq!(render_float(1e100), "1e+100");
    }

    #[test]
    fn float_non_finite() {
        assert_eq!(render_float(f64::NAN), "nan");
        assert_eq!(render_float(f64::INFINITY), "inf");
        assert_eq!(render_float(f64::NEG_INFINITY), "-inf");
    }
}
