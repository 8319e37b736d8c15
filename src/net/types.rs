//! Wire schema for a vessel's content items.
//!
//! DESIGN
//! ======
//! The server sends a JSON array of objects keyed by spreadsheet column
//! names. Values are kept as raw JSON so quantities render exactly as sent,
//! whether the sheet stored them as numbers or text.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One row of a vessel's contents as returned by `GET /vessel/{id}`.
///
/// A missing field decodes as `None`; an explicit `null` is kept as
/// `Some(Value::Null)` so it renders as `null`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ContentItem {
    /// Item description.
    #[serde(rename = "Item Name", default, deserialize_with = "present")]
    pub item_name: Option<Value>,
    /// Quantity on board; numeric or free text.
    #[serde(rename = "Quantity", default, deserialize_with = "present")]
    pub quantity: Option<Value>,
}

fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

impl ContentItem {
    /// Item name as table cell text.
    pub fn item_name_text(&self) -> String {
        cell_text(self.item_name.as_ref())
    }

    /// Quantity as table cell text.
    pub fn quantity_text(&self) -> String {
        cell_text(self.quantity.as_ref())
    }
}

/// Render a JSON field verbatim for a table cell.
///
/// Strings are emitted without quotes, numbers print the way a browser
/// prints them (`5.0` becomes `5`, `1e21` becomes `1e+21`), and an absent
/// field is an empty cell.
pub fn cell_text(value: Option<&Value>) -> String {
    match value {
        None => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => {
            if let Some(int) = number.as_i64() {
                int.to_string()
            } else if let Some(uint) = number.as_u64() {
                uint.to_string()
            } else {
                number.as_f64().map_or_else(|| number.to_string(), float_text)
            }
        }
        Some(other) => other.to_string(),
    }
}

/// Format a float like JavaScript's `Number.prototype.toString`.
///
/// Plain decimal for `1e-6 <= |x| < 1e21`, exponent form with an explicit
/// sign otherwise; negative zero prints as `0`.
pub fn float_text(value: f64) -> String {
    if matches!(value.classify(), std::num::FpCategory::Zero) {
        return "0".to_owned();
    }
    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }
    let exp = format!("{value:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exp,
    }
}
