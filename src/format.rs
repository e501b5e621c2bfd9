//! Value formatting shared by axis ticks, bar labels and tooltips.

use serde::{Deserialize, Serialize};

use crate::models::FieldValue;

/// `prefix + value + suffix`, with no locale grouping or rounding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueFormat {
    pub prefix: String,
    pub suffix: String,
}

impl ValueFormat {
    pub fn new(prefix: Option<&str>, suffix: Option<&str>) -> Self {
        Self {
            prefix: prefix.unwrap_or_default().to_string(),
            suffix: suffix.unwrap_or_default().to_string(),
        }
    }

    /// Format a number, e.g. `$42%`.
    pub fn number(&self, v: f64) -> String {
        format!("{}{}{}", self.prefix, raw_number(v), self.suffix)
    }

    /// Format a cell. Strings are interpolated verbatim like numbers; blank cells yield `None`.
    pub fn value(&self, v: &FieldValue) -> Option<String> {
        match v {
            FieldValue::Number(n) => Some(self.number(*n)),
            FieldValue::Text(s) => Some(format!("{}{}{}", self.prefix, s, self.suffix)),
            FieldValue::Blank => None,
        }
    }
}

/// Shortest round-trip rendering of a number: `42`, `1.5`, `-20`.
/// Magnitudes from 1e21 up and below 1e-6 use exponent form (`1e+21`, `1.5e-7`).
pub fn raw_number(v: f64) -> String {
    if v == 0.0 {
        // collapses -0
        return "0".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let magnitude = v.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let sci = format!("{v:e}");
        return match sci.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => sci,
        };
    }
    format!("{v}")
}

/// Category cell as shown on the category axis; no prefix/suffix.
pub fn category_text(v: Option<&FieldValue>) -> String {
    match v {
        Some(FieldValue::Number(n)) => raw_number(*n),
        Some(FieldValue::Text(s)) => s.clone(),
        Some(FieldValue::Blank) | None => String::new(),
    }
}
