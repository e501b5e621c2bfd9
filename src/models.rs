use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::theme::ColorToken;

/// Bar chart orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    /// Categories along the bottom axis, bars grow upward.
    #[serde(alias = "bar")]
    VerticalBar,
    /// Categories along the left axis, bars grow rightward.
    HorizontalBar,
}

/// A single cell of a record.
///
/// Records come from content pipelines that are not always tidy, so anything that is
/// neither a number nor a string is kept as [`FieldValue::Blank`] instead of failing
/// the whole document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
    Blank,
}

impl FieldValue {
    /// The numeric value, if this cell holds a number.
    pub fn as_number(&self) -> Option<f64> {
        match *self {
            FieldValue::Number(v) => Some(v),
            _ => None,
        }
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Number(v)
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        FieldValue::Number(v as f64)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
        struct FieldVisitor;

        impl<'de> Visitor<'de> for FieldVisitor {
            type Value = FieldValue;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "a number or a string")
            }

            fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(FieldValue::Number(v))
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(FieldValue::Number(v as f64))
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(FieldValue::Number(v as f64))
            }

            fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(FieldValue::Text(s.to_string()))
            }

            fn visit_string<E>(self, s: String) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(FieldValue::Text(s))
            }

            fn visit_bool<E>(self, _: bool) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(FieldValue::Blank)
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(FieldValue::Blank)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(FieldValue::Blank)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(FieldValue::Blank)
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
                Ok(FieldValue::Blank)
            }
        }

        deserializer.deserialize_any(FieldVisitor)
    }
}

/// One row of chart data: field name -> value.
pub type Record = BTreeMap<String, FieldValue>;

/// Declarative description of one bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, alias = "data")]
    pub records: Vec<Record>,
    pub category_field: String,
    pub value_field: String,
    #[serde(default, alias = "colors", skip_serializing_if = "Option::is_none")]
    pub palette: Option<Vec<ColorToken>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_suffix: Option<String>,
}

impl ChartSpec {
    /// Minimal spec with no records and every optional field unset.
    pub fn new(
        kind: ChartKind,
        title: impl Into<String>,
        category_field: impl Into<String>,
        value_field: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            subtitle: None,
            records: Vec::new(),
            category_field: category_field.into(),
            value_field: value_field.into(),
            palette: None,
            value_prefix: None,
            value_suffix: None,
        }
    }

    /// Append a `(category, value)` row using this spec's field names.
    pub fn with_row(mut self, category: impl Into<FieldValue>, value: impl Into<FieldValue>) -> Self {
        let mut row = Record::new();
        row.insert(self.category_field.clone(), category.into());
        row.insert(self.value_field.clone(), value.into());
        self.records.push(row);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mixed_cells() {
        let row: Record =
            serde_json::from_str(r#"{"a": 1, "b": -2.5, "c": "x", "d": null, "e": [1, 2], "f": true}"#)
                .unwrap();
        assert_eq!(row["a"], FieldValue::Number(1.0));
        assert_eq!(row["b"], FieldValue::Number(-2.5));
        assert_eq!(row["c"], FieldValue::Text("x".into()));
        assert_eq!(row["d"], FieldValue::Blank);
        assert_eq!(row["e"], FieldValue::Blank);
        assert_eq!(row["f"], FieldValue::Blank);
    }

    #[test]
    fn accepts_legacy_aliases() {
        let spec: ChartSpec = serde_json::from_str(
            "{\"type\": \"bar\", \"title\": \"T\", \"data\": [{\"k\": \"a\", \"v\": 1}],
             \"categoryField\": \"k\", \"valueField\": \"v\", \"colors\": [\"#fff\"]}",
        )
        .unwrap();
        assert_eq!(spec.kind, ChartKind::VerticalBar);
        assert_eq!(spec.records.len(), 1);
        assert_eq!(spec.palette.as_ref().map(Vec::len), Some(1));
    }
}
