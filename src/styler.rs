//! Per-bar fill color and label decisions.

use crate::format::ValueFormat;
use crate::models::Record;
use crate::theme::ColorToken;

/// Palette used when a chart does not bring its own. Mixes theme variables and literals.
pub const DEFAULT_PALETTE: [&str; 7] = [
    "hsl(var(--accent))",
    "hsl(var(--primary))",
    "hsl(var(--secondary))",
    "#22c55e",
    "#f59e0b",
    "#ef4444",
    "#8b5cf6",
];

/// Fill forced onto bars whose value is below zero (horizontal charts).
pub const NEGATIVE_COLOR: &str = "#ef4444";

pub fn default_palette() -> Vec<ColorToken> {
    DEFAULT_PALETTE.iter().map(|s| ColorToken::parse(s)).collect()
}

/// The chart's own palette, or the default one when absent or empty.
pub fn resolve_palette(palette: Option<&[ColorToken]>) -> Vec<ColorToken> {
    match palette {
        Some(p) if !p.is_empty() => p.to_vec(),
        _ => default_palette(),
    }
}

/// Decided look of one bar.
#[derive(Debug, Clone, PartialEq)]
pub struct BarStyle {
    pub fill: ColorToken,
    pub label: Option<String>,
}

/// Stateless color/label policy for the bars of one chart.
#[derive(Debug, Clone, Copy)]
pub struct BarStyler<'a> {
    value_field: &'a str,
    palette: &'a [ColorToken],
    format: &'a ValueFormat,
    negative_override: bool,
}

impl<'a> BarStyler<'a> {
    /// `palette` must be non-empty; use [`resolve_palette`].
    pub fn new(
        value_field: &'a str,
        palette: &'a [ColorToken],
        format: &'a ValueFormat,
        negative_override: bool,
    ) -> Self {
        Self {
            value_field,
            palette,
            format,
            negative_override,
        }
    }

    /// `palette[index % len]`, or the negative color for values below zero when the
    /// override is active.
    pub fn color_for(&self, row: &Record, index: usize) -> ColorToken {
        let negative = self
            .value_field_number(row)
            .is_some_and(|v| v < 0.0);
        if self.negative_override && negative {
            return ColorToken::parse(NEGATIVE_COLOR);
        }
        match self.palette.len() {
            0 => ColorToken::parse(DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()]),
            n => self.palette[index % n].clone(),
        }
    }

    /// Formatted value label; `None` when the value cell is missing or blank.
    pub fn label_for(&self, row: &Record) -> Option<String> {
        row.get(self.value_field)
            .and_then(|v| self.format.value(v))
    }

    pub fn style(&self, row: &Record, index: usize) -> BarStyle {
        BarStyle {
            fill: self.color_for(row, index),
            label: self.label_for(row),
        }
    }

    fn value_field_number(&self, row: &Record) -> Option<f64> {
        row.get(self.value_field).and_then(|v| v.as_number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldValue;

    fn row(v: FieldValue) -> Record {
        let mut r = Record::new();
        r.insert("v".into(), v);
        r
    }

    #[test]
    fn empty_palette_falls_back_to_default() {
        assert_eq!(resolve_palette(Some(&[][..])), default_palette());
        assert_eq!(resolve_palette(None).len(), 7);
    }

    #[test]
    fn negative_override_is_opt_in() {
        let palette = resolve_palette(None);
        let fmt = ValueFormat::default();
        let neg = row(FieldValue::Number(-1.0));

        let plain = BarStyler::new("v", &palette, &fmt, false);
        assert_eq!(plain.color_for(&neg, 0), palette[0]);

        let flagged = BarStyler::new("v", &palette, &fmt, true);
        assert_eq!(flagged.color_for(&neg, 0), ColorToken::parse(NEGATIVE_COLOR));
        // zero is not negative
        assert_eq!(flagged.color_for(&row(FieldValue::Number(0.0)), 1), palette[1]);
        // text cells never trigger the override
        assert_eq!(flagged.color_for(&row(FieldValue::Text("-3".into())), 2), palette[2]);
    }

    #[test]
    fn labels_follow_value_cell() {
        let palette = resolve_palette(None);
        let fmt = ValueFormat::new(Some("$"), None);
        let styler = BarStyler::new("v", &palette, &fmt, false);
        assert_eq!(styler.label_for(&row(FieldValue::Number(-20.0))).as_deref(), Some("$-20"));
        assert_eq!(styler.label_for(&Record::new()), None);
        assert_eq!(styler.label_for(&row(FieldValue::Blank)), None);
    }
}
