//! Chart panel renderer: turns chart specs into drawing instructions.
//!
//! - One [`ChartPanel`] per spec, in input order; no specs means no output at all
//! - Orientation decides which field sits on which axis
//! - Numeric text everywhere (ticks, labels, tooltips) goes through one [`ValueFormat`]
//! - Pure: the same specs always produce the same [`PanelStack`]

pub mod ticks;
pub mod types;

pub use types::{
    Axis, AxisPosition, AxisRole, Bar, ChartPanel, CornerRadii, GridLines, LabelPosition,
    Margin, PanelStack, Tick, Tooltip, TooltipStyle,
};

use crate::format::{ValueFormat, category_text};
use crate::models::{ChartKind, ChartSpec};
use crate::styler::{BarStyler, resolve_palette};
use crate::theme::ColorToken;

use ticks::{nice_domain, tick_values};
use types::{
    CATEGORY_AXIS_WIDTH_PX, CHART_HEIGHT_PX, VALUE_AXIS_WIDTH_PX, VALUE_TICK_COUNT,
};

/// A spec with every optional field resolved to its effective value.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedChart<'a> {
    pub kind: ChartKind,
    pub title: &'a str,
    pub subtitle: Option<&'a str>,
    pub category_field: &'a str,
    pub value_field: &'a str,
    pub palette: Vec<ColorToken>,
    pub format: ValueFormat,
}

impl<'a> ResolvedChart<'a> {
    pub fn from_spec(spec: &'a ChartSpec) -> Self {
        Self {
            kind: spec.kind,
            title: &spec.title,
            subtitle: spec.subtitle.as_deref(),
            category_field: &spec.category_field,
            value_field: &spec.value_field,
            palette: resolve_palette(spec.palette.as_deref()),
            format: ValueFormat::new(spec.value_prefix.as_deref(), spec.value_suffix.as_deref()),
        }
    }

    /// Negative values get the fixed negative color only on horizontal charts.
    pub fn negative_override(&self) -> bool {
        matches!(self.kind, ChartKind::HorizontalBar)
    }

    pub fn styler(&self) -> BarStyler<'_> {
        BarStyler::new(
            self.value_field,
            &self.palette,
            &self.format,
            self.negative_override(),
        )
    }
}

/// Build one panel per spec. Returns `None` for an empty list.
pub fn render_panels(specs: &[ChartSpec]) -> Option<PanelStack> {
    if specs.is_empty() {
        return None;
    }
    let panels = specs
        .iter()
        .enumerate()
        .map(|(index, spec)| build_panel(index, spec))
        .collect();
    Some(PanelStack { panels })
}

/// Drawing instructions for a single chart.
pub fn build_panel(index: usize, spec: &ChartSpec) -> ChartPanel {
    let chart = ResolvedChart::from_spec(spec);
    let styler = chart.styler();

    let (bar_label_position, radius, margin) = match chart.kind {
        ChartKind::VerticalBar => (
            LabelPosition::Top,
            CornerRadii::TOP,
            Margin {
                top: 20,
                right: 20,
                bottom: 40,
                left: 20,
            },
        ),
        ChartKind::HorizontalBar => (
            LabelPosition::Right,
            CornerRadii::RIGHT,
            Margin {
                top: 10,
                right: 60,
                bottom: 10,
                left: 100,
            },
        ),
    };

    let bars: Vec<Bar> = spec
        .records
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let style = styler.style(row, i);
            let category = category_text(row.get(chart.category_field));
            let tooltip = style.label.clone().map(|value| Tooltip {
                heading: category.clone(),
                name: chart.value_field.to_string(),
                value,
            });
            Bar {
                index: i,
                category,
                value: row.get(chart.value_field).and_then(|v| v.as_number()),
                fill: style.fill,
                label: style.label,
                label_position: bar_label_position,
                label_color: ColorToken::theme("foreground"),
                radius,
                tooltip,
            }
        })
        .collect();

    let (category_axis, value_axis) = axes(&chart, &bars);

    ChartPanel {
        index,
        kind: chart.kind,
        title: chart.title.to_string(),
        subtitle: chart.subtitle.map(str::to_string),
        chart_height: CHART_HEIGHT_PX,
        margin,
        category_axis,
        value_axis,
        grid: GridLines {
            stroke: ColorToken::theme("border"),
            dash: (3, 3),
        },
        bars,
        tooltip_style: TooltipStyle {
            background: ColorToken::theme("card"),
            border: ColorToken::theme("border"),
            text: ColorToken::theme("foreground"),
            radius: 8,
        },
        card_background: ColorToken::theme("card"),
        card_border: ColorToken::theme("border"),
        title_color: ColorToken::theme("foreground"),
        subtitle_color: ColorToken::theme("muted-foreground"),
    }
}

fn axes(chart: &ResolvedChart<'_>, bars: &[Bar]) -> (Axis, Axis) {
    let values: Vec<f64> = bars.iter().filter_map(|b| b.value).collect();
    let (min, max, step) = nice_domain(&values, VALUE_TICK_COUNT);
    let value_ticks = tick_values(min, max, step)
        .into_iter()
        .map(|at| Tick {
            at,
            label: chart.format.number(at),
        })
        .collect();
    let category_ticks = bars
        .iter()
        .map(|b| Tick {
            at: b.index as f64,
            label: b.category.clone(),
        })
        .collect();

    let (category_position, value_position, category_width, value_width) = match chart.kind {
        ChartKind::VerticalBar => (
            AxisPosition::Bottom,
            AxisPosition::Left,
            None,
            Some(VALUE_AXIS_WIDTH_PX),
        ),
        ChartKind::HorizontalBar => (
            AxisPosition::Left,
            AxisPosition::Bottom,
            Some(CATEGORY_AXIS_WIDTH_PX),
            None,
        ),
    };

    let category_axis = Axis {
        position: category_position,
        role: AxisRole::Category,
        field: chart.category_field.to_string(),
        domain: (0.0, bars.len() as f64),
        ticks: category_ticks,
        width: category_width,
        tick_color: ColorToken::theme("muted-foreground"),
        line_color: ColorToken::theme("border"),
    };
    let value_axis = Axis {
        position: value_position,
        role: AxisRole::Value,
        field: chart.value_field.to_string(),
        domain: (min, max),
        ticks: value_ticks,
        width: value_width,
        tick_color: ColorToken::theme("muted-foreground"),
        line_color: ColorToken::theme("border"),
    };
    (category_axis, value_axis)
}
