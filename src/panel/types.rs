//! Drawing instructions handed to a charting engine, plus the layout constants they use.

use serde::Serialize;

use crate::models::ChartKind;
use crate::theme::ColorToken;

/// Height of every chart area in pixels.
pub const CHART_HEIGHT_PX: u32 = 320;
/// Fixed width of the category axis on horizontal charts.
pub const CATEGORY_AXIS_WIDTH_PX: u32 = 95;
/// Width of the numeric axis on vertical charts.
pub const VALUE_AXIS_WIDTH_PX: u32 = 60;
/// Height reserved for a bottom axis (ticks + labels).
pub const BOTTOM_AXIS_HEIGHT_PX: u32 = 30;
pub const BAR_RADIUS_PX: u32 = 4;
pub const TICK_FONT_PX: u32 = 12;
pub const LABEL_FONT_PX: u32 = 12;
pub const TITLE_FONT_PX: u32 = 20;
pub const SUBTITLE_FONT_PX: u32 = 14;
/// Space under the title, and under the subtitle when present.
pub const TITLE_GAP_PX: u32 = 4;
pub const SUBTITLE_GAP_PX: u32 = 24;
pub const CARD_PADDING_PX: u32 = 24;
pub const CARD_RADIUS_PX: u32 = 8;
pub const CARD_GAP_PX: u32 = 48;
pub const STACK_MARGIN_PX: u32 = 32;
/// Target number of value-axis ticks.
pub const VALUE_TICK_COUNT: usize = 5;
/// Share of each category band left empty around a bar.
pub const BAR_CATEGORY_GAP: f64 = 0.1;

/// Where an axis sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AxisPosition {
    Bottom,
    Left,
}

/// What an axis encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AxisRole {
    Category,
    Value,
}

/// Where a bar's value label is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LabelPosition {
    /// Centered above the bar end.
    Top,
    /// Left-aligned after the bar end.
    Right,
}

/// Inner spacing between chart area and plot, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Margin {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

/// Corner radii in screen order: top-left, top-right, bottom-right, bottom-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CornerRadii(pub [u32; 4]);

impl CornerRadii {
    pub const TOP: CornerRadii = CornerRadii([BAR_RADIUS_PX, BAR_RADIUS_PX, 0, 0]);
    pub const RIGHT: CornerRadii = CornerRadii([0, BAR_RADIUS_PX, BAR_RADIUS_PX, 0]);
}

/// One axis tick: position in axis units (category index or value) and its text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    pub at: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub position: AxisPosition,
    pub role: AxisRole,
    /// Record field bound to this axis.
    pub field: String,
    /// Axis extent in axis units; categories span `[0, n]`.
    pub domain: (f64, f64),
    pub ticks: Vec<Tick>,
    /// Reserved width for left axes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    pub tick_color: ColorToken,
    pub line_color: ColorToken,
}

/// Dashed background grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridLines {
    pub stroke: ColorToken,
    /// Dash and gap lengths.
    pub dash: (u32, u32),
}

/// Hover box shown over a bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    /// Category of the hovered bar.
    pub heading: String,
    /// Field name shown next to the value.
    pub name: String,
    pub value: String,
}

/// Look of the hover box, for engines that draw their own tooltips from the scene JSON.
/// The SVG engine uses native `<title>` hints, which the browser styles, and ignores it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipStyle {
    pub background: ColorToken,
    pub border: ColorToken,
    pub text: ColorToken,
    pub radius: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub index: usize,
    pub category: String,
    /// `None` for missing or non-numeric values; such bars have no extent.
    pub value: Option<f64>,
    pub fill: ColorToken,
    pub label: Option<String>,
    pub label_position: LabelPosition,
    pub label_color: ColorToken,
    pub radius: CornerRadii,
    pub tooltip: Option<Tooltip>,
}

/// Everything needed to draw one chart card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPanel {
    pub index: usize,
    pub kind: ChartKind,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub chart_height: u32,
    pub margin: Margin,
    pub category_axis: Axis,
    pub value_axis: Axis,
    pub grid: GridLines,
    pub bars: Vec<Bar>,
    pub tooltip_style: TooltipStyle,
    pub card_background: ColorToken,
    pub card_border: ColorToken,
    pub title_color: ColorToken,
    pub subtitle_color: ColorToken,
}

/// Ordered, non-empty list of panels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelStack {
    pub panels: Vec<ChartPanel>,
}
