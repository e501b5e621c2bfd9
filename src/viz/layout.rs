//! Pixel geometry for a panel stack: cards, plot areas, bar rectangles and tick positions.

use crate::panel::types::{
    BAR_CATEGORY_GAP, BOTTOM_AXIS_HEIGHT_PX, CARD_GAP_PX, CARD_PADDING_PX, STACK_MARGIN_PX,
    SUBTITLE_GAP_PX, TITLE_GAP_PX, VALUE_AXIS_WIDTH_PX,
};
use crate::panel::{AxisPosition, ChartPanel, LabelPosition, PanelStack};

/// Line heights for title and subtitle text.
const TITLE_LINE_PX: i32 = 28;
const SUBTITLE_LINE_PX: i32 = 20;
/// Distance between a bar end and its label.
const LABEL_OFFSET_PX: i32 = 5;
/// Narrowest canvas we lay out for.
pub const MIN_WIDTH_PX: u32 = 320;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    pub fn width(&self) -> i32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> i32 {
        self.y1 - self.y0
    }

    pub fn center_x(&self) -> i32 {
        (self.x0 + self.x1) / 2
    }

    pub fn center_y(&self) -> i32 {
        (self.y0 + self.y1) / 2
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarGeometry {
    /// Category band the bar lives in; also the hover target.
    pub band: Rect,
    /// Filled extent; `None` when the bar has no numeric value.
    pub rect: Option<Rect>,
    pub label_anchor: Option<(i32, i32)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelGeometry {
    pub card: Rect,
    /// Top of the title line.
    pub title_y: i32,
    pub subtitle_y: Option<i32>,
    pub chart: Rect,
    pub plot: Rect,
    /// Pixel offset along the category axis for each category tick.
    pub category_ticks: Vec<i32>,
    /// Pixel offset along the value axis for each value tick.
    pub value_ticks: Vec<i32>,
    pub bars: Vec<BarGeometry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StackGeometry {
    pub width: u32,
    pub height: u32,
    pub panels: Vec<PanelGeometry>,
}

/// Card height for a panel, padding included.
pub fn panel_height_px(panel: &ChartPanel) -> i32 {
    let mut h = 2 * CARD_PADDING_PX as i32 + TITLE_LINE_PX + TITLE_GAP_PX as i32;
    if panel.subtitle.is_some() {
        h += SUBTITLE_LINE_PX + SUBTITLE_GAP_PX as i32;
    }
    h + panel.chart_height as i32
}

/// Lay the panels out top to bottom on a canvas `width` pixels wide.
pub fn layout_stack(stack: &PanelStack, width: u32) -> StackGeometry {
    let width = width.max(MIN_WIDTH_PX);
    let mut y = STACK_MARGIN_PX as i32;
    let mut panels = Vec::with_capacity(stack.panels.len());
    for (i, panel) in stack.panels.iter().enumerate() {
        if i > 0 {
            y += CARD_GAP_PX as i32;
        }
        let geom = layout_panel(panel, width as i32, y);
        y = geom.card.y1;
        panels.push(geom);
    }
    StackGeometry {
        width,
        height: (y + STACK_MARGIN_PX as i32) as u32,
        panels,
    }
}

fn layout_panel(panel: &ChartPanel, width: i32, top: i32) -> PanelGeometry {
    let pad = CARD_PADDING_PX as i32;
    let card = Rect {
        x0: 0,
        y0: top,
        x1: width,
        y1: top + panel_height_px(panel),
    };

    let title_y = top + pad;
    let mut cursor = title_y + TITLE_LINE_PX + TITLE_GAP_PX as i32;
    let subtitle_y = panel.subtitle.as_ref().map(|_| {
        let y = cursor;
        cursor += SUBTITLE_LINE_PX + SUBTITLE_GAP_PX as i32;
        y
    });

    let chart = Rect {
        x0: pad,
        y0: cursor,
        x1: width - pad,
        y1: cursor + panel.chart_height as i32,
    };

    let left_axis_width = [&panel.category_axis, &panel.value_axis]
        .iter()
        .find(|a| a.position == AxisPosition::Left)
        .and_then(|a| a.width)
        .unwrap_or(VALUE_AXIS_WIDTH_PX) as i32;
    let m = panel.margin;
    let plot_x0 = chart.x0 + m.left as i32 + left_axis_width;
    let plot_y0 = chart.y0 + m.top as i32;
    let plot = Rect {
        x0: plot_x0,
        y0: plot_y0,
        x1: (chart.x1 - m.right as i32).max(plot_x0 + 1),
        y1: (chart.y1 - m.bottom as i32 - BOTTOM_AXIS_HEIGHT_PX as i32).max(plot_y0 + 1),
    };

    let scale = ValueScale::new(panel, plot);
    let n = panel.bars.len().max(1) as f64;
    let band_len = scale.category_len() / n;

    let band_rect = |i: usize| -> Rect {
        let start = band_len * i as f64;
        let (a, b) = (start.round() as i32, (start + band_len).round() as i32);
        match panel.category_axis.position {
            AxisPosition::Bottom => Rect {
                x0: plot.x0 + a,
                y0: plot.y0,
                x1: plot.x0 + b,
                y1: plot.y1,
            },
            AxisPosition::Left => Rect {
                x0: plot.x0,
                y0: plot.y0 + a,
                x1: plot.x1,
                y1: plot.y0 + b,
            },
        }
    };

    let bars = panel
        .bars
        .iter()
        .map(|bar| {
            let band = band_rect(bar.index);
            let inset = band_len * BAR_CATEGORY_GAP;
            let rect = bar.value.filter(|v| v.is_finite()).map(|v| {
                let base = scale.pixel(0.0);
                let end = scale.pixel(v);
                let (lo, hi) = (base.min(end), base.max(end));
                match panel.category_axis.position {
                    AxisPosition::Bottom => Rect {
                        x0: (band.x0 as f64 + inset).round() as i32,
                        y0: lo,
                        x1: (band.x1 as f64 - inset).round() as i32,
                        y1: hi,
                    },
                    AxisPosition::Left => Rect {
                        x0: lo,
                        y0: (band.y0 as f64 + inset).round() as i32,
                        x1: hi,
                        y1: (band.y1 as f64 - inset).round() as i32,
                    },
                }
            });
            let label_anchor = match (bar.label.as_ref(), rect) {
                (None, _) => None,
                (Some(_), Some(r)) => Some(match bar.label_position {
                    LabelPosition::Top => (r.center_x(), r.y0 - LABEL_OFFSET_PX),
                    LabelPosition::Right => (r.x1 + LABEL_OFFSET_PX, r.center_y()),
                }),
                // Text values have a label but no extent: anchor at the baseline.
                (Some(_), None) => {
                    let base = scale.pixel(0.0);
                    Some(match bar.label_position {
                        LabelPosition::Top => (band.center_x(), base - LABEL_OFFSET_PX),
                        LabelPosition::Right => (base + LABEL_OFFSET_PX, band.center_y()),
                    })
                }
            };
            BarGeometry {
                band,
                rect,
                label_anchor,
            }
        })
        .collect();

    let category_ticks = panel
        .category_axis
        .ticks
        .iter()
        .map(|t| {
            let center = band_len * (t.at + 0.5);
            match panel.category_axis.position {
                AxisPosition::Bottom => plot.x0 + center.round() as i32,
                AxisPosition::Left => plot.y0 + center.round() as i32,
            }
        })
        .collect();
    let value_ticks = panel
        .value_axis
        .ticks
        .iter()
        .map(|t| scale.pixel(t.at))
        .collect();

    PanelGeometry {
        card,
        title_y,
        subtitle_y,
        chart,
        plot,
        category_ticks,
        value_ticks,
        bars,
    }
}

/// Linear mapping from the value domain onto the plot edge it runs along.
struct ValueScale {
    min: f64,
    max: f64,
    /// Pixel at `min` and at `max`.
    from: f64,
    to: f64,
    category_len: f64,
}

impl ValueScale {
    fn new(panel: &ChartPanel, plot: Rect) -> Self {
        let (min, max) = panel.value_axis.domain;
        match panel.value_axis.position {
            AxisPosition::Left => ValueScale {
                min,
                max,
                from: plot.y1 as f64,
                to: plot.y0 as f64,
                category_len: plot.width() as f64,
            },
            AxisPosition::Bottom => ValueScale {
                min,
                max,
                from: plot.x0 as f64,
                to: plot.x1 as f64,
                category_len: plot.height() as f64,
            },
        }
    }

    fn category_len(&self) -> f64 {
        self.category_len
    }

    /// Values outside the domain are clamped to the plot edge.
    fn pixel(&self, v: f64) -> i32 {
        let span = self.max - self.min;
        let t = if span.abs() < f64::EPSILON {
            0.0
        } else {
            ((v - self.min) / span).clamp(0.0, 1.0)
        };
        (self.from + (self.to - self.from) * t).round() as i32
    }
}
