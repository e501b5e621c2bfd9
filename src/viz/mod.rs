//! Visualization: paint panel stacks to **SVG** with plotters.
//!
//! - One card per chart with title, optional subtitle and a 320px chart area
//! - Dashed grid, themed axis text, rounded bars, value labels
//! - Hover tooltips through `<title>` hit areas
//! - Colors come from a [`Theme`]; scenes only carry tokens

pub mod layout;
pub mod shapes;
pub mod text;
pub mod tooltip;

use crate::error::{Error, Result};
use crate::models::ChartSpec;
use crate::panel::types::{
    CARD_RADIUS_PX, LABEL_FONT_PX, SUBTITLE_FONT_PX, TICK_FONT_PX, TITLE_FONT_PX,
    VALUE_AXIS_WIDTH_PX,
};
use crate::panel::{AxisPosition, ChartPanel, LabelPosition, PanelStack, render_panels};
use crate::theme::{ColorToken, Rgb8, Theme};

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontDesc, FontFamily, FontStyle, TextStyle};

use plotters_svg::SVGBackend;

use std::path::Path;

use layout::{PanelGeometry, StackGeometry, layout_stack};
use shapes::{dashed_segments, fill_style, line_style, rounded_rect};
use text::truncate_to_width;
use tooltip::append_tooltips;

/// Width of the containing element when none is given.
pub const DEFAULT_WIDTH_PX: u32 = 800;
const TICK_MARK_PX: i32 = 6;
const TICK_TEXT_GAP_PX: i32 = 3;

/// Engine settings: container width and color theme.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub width: u32,
    pub theme: Theme,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH_PX,
            theme: Theme::default(),
        }
    }
}

/// Render chart specs to an SVG document. Returns `None` (and draws nothing) when there
/// are no specs.
pub fn render_svg(specs: &[ChartSpec], opts: &RenderOptions) -> Result<Option<String>> {
    match render_panels(specs) {
        Some(stack) => paint_svg(&stack, opts).map(Some),
        None => Ok(None),
    }
}

/// Render chart specs to an SVG file. Returns `false` without touching the filesystem
/// when there are no specs.
pub fn render_svg_file<P: AsRef<Path>>(
    specs: &[ChartSpec],
    out_path: P,
    opts: &RenderOptions,
) -> Result<bool> {
    let out_path = out_path.as_ref();
    match render_svg(specs, opts)? {
        Some(svg) => {
            std::fs::write(out_path, svg)?;
            log::debug!("wrote {} chart panel(s) to {}", specs.len(), out_path.display());
            Ok(true)
        }
        None => {
            log::info!("no charts to render; {} not written", out_path.display());
            Ok(false)
        }
    }
}

/// Paint an already built panel stack.
pub fn paint_svg(stack: &PanelStack, opts: &RenderOptions) -> Result<String> {
    let geometry = layout_stack(stack, opts.width);
    log::debug!(
        "painting {} panel(s) on a {}x{} canvas",
        stack.panels.len(),
        geometry.width,
        geometry.height
    );

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (geometry.width, geometry.height))
            .into_drawing_area();
        draw_stack(&root, stack, &geometry, &opts.theme)?;
        root.present().map_err(draw_err)?;
    }
    append_tooltips(&mut svg, stack, &geometry);
    Ok(svg)
}

fn draw_err<E: std::fmt::Debug>(e: E) -> Error {
    Error::Draw(format!("{e:?}"))
}

/// Colors of one panel, resolved once before painting.
struct ChromeColors {
    card: Rgb8,
    card_border: Rgb8,
    title: Rgb8,
    subtitle: Rgb8,
    grid: Rgb8,
    tick: Rgb8,
    axis_line: Rgb8,
}

impl ChromeColors {
    fn for_panel(panel: &ChartPanel, theme: &Theme) -> Self {
        let r = |t: &ColorToken| theme.resolve_or_foreground(t);
        ChromeColors {
            card: r(&panel.card_background),
            card_border: r(&panel.card_border),
            title: r(&panel.title_color),
            subtitle: r(&panel.subtitle_color),
            grid: r(&panel.grid.stroke),
            tick: r(&panel.value_axis.tick_color),
            axis_line: r(&panel.value_axis.line_color),
        }
    }
}

fn text_style(
    family: FontFamily<'static>,
    px: u32,
    weight: FontStyle,
    color: Rgb8,
    pos: Pos,
) -> TextStyle<'static> {
    FontDesc::new(family, px as f64, weight)
        .color(&shapes::rgb_color(color))
        .pos(pos)
}

fn draw_stack<DB>(
    root: &DrawingArea<DB, Shift>,
    stack: &PanelStack,
    geometry: &StackGeometry,
    theme: &Theme,
) -> Result<()>
where
    DB: DrawingBackend,
{
    let background = theme.resolve_or_foreground(&ColorToken::theme("background"));
    root.fill(&shapes::rgb_color(background)).map_err(draw_err)?;

    for (panel, geom) in stack.panels.iter().zip(&geometry.panels) {
        draw_panel(root, panel, geom, theme)?;
    }
    Ok(())
}

fn draw_panel<DB>(
    root: &DrawingArea<DB, Shift>,
    panel: &ChartPanel,
    geom: &PanelGeometry,
    theme: &Theme,
) -> Result<()>
where
    DB: DrawingBackend,
{
    let colors = ChromeColors::for_panel(panel, theme);

    // ----------------------------
    // 1) Card, title, subtitle
    // ----------------------------
    let card = geom.card;
    let card_outline = rounded_rect(card.x0, card.y0, card.x1 - 1, card.y1 - 1, [CARD_RADIUS_PX; 4]);
    root.draw(&Polygon::new(card_outline.clone(), fill_style(colors.card)))
        .map_err(draw_err)?;
    let mut border = card_outline;
    if let Some(first) = border.first().copied() {
        border.push(first);
    }
    root.draw(&PathElement::new(border, line_style(colors.card_border, 1)))
        .map_err(draw_err)?;

    let center = Pos::new(HPos::Center, VPos::Top);
    root.draw(&Text::new(
        panel.title.clone(),
        (card.center_x(), geom.title_y),
        text_style(FontFamily::Serif, TITLE_FONT_PX, FontStyle::Bold, colors.title, center),
    ))
    .map_err(draw_err)?;
    if let (Some(subtitle), Some(y)) = (panel.subtitle.as_ref(), geom.subtitle_y) {
        root.draw(&Text::new(
            subtitle.clone(),
            (card.center_x(), y),
            text_style(
                FontFamily::SansSerif,
                SUBTITLE_FONT_PX,
                FontStyle::Normal,
                colors.subtitle,
                center,
            ),
        ))
        .map_err(draw_err)?;
    }

    // ----------------------------
    // 2) Grid
    // ----------------------------
    let plot = geom.plot;
    let (dash, gap) = panel.grid.dash;
    let mut grid_lines: Vec<((i32, i32), (i32, i32))> = Vec::new();
    let (along_x, along_y) = match panel.value_axis.position {
        AxisPosition::Left => (&geom.category_ticks, &geom.value_ticks),
        AxisPosition::Bottom => (&geom.value_ticks, &geom.category_ticks),
    };
    for &x in along_x {
        grid_lines.push(((x, plot.y0), (x, plot.y1)));
    }
    for &y in along_y {
        grid_lines.push(((plot.x0, y), (plot.x1, y)));
    }
    for (from, to) in grid_lines {
        for [a, b] in dashed_segments(from, to, dash, gap) {
            root.draw(&PathElement::new(vec![a, b], line_style(colors.grid, 1)))
                .map_err(draw_err)?;
        }
    }

    // ----------------------------
    // 3) Axes
    // ----------------------------
    let axis = line_style(colors.axis_line, 1);
    root.draw(&PathElement::new(vec![(plot.x0, plot.y1), (plot.x1, plot.y1)], axis))
        .map_err(draw_err)?;
    root.draw(&PathElement::new(vec![(plot.x0, plot.y0), (plot.x0, plot.y1)], axis))
        .map_err(draw_err)?;

    let band_px = if panel.bars.is_empty() {
        plot.width().max(plot.height())
    } else {
        match panel.category_axis.position {
            AxisPosition::Bottom => plot.width() / panel.bars.len() as i32,
            AxisPosition::Left => plot.height() / panel.bars.len() as i32,
        }
    };

    for (axis_def, offsets, is_category) in [
        (&panel.category_axis, &geom.category_ticks, true),
        (&panel.value_axis, &geom.value_ticks, false),
    ] {
        for (tick, &offset) in axis_def.ticks.iter().zip(offsets.iter()) {
            match axis_def.position {
                AxisPosition::Bottom => {
                    let label = if is_category {
                        truncate_to_width(&tick.label, TICK_FONT_PX, band_px.max(0) as u32)
                    } else {
                        tick.label.clone()
                    };
                    root.draw(&PathElement::new(
                        vec![(offset, plot.y1), (offset, plot.y1 + TICK_MARK_PX)],
                        axis,
                    ))
                    .map_err(draw_err)?;
                    root.draw(&Text::new(
                        label,
                        (offset, plot.y1 + TICK_MARK_PX + TICK_TEXT_GAP_PX),
                        text_style(
                            FontFamily::SansSerif,
                            TICK_FONT_PX,
                            FontStyle::Normal,
                            colors.tick,
                            Pos::new(HPos::Center, VPos::Top),
                        ),
                    ))
                    .map_err(draw_err)?;
                }
                AxisPosition::Left => {
                    let room = axis_def.width.unwrap_or(VALUE_AXIS_WIDTH_PX) as i32 - TICK_MARK_PX - TICK_TEXT_GAP_PX;
                    let label = if is_category {
                        truncate_to_width(&tick.label, TICK_FONT_PX, room.max(0) as u32)
                    } else {
                        tick.label.clone()
                    };
                    root.draw(&PathElement::new(
                        vec![(plot.x0 - TICK_MARK_PX, offset), (plot.x0, offset)],
                        axis,
                    ))
                    .map_err(draw_err)?;
                    root.draw(&Text::new(
                        label,
                        (plot.x0 - TICK_MARK_PX - TICK_TEXT_GAP_PX, offset),
                        text_style(
                            FontFamily::SansSerif,
                            TICK_FONT_PX,
                            FontStyle::Normal,
                            colors.tick,
                            Pos::new(HPos::Right, VPos::Center),
                        ),
                    ))
                    .map_err(draw_err)?;
                }
            }
        }
    }

    // ----------------------------
    // 4) Bars and labels
    // ----------------------------
    for (bar, bar_geom) in panel.bars.iter().zip(&geom.bars) {
        if let Some(r) = bar_geom.rect
            && r.width() > 0
            && r.height() > 0
            && !bar.fill.is_transparent()
        {
            let fill = theme.resolve_or_foreground(&bar.fill);
            let outline = rounded_rect(r.x0, r.y0, r.x1, r.y1, bar.radius.0);
            root.draw(&Polygon::new(outline, fill_style(fill)))
                .map_err(draw_err)?;
        }
        if let (Some(label), Some(anchor)) = (bar.label.as_ref(), bar_geom.label_anchor) {
            let pos = match bar.label_position {
                LabelPosition::Top => Pos::new(HPos::Center, VPos::Bottom),
                LabelPosition::Right => Pos::new(HPos::Left, VPos::Center),
            };
            root.draw(&Text::new(
                label.clone(),
                anchor,
                text_style(
                    FontFamily::SansSerif,
                    LABEL_FONT_PX,
                    FontStyle::Normal,
                    theme.resolve_or_foreground(&bar.label_color),
                    pos,
                ),
            ))
            .map_err(draw_err)?;
        }
    }
    Ok(())
}
