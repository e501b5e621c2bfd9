//! Geometry helpers for shapes plotters does not provide: rounded rectangles and
//! manually dashed lines.

use plotters::prelude::*;

use crate::theme::Rgb8;

/// Segments per rounded corner.
const ARC_STEPS: usize = 4;

pub fn rgb_color(c: Rgb8) -> RGBColor {
    RGBColor(c.r, c.g, c.b)
}

/// Filled style for bars and cards.
pub fn fill_style(c: Rgb8) -> ShapeStyle {
    rgb_color(c).filled()
}

/// Stroke style for borders, axes and grid lines.
pub fn line_style(c: Rgb8, width: u32) -> ShapeStyle {
    rgb_color(c).stroke_width(width)
}

/// Outline of a rectangle with per-corner radii `[tl, tr, br, bl]`, clockwise from the
/// top-left. Radii are clamped to half the shorter side; a degenerate rectangle yields
/// its corner points.
pub fn rounded_rect(x0: i32, y0: i32, x1: i32, y1: i32, radii: [u32; 4]) -> Vec<(i32, i32)> {
    let (left, right) = (x0.min(x1), x0.max(x1));
    let (top, bottom) = (y0.min(y1), y0.max(y1));
    let max_r = ((right - left).min(bottom - top) / 2).max(0) as f64;
    let r = radii.map(|v| (v as f64).min(max_r));

    // (corner center, start angle) for tl, tr, br, bl in screen coordinates (y down).
    let corners = [
        ((left as f64 + r[0], top as f64 + r[0]), r[0], 180.0f64),
        ((right as f64 - r[1], top as f64 + r[1]), r[1], 270.0),
        ((right as f64 - r[2], bottom as f64 - r[2]), r[2], 0.0),
        ((left as f64 + r[3], bottom as f64 - r[3]), r[3], 90.0),
    ];

    let mut pts = Vec::with_capacity(4 * (ARC_STEPS + 1));
    for ((cx, cy), radius, start) in corners {
        if radius <= 0.0 {
            pts.push((cx.round() as i32, cy.round() as i32));
            continue;
        }
        for step in 0..=ARC_STEPS {
            let a = (start + 90.0 * step as f64 / ARC_STEPS as f64).to_radians();
            let x = cx + radius * a.cos();
            let y = cy + radius * a.sin();
            let p = (x.round() as i32, y.round() as i32);
            if pts.last() != Some(&p) {
                pts.push(p);
            }
        }
    }
    pts
}

/// Split a straight line into dash segments of `dash` px separated by `gap` px.
pub fn dashed_segments(
    from: (i32, i32),
    to: (i32, i32),
    dash: u32,
    gap: u32,
) -> Vec<[(i32, i32); 2]> {
    let (dx, dy) = ((to.0 - from.0) as f64, (to.1 - from.1) as f64);
    let len = (dx * dx + dy * dy).sqrt();
    if len == 0.0 || dash == 0 {
        return Vec::new();
    }
    let (ux, uy) = (dx / len, dy / len);
    let period = (dash + gap) as f64;
    let at = |t: f64| {
        (
            (from.0 as f64 + ux * t).round() as i32,
            (from.1 as f64 + uy * t).round() as i32,
        )
    };

    let mut out = Vec::new();
    let mut t = 0.0;
    while t < len {
        let end = (t + dash as f64).min(len);
        out.push([at(t), at(end)]);
        t += period;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_corners_give_four_points() {
        let pts = rounded_rect(0, 0, 10, 20, [0, 0, 0, 0]);
        assert_eq!(pts, vec![(0, 0), (10, 0), (10, 20), (0, 20)]);
    }

    #[test]
    fn rounded_top_stays_inside_bounds() {
        let pts = rounded_rect(10, 50, 30, 100, [4, 4, 0, 0]);
        assert!(pts.len() > 4);
        assert!(pts.iter().all(|(x, y)| (10..=30).contains(x) && (50..=100).contains(y)));
        assert!(pts.contains(&(30, 100)));
        assert!(pts.contains(&(10, 100)));
    }

    #[test]
    fn dashes_cover_line() {
        let segs = dashed_segments((0, 0), (12, 0), 3, 3);
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0], [(0, 0), (3, 0)]);
        assert_eq!(segs[1], [(6, 0), (9, 0)]);
    }
}
