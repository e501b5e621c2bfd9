//! Hover tooltips for SVG output.
//!
//! Plotters has no notion of interactivity, so after painting we append one transparent
//! hit area per bar carrying an SVG `<title>`; viewers show it on hover.

use std::fmt::Write as _;

use super::layout::StackGeometry;
use crate::panel::PanelStack;

/// Text shown for a tooltip: category heading, then `name : value`.
pub fn tooltip_text(heading: &str, name: &str, value: &str) -> String {
    if heading.is_empty() {
        format!("{name} : {value}")
    } else {
        format!("{heading}\n{name} : {value}")
    }
}

/// Insert the tooltip layer right before the closing `</svg>` tag.
pub fn append_tooltips(svg: &mut String, stack: &PanelStack, geometry: &StackGeometry) {
    let mut layer = String::from("<g class=\"chart-tooltips\">\n");
    for (panel, geom) in stack.panels.iter().zip(&geometry.panels) {
        for (bar, bar_geom) in panel.bars.iter().zip(&geom.bars) {
            let Some(tip) = bar.tooltip.as_ref() else {
                continue;
            };
            let band = bar_geom.band;
            let _ = writeln!(
                layer,
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"transparent\" pointer-events=\"all\" data-panel=\"{}\" data-bar=\"{}\"><title>{}</title></rect>",
                band.x0,
                band.y0,
                band.width().max(0),
                band.height().max(0),
                panel.index,
                bar.index,
                escape_xml(&tooltip_text(&tip.heading, &tip.name, &tip.value)),
            );
        }
    }
    layer.push_str("</g>\n");

    match svg.rfind("</svg>") {
        Some(pos) => svg.insert_str(pos, &layer),
        None => svg.push_str(&layer),
    }
}

pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_xml("<a & 'b'>"), "&lt;a &amp; &apos;b&apos;&gt;");
    }

    #[test]
    fn text_pairs_name_and_value() {
        assert_eq!(tooltip_text("Jan", "sales", "$100"), "Jan\nsales : $100");
        assert_eq!(tooltip_text("", "sales", "$100"), "sales : $100");
    }

    #[test]
    fn layer_lands_inside_root_element() {
        let mut svg = String::from("<svg></svg>\n");
        let stack = PanelStack { panels: vec![] };
        let geometry = StackGeometry {
            width: 320,
            height: 64,
            panels: vec![],
        };
        append_tooltips(&mut svg, &stack, &geometry);
        assert!(svg.starts_with("<svg><g class=\"chart-tooltips\">"));
        assert!(svg.trim_end().ends_with("</g>\n</svg>"));
    }
}
