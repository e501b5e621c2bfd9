use std::fs;
use std::path::PathBuf;

use chart_panels::models::{ChartKind, ChartSpec};
use chart_panels::theme::{Theme, ThemeMode};
use chart_panels::viz::{self, RenderOptions};

fn sample_specs() -> Vec<ChartSpec> {
    let mut sales = ChartSpec::new(ChartKind::VerticalBar, "Q1 Sales", "month", "sales")
        .with_row("Jan", 100)
        .with_row("Feb", -20)
        .with_row("Mar", 42);
    sales.value_prefix = Some("$".into());
    sales.value_suffix = Some("%".into());

    let mut deltas = ChartSpec::new(ChartKind::HorizontalBar, "Regional change", "region", "delta")
        .with_row("North", 12)
        .with_row("South", -5);
    deltas.subtitle = Some("Percentage points".into());
    vec![sales, deltas]
}

#[test]
fn empty_input_draws_nothing() {
    let out = viz::render_svg(&[], &RenderOptions::default()).unwrap();
    assert!(out.is_none());

    let path: PathBuf = std::env::temp_dir().join("chart_panels_empty.svg");
    fs::remove_file(&path).ok();
    let wrote = viz::render_svg_file(&[], &path, &RenderOptions::default()).unwrap();
    assert!(!wrote);
    assert!(!path.exists());
}

#[test]
fn svg_contains_titles_labels_and_ticks() {
    let svg = viz::render_svg(&sample_specs(), &RenderOptions::default())
        .unwrap()
        .unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("Q1 Sales"));
    assert!(svg.contains("Regional change"));
    assert!(svg.contains("Percentage points"));
    for label in ["$100%", "$-20%", "$42%", "Jan", "Feb", "Mar", "North", "South"] {
        assert!(svg.contains(label), "missing {label}");
    }
}

#[test]
fn negative_horizontal_bar_is_red() {
    let svg = viz::render_svg(&sample_specs(), &RenderOptions::default())
        .unwrap()
        .unwrap()
        .to_ascii_lowercase();
    assert!(svg.contains("#ef4444"));
}

#[test]
fn tooltips_are_attached_per_bar() {
    let svg = viz::render_svg(&sample_specs(), &RenderOptions::default())
        .unwrap()
        .unwrap();
    assert_eq!(svg.matches("<title>").count(), 5);
    assert!(svg.contains("<title>Jan\nsales : $100%</title>"));
    assert!(svg.contains("<title>South\ndelta : -5</title>"));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn same_specs_render_identically() {
    let opts = RenderOptions::default();
    let a = viz::render_svg(&sample_specs(), &opts).unwrap();
    let b = viz::render_svg(&sample_specs(), &opts).unwrap();
    assert_eq!(a, b);
}

#[test]
fn width_and_theme_change_the_output() {
    let light = viz::render_svg(&sample_specs(), &RenderOptions::default()).unwrap();
    let dark = viz::render_svg(
        &sample_specs(),
        &RenderOptions {
            width: 600,
            theme: Theme::builtin(ThemeMode::Dark),
        },
    )
    .unwrap()
    .unwrap();
    assert_ne!(light.as_deref(), Some(dark.as_str()));
    assert!(dark.contains("width=\"600\""));
}

#[test]
fn writes_svg_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("panels.svg");
    let wrote = viz::render_svg_file(&sample_specs(), &path, &RenderOptions::default()).unwrap();
    assert!(wrote);
    let meta = fs::metadata(&path).expect("file created");
    assert!(meta.len() > 0, "svg has content");
}

#[test]
fn unknown_palette_tokens_do_not_fail() {
    let mut spec = ChartSpec::new(ChartKind::VerticalBar, "Odd colors", "k", "v")
        .with_row("a", 1)
        .with_row("b", 2);
    spec.palette = Some(vec!["not-a-color".into(), "var(--nowhere)".into()]);
    let svg = viz::render_svg(&[spec], &RenderOptions::default()).unwrap();
    assert!(svg.is_some());
}

#[test]
fn css_color_names_paint_their_color() {
    let mut spec = ChartSpec::new(ChartKind::VerticalBar, "Named", "k", "v")
        .with_row("a", 1)
        .with_row("b", 2);
    spec.palette = Some(vec!["red".into(), "steelblue".into()]);
    let svg = viz::render_svg(&[spec], &RenderOptions::default())
        .unwrap()
        .unwrap()
        .to_ascii_lowercase();
    assert!(svg.contains("fill=\"#ff0000\""));
    assert!(svg.contains("fill=\"#4682b4\""));
}
