use chart_panels::models::{ChartKind, ChartSpec};
use chart_panels::panel::render_panels;
use chart_panels::styler::{NEGATIVE_COLOR, default_palette};
use chart_panels::theme::ColorToken;

fn with_palette(kind: ChartKind, values: &[f64], palette: &[&str]) -> ChartSpec {
    let mut spec = ChartSpec::new(kind, "Palette", "k", "v");
    for (i, v) in values.iter().enumerate() {
        spec = spec.with_row(format!("c{i}"), *v);
    }
    spec.palette = Some(palette.iter().map(|s| ColorToken::parse(s)).collect());
    spec
}

#[test]
fn palette_cycles_by_index() {
    let palette = ["#111111", "#222222", "#333333"];
    for kind in [ChartKind::VerticalBar, ChartKind::HorizontalBar] {
        let spec = with_palette(kind, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 0.0], &palette);
        let stack = render_panels(&[spec]).unwrap();
        let bars = &stack.panels[0].bars;
        assert_eq!(bars.len(), 7);
        for (i, bar) in bars.iter().enumerate() {
            assert_eq!(bar.fill, ColorToken::parse(palette[i % 3]), "bar {i}");
        }
    }
}

#[test]
fn horizontal_negative_values_use_negative_color() {
    let palette = ["#111111", "#222222", "#333333"];
    let spec = with_palette(ChartKind::HorizontalBar, &[4.0, -5.0, 2.0, -0.5], &palette);
    let stack = render_panels(&[spec]).unwrap();
    let bars = &stack.panels[0].bars;
    let negative = ColorToken::parse(NEGATIVE_COLOR);
    assert_eq!(bars[0].fill, ColorToken::parse(palette[0]));
    assert_eq!(bars[1].fill, negative);
    assert_eq!(bars[2].fill, ColorToken::parse(palette[2]));
    assert_eq!(bars[3].fill, negative);
}

#[test]
fn vertical_negative_values_keep_palette_color() {
    let palette = ["#111111", "#222222"];
    let spec = with_palette(ChartKind::VerticalBar, &[4.0, -5.0], &palette);
    let stack = render_panels(&[spec]).unwrap();
    assert_eq!(stack.panels[0].bars[1].fill, ColorToken::parse("#222222"));
}

#[test]
fn default_palette_when_absent() {
    let spec = ChartSpec::new(ChartKind::VerticalBar, "D", "k", "v")
        .with_row("a", 1)
        .with_row("b", 2);
    let stack = render_panels(&[spec]).unwrap();
    let palette = default_palette();
    assert_eq!(palette.len(), 7);
    assert_eq!(palette[0], ColorToken::theme("accent"));
    assert_eq!(stack.panels[0].bars[0].fill, palette[0]);
    assert_eq!(stack.panels[0].bars[1].fill, palette[1]);
}

#[test]
fn text_values_are_labelled_but_not_drawn() {
    let spec = ChartSpec::new(ChartKind::HorizontalBar, "Mixed", "k", "v").with_row("a", "n/a");
    let stack = render_panels(&[spec]).unwrap();
    let bar = &stack.panels[0].bars[0];
    assert_eq!(bar.value, None);
    assert_eq!(bar.label.as_deref(), Some("n/a"));
    assert_eq!(bar.fill, default_palette()[0]);
}

#[test]
fn styling_has_no_memory_between_charts() {
    let palette = ["#111111", "#222222", "#333333"];
    let a = with_palette(ChartKind::HorizontalBar, &[1.0, 2.0], &palette);
    let b = with_palette(ChartKind::HorizontalBar, &[1.0, 2.0], &palette);
    let stack = render_panels(&[a, b]).unwrap();
    assert_eq!(stack.panels[0].bars, stack.panels[1].bars);
}
