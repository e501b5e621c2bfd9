//! chart_panels
//!
//! A small Rust library for turning declarative bar-chart specifications into chart
//! panels. Pairs with the `chart-panels` CLI.
//!
//! ### Features
//! - Vertical and horizontal bar charts, one bordered card per chart
//! - Palette cycling with a red override for negative values on horizontal charts
//! - `prefix + value + suffix` formatting shared by ticks, labels and tooltips
//! - Themeable colors (`hsl(var(--accent))` tokens resolved at paint time)
//! - SVG output with hover tooltips, or the raw drawing instructions as JSON
//!
//! ### Example
//! ```no_run
//! use chart_panels::{ChartKind, ChartSpec};
//!
//! let spec = ChartSpec::new(ChartKind::VerticalBar, "Q1 Sales", "month", "sales")
//!     .with_row("Jan", 100)
//!     .with_row("Feb", -20);
//! let panels = chart_panels::panel::render_panels(&[spec.clone()]).expect("one chart");
//! assert_eq!(panels.panels.len(), 1);
//!
//! let opts = chart_panels::viz::RenderOptions::default();
//! chart_panels::viz::render_svg_file(&[spec], "sales.svg", &opts)?;
//! # Ok::<(), chart_panels::Error>(())
//! ```

pub mod css_colors;
pub mod error;
pub mod format;
pub mod models;
pub mod panel;
pub mod storage;
pub mod styler;
pub mod theme;
pub mod viz;

pub use error::{Error, Result};
pub use models::{ChartKind, ChartSpec, FieldValue, Record};
pub use panel::{ChartPanel, PanelStack, render_panels};
pub use theme::{ColorToken, Theme, ThemeMode};
