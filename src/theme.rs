//! Color tokens and theme resolution.
//!
//! Chart scenes never carry resolved colors for chrome (grid, ticks, tooltip, card); they
//! carry [`ColorToken`]s such as `hsl(var(--border))`. A [`Theme`] maps the variable names
//! to HSL triplets and turns tokens into concrete [`Rgb8`] values at paint time.
//!
//! Design:
//! - Tokens keep their CSS form when serialized, so scenes can be handed to a web engine.
//! - Literal colors (`#22c55e`, `rgb(...)`, `hsl(...)`, `steelblue`) resolve without a theme.
//! - Unknown tokens are kept verbatim and resolve to `None`.

use crate::css_colors;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h_deg: f64, // 0..360
    pub s: f64,     // 0..1
    pub l: f64,     // 0..1
}

impl Hsl {
    /// Parse a CSS variable triplet like `"221.2 83.2% 53.3%"` (commas allowed).
    pub fn parse_triplet(s: &str) -> Option<Self> {
        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();
        if parts.len() != 3 {
            return None;
        }
        let h = parts[0].trim_end_matches("deg").parse::<f64>().ok()?;
        let s = parts[1].trim_end_matches('%').parse::<f64>().ok()? / 100.0;
        let l = parts[2].trim_end_matches('%').parse::<f64>().ok()? / 100.0;
        Some(Hsl {
            h_deg: h.rem_euclid(360.0),
            s: clamp01(s),
            l: clamp01(l),
        })
    }

    pub fn to_rgb8(self) -> Rgb8 {
        hsl_to_rgb8(self)
    }
}

/// A color reference as written in chart specs and scenes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ColorToken {
    /// `#rgb` or `#rrggbb`.
    Hex(Rgb8),
    /// `rgb(r, g, b)`.
    Rgb(Rgb8),
    /// `hsl(h s% l%)` with literal components.
    Hsl(Hsl),
    /// CSS color keyword, lowercased (`red`, `steelblue`, `transparent`).
    Named(String),
    /// Theme variable: `var(--name)`, or `hsl(var(--name))` when `wrapped` is set.
    Var { name: String, wrapped: bool },
    /// Anything else, kept as written.
    Unknown(String),
}

impl ColorToken {
    /// Shorthand for `hsl(var(--name))`, the form used for theme chrome colors.
    pub fn theme(name: &str) -> Self {
        ColorToken::Var {
            name: name.to_string(),
            wrapped: true,
        }
    }

    /// `transparent` paints nothing.
    pub fn is_transparent(&self) -> bool {
        matches!(self, ColorToken::Named(n) if n == css_colors::TRANSPARENT)
    }

    pub fn parse(raw: &str) -> Self {
        let s = raw.trim();
        if let Some(hex) = s.strip_prefix('#')
            && let Some(rgb) = parse_hex(hex)
        {
            return ColorToken::Hex(rgb);
        }
        if let Some(caps) = var_re().captures(s) {
            return ColorToken::Var {
                name: caps[2].to_string(),
                wrapped: caps.get(1).is_some(),
            };
        }
        if let Some(caps) = func_re().captures(s) {
            let args = &caps[2];
            match caps[1].to_ascii_lowercase().as_str() {
                "hsl" | "hsla" => {
                    if let Some(hsl) = Hsl::parse_triplet(first_three(args).as_str()) {
                        return ColorToken::Hsl(hsl);
                    }
                }
                _ => {
                    if let Some(rgb) = parse_rgb_args(args) {
                        return ColorToken::Rgb(rgb);
                    }
                }
            }
        }
        if css_colors::is_keyword(s) {
            return ColorToken::Named(s.to_ascii_lowercase());
        }
        ColorToken::Unknown(s.to_string())
    }
}

impl From<String> for ColorToken {
    fn from(s: String) -> Self {
        ColorToken::parse(&s)
    }
}

impl From<&str> for ColorToken {
    fn from(s: &str) -> Self {
        ColorToken::parse(s)
    }
}

impl From<ColorToken> for String {
    fn from(t: ColorToken) -> Self {
        t.to_string()
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorToken::Hex(rgb) => write!(f, "{}", rgb.to_hex()),
            ColorToken::Rgb(rgb) => write!(f, "rgb({}, {}, {})", rgb.r, rgb.g, rgb.b),
            ColorToken::Hsl(hsl) => write!(
                f,
                "hsl({} {}% {}%)",
                hsl.h_deg,
                round2(hsl.s * 100.0),
                round2(hsl.l * 100.0)
            ),
            ColorToken::Named(name) => f.write_str(name),
            ColorToken::Var { name, wrapped: true } => write!(f, "hsl(var(--{name}))"),
            ColorToken::Var { name, wrapped: false } => write!(f, "var(--{name})"),
            ColorToken::Unknown(s) => f.write_str(s),
        }
    }
}

fn var_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(hsla?\(\s*)?var\(\s*--([A-Za-z0-9_-]+)\s*\)(?:\s*\))?$")
            .expect("static regex")
    })
}

fn func_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?i)(hsla?|rgba?)\(\s*([^()]*)\)$").expect("static regex")
    })
}

fn first_three(args: &str) -> String {
    // Drop an alpha component (`/ 0.5` or a fourth comma-separated value).
    let no_alpha = args.split('/').next().unwrap_or("");
    no_alpha
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .take(3)
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse_rgb_args(args: &str) -> Option<Rgb8> {
    let parts: Vec<u8> = first_three(args)
        .split(' ')
        .map(|p| p.parse::<f64>().ok().map(|v| v.round().clamp(0.0, 255.0) as u8))
        .collect::<Option<Vec<_>>>()?;
    match parts.as_slice() {
        [r, g, b] => Some(Rgb8::new(*r, *g, *b)),
        _ => None,
    }
}

fn parse_hex(hex: &str) -> Option<Rgb8> {
    let digit = |i: usize, len: usize| u8::from_str_radix(hex.get(i..i + len)?, 16).ok();
    match hex.len() {
        3 => {
            let (r, g, b) = (digit(0, 1)?, digit(1, 1)?, digit(2, 1)?);
            Some(Rgb8::new(r * 17, g * 17, b * 17))
        }
        6 => Some(Rgb8::new(digit(0, 2)?, digit(2, 2)?, digit(4, 2)?)),
        _ => None,
    }
}

/// Variable name -> HSL triplet, mirroring a CSS custom-property sheet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub vars: BTreeMap<String, String>,
}

/// Built-in theme choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

const LIGHT_VARS: [(&str, &str); 8] = [
    ("background", "0 0% 100%"),
    ("foreground", "222.2 84% 4.9%"),
    ("card", "0 0% 100%"),
    ("primary", "222.2 47.4% 11.2%"),
    ("secondary", "210 40% 70%"),
    ("accent", "221.2 83.2% 53.3%"),
    ("muted-foreground", "215.4 16.3% 46.9%"),
    ("border", "214.3 31.8% 91.4%"),
];

const DARK_VARS: [(&str, &str); 8] = [
    ("background", "222.2 84% 4.9%"),
    ("foreground", "210 40% 98%"),
    ("card", "222.2 47% 8%"),
    ("primary", "210 40% 98%"),
    ("secondary", "217.2 32.6% 45%"),
    ("accent", "217.2 91.2% 59.8%"),
    ("muted-foreground", "215 20.2% 65.1%"),
    ("border", "217.2 32.6% 17.5%"),
];

impl Default for Theme {
    fn default() -> Self {
        Theme::builtin(ThemeMode::Light)
    }
}

impl Theme {
    pub fn builtin(mode: ThemeMode) -> Self {
        let (name, vars) = match mode {
            ThemeMode::Light => ("light", &LIGHT_VARS),
            ThemeMode::Dark => ("dark", &DARK_VARS),
        };
        Theme {
            name: name.to_string(),
            vars: vars
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Merge variable overrides on top of this theme. Keys may be written with or
    /// without the leading `--`.
    pub fn with_overrides<I, K, V>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (k, v) in overrides {
            let key = k.as_ref().trim_start_matches("--").to_string();
            self.vars.insert(key, v.into());
        }
        self
    }

    /// Resolve a token to a concrete color; `None` when the token cannot be resolved.
    pub fn resolve(&self, token: &ColorToken) -> Option<Rgb8> {
        match token {
            ColorToken::Hex(rgb) | ColorToken::Rgb(rgb) => Some(*rgb),
            ColorToken::Hsl(hsl) => Some(hsl.to_rgb8()),
            ColorToken::Named(name) => css_colors::named_color(name),
            ColorToken::Var { name, .. } => {
                let raw = self.vars.get(name)?;
                // A variable may itself hold a full color (`#fff`) instead of a triplet.
                Hsl::parse_triplet(raw)
                    .map(Hsl::to_rgb8)
                    .or_else(|| match ColorToken::parse(raw) {
                        ColorToken::Var { .. } | ColorToken::Unknown(_) => None,
                        other => self.resolve(&other),
                    })
            }
            ColorToken::Unknown(_) => None,
        }
    }

    /// Resolve a token, falling back to the theme foreground (or black).
    pub fn resolve_or_foreground(&self, token: &ColorToken) -> Rgb8 {
        self.resolve(token).unwrap_or_else(|| {
            log::warn!("unresolved color token `{token}` in theme `{}`", self.name);
            self.resolve(&ColorToken::theme("foreground"))
                .unwrap_or(Rgb8::new(0, 0, 0))
        })
    }
}

fn clamp01(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

// Chroma form of the CSS hsl() conversion.
fn hsl_to_rgb8(hsl: Hsl) -> Rgb8 {
    let s = clamp01(hsl.s);
    let l = clamp01(hsl.l);
    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let sector = hsl.h_deg.rem_euclid(360.0) / 60.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let (r, g, b) = match sector as u8 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = l - chroma / 2.0;
    let channel = |v: f64| (clamp01(v + m) * 255.0).round() as u8;
    Rgb8::new(channel(r), channel(g), channel(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_token_forms() {
        assert_eq!(
            ColorToken::parse("#ef4444"),
            ColorToken::Hex(Rgb8::new(0xef, 0x44, 0x44))
        );
        assert_eq!(
            ColorToken::parse("#fff"),
            ColorToken::Hex(Rgb8::new(255, 255, 255))
        );
        assert_eq!(ColorToken::parse("hsl(var(--accent))"), ColorToken::theme("accent"));
        assert_eq!(
            ColorToken::parse("var(--border)"),
            ColorToken::Var {
                name: "border".into(),
                wrapped: false
            }
        );
        assert_eq!(
            ColorToken::parse("rgb(1, 2, 3)"),
            ColorToken::Rgb(Rgb8::new(1, 2, 3))
        );
        assert!(matches!(ColorToken::parse("hsl(120 50% 50%)"), ColorToken::Hsl(_)));
        assert_eq!(
            ColorToken::parse("RebeccaPurple"),
            ColorToken::Named("rebeccapurple".into())
        );
        assert_eq!(
            ColorToken::parse("not-a-color"),
            ColorToken::Unknown("not-a-color".into())
        );
    }

    #[test]
    fn tokens_keep_css_text() {
        for raw in ["#22c55e", "hsl(var(--primary))", "var(--card)", "tomato"] {
            assert_eq!(ColorToken::parse(raw).to_string(), raw);
        }
    }

    #[test]
    fn named_colors_resolve_without_theme() {
        let theme = Theme::default();
        assert_eq!(theme.resolve(&ColorToken::parse("red")), Some(Rgb8::new(255, 0, 0)));
        assert_eq!(ColorToken::parse("SteelBlue").to_string(), "steelblue");
        let clear = ColorToken::parse("transparent");
        assert!(clear.is_transparent());
        assert_eq!(theme.resolve(&clear), None);
    }

    #[test]
    fn hsl_conversion_hits_primaries() {
        let rgb = |h, s, l| Hsl { h_deg: h, s, l }.to_rgb8();
        assert_eq!(rgb(0.0, 1.0, 0.5), Rgb8::new(255, 0, 0));
        assert_eq!(rgb(120.0, 1.0, 0.5), Rgb8::new(0, 255, 0));
        assert_eq!(rgb(240.0, 1.0, 0.5), Rgb8::new(0, 0, 255));
        assert_eq!(rgb(360.0, 1.0, 0.25), Rgb8::new(128, 0, 0));
        assert_eq!(rgb(0.0, 0.0, 1.0), Rgb8::new(255, 255, 255));
    }

    #[test]
    fn resolves_theme_variables() {
        let theme = Theme::default();
        assert_eq!(
            theme.resolve(&ColorToken::theme("card")),
            Some(Rgb8::new(255, 255, 255))
        );
        assert_eq!(theme.resolve(&ColorToken::theme("missing")), None);
        assert_eq!(theme.resolve(&ColorToken::Unknown("x".into())), None);
    }

    #[test]
    fn overrides_accept_dashes_and_literals() {
        let theme = Theme::default().with_overrides([("--accent", "#010203")]);
        assert_eq!(
            theme.resolve(&ColorToken::theme("accent")),
            Some(Rgb8::new(1, 2, 3))
        );
    }

    #[test]
    fn unresolved_falls_back_to_foreground() {
        let theme = Theme::builtin(ThemeMode::Dark);
        let fg = theme.resolve(&ColorToken::theme("foreground")).unwrap();
        assert_eq!(theme.resolve_or_foreground(&ColorToken::parse("nope")), fg);
    }
}
