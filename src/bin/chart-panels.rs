use anyhow::{Context, Result};
use chart_panels::theme::{Theme, ThemeMode};
use chart_panels::{panel, storage, viz};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "chart-panels",
    version,
    about = "Render declarative bar-chart specifications into themed SVG chart panels"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render chart specs to an SVG document.
    Render(RenderArgs),
    /// Print the drawing instructions (panel scene) as JSON.
    Inspect(InspectArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for ThemeMode {
    fn from(t: ThemeArg) -> Self {
        match t {
            ThemeArg::Light => ThemeMode::Light,
            ThemeArg::Dark => ThemeMode::Dark,
        }
    }
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// JSON file with an array of charts or `{ "charts": [...] }`; `-` reads stdin.
    input: PathBuf,
    /// Write the SVG here instead of stdout.
    #[arg(short, long)]
    out: Option<PathBuf>,
    /// Width of the containing element in pixels.
    #[arg(long, default_value_t = viz::DEFAULT_WIDTH_PX)]
    width: u32,
    /// Built-in color theme.
    #[arg(long, value_enum, default_value_t = ThemeArg::Light)]
    theme: ThemeArg,
    /// JSON object of theme variable overrides, e.g. {"accent": "262 83% 58%"}.
    #[arg(long)]
    theme_file: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct InspectArgs {
    /// JSON file with an array of charts or `{ "charts": [...] }`; `-` reads stdin.
    input: PathBuf,
    /// Write the JSON here instead of stdout.
    #[arg(short, long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

fn load_theme(args: &RenderArgs) -> Result<Theme> {
    let theme = Theme::builtin(args.theme.into());
    let Some(path) = args.theme_file.as_ref() else {
        return Ok(theme);
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading theme file {}", path.display()))?;
    let overrides: BTreeMap<String, String> = serde_json::from_str(&text)
        .with_context(|| format!("theme file {} must be a JSON object of strings", path.display()))?;
    Ok(theme.with_overrides(overrides))
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    let specs = storage::load_specs(&args.input)
        .with_context(|| format!("loading charts from {}", args.input.display()))?;
    let opts = viz::RenderOptions {
        width: args.width,
        theme: load_theme(&args)?,
    };

    let rendered = match args.out.as_ref() {
        Some(path) => {
            let wrote = viz::render_svg_file(&specs, path, &opts)
                .with_context(|| format!("writing {}", path.display()))?;
            if wrote {
                eprintln!("Wrote {} chart panel(s) to {}", specs.len(), path.display());
            }
            wrote
        }
        None => match viz::render_svg(&specs, &opts)? {
            Some(svg) => {
                std::io::stdout().write_all(svg.as_bytes())?;
                true
            }
            None => false,
        },
    };
    if !rendered {
        eprintln!("No charts in {}; nothing rendered", args.input.display());
    }
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> Result<()> {
    let specs = storage::load_specs(&args.input)
        .with_context(|| format!("loading charts from {}", args.input.display()))?;
    let stack = panel::render_panels(&specs);
    match args.out.as_ref() {
        Some(path) => {
            storage::save_scene_json(stack.as_ref(), path)
                .with_context(|| format!("writing {}", path.display()))?;
            eprintln!("Saved scene for {} chart(s) to {}", specs.len(), path.display());
        }
        None => println!("{}", storage::scene_json(stack.as_ref())?),
    }
    Ok(())
}
