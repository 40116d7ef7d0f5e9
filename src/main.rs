use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use brave_pink::models::{AppConfig, CONFIG_ENV};
use brave_pink::rendering::{export_file_name, parse_size, read_raw_rgba, write_raw_rgba};
use brave_pink::services::{DuotoneSession, RenderOverrides};

#[derive(Parser)]
#[command(name = "brave-pink")]
#[command(about = "Brave Pink - duotone recoloring for raw RGBA images")]
struct Cli {
    /// Config file (YAML); falls back to $BRAVE_PINK_CONFIG
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Recolor a raw RGBA image and write the result
    Render(RenderArgs),
    /// List configured presets
    Presets,
}

#[derive(Args)]
struct RenderArgs {
    /// Input file with interleaved RGBA8 bytes (no header)
    #[arg(short, long)]
    input: PathBuf,

    /// Input dimensions, e.g. 800x600
    #[arg(short, long)]
    size: String,

    /// Output file (default: <input stem>-brave-pink.rgba next to the input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Preset to start from (default: the configured default preset)
    #[arg(short, long)]
    preset: Option<String>,

    /// Shadow color as hex, e.g. "#ff3ea5"
    #[arg(long)]
    shadow: Option<String>,

    /// Highlight color as hex, e.g. "#32ff84"
    #[arg(long)]
    highlight: Option<String>,

    /// Blend strength in percent (0-100)
    #[arg(long)]
    strength: Option<f32>,

    /// Gamma exponent (about 0.2-3.0)
    #[arg(long)]
    gamma: Option<f32>,

    /// Contrast (-100 to 100)
    #[arg(long, allow_hyphen_values = true)]
    contrast: Option<f32>,

    /// Brightness (-100 to 100)
    #[arg(long, allow_hyphen_values = true)]
    brightness: Option<f32>,

    /// Exchange shadow and highlight colors
    #[arg(long)]
    swap: bool,

    /// Longest side of the working buffer (default from config, 3500)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    max_dimension: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config_path = cli
        .config
        .or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from));

    match cli.command {
        Some(Commands::Render(args)) => run_render_command(config_path.as_deref(), args),
        Some(Commands::Presets) => run_presets_command(config_path.as_deref()),
        None => {
            run_status_command(config_path.as_deref());
            Ok(())
        }
    }
}

fn init_logging(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Recolor one raw image (load, fit, apply preset and overrides, write)
fn run_render_command(config_path: Option<&Path>, args: RenderArgs) -> anyhow::Result<()> {
    init_logging("brave_pink=info");

    let config = AppConfig::load(config_path);
    let preset = match args.preset.as_deref() {
        Some(name) => config.preset(name)?,
        None => config.default_preset(),
    };

    let (width, height) = parse_size(&args.size)?;
    let source = read_raw_rgba(&args.input, width, height)?;
    let max_dimension = args.max_dimension.unwrap_or(config.max_dimension);

    let mut session = DuotoneSession::new(source, max_dimension, preset)?;

    let overrides = RenderOverrides {
        shadow: args.shadow,
        highlight: args.highlight,
        strength_percent: args.strength,
        gamma: args.gamma,
        contrast: args.contrast,
        brightness: args.brightness,
        swap: args.swap,
    };
    overrides.apply(&mut session)?;

    let output_path = args.output.unwrap_or_else(|| {
        let name = args.input.file_name().and_then(|n| n.to_str());
        args.input.with_file_name(export_file_name(name))
    });

    let output = session.render();
    write_raw_rgba(&output_path, output)?;

    tracing::info!(
        path = %output_path.display(),
        width = output.width(),
        height = output.height(),
        "Wrote output"
    );
    println!(
        "{} ({}x{} RGBA)",
        output_path.display(),
        output.width(),
        output.height()
    );

    Ok(())
}

fn run_presets_command(config_path: Option<&Path>) -> anyhow::Result<()> {
    init_logging("brave_pink=warn");

    let config = AppConfig::load(config_path);
    for (name, resolved) in config.resolve_presets() {
        let marker = if name == config.default_preset { "*" } else { " " };
        let preset = match resolved {
            Ok(preset) => preset,
            Err(e) => {
                tracing::warn!(preset = name, %e, "Skipping unusable preset");
                println!("{marker} {name:<16} (unusable: {e})");
                continue;
            }
        };
        println!(
            "{marker} {name:<16} {} -> {}  strength {:.0}%  gamma {}  contrast {}  brightness {}",
            preset.shadow,
            preset.highlight,
            preset.params.strength * 100.0,
            preset.params.gamma,
            preset.params.contrast,
            preset.params.brightness,
        );
    }
    Ok(())
}

fn run_status_command(config_path: Option<&Path>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    init_logging("brave_pink=warn");
    let config = AppConfig::load(config_path);

    println!("Brave Pink v{VERSION}");
    println!("Duotone recoloring for raw RGBA images\n");

    println!("Configuration:");
    println!(
        "  {CONFIG_ENV} = {}",
        config_path
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(not set, using defaults)".to_string())
    );
    println!("  max_dimension     = {}", config.max_dimension);
    println!("  default_preset    = {}", config.default_preset);
    println!("  presets           = {}", config.preset_names().join(", "));

    println!("\nRun `brave-pink render --help` to recolor an image.");
}
