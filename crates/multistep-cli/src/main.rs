//! Multistep CLI - inspect slider configurations and replay drags.

#![allow(clippy::uninlined_format_args, clippy::doc_markdown)]

use clap::{Parser, Subcommand, ValueEnum};
use multistep_slider::{abbreviate, RangeEngine, SliderConfig, Thumb, TrackGeometry};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "multistep")]
#[command(about = "Multi-step range slider inspection tool")]
#[command(version)]
struct Cli {
    /// Log engine activity (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a slider configuration
    Check {
        /// Path to configuration file (YAML or JSON)
        #[arg(default_value = "slider.yaml")]
        config: PathBuf,
    },

    /// Print the node list of a configuration
    Nodes {
        /// Path to configuration file (YAML or JSON)
        #[arg(default_value = "slider.yaml")]
        config: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Replay thumb drags on a track and print the selection after each
    Drag {
        /// Path to configuration file (YAML or JSON)
        config: PathBuf,

        /// Track width in pixels
        #[arg(short, long, default_value = "300")]
        width: f32,

        /// Drag step as THUMB:DELTA, e.g. lower:+40 or upper:-25
        #[arg(short, long = "step", value_parser = parse_drag_step)]
        steps: Vec<DragStep>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// One replayed drag.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragStep {
    thumb: Thumb,
    delta: f32,
}

fn parse_drag_step(s: &str) -> Result<DragStep, String> {
    let (thumb, delta) = s
        .split_once(':')
        .ok_or_else(|| format!("expected THUMB:DELTA, got '{}'", s))?;
    let thumb = match thumb.trim().to_ascii_lowercase().as_str() {
        "lower" | "l" => Thumb::Lower,
        "upper" | "u" => Thumb::Upper,
        other => return Err(format!("unknown thumb '{}' (expected lower or upper)", other)),
    };
    let delta: f32 = delta
        .trim()
        .parse()
        .map_err(|e| format!("invalid delta '{}': {}", delta, e))?;
    if !delta.is_finite() {
        return Err(format!("delta must be finite, got '{}'", delta));
    }
    Ok(DragStep { thumb, delta })
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Check { config } => check_config(&config),
        Commands::Nodes { config, format } => print_nodes(&config, format),
        Commands::Drag {
            config,
            width,
            steps,
        } => replay_drags(&config, width, &steps),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: &Path) -> Result<SliderConfig, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    debug!(path = %path.display(), is_json, "loading slider configuration");

    let config = if is_json {
        SliderConfig::from_json(&content)
    } else {
        SliderConfig::from_yaml(&content)
    };
    config.map_err(|e| format!("{}: {}", path.display(), e))
}

fn check_config(path: &Path) -> Result<(), String> {
    println!("Checking slider configuration: {}", path.display());

    let config = load_config(path)?;
    config.style.to_style().map_err(|e| e.to_string())?;
    let engine = RangeEngine::from_config(&config, TrackGeometry::new(0.0, 300.0))
        .map_err(|e| e.to_string())?;

    let nodes = engine.nodes();
    println!("Configuration valid!");
    println!("  Intervals: {}", config.intervals.len());
    println!("  Nodes: {}", nodes.len());
    if let (Some(first), Some(last)) = (nodes.first(), nodes.last()) {
        println!("  Range: {} - {}", abbreviate(first), abbreviate(last));
    }
    let value = engine.discrete_value();
    println!(
        "  Selected: {} - {}",
        abbreviate(value.lower),
        abbreviate(value.upper)
    );
    Ok(())
}

fn print_nodes(path: &Path, format: OutputFormat) -> Result<(), String> {
    let config = load_config(path)?;
    let nodes = config.interval_set().build_nodes().map_err(|e| e.to_string())?;

    match format {
        OutputFormat::Text => {
            for (i, value) in nodes.iter().enumerate() {
                println!("{:>4}  {:>12}  {}", i, value, abbreviate(value));
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&nodes).map_err(|e| e.to_string())?;
            println!("{}", json);
        }
    }
    Ok(())
}

fn replay_drags(path: &Path, width: f32, steps: &[DragStep]) -> Result<(), String> {
    let config = load_config(path)?;
    let mut engine = RangeEngine::from_config(&config, TrackGeometry::new(0.0, width))
        .map_err(|e| e.to_string())?;
    info!(nodes = engine.nodes().len(), width, "replaying drags");

    print_selection("start", &engine);
    for step in steps {
        engine.apply_drag(step.thumb, step.delta);
        let label = format!("{:?} {:+}", step.thumb, step.delta).to_lowercase();
        print_selection(&label, &engine);
    }
    Ok(())
}

fn print_selection(label: &str, engine: &RangeEngine) {
    let discrete = engine.discrete_value();
    let continuous = engine.continuous_value();
    println!(
        "{:<14} [{:>7.1} {:>7.1}]  {} - {}  ({:.0} - {:.0})",
        label,
        engine.lower_center(),
        engine.upper_center(),
        abbreviate(discrete.lower),
        abbreviate(discrete.upper),
        continuous.lower,
        continuous.upper
    );
}
