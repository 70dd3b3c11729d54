use std::fs;
use std::path::PathBuf;

use anyhow::{Context, anyhow};
use clap::{ArgAction, Parser};
use drawpad::config::{BrushSize, Config};
use drawpad::export::{
    ExportDependencies, ExportFileConfig, ExportManager, ExportOutcome, ExportRequest,
};
use drawpad::input::{DrawingSurface, parse_script};

#[derive(Parser, Debug)]
#[command(name = "drawpad")]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("DRAWPAD_GIT_HASH"), ")"),
    about = "Freehand drawing surface that replays gesture scripts and exports PNG images"
)]
struct Cli {
    /// JSON gesture script (array of down/move/up/undo/color/brush/resize events)
    #[arg(long, short = 's', value_name = "FILE")]
    script: PathBuf,

    /// Surface width in pixels (overrides config)
    #[arg(long, value_name = "PX")]
    width: Option<u32>,

    /// Surface height in pixels (overrides config)
    #[arg(long, value_name = "PX")]
    height: Option<u32>,

    /// Display density used for brush sizes (overrides config)
    #[arg(long)]
    density: Option<f64>,

    /// Initial pen color, named or hex (overrides config)
    #[arg(long, short = 'c', value_name = "COLOR")]
    color: Option<String>,

    /// Initial brush preset (overrides config)
    #[arg(long, short = 'b', value_enum)]
    brush: Option<BrushSize>,

    /// Directory for the exported image (overrides config)
    #[arg(long, short = 'o', value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Do not send a desktop notification after exporting
    #[arg(long, action = ArgAction::SetTrue)]
    no_notify: bool,

    /// Replay the script and report, without exporting
    #[arg(long, action = ArgAction::SetTrue)]
    no_export: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::load()?;

    let width = cli.width.unwrap_or(config.surface.width);
    let height = cli.height.unwrap_or(config.surface.height);
    let density = cli.density.unwrap_or(config.drawing.density);

    let mut surface = DrawingSurface::new(width, height, density)
        .with_context(|| format!("Failed to create {}x{} surface", width, height))?;

    match &cli.color {
        Some(spec) => surface.set_color(spec)?,
        None => surface.set_color_value(config.drawing.default_color.to_color()?),
    }
    let brush = cli.brush.unwrap_or(config.drawing.default_brush);
    surface.set_brush_thickness(config.drawing.brush_size_dp(brush));

    let script = fs::read_to_string(&cli.script)
        .with_context(|| format!("Failed to read script {}", cli.script.display()))?;
    let events = parse_script(&script)
        .with_context(|| format!("Failed to parse script {}", cli.script.display()))?;

    log::info!("Replaying {} events", events.len());
    for (index, event) in events.iter().enumerate() {
        surface
            .handle_event(event)
            .with_context(|| format!("Event #{} ({:?}) failed", index, event))?;
    }

    println!(
        "strokes: {}, discarded: {}, undo available: {}",
        surface.strokes().len(),
        surface.discarded().len(),
        if surface.can_undo() { "yes" } else { "no" }
    );

    if cli.no_export {
        return Ok(());
    }

    let frame = surface.compose_frame().context("Failed to compose frame")?;

    let mut file_config = ExportFileConfig::from_config(&config.export);
    if let Some(dir) = cli.output_dir {
        file_config.directory = dir;
    }
    let request = ExportRequest {
        frame,
        background: Some(config.export.background.to_color()?),
        file_config,
    };

    let dependencies = if cli.no_notify || !config.export.notify {
        ExportDependencies::without_notifications()
    } else {
        ExportDependencies::default()
    };

    let runtime = tokio::runtime::Runtime::new().context("Failed to start export runtime")?;
    let manager = ExportManager::with_dependencies(runtime.handle(), dependencies);
    let receiver = manager.request_export(request)?;

    match runtime.block_on(receiver) {
        Ok(ExportOutcome::Success(path)) => {
            println!("{}", path.display());
            Ok(())
        }
        Ok(ExportOutcome::Failed(reason)) => Err(anyhow!("Export failed: {}", reason)),
        Err(_) => Err(anyhow!("Export worker stopped unexpectedly")),
    }
}
