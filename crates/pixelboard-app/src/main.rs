use std::path::Path;
use std::sync::mpsc;
use std::{fs, process};

use anyhow::{bail, Context, Result};
use tracing_subscriber::EnvFilter;

use pixelboard_app::export;
use pixelboard_app::state::AppState;
use pixelboard_core::commands::BoardCommand;
use pixelboard_sim::config::BoardConfig;
use pixelboard_sim::BoardEngine;

const RUN_USAGE: &str = "pixelboard run <ticks> [config.json]";
const EXPORT_USAGE: &str = "pixelboard export <ticks> <output.json> [config.json]";

/// VPongs spawned at startup.
const STARTING_VPONGS: usize = 4;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut args = std::env::args().skip(1);

    match args.next().as_deref() {
        Some("run") => {
            let ticks = parse_ticks(args.next().context(RUN_USAGE)?)?;
            let config = load_config(args.next().as_deref())?;
            run_live(config, ticks)
        }
        Some("export") => {
            let ticks = parse_ticks(args.next().context(EXPORT_USAGE)?)?;
            let output = args.next().context(EXPORT_USAGE)?;
            let config = load_config(args.next().as_deref())?;
            run_export(config, ticks, Path::new(&output))
        }
        _ => bail!(
            "PIXELBOARD: generative square canvas\n\nUsage:\n  {RUN_USAGE}\n  {EXPORT_USAGE}"
        ),
    }
}

fn parse_ticks(arg: String) -> Result<u64> {
    arg.parse()
        .with_context(|| format!("Tick count must be a number, got {arg:?}"))
}

fn load_config(path: Option<&str>) -> Result<BoardConfig> {
    let Some(path) = path else {
        return Ok(BoardConfig::default());
    };
    let json = fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?;
    BoardConfig::from_json_str(&json).with_context(|| format!("Failed to parse {path}"))
}

fn seeded_engine(config: BoardConfig) -> Result<BoardEngine> {
    let mut engine = BoardEngine::new(config).context("Board refused to start")?;
    engine.queue_commands(std::iter::repeat(BoardCommand::SpawnRandomVPong).take(STARTING_VPONGS));
    Ok(engine)
}

/// Run the board on its timed loop until `ticks` update passes have been drawn.
fn run_live(config: BoardConfig, ticks: u64) -> Result<()> {
    let engine = seeded_engine(config)?;
    let state = AppState::new();
    let (drawn_tx, drawn_rx) = mpsc::channel();

    state.start(engine, move |snapshot| {
        let painted = snapshot
            .squares
            .iter()
            .filter(|sq| !sq.content.is_empty())
            .count();
        tracing::debug!(tick = snapshot.time.tick, painted, "redraw");
        let _ = drawn_tx.send(snapshot.time.tick);
    })?;

    while drawn_rx.recv().context("Board loop stopped early")? < ticks {}
    state.stop()?;

    if let Some(snapshot) = state.latest_snapshot() {
        let painted = snapshot
            .squares
            .iter()
            .filter(|sq| !sq.content.is_empty())
            .count();
        println!(
            "{} ticks, {} objects, {painted}/{} squares painted",
            snapshot.time.tick,
            snapshot.objects.len(),
            snapshot.squares.len()
        );
    }
    Ok(())
}

/// Drive the engine directly for `ticks` passes and save the resulting pattern.
fn run_export(config: BoardConfig, ticks: u64, output: &Path) -> Result<()> {
    let mut engine = seeded_engine(config)?;
    let mut snapshot = engine.snapshot();
    for _ in 0..ticks {
        snapshot = engine.tick();
    }
    export::export_snapshot(output, &snapshot)?;
    println!("Exported tick {} to {}", snapshot.time.tick, output.display());
    Ok(())
}
