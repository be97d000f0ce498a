use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use gridknot::diagram::random_knot_diagram_seeded;
use gridknot::extract::extract;
use gridknot::{CromwellMove, PolygonalCurve, RelaxationEngine};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod config;
mod diagram_file;
mod frames;
mod provenance;

use config::{params_json, RelaxConfig};
use diagram_file::{read_diagram, write_diagram};
use frames::{curve_frame, write_frame, FrameRecorder};
use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "cli", version)]
#[command(about = "Grid diagrams to relaxed knot curves")]
struct Cmd {
    /// Log more (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Write the extracted curve of a diagram as CSV or Parquet
    Extract {
        #[arg(long)]
        diagram: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Subdivisions per extracted segment
        #[arg(long, default_value_t = 1)]
        refine: usize,
    },
    /// Relax the curve of a diagram and record its trajectory
    Relax {
        #[arg(long)]
        diagram: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// JSON run configuration; flags below override it
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        steps: Option<usize>,
        /// Record a frame every N steps
        #[arg(long)]
        every: Option<usize>,
        #[arg(long)]
        no_anchors: bool,
        #[arg(long)]
        refine: Option<usize>,
    },
    /// Apply Cromwell moves (e.g. `translate:up`, `stabilize:nw:1:3`)
    Moves {
        #[arg(long)]
        diagram: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(required = true)]
        moves: Vec<String>,
    },
    /// Write a random single-component diagram
    Random {
        #[arg(long)]
        size: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = match cmd.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Extract {
            diagram,
            out,
            refine,
        } => extract_cmd(&diagram, &out, refine),
        Action::Relax {
            diagram,
            out,
            config,
            steps,
            every,
            no_anchors,
            refine,
        } => {
            let mut cfg = match config {
                Some(path) => RelaxConfig::load(path)?,
                None => RelaxConfig::default(),
            };
            cfg.steps = steps.unwrap_or(cfg.steps);
            cfg.record_every = every.unwrap_or(cfg.record_every);
            cfg.refine = refine.unwrap_or(cfg.refine);
            cfg.anchored &= !no_anchors;
            cfg.validate()?;
            relax_cmd(&diagram, &out, &cfg)
        }
        Action::Moves { diagram, out, moves } => moves_cmd(&diagram, &out, &moves).map(|_| ()),
        Action::Random { size, seed, out } => random_cmd(size, seed, &out),
        Action::Report => report(),
    }
}

/// Creates the parent directory of `path` if needed.
pub(crate) fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}

/// Lift flags carried over to a curve refined with `refine` subdivisions:
/// original vertex `k` sits at refined index `k·refine`.
fn refined_lift_flags(lifted: &[bool], refine: usize) -> Vec<bool> {
    let refine = refine.max(1);
    lifted
        .iter()
        .flat_map(|&l| std::iter::once(l).chain(std::iter::repeat(false).take(refine - 1)))
        .collect()
}

fn mean_segment_length(curve: &PolygonalCurve) -> f64 {
    curve.perimeter() / curve.len().max(1) as f64
}

fn extract_cmd(diagram_path: &Path, out: &Path, refine: usize) -> Result<()> {
    let diagram = read_diagram(diagram_path)?;
    let e = extract(&diagram)?;
    let curve = e.curve.refine(refine);
    let lifted = refined_lift_flags(&e.lifted, refine);
    tracing::info!(
        size = diagram.size(),
        crossings = e.crossings.len(),
        vertices = curve.len(),
        "extract"
    );
    let mut df = curve_frame(&curve, &lifted)?;
    write_frame(&mut df, out)?;
    let crossings: Vec<[usize; 2]> = e.crossings.iter().map(|c| [c.row, c.col]).collect();
    let payload = Payload::new(
        "extract",
        json!({
            "size": diagram.size(),
            "refine": refine,
            "crossings": crossings,
            "vertices": curve.len(),
        }),
    )
    .with_input(diagram_path);
    write_sidecar(out, payload)?;
    Ok(())
}

fn relax_cmd(diagram_path: &Path, out: &Path, cfg: &RelaxConfig) -> Result<()> {
    let diagram = read_diagram(diagram_path)?;
    let curve = extract(&diagram)?.curve.refine(cfg.refine);
    let params = cfg.simulation_params(mean_segment_length(&curve));
    let mut engine = RelaxationEngine::new(curve, params)?;
    engine.set_anchored(cfg.anchored);
    tracing::info!(
        vertices = engine.vertex_count(),
        steps = cfg.steps,
        anchored = cfg.anchored,
        d_close = params.d_close,
        "relax start"
    );

    let mut recorder = FrameRecorder::new();
    recorder.record(0, &engine);
    let mut stuck_total = 0usize;
    let mut last_stuck = 0usize;
    for s in 1..=cfg.steps {
        let report = engine.step();
        stuck_total += report.stuck;
        last_stuck = report.stuck;
        if s % cfg.record_every == 0 || s == cfg.steps {
            recorder.record(s, &engine);
        }
    }
    let frames = recorder.frames();
    let mut df = recorder.finish()?;
    write_frame(&mut df, out)?;
    tracing::info!(
        steps = cfg.steps,
        frames,
        stuck = last_stuck,
        stuck_total,
        perimeter = engine.rope().perimeter(),
        "relax"
    );

    let payload = Payload::new(
        "relax",
        json!({
            "config": cfg,
            "simulation": params_json(&params),
            "vertices": engine.vertex_count(),
            "frames": frames,
        }),
    )
    .with_input(diagram_path);
    write_sidecar(out, payload)?;
    Ok(())
}

/// Applies every move in order; rejected moves are logged and skipped.
/// Returns the number of moves that were applied.
fn moves_cmd(diagram_path: &Path, out: &Path, moves: &[String]) -> Result<usize> {
    let parsed = moves
        .iter()
        .map(|m| m.parse::<CromwellMove>())
        .collect::<Result<Vec<_>, _>>()?;
    let mut diagram = read_diagram(diagram_path)?;
    let mut applied = Vec::new();
    for mv in parsed {
        match diagram.apply(mv) {
            Ok(()) => {
                tracing::info!(%mv, size = diagram.size(), "move");
                applied.push(mv.to_string());
            }
            Err(e) => tracing::warn!(%mv, error = %e, "move rejected"),
        }
    }
    write_diagram(out, &diagram)?;
    let payload = Payload::new(
        "moves",
        json!({ "requested": moves, "applied": applied, "size": diagram.size() }),
    )
    .with_input(diagram_path);
    write_sidecar(out, payload)?;
    Ok(applied.len())
}

fn random_cmd(size: usize, seed: u64, out: &Path) -> Result<()> {
    if size < 2 {
        bail!("--size must be at least 2, got {size}");
    }
    let diagram = random_knot_diagram_seeded(size, seed)?;
    tracing::info!(size, seed, "random");
    write_diagram(out, &diagram)?;
    write_sidecar(out, Payload::new("random", json!({ "size": size, "seed": seed })))?;
    Ok(())
}

fn report() -> Result<()> {
    let mut obj = provenance::header();
    obj["params"] = json!({});
    obj["outputs"] = json!([]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
