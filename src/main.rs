use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use frechet_core::{DiscreteFrechet, FillOrder, FrechetConfig, Polyline};
use frechet_io::{ExperimentName, PolylineReader, ResultWriter};

#[derive(Parser)]
#[command(name = "frechet")]
#[command(about = "Discrete Fréchet distance and optimal coupling between two polylines")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose (debug-level) logging
    #[arg(long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(long, global = true)]
    quiet: bool,
}

/// The two input polylines and engine settings shared by every subcommand.
#[derive(Args, Debug, Clone)]
struct InputArgs {
    /// CSV file with the first polyline (one waypoint per row)
    #[arg(long)]
    p: PathBuf,

    /// CSV file with the second polyline (one waypoint per row)
    #[arg(long)]
    q: PathBuf,

    /// Treat the first CSV row as data instead of a header
    #[arg(long, default_value_t = false)]
    no_headers: bool,

    /// Cost matrix evaluation order: "bottom-up" or "top-down"
    #[arg(long, default_value = "bottom-up")]
    fill_order: String,

    /// Reject inputs whose cost matrix would exceed this many cells
    #[arg(long)]
    max_cells: Option<usize>,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the discrete Fréchet distance only
    Distance {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Compute the distance and the optimal coupling sequence
    Couple {
        #[command(flatten)]
        input: InputArgs,

        /// Report waypoint indices starting at 1 instead of 0
        #[arg(long, default_value_t = false)]
        one_based: bool,

        /// Experiment name for the output artifact (must match [a-zA-Z0-9_-]+)
        #[arg(long)]
        experiment: Option<String>,

        /// Output directory for the artifact, used with --experiment
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,
    },
}

// --- JSON stdout output structs ---

#[derive(Serialize)]
struct DistanceOutput {
    distance: f64,
    p_len: usize,
    q_len: usize,
    dim: usize,
}

#[derive(Serialize)]
struct CoupleOutput {
    distance: f64,
    p_len: usize,
    q_len: usize,
    dim: usize,
    one_based: bool,
    coupling: Vec<StepOutput>,
    artifact: Option<PathBuf>,
}

#[derive(Serialize)]
struct StepOutput {
    p: usize,
    q: usize,
    distance: f64,
}

fn parse_fill_order(s: &str) -> Result<FillOrder> {
    match s {
        "bottom-up" => Ok(FillOrder::BottomUp),
        "top-down" => Ok(FillOrder::TopDown),
        other => anyhow::bail!("unknown fill order: {other} (expected bottom-up or top-down)"),
    }
}

fn build_engine(input: &InputArgs) -> Result<DiscreteFrechet> {
    let mut config = FrechetConfig::new().with_fill_order(parse_fill_order(&input.fill_order)?);
    if let Some(max_cells) = input.max_cells {
        config = config.with_max_cells(max_cells);
    }
    Ok(DiscreteFrechet::with_config(config))
}

fn read_pair(input: &InputArgs) -> Result<(Polyline, Polyline)> {
    let p = PolylineReader::new(&input.p)
        .with_headers(!input.no_headers)
        .read()
        .with_context(|| format!("failed to read first polyline from {}", input.p.display()))?;
    let q = PolylineReader::new(&input.q)
        .with_headers(!input.no_headers)
        .read()
        .with_context(|| format!("failed to read second polyline from {}", input.q.display()))?;
    Ok((p, q))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match (cli.verbose, cli.quiet) {
        (true, _) => "debug",
        (_, true) => "error",
        _ => "info",
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Distance { input } => {
            let engine = build_engine(&input)?;
            let (p, q) = read_pair(&input)?;

            let distance = engine
                .distance(p.as_view(), q.as_view())
                .context("distance computation failed")?;
            info!(%distance, "distance computed");

            let output = DistanceOutput {
                distance: distance.value(),
                p_len: p.len(),
                q_len: q.len(),
                dim: p.dim(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }

        Command::Couple {
            input,
            one_based,
            experiment,
            output_dir,
        } => {
            let engine = build_engine(&input)?;
            // Validate the name before doing any work.
            let experiment_name = experiment.map(ExperimentName::new).transpose()?;
            let (p, q) = read_pair(&input)?;

            let (distance, coupling) = engine
                .distance_and_coupling(p.as_view(), q.as_view())
                .context("coupling computation failed")?;
            info!(%distance, steps = coupling.len(), "coupling computed");

            let artifact = match experiment_name {
                Some(name) => {
                    let writer = ResultWriter::new(&output_dir, name)?;
                    Some(writer.write_coupling(p.as_view(), q.as_view(), distance, &coupling)?)
                }
                None => None,
            };

            let offset = usize::from(one_based);
            let output = CoupleOutput {
                distance: distance.value(),
                p_len: p.len(),
                q_len: q.len(),
                dim: p.dim(),
                one_based,
                coupling: coupling
                    .steps()
                    .iter()
                    .zip(coupling.step_distances(p.as_view(), q.as_view()))
                    .map(|(s, d)| StepOutput {
                        p: s.p + offset,
                        q: s.q + offset,
                        distance: d,
                    })
                    .collect(),
                artifact,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
