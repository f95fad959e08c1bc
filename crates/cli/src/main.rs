mod provenance;
mod report;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use hullscan::api::{self, Algorithm, Bounds, NoopObserver, PointSet, SampleCfg};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

use provenance::{write_sidecar, Payload};
use report::{HullReport, StepLog};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex hull runner for point files and seeded samples")]
struct Cmd {
    /// Log at debug level
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Args, Clone, Debug)]
struct SampleArgs {
    /// Seed for the point sampler
    #[arg(long, default_value_t = 3)]
    seed: u64,
    /// Number of unique points to draw
    #[arg(long, default_value_t = 10)]
    count: usize,
    /// Sampling box `min_x,max_x,min_y,max_y`; points land strictly inside
    #[arg(long, value_parser = parse_bounds, default_value = "0,20,0,20")]
    bounds: Bounds,
}

impl SampleArgs {
    fn cfg(&self) -> SampleCfg {
        SampleCfg {
            bounds: self.bounds,
            count: self.count,
            seed: self.seed,
        }
    }
}

#[derive(Args, Clone, Debug)]
struct InputArgs {
    /// Point file with one `<x> <y>` pair per line; omit to draw a seeded sample
    #[arg(long)]
    input: Option<PathBuf>,

    #[command(flatten)]
    sample: SampleArgs,
}

#[derive(Subcommand)]
enum Action {
    /// Build one hull and write a JSON report plus provenance sidecar
    Hull {
        #[command(flatten)]
        input: InputArgs,
        /// scan (angle scan) or sweep (gift wrapping)
        #[arg(long, default_value = "scan")]
        algo: Algorithm,
        #[arg(long)]
        out: PathBuf,
        /// Log every construction step
        #[arg(long)]
        steps: bool,
    },
    /// Run both builders and check that they agree
    Compare {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Write a seeded point file
    Sample {
        #[command(flatten)]
        sample: SampleArgs,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Hull {
            input,
            algo,
            out,
            steps,
        } => hull(&input, algo, &out, steps),
        Action::Compare { input } => compare(&input),
        Action::Sample { sample, out } => sample_points(&sample, &out),
        Action::Report => report(),
    }
}

fn parse_bounds(s: &str) -> std::result::Result<Bounds, String> {
    let parts: Vec<i32> = s
        .split(',')
        .map(|t| t.trim().parse::<i32>())
        .collect::<std::result::Result<_, _>>()
        .map_err(|e| format!("bounds must be four integers: {e}"))?;
    let [min_x, max_x, min_y, max_y] = parts[..] else {
        return Err(format!("expected min_x,max_x,min_y,max_y, got {s:?}"));
    };
    if min_x > max_x || min_y > max_y {
        return Err(format!("empty bounds {s:?}"));
    }
    Ok(Bounds {
        min_x,
        max_x,
        min_y,
        max_y,
    })
}

/// Load the point file or draw the sample; returns the set and a short source label.
fn load(input: &InputArgs) -> Result<(PointSet, String)> {
    match &input.input {
        Some(path) => {
            let set = api::load_point_set(path)
                .with_context(|| format!("reading points from {}", path.display()))?;
            tracing::info!(path = %path.display(), unique = set.len(), "loaded point file");
            Ok((set, path.display().to_string()))
        }
        None => {
            let cfg = input.sample.cfg();
            let set = api::sample_point_set(&cfg).context("drawing point sample")?;
            tracing::info!(seed = cfg.seed, count = cfg.count, bounds = %cfg.bounds, "drew sample");
            Ok((set, format!("sample:seed={}", cfg.seed)))
        }
    }
}

fn input_params(input: &InputArgs) -> serde_json::Value {
    match &input.input {
        Some(path) => json!({ "input": path.to_string_lossy() }),
        None => json!({
            "seed": input.sample.seed,
            "count": input.sample.count,
            "bounds": input.sample.bounds.to_string(),
        }),
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}

fn hull(input: &InputArgs, algo: Algorithm, out: &Path, steps: bool) -> Result<()> {
    let (points, source) = load(input)?;
    if let Some(b) = api::bounds(points.points()) {
        tracing::debug!(bounds = %b, "input extent");
    }
    let mut log = StepLog::new(&points, steps);
    let result = api::build_hull(algo, &points, &mut log)
        .with_context(|| format!("building hull with {algo}"))?;
    let step_count = log.steps;
    tracing::info!(
        algo = %algo,
        vertices = result.len(),
        steps = step_count,
        "hull built"
    );

    let report = HullReport::new(algo.to_string(), source, &points, &result, step_count);
    ensure_parent(out)?;
    std::fs::write(out, serde_json::to_vec_pretty(&report)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let mut params = input_params(input);
    params["algo"] = json!(algo.to_string());
    let prov = write_sidecar(out, Payload::new("hull", params))?;
    tracing::info!(out = %out.display(), provenance = %prov.display(), "wrote report");
    Ok(())
}

fn compare(input: &InputArgs) -> Result<()> {
    let (points, source) = load(input)?;
    let scan = api::build_hull(Algorithm::Scan, &points, &mut NoopObserver)
        .context("building hull with scan")?;
    let sweep = api::build_hull(Algorithm::Sweep, &points, &mut NoopObserver)
        .context("building hull with sweep")?;
    let agree = scan.vertex_set(&points) == sweep.vertex_set(&points);
    tracing::info!(
        scan = scan.len(),
        sweep = sweep.len(),
        agree,
        "compared builders"
    );
    let summary = json!({
        "source": source,
        "unique_points": points.len(),
        "scan_vertices": scan.len(),
        "sweep_vertices": sweep.len(),
        "agree": agree,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    if !agree {
        bail!("scan and sweep produced different vertex sets");
    }
    Ok(())
}

fn sample_points(sample: &SampleArgs, out: &Path) -> Result<()> {
    let cfg = sample.cfg();
    let points = cfg.draw().context("drawing point sample")?;
    ensure_parent(out)?;
    api::write_points(out, &points)?;
    let params = json!({
        "seed": cfg.seed,
        "count": cfg.count,
        "bounds": cfg.bounds.to_string(),
    });
    let prov = write_sidecar(out, Payload::new("sample", params))?;
    tracing::info!(out = %out.display(), count = points.len(), provenance = %prov.display(), "wrote sample");
    Ok(())
}

fn report() -> Result<()> {
    let doc = provenance::document(&Payload::new("report", json!({})), &[]);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_flag_parses_four_integers() {
        let b = parse_bounds("-5, 5,0,12").unwrap();
        assert_eq!((b.min_x, b.max_x, b.min_y, b.max_y), (-5, 5, 0, 12));
        assert!(parse_bounds("1,2,3").is_err());
        assert!(parse_bounds("a,b,c,d").is_err());
        assert!(parse_bounds("5,0,0,5").is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cmd::command().debug_assert();
    }
}
