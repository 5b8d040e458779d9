use orbital_nexus::{Scenario, ScenarioConfig, Simulation};
use orbital_nexus::{analysis_snapshot, barycenter, kinetic_energy, total_momentum};
use orbital_nexus::{bench_run, bench_step};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file, looked up under `scenarios/` unless it is an existing path
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Number of steps to run
    #[arg(long, default_value_t = 1000)]
    steps: u64,

    /// Log diagnostics every N steps (0 = only at start and end)
    #[arg(long, default_value_t = 0)]
    report_every: u64,

    /// Write the final state as a scenario YAML
    #[arg(long)]
    output: Option<PathBuf>,

    /// Seed for ids and colors filled in for bodies that lack them
    #[arg(long)]
    seed: Option<u64>,

    /// Time the stepper instead of running a scenario
    #[arg(long)]
    bench: bool,
}

fn scenario_path(file_name: &str) -> PathBuf {
    let direct = PathBuf::from(file_name);
    if direct.exists() {
        return direct;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

fn log_diagnostics(label: &str, sim: &Simulation) {
    let bodies = sim.bodies();
    let p = total_momentum(bodies);
    info!(
        "{label}: t = {:.2}, bodies = {}, momentum = ({:.6}, {:.6}), kinetic = {:.4}",
        sim.system().t,
        bodies.len(),
        p.x,
        p.y,
        kinetic_energy(bodies)
    );
    if let Some(c) = barycenter(bodies) {
        info!("{label}: barycenter = ({:.3}, {:.3})", c.x, c.y);
    }
    for report in analysis_snapshot(bodies) {
        info!("  {report}");
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.bench {
        bench_step();
        bench_run(200, 100);
        return Ok(());
    }

    let path = scenario_path(&args.file_name);
    let cfg = ScenarioConfig::from_path(&path)
        .with_context(|| format!("failed to load scenario {}", path.display()))?;

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    info!("loaded {} (seed {seed})", path.display());
    let mut rng = StdRng::seed_from_u64(seed);

    let scenario = Scenario::build_scenario(&cfg, &mut rng)
        .with_context(|| format!("invalid scenario {}", path.display()))?;
    let mut sim = scenario.into_simulation();

    log_diagnostics("start", &sim);

    if args.report_every > 0 {
        let mut remaining = args.steps;
        while remaining > 0 {
            let chunk = remaining.min(args.report_every);
            sim.run(chunk);
            remaining -= chunk;
            log_diagnostics(&format!("step {}", sim.steps()), &sim);
        }
    } else {
        sim.run(args.steps);
        log_diagnostics("end", &sim);
    }

    if let Some(out) = args.output {
        let yaml = ScenarioConfig::from_state(sim.bodies(), sim.config()).to_yaml_string()?;
        fs::write(&out, yaml).with_context(|| format!("failed to write {}", out.display()))?;
        info!("wrote final state to {}", out.display());
    }

    Ok(())
}
