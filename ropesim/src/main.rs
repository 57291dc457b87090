use ropesim::{ScenarioConfig, Scenario};
use ropesim::{run_2d, run_headless};
use ropesim::{bench_substeps, bench_spring_forces};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Damped mass-spring rope under gravity")]
struct Args {
    /// Scenario file, either a path or a name under `scenarios/`
    #[arg(short, long, default_value = "rope.yaml")]
    file_name: String,

    /// Run without a window
    #[arg(long)]
    headless: bool,

    /// Frames to simulate in headless mode
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Run the benchmarks instead of a scenario
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

// Bevy installs its own subscriber through LogPlugin, so only the
// window-less modes set one up here
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        init_tracing();
        bench_substeps();
        bench_spring_forces();
        return Ok(());
    }

    if args.headless {
        init_tracing();
    }

    let path = scenario_path(&args.file_name);
    let scenario_cfg = ScenarioConfig::from_path(&path)
        .with_context(|| format!("failed to load scenario {}", path.display()))?;
    let mut scenario = Scenario::build_scenario(scenario_cfg)?;

    if args.headless {
        run_headless(&mut scenario, args.frames);
    } else {
        run_2d(scenario);
    }

    Ok(())
}
