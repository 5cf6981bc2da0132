//! farmers-raiders — batch runner for the spatial iterated prisoner's
//! dilemma.
//!
//! Runs the reference population (50 farmers, 50 reactive agents, 100
//! raiders) or a JSON scenario several times with consecutive seeds.  Each
//! run writes `agent_snapshots.csv` and `step_summaries.csv` to
//! `<out>/run_<i>/` and ends with a per-kind summary table.

mod scenario;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use ipd_core::Step;
use ipd_output::{CsvWriter, OutputWriter, SimOutputObserver};
use ipd_sim::{AgentView, Ledger, Sim, SimBuilder, SimObserver, StepReport};
use ipd_strategy::StrategyKind;

use scenario::Scenario;

#[derive(Parser)]
#[command(name = "farmers-raiders")]
#[command(version, about = "Spatial iterated prisoner's dilemma: farmers vs raiders", long_about = None)]
struct Cli {
    /// Number of independent runs
    #[arg(short, long)]
    runs: Option<u32>,

    /// Steps per run
    #[arg(short, long)]
    steps: Option<u64>,

    /// Seed of run 0; run i uses seed + i
    #[arg(long)]
    seed: Option<u64>,

    /// JSON scenario file (config, cohorts, runs)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, default_value = "output/farmers-raiders")]
    out: PathBuf,

    /// Write output.db instead of CSV files
    #[cfg(feature = "sqlite")]
    #[arg(long)]
    sqlite: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

// ── Progress observer ─────────────────────────────────────────────────────────

/// Logs "run - step" progress and counts rows handed to the writer.
struct ProgressObserver<W: OutputWriter> {
    inner:         SimOutputObserver<W>,
    run:           u32,
    snapshot_rows: usize,
    summary_rows:  usize,
}

impl<W: OutputWriter> ProgressObserver<W> {
    fn new(inner: SimOutputObserver<W>, run: u32) -> Self {
        Self { inner, run, snapshot_rows: 0, summary_rows: 0 }
    }
}

impl<W: OutputWriter> SimObserver for ProgressObserver<W> {
    fn on_step_start(&mut self, step: Step) {
        debug!("{} - {}", self.run, step.0);
    }

    fn on_step_end(&mut self, step: Step, report: &StepReport, ledger: &Ledger) {
        self.summary_rows += StrategyKind::COUNT;
        self.inner.on_step_end(step, report, ledger);
    }

    fn on_snapshot(&mut self, step: Step, agents: &[AgentView], ledger: &Ledger) {
        self.snapshot_rows += agents.len();
        self.inner.on_snapshot(step, agents, ledger);
    }

    fn on_sim_end(&mut self, final_step: Step, ledger: &Ledger) {
        self.inner.on_sim_end(final_step, ledger);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut scenario = match &cli.config {
        Some(path) => Scenario::load(path)?,
        None       => Scenario::default(),
    };
    if let Some(runs) = cli.runs {
        scenario.runs = runs;
    }
    if let Some(steps) = cli.steps {
        scenario.config.total_steps = steps;
    }
    if let Some(seed) = cli.seed {
        scenario.config.seed = seed;
    }

    info!(
        runs = scenario.runs,
        steps = scenario.config.total_steps,
        seed = scenario.config.seed,
        out = %cli.out.display(),
        "farmers-raiders starting"
    );

    for run in 0..scenario.runs {
        run_once(&scenario, run, &cli)?;
    }
    Ok(())
}

fn run_once(scenario: &Scenario, run: u32, cli: &Cli) -> Result<()> {
    let mut config = scenario.config.clone();
    config.seed = config.seed.wrapping_add(u64::from(run));

    let mut sim = SimBuilder::new(config)
        .cohorts(scenario.cohorts.iter().copied())
        .build()?;

    let dir = cli.out.join(format!("run_{run}"));

    #[cfg(feature = "sqlite")]
    if cli.sqlite {
        let writer = ipd_output::SqliteWriter::new(&dir)?;
        return drive(&mut sim, writer, run, &dir);
    }

    let writer = CsvWriter::new(&dir)?;
    drive(&mut sim, writer, run, &dir)
}

fn drive<W: OutputWriter>(sim: &mut Sim, writer: W, run: u32, dir: &Path) -> Result<()> {
    let mut obs = ProgressObserver::new(SimOutputObserver::new(writer, run), run);

    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        warn!(run, error = %e, "output incomplete");
    }

    println!();
    println!(
        "Run {run} (seed {}) complete in {:.3} s → {}",
        sim.config.seed,
        elapsed.as_secs_f64(),
        dir.display()
    );
    println!("  snapshot rows : {}", obs.snapshot_rows);
    println!("  summary rows  : {}", obs.summary_rows);
    print_summary(sim);
    Ok(())
}

fn print_summary(sim: &Sim) {
    let ledger = sim.ledger();
    let population = ledger.latest_population();
    let scores = ledger.latest_cumulative_score();

    println!();
    println!("{:<10} {:>8} {:>8} {:>14}", "Kind", "Start", "End", "Total score");
    println!("{}", "-".repeat(43));
    for kind in StrategyKind::ALL {
        let start = ledger.population(kind).first().copied().unwrap_or(0);
        if start == 0 && population[kind] == 0 {
            continue;
        }
        println!(
            "{:<10} {:>8} {:>8} {:>14.1}",
            kind.display_name(),
            start,
            population[kind],
            scores[kind],
        );
    }
    if let Some(report) = sim.last_report() {
        println!(
            "Last step: {} encounters, {} births, {} deaths, {} cooperative-leaning",
            report.interactions, report.births, report.deaths, report.farmers
        );
    }
}
