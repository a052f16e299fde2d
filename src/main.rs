//! Headless driver: advances the arena at the caller's pace and reports what happened.

use clap::{Parser, Subcommand};
use rayon::prelude::*;
use snake_arena::constants::{DEFAULT_REPORT_INTERVAL, TICKS_PER_SECOND};
use snake_arena::{SimulationConfig, World, WorldError};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "snake-arena")]
#[command(version)]
#[command(about = "Autonomous snakes competing for food on a wraparound plane")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one simulation
    Run {
        /// Configuration file (YAML)
        #[arg(short, long, default_value = "snake-arena.yaml")]
        config: PathBuf,

        /// Number of ticks to simulate
        #[arg(short, long, default_value = "3600")]
        ticks: u64,

        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,

        /// Ticks between progress reports
        #[arg(short, long, default_value_t = DEFAULT_REPORT_INTERVAL)]
        report_interval: u64,

        /// Write the final snapshot (YAML) to this path
        #[arg(long)]
        snapshot: Option<PathBuf>,
    },

    /// Run several independently seeded worlds side by side
    Batch {
        /// Configuration file (YAML)
        #[arg(short, long, default_value = "snake-arena.yaml")]
        config: PathBuf,

        /// Number of ticks per world
        #[arg(short, long, default_value = "3600")]
        ticks: u64,

        /// Number of worlds
        #[arg(short, long, default_value = "8")]
        runs: u64,

        /// Seed of the first world; the others follow sequentially
        #[arg(long, default_value = "1")]
        seed: u64,
    },

    /// Generate default configuration file
    Init {
        /// Output path
        #[arg(short, long, default_value = "snake-arena.yaml")]
        output: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            ticks,
            seed,
            report_interval,
            snapshot,
        } => run_simulation(&config, ticks, seed, report_interval, snapshot),
        Commands::Batch {
            config,
            ticks,
            runs,
            seed,
        } => run_batch(&config, ticks, runs, seed),
        Commands::Init { output } => generate_config(&output),
    }
}

fn load_config(path: &Path) -> Result<SimulationConfig, Box<dyn std::error::Error>> {
    if path.exists() {
        log::info!("Loading config from {}", path.display());
        Ok(SimulationConfig::from_file(path)?)
    } else {
        log::info!("{} not found, using default configuration", path.display());
        Ok(SimulationConfig::default())
    }
}

fn run_simulation(
    config_path: &Path,
    ticks: u64,
    seed: Option<u64>,
    report_interval: u64,
    snapshot_path: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    let mut world = match seed {
        Some(seed) => {
            log::info!("Using seed {seed}");
            World::new_with_seed(config, seed)?
        }
        None => World::new(config)?,
    };
    if let Some(seed) = world.seed() {
        log::debug!("World seeded with {seed}");
    }
    log::info!(
        "Arena {}x{}, {} snakes, {} food",
        world.arena.width,
        world.arena.height,
        world.agents.len(),
        world.food.len()
    );

    let started = Instant::now();
    let (mut deaths, mut eaten) = (0usize, 0usize);
    for _ in 0..ticks {
        let events = world.step();
        deaths += events.deaths.len();
        eaten += events.food_eaten;

        if report_interval > 0 && events.tick % report_interval == 0 {
            log::info!(
                "tick {:>6} | alive {}/{} | food {:>4} | queued {:>4} | eaten {} | deaths {}",
                events.tick,
                world.alive_count(),
                world.agents.len(),
                world.food.len(),
                world.respawn_queue.len(),
                eaten,
                deaths
            );
        }
    }
    let elapsed = started.elapsed().as_secs_f64();
    log::info!(
        "Finished {ticks} ticks in {elapsed:.2}s ({:.0} ticks/s)",
        ticks as f64 / elapsed.max(1e-9)
    );

    let snapshot = world.snapshot();
    println!("Scoreboard");
    for entry in snapshot.scoreboard() {
        let status = if entry.alive { "alive" } else { "dead " };
        println!(
            "  {status} {:<8} {:>7.1}s  len {}",
            entry.name, entry.alive_seconds, entry.length
        );
    }
    println!(
        "Food: {}  Potential: {}",
        snapshot.food_count(),
        snapshot.respawn_queue_len
    );

    if let Some(path) = snapshot_path {
        std::fs::write(&path, serde_yaml::to_string(&snapshot)?)?;
        log::info!("Snapshot written to {}", path.display());
    }
    Ok(())
}

struct RunSummary {
    seed: u64,
    deaths: usize,
    eaten: usize,
    longest_body: usize,
    final_food: usize,
}

fn simulate_seed(config: SimulationConfig, ticks: u64, seed: u64) -> Result<RunSummary, WorldError> {
    let mut world = World::new_with_seed(config, seed)?;
    let mut summary = RunSummary {
        seed,
        deaths: 0,
        eaten: 0,
        longest_body: 0,
        final_food: 0,
    };
    for _ in 0..ticks {
        let events = world.step();
        summary.deaths += events.deaths.len();
        summary.eaten += events.food_eaten;
        let longest = world.agents.iter().map(|agent| agent.body.len()).max();
        summary.longest_body = summary.longest_body.max(longest.unwrap_or(0));
    }
    summary.final_food = world.food.len();
    Ok(summary)
}

fn run_batch(
    config_path: &Path,
    ticks: u64,
    runs: u64,
    first_seed: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    log::info!("Running {runs} worlds of {ticks} ticks");

    // one world per rayon task; each world still steps on a single thread
    let summaries = (0..runs)
        .into_par_iter()
        .map(|offset| simulate_seed(config.clone(), ticks, first_seed + offset))
        .collect::<Result<Vec<_>, _>>()?;

    println!("{:>8} {:>8} {:>8} {:>8} {:>8}", "seed", "deaths", "eaten", "longest", "food");
    for summary in &summaries {
        println!(
            "{:>8} {:>8} {:>8} {:>8} {:>8}",
            summary.seed, summary.deaths, summary.eaten, summary.longest_body, summary.final_food
        );
    }
    let runs = summaries.len().max(1) as f32;
    let minutes = ticks as f32 / TICKS_PER_SECOND / 60.0;
    let mean_deaths = summaries.iter().map(|s| s.deaths).sum::<usize>() as f32 / runs;
    println!(
        "mean deaths {:.1} ({:.2}/simulated minute)",
        mean_deaths,
        mean_deaths / minutes.max(f32::EPSILON)
    );
    Ok(())
}

fn generate_config(output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    SimulationConfig::default().save(output)?;
    println!("Default configuration written to {}", output.display());
    Ok(())
}
