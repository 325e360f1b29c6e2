//! Command-line front end for the N-Queens min-conflicts solver.
//!
//! Solves the N-Queens problem for the given board size and prints the
//! placement with the search statistics.
//!
//! # Usage
//!
//! Solve the default 5-Queens problem with a seed taken from the clock:
//!
//! ```sh
//! nqueens
//! ```
//!
//! Reproduce a run and print the raw row list instead of the board:
//!
//! ```sh
//! nqueens 100 --seed 42 --format rows
//! ```
//!
//! Give up after one second, or after 50 restarts:
//!
//! ```sh
//! nqueens 10000 --timeout-ms 1000 --max-restarts 50
//! ```
//!
//! Run 64 independent searches in parallel (seeds `seed`, `seed + 1`, ...):
//!
//! ```sh
//! nqueens 200 --seed 7 --trials 64
//! ```
//!
//! Check a placement given as one row per column:
//!
//! ```sh
//! nqueens --check "1, 3, 0, 2"
//! ```
//!
//! Set `RUST_LOG=debug` to log restarts, or `RUST_LOG=trace` to log every
//! move.

use std::{
    iter, process,
    time::{Duration, Instant, SystemTime, UNIX_EPOCH},
};

use clap::{Parser, ValueEnum};
use nqueens_core::Placement;
use nqueens_solver::{
    DEFAULT_STALL_FACTOR, MinConflictsSolver, SearchStats, SolverConfig, SolverError,
};
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One line per row, `*` for a queen and `_` for an empty cell.
    Board,
    /// The row of each column's queen, as a list.
    Rows,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board size (number of queens).
    #[arg(value_name = "SIZE", default_value_t = 5)]
    size: usize,

    /// Seed for the random generator. Defaults to the current time.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Iterations per queen allowed between restarts.
    #[arg(long, value_name = "FACTOR", default_value_t = DEFAULT_STALL_FACTOR)]
    stall_factor: usize,

    /// Give up once this many restarts have been made.
    #[arg(long, value_name = "COUNT")]
    max_restarts: Option<usize>,

    /// Give up once this many iterations have been made.
    #[arg(long, value_name = "COUNT")]
    max_iterations: Option<usize>,

    /// Give up after this many milliseconds of searching.
    #[arg(long, value_name = "MILLIS")]
    timeout_ms: Option<u64>,

    /// Number of independent searches to run in parallel.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    trials: usize,

    /// How to print the placement.
    #[arg(long, value_name = "FORMAT", value_enum, default_value_t = OutputFormat::Board)]
    format: OutputFormat,

    /// Check the given placement (one row per column, comma or space
    /// separated) instead of solving.
    #[arg(long, value_name = "ROWS", conflicts_with_all = ["seed", "trials", "timeout_ms"])]
    check: Option<Placement>,
}

impl Args {
    fn solver_config(&self) -> SolverConfig {
        let mut config = SolverConfig::default().with_stall_factor(self.stall_factor);
        if let Some(max) = self.max_restarts {
            config = config.with_max_restarts(max);
        }
        if let Some(max) = self.max_iterations {
            config = config.with_max_iterations(max);
        }
        config
    }

    fn deadline(&self) -> Option<Instant> {
        self.timeout_ms
            .map(|ms| Instant::now() + Duration::from_millis(ms))
    }
}

/// Outcome of one search.
#[derive(Debug)]
struct Trial {
    seed: u64,
    result: Result<(Placement, SearchStats), SolverError>,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();

    if let Some(placement) = &args.check {
        let is_solution = print_check(placement, args.format);
        if !is_solution {
            process::exit(1);
        }
        return;
    }

    if let Err(err) = nqueens_solver::check_size(args.size) {
        eprintln!("Error: {err}");
        process::exit(2);
    }
    if args.trials == 0 {
        eprintln!("--trials must be at least 1.");
        process::exit(2);
    }

    let seed = args.seed.unwrap_or_else(seed_from_clock);
    log::info!("solving {0}x{0} board with seed {seed}", args.size);
    let config = args.solver_config();
    let deadline = args.deadline();

    if args.trials == 1 {
        let trial = run_trial(args.size, seed, config, deadline);
        match &trial.result {
            Ok((placement, stats)) => print_solution(trial.seed, placement, stats, args.format),
            Err(err) => {
                eprintln!("Seed: {}", trial.seed);
                eprintln!("Error: {err}");
                process::exit(1);
            }
        }
        return;
    }

    let seeds = iter::successors(Some(seed), |seed| Some(seed.wrapping_add(1)))
        .take(args.trials)
        .collect::<Vec<_>>();
    let trials = seeds
        .into_par_iter()
        .map(|seed| run_trial(args.size, seed, config, deadline))
        .collect::<Vec<_>>();

    let solved = print_trials(&trials, args.format);
    if solved == 0 {
        process::exit(1);
    }
}

fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs() ^ u64::from(elapsed.subsec_nanos()))
}

fn run_trial(size: usize, seed: u64, config: SolverConfig, deadline: Option<Instant>) -> Trial {
    let result = MinConflictsSolver::with_seed(size, seed, config).and_then(|mut solver| {
        let placement =
            solver.solve_until(|_| deadline.is_none_or(|deadline| Instant::now() < deadline))?;
        Ok((placement, *solver.stats()))
    });
    if let Err(err) = &result {
        log::debug!("seed {seed}: {err}");
    }
    Trial { seed, result }
}

fn print_placement(placement: &Placement, format: OutputFormat) {
    match format {
        OutputFormat::Board => {
            for line in placement.render().lines() {
                println!("  {line}");
            }
        }
        OutputFormat::Rows => println!("  {:?}", placement.rows()),
    }
}

fn print_stats(stats: &SearchStats) {
    println!("  iterations: {}", stats.iterations());
    println!("  moves: {}", stats.moves());
    println!(
        "  restarts: {} (stalled: {}, no candidate: {})",
        stats.restarts(),
        stats.stall_restarts(),
        stats.dead_end_restarts()
    );
}

fn print_solution(seed: u64, placement: &Placement, stats: &SearchStats, format: OutputFormat) {
    println!("Seed:");
    println!("  {seed}");
    println!();

    println!("Solution:");
    print_placement(placement, format);
    println!("  attacking pairs: {}", placement.attacking_pairs());
    println!();

    println!("Stats:");
    print_stats(stats);
}

/// Prints the summary of several trials and returns how many were solved.
fn print_trials(trials: &[Trial], format: OutputFormat) -> usize {
    let mut total = SearchStats::default();
    let mut solved = 0;
    let mut first = None;
    for trial in trials {
        match &trial.result {
            Ok((placement, stats)) => {
                total.merge(stats);
                solved += 1;
                if first.is_none() {
                    first = Some((trial.seed, placement));
                }
            }
            Err(err) => eprintln!("Seed {}: {err}", trial.seed),
        }
    }

    if let (Some(head), Some(tail)) = (trials.first(), trials.last()) {
        println!("Seeds:");
        println!("  {}..={}", head.seed, tail.seed);
        println!();
    }

    println!("Trials:");
    println!("  solved: {solved} / {}", trials.len());
    println!();

    if let Some((seed, placement)) = first {
        println!("Solution (seed {seed}):");
        print_placement(placement, format);
        println!();
    }

    println!("Stats (solved trials):");
    print_stats(&total);
    if solved > 0 {
        println!("  mean iterations: {}", total.iterations() / solved);
    }

    solved
}

/// Prints the verdict on a user-supplied placement and returns whether it is
/// a solution.
fn print_check(placement: &Placement, format: OutputFormat) -> bool {
    let pairs = placement.attacking_pairs();

    println!("Placement:");
    print_placement(placement, format);
    println!();

    println!("Check:");
    println!("  size: {}", placement.size());
    println!("  attacking pairs: {pairs}");
    println!("  solution: {}", if pairs == 0 { "yes" } else { "no" });

    pairs == 0
}
