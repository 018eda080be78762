use clap::Parser;
use nqueens_solver::dispatcher::{DispatchConfig, Dispatcher};
use nqueens_solver::utils::{board_size, pick_solution};
use nqueens_solver::SolveError;
use std::process;
use std::time::Instant;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Board size N
    #[clap(short = 'n', long, allow_negative_numbers = true)]
    size: i64,

    /// Number of worker threads (defaults to the available parallelism)
    #[clap(short, long)]
    threads: Option<usize>,

    /// Print the first K solutions as boards
    #[clap(long, default_value_t = 0)]
    show: usize,

    /// Print one solution chosen at random with this seed
    #[clap(long)]
    seed: Option<u64>,
}

fn run(args: &Args) -> Result<(), SolveError> {
    let n = board_size(args.size)?;
    let config = DispatchConfig::default().with_workers_option(args.threads);
    let dispatcher = Dispatcher::new(config);

    println!(
        "Solving {}x{} with {} worker(s)...\n",
        n,
        n,
        dispatcher.config().workers
    );
    let start = Instant::now();
    let report = dispatcher.solve_with_report(n)?;
    let elapsed = start.elapsed();

    let mut solutions = report.solutions;
    solutions.sort();

    println!("Found {} solutions in {:.3?}", solutions.len(), elapsed);
    for partition in &report.partitions {
        println!(
            "  Row 0 at column {:<3}: {} solutions",
            partition.start_col, partition.solutions
        );
    }
    println!();

    for (i, solution) in solutions.iter().take(args.show).enumerate() {
        println!("Solution {} {:?}:\n{}\n", i + 1, solution.columns(), solution);
    }

    if let Some(seed) = args.seed {
        match pick_solution(&solutions, seed) {
            Some(solution) => println!(
                "Random pick (seed {}) {:?}:\n{}\n",
                seed,
                solution.columns(),
                solution
            ),
            None => println!("No solution to pick from."),
        }
    }

    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
