use clap::Parser;
use log::warn;
use nqueens_solver::dispatcher::{DispatchConfig, Dispatcher};
use nqueens_solver::solver::solve_sequential;
use std::process;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Smallest board size to time
    #[clap(long, default_value_t = 4)]
    from: usize,

    /// Largest board size to time
    #[clap(long, default_value_t = 11)]
    to: usize,

    /// Number of worker threads (defaults to the available parallelism)
    #[clap(short, long)]
    threads: Option<usize>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let dispatcher = Dispatcher::new(DispatchConfig::default().with_workers_option(args.threads));
    println!(
        "Timing sizes {}..={} with {} worker(s)",
        args.from,
        args.to,
        dispatcher.config().workers
    );

    let mut total_sequential = Duration::ZERO;
    let mut total_parallel = Duration::ZERO;

    for n in args.from..=args.to {
        let start = Instant::now();
        let sequential_count = solve_sequential(n).len();
        let sequential_time = start.elapsed();

        let start = Instant::now();
        let parallel_count = match dispatcher.solve(n) {
            Ok(solutions) => solutions.len(),
            Err(e) => {
                eprintln!("Error: n = {}: {}", n, e);
                process::exit(1);
            }
        };
        let parallel_time = start.elapsed();

        if sequential_count != parallel_count {
            eprintln!(
                "Error: n = {}: sequential found {} solutions, parallel found {}",
                n, sequential_count, parallel_count
            );
            process::exit(1);
        }
        if parallel_time > sequential_time * 2 && n >= 10 {
            warn!("n = {}: parallel run slower than sequential", n);
        }

        total_sequential += sequential_time;
        total_parallel += parallel_time;
        let speedup = sequential_time.as_secs_f64() / parallel_time.as_secs_f64().max(f64::EPSILON);
        println!(
            "  N = {:<3} Solutions: {:<8} Sequential: {:>10.3?} Parallel: {:>10.3?} Speedup: {:.2}x",
            n, parallel_count, sequential_time, parallel_time, speedup
        );
    }

    println!("\n--- Benchmark Complete ---");
    println!("Total sequential: {:.3?}", total_sequential);
    println!("Total parallel:   {:.3?}", total_parallel);
}
