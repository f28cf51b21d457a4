//! Solve a large system of simultaneous equations.
//!
//! Reads a system definition file (as produced by `create_system`), runs the
//! elimination engine, and prints the solution vector along with the solve
//! time.
//!
//! Usage:
//!   cargo run --release --bin solve_system -- 100x100.dat
//!   cargo run --release --bin solve_system -- --parallel --threads 8 1000x1000.dat

use clap::Parser;
use gauss_solver::{GaussConfig, LinearSystem, gauss_solve};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(
    name = "solve_system",
    about = "Solve a dense linear system with Gaussian elimination and partial pivoting"
)]
struct Cli {
    /// Path to the system definition file
    input: PathBuf,

    /// Treat a pivot with magnitude at or below this value as degenerate
    #[arg(long, default_value_t = gauss_solver::DEFAULT_TOLERANCE)]
    tolerance: f64,

    /// Reduce the rows below each pivot in parallel
    #[arg(long)]
    parallel: bool,

    /// Number of threads for parallel reduction (0 = use all available cores)
    #[arg(long, default_value_t = 0)]
    threads: usize,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if cli.parallel && cli.threads > 0 {
        // Ignore error if global pool already set
        let _ = rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global();
    }

    let system = match LinearSystem::from_path(&cli.input) {
        Ok(system) => system,
        Err(err) => {
            eprintln!("error: cannot load {}: {err}", cli.input.display());
            process::exit(1);
        }
    };

    let config = GaussConfig {
        tolerance: cli.tolerance,
        parallel: cli.parallel,
    };

    match gauss_solve(system.a, system.b, &config) {
        Ok(solution) => {
            println!("\nSolution is");
            for (i, x) in solution.x.iter().enumerate() {
                println!(" x[{i:4}] = {x:9.5}");
            }
            println!(
                "\nExecution time = {} milliseconds",
                solution.elapsed.as_millis()
            );
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}
