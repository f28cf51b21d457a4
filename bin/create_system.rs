//! Create a random system of linear equations in the definition format
//! accepted by `solve_system`.
//!
//! Usage:
//!   cargo run --release --bin create_system -- 100 > 100x100.dat
//!   cargo run --release --bin create_system -- 100 --seed 42 --output 100x100.dat

use clap::Parser;
use gauss_solver::LinearSystem;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(
    name = "create_system",
    about = "Create a random system of linear equations"
)]
struct Cli {
    /// Number of equations in the generated system
    size: usize,

    /// Random seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Output file (defaults to standard output)
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if cli.size == 0 {
        eprintln!("error: invalid system size: 0");
        process::exit(1);
    }

    let system = LinearSystem::random(cli.size, cli.seed);

    let result = match &cli.output {
        Some(path) => match File::create(path) {
            Ok(file) => {
                let mut writer = BufWriter::new(file);
                system.write(&mut writer).and_then(|_| writer.flush())
            }
            Err(err) => {
                eprintln!("error: cannot create {}: {err}", path.display());
                process::exit(1);
            }
        },
        None => {
            let stdout = io::stdout();
            system.write(&mut stdout.lock())
        }
    };

    if let Err(err) = result {
        eprintln!("error: cannot write system: {err}");
        process::exit(1);
    }
}
