use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use advent_graph::input::read_input;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::SolverError;

mod days;
mod error;

#[derive(Parser)]
#[command(name = "solver", about = "Run one day's puzzle solution against its input", version)]
struct Cli {
    /// Puzzle day to run
    day: u8,
    /// Input file; defaults to input/day-NN.txt
    #[arg(long, short)]
    input: Option<PathBuf>,
    /// Run only this part
    #[arg(long, short, value_parser = clap::value_parser!(u8).range(1..=2))]
    part: Option<u8>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), SolverError> {
    let day = days::lookup(cli.day)?;
    let path = cli.input.clone()
        .unwrap_or_else(|| PathBuf::from(format!("input/day-{:02}.txt", cli.day)));
    let input = read_input(&path)?;
    info!(day = cli.day, path = %path.display(), "loaded input");

    let wants = |part: u8| cli.part.map_or(true, |p| p == part);

    if wants(1) {
        let t = Instant::now();
        let answer = (day.part_one)(&input)?;
        info!(elapsed = ?t.elapsed(), "part one done");
        println!("Part one solution: {answer}");
    }

    if wants(2) {
        match day.part_two {
            Some(part_two) => {
                let t = Instant::now();
                let answer = part_two(&input)?;
                info!(elapsed = ?t.elapsed(), "part two done");
                println!("Part two solution: {answer}");
            }
            None => info!(day = cli.day, "day has no second part"),
        }
    }

    Ok(())
}
