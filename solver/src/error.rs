use advent_graph::error::{GridError, InputError, MathError};
use thiserror::Error;

/// Everything that can stop a day from producing an answer.
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("no solution for day {0}")]
    UnknownDay(u8),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Math(#[from] MathError),
    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },
    #[error("no path from start to finish")]
    NoPath,
    #[error("unsupported input: {0}")]
    Unsupported(&'static str),
    #[error("cutting three edges left {0} components, expected 2")]
    NoCut(usize),
    #[error("a worker thread panicked")]
    WorkerPanicked,
}
