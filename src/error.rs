//! Errors for malformed puzzle input.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Reasons a character grid may fail to parse.
#[derive(Debug, Error)]
pub enum GridError {
    /// The input held no rows.
    #[error("grid is empty")]
    Empty,
    /// A row differs in length from the first row.
    #[error("row {line} has {found} cells, expected {expected}")]
    Ragged {
        /// 1-based row number.
        line: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of this row.
        found: usize,
    },
    /// A digit grid held something other than `0`-`9`.
    #[error("'{ch}' at line {line}, col {col} is not a digit")]
    NotADigit {
        /// The offending character.
        ch: char,
        /// 1-based row number.
        line: usize,
        /// 1-based column number.
        col: usize,
    },
    /// The grid could not be laid out as an array.
    #[error(transparent)]
    Shape(#[from] ndarray::ShapeError),
}

/// Reasons reading or walking puzzle input may fail.
#[derive(Debug, Error)]
pub enum InputError {
    /// The input file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// The file that was asked for.
        path: PathBuf,
        /// Why reading it failed.
        source: io::Error,
    },
    /// Reading from a stream failed partway.
    #[error("error reading input: {0}")]
    Io(#[from] io::Error),
    /// The per-line callback rejected a line.
    #[error("error on line {line}: {source}")]
    Line {
        /// 1-based line number.
        line: usize,
        /// What the callback returned.
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Reasons an integer computation may have no answer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MathError {
    /// Interpolation needs matching, non-empty sample lists.
    #[error("expected matching non-empty samples, got {xs} x values and {ys} y values")]
    SampleMismatch {
        /// Number of x values.
        xs: usize,
        /// Number of y values.
        ys: usize,
    },
    /// Two samples share an x value.
    #[error("duplicate sample at x = {0}")]
    DuplicateSample(i64),
    /// The interpolated value is not an integer, or does not fit in an `i64`.
    #[error("interpolation does not produce an integer")]
    NotIntegral,
}
