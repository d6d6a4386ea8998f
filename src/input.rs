//! Reading puzzle input.

use std::fs;
use std::io::BufRead;
use std::num::ParseIntError;
use std::path::Path;

use crate::error::InputError;

/// Read a whole puzzle input file.
pub fn read_input(path: impl AsRef<Path>) -> Result<String, InputError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| InputError::Read { path: path.to_path_buf(), source })
}

/// Feed every line of `reader` to `f`, stopping at the first line it rejects.
///
/// The error carries the 1-based number of the offending line.
pub fn for_each_line<R, F, E>(reader: R, mut f: F) -> Result<(), InputError>
where
    R: BufRead,
    F: FnMut(&str) -> Result<(), E>,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        f(&line).map_err(|err| InputError::Line { line: idx + 1, source: err.into() })?;
    }

    Ok(())
}

/// Parse whitespace-separated integers.
pub fn parse_ints(s: &str) -> Result<Vec<i64>, ParseIntError> {
    s.split_whitespace().map(str::parse).collect()
}
