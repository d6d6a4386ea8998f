//! The puzzle days that run on the graph library.

use crate::error::SolverError;

mod day17;
mod day21;
mod day23;
mod day25;

/// One part of a day: puzzle input in, answer out.
pub type Part = fn(&str) -> Result<i64, SolverError>;

pub struct Day {
    pub part_one: Part,
    pub part_two: Option<Part>,
}

pub fn lookup(day: u8) -> Result<Day, SolverError> {
    match day {
        17 => Ok(Day { part_one: day17::part_one, part_two: Some(day17::part_two) }),
        21 => Ok(Day { part_one: day21::part_one, part_two: Some(day21::part_two) }),
        23 => Ok(Day { part_one: day23::part_one, part_two: Some(day23::part_two) }),
        // the last day only has one puzzle
        25 => Ok(Day { part_one: day25::part_one, part_two: None }),
        _ => Err(SolverError::UnknownDay(day)),
    }
}
