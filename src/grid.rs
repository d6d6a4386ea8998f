//! Locations and directions on rectangular character grids, the shape most puzzle input comes in.

use ndarray::{Array2, Ix};
use strum::{Display, VariantArray};

use crate::error::GridError;

/// A grid coordinate component.
pub type Coord = usize;

/// A location `(x, y)` on a grid. The top left corner is `Location(0, 0)`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Location(pub Coord, pub Coord);

impl Location {
    /// This location as an `(row, column)` index into an [`Array2`].
    pub fn as_index(&self) -> (Ix, Ix) {
        (self.1, self.0)
    }

    /// Offset by `(dx, dy)`, wrapping below zero (the result then falls outside any grid).
    pub fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(self.0.wrapping_add_signed(rhs.0), self.1.wrapping_add_signed(rhs.1))
    }

    /// One step in `direction`, which may leave the grid.
    pub fn step(self, direction: Direction) -> Self {
        self.offset_by(direction.offset())
    }

    /// One step in `direction`, if that stays inside a grid of `dims` `(width, height)`.
    pub fn step_within(self, direction: Direction, dims: (Coord, Coord)) -> Option<Self> {
        let next = self.step(direction);
        next.within(dims).then_some(next)
    }

    /// Whether this location is inside a grid of `dims` `(width, height)`.
    pub fn within(&self, dims: (Coord, Coord)) -> bool {
        self.0 < dims.0 && self.1 < dims.1
    }

    /// Taxicab distance to `other`.
    pub fn manhattan(&self, other: Location) -> usize {
        self.0.abs_diff(other.0) + self.1.abs_diff(other.1)
    }
}

impl From<(Ix, Ix)> for Location {
    /// From an `(row, column)` array index.
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.1, value.0)
    }
}

/// The four orthogonal steps on a square grid.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, VariantArray)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Direction {
    /// Toward row 0.
    Up,
    /// Toward the last row.
    Down,
    /// Toward column 0.
    Left,
    /// Toward the last column.
    Right,
}

impl Direction {
    /// `(dx, dy)` of one step this way; `y` grows downward.
    pub fn offset(&self) -> (isize, isize) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// The opposite direction.
    pub fn invert(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// The two directions at right angles to this one.
    pub fn turns(&self) -> [Self; 2] {
        match self {
            Self::Up | Self::Down => [Self::Left, Self::Right],
            Self::Left | Self::Right => [Self::Up, Self::Down],
        }
    }
}

/// `(width, height)` of `grid`.
pub fn dims_of<T>(grid: &Array2<T>) -> (Coord, Coord) {
    (grid.ncols(), grid.nrows())
}

/// In-bounds orthogonal neighbors of `location` in a grid of `dims` `(width, height)`.
pub fn neighbors_in(location: Location, dims: (Coord, Coord)) -> impl Iterator<Item=(Direction, Location)> {
    Direction::VARIANTS.iter()
        .filter_map(move |&dir| location.step_within(dir, dims).map(|next| (dir, next)))
}

/// First location holding `ch`, scanning row by row.
pub fn find_char(grid: &Array2<char>, ch: char) -> Option<Location> {
    grid.indexed_iter()
        .find(|(_, &cell)| cell == ch)
        .map(|(index, _)| Location::from(index))
}

/// Lay out a rectangular block of text as an array indexed `[row, column]`.
///
/// Trailing whitespace (including `\r`) on each line and blank lines at either end are ignored.
pub fn parse_char_grid(input: &str) -> Result<Array2<char>, GridError> {
    parse_grid_with(input, |ch, _, _| Ok(ch))
}

/// Like [`parse_char_grid`], but every cell must be a decimal digit.
pub fn parse_digit_grid(input: &str) -> Result<Array2<i64>, GridError> {
    parse_grid_with(input, |ch, line, col| {
        ch.to_digit(10)
            .map(i64::from)
            .ok_or(GridError::NotADigit { ch, line, col })
    })
}

fn parse_grid_with<T, F>(input: &str, mut cell: F) -> Result<Array2<T>, GridError>
where
    F: FnMut(char, usize, usize) -> Result<T, GridError>,
{
    let rows: Vec<&str> = input.trim_matches('\n')
        .lines()
        .map(str::trim_end)
        .collect();

    let width = match rows.first() {
        Some(first) if !first.is_empty() => first.chars().count(),
        _ => return Err(GridError::Empty),
    };

    let mut cells = Vec::with_capacity(width * rows.len());
    for (row, line) in rows.iter().enumerate() {
        let found = line.chars().count();
        if found != width {
            return Err(GridError::Ragged { line: row + 1, expected: width, found });
        }

        for (col, ch) in line.chars().enumerate() {
            cells.push(cell(ch, row + 1, col + 1)?);
        }
    }

    Ok(Array2::from_shape_vec((rows.len(), width), cells)?)
}
