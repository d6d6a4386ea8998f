//! Day 21: count the garden plots an elf can end on after an exact number of steps.
//!
//! A plot at distance `d` is reachable in `n` steps exactly when `d <= n` and `d` has the parity of `n`,
//! since the elf can always waste two steps stepping back and forth.
//! Part two runs on an endlessly repeating map; the count grows quadratically in whole map widths,
//! so three samples on a finite tiling pin the polynomial down.

use std::thread;

use advent_graph::grid::{dims_of, find_char, neighbors_in, parse_char_grid};
use advent_graph::math::neville_interpolation;
use advent_graph::path::dijkstra;
use advent_graph::{Graph, Location};
use itertools::Itertools;
use ndarray::Array2;
use tracing::debug;

use crate::error::SolverError;

const ROCK: char = '#';
const START: char = 'S';

const STEPS: i64 = 64;
const UNBOUNDED_STEPS: i64 = 26_501_365;

pub fn part_one(input: &str) -> Result<i64, SolverError> {
    let map = parse_char_grid(input)?;
    let start = find_char(&map, START).ok_or(SolverError::Unsupported("map has no starting plot"))?;
    Ok(reachable_in(&map, start, STEPS))
}

pub fn part_two(input: &str) -> Result<i64, SolverError> {
    unbounded_plots(&parse_char_grid(input)?, UNBOUNDED_STEPS)
}

/// Plots reachable in exactly `steps` steps on an endless repetition of `map`.
///
/// `steps` must reach exactly from the start to the edge of some copy, i.e. `half + k * width`.
fn unbounded_plots(map: &Array2<char>, steps: i64) -> Result<i64, SolverError> {
    let (width, height) = dims_of(map);
    if width != height || width % 2 == 0 {
        return Err(SolverError::Unsupported("repeating map must be square with an odd side"));
    }
    let half = width / 2;
    if find_char(map, START) != Some(Location(half, half)) {
        return Err(SolverError::Unsupported("start must be in the middle of the repeating map"));
    }
    let (half, width) = (half as i64, width as i64);
    if steps < half || (steps - half) % width != 0 {
        return Err(SolverError::Unsupported("steps must end on the edge of a copy of the map"));
    }

    // i whole widths past the edge of the middle copy need 2i + 1 copies across
    let samples: Vec<(usize, i64)> = (0..3)
        .map(|i| (2 * i as usize + 1, half + width * i))
        .collect();

    let counts = thread::scope(|scope| {
        let workers = samples.iter()
            .map(|&(factor, steps)| {
                scope.spawn(move || {
                    let tiled = tile(map, factor);
                    let (w, h) = dims_of(&tiled);
                    reachable_in(&tiled, Location(w / 2, h / 2), steps)
                })
            })
            .collect_vec();

        workers.into_iter()
            .map(|worker| worker.join().map_err(|_| SolverError::WorkerPanicked))
            .collect::<Result<Vec<i64>, _>>()
    })?;
    debug!(?counts, "sampled plot counts");

    let widths = (steps - half) / width;
    Ok(neville_interpolation(&[0, 1, 2], &counts, widths)?)
}

/// Number of plots reachable from `start` in exactly `steps` steps, without leaving `map`.
fn reachable_in(map: &Array2<char>, start: Location, steps: i64) -> i64 {
    let garden = garden_graph(map);
    let distances = dijkstra(&garden, start);

    garden.nodes()
        .filter(|&plot| distances.reaches(plot))
        .map(|plot| distances.distance(plot))
        .filter(|&d| d <= steps && d % 2 == steps % 2)
        .count() as i64
}

fn garden_graph(map: &Array2<char>) -> Graph<Location> {
    let dims = dims_of(map);
    let mut garden = Graph::with_capacity(map.len());

    for (index, &cell) in map.indexed_iter() {
        if cell == ROCK {
            continue;
        }

        let plot = Location::from(index);
        garden.add_node(plot);
        for (_, next) in neighbors_in(plot, dims) {
            if map[next.as_index()] != ROCK {
                garden.add_edge(plot, next, 1);
            }
        }
    }

    garden
}

/// `factor` by `factor` copies of `map`, with the starting marker cleared.
fn tile(map: &Array2<char>, factor: usize) -> Array2<char> {
    let (rows, cols) = map.dim();
    Array2::from_shape_fn((rows * factor, cols * factor), |(r, c)| {
        match map[(r % rows, c % cols)] {
            START => '.',
            cell => cell,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
...........
.....###.#.
.###.##..#.
..#.#...#..
....#.#....
.##..S####.
.##..#...#.
.......##..
.##.#.####.
.##..##.##.
...........
";

    #[test]
    fn plots_within_the_map() {
        let map = parse_char_grid(SAMPLE).unwrap();
        let start = find_char(&map, START).unwrap();
        assert_eq!(start, Location(5, 5));
        assert_eq!(reachable_in(&map, start, 6), 16);
    }

    #[test]
    fn plots_on_a_tiled_map() {
        let map = tile(&parse_char_grid(SAMPLE).unwrap(), 3);
        assert_eq!(map.dim(), (33, 33));
        assert_eq!(find_char(&map, START), None);
        assert_eq!(reachable_in(&map, Location(16, 16), 10), 50);
    }

    #[test]
    fn open_field_is_a_diamond() {
        let mut field = vec![".".repeat(5); 5].join("\n");
        field.replace_range(14..15, "S");
        let map = parse_char_grid(&field).unwrap();
        assert_eq!(find_char(&map, START), Some(Location(2, 2)));

        // 4d plots at each odd distance d up to 7
        let tiled = tile(&map, 3);
        assert_eq!(reachable_in(&tiled, Location(7, 7), 7), 64);
    }

    #[test]
    fn interpolated_plots_match_a_wide_tiling() {
        let map = parse_char_grid(".....\n.#.#.\n..S..\n.#.#.\n.....\n").unwrap();

        for (widths, expected) in [(3, 260), (4, 429), (5, 640)] {
            let steps = 2 + 5 * widths;
            let tiled = tile(&map, 2 * widths as usize + 1);
            let (w, h) = dims_of(&tiled);
            assert_eq!(reachable_in(&tiled, Location(w / 2, h / 2), steps), expected);
            assert_eq!(unbounded_plots(&map, steps).unwrap(), expected);
        }

        assert!(matches!(unbounded_plots(&map, 8), Err(SolverError::Unsupported(_))));
    }

    #[test]
    fn rejects_off_center_start() {
        let map = "S..\n...\n...\n";
        assert!(matches!(part_two(map), Err(SolverError::Unsupported(_))));
    }
}
