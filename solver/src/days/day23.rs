//! Day 23: the longest hike through a forest maze, never stepping on the same tile twice.
//!
//! With icy slopes the maze is one-way between junctions, which the greedy longest path search handles.
//! Without them it is a general longest simple path problem, solved by exhaustive search over the junctions.

use std::collections::HashMap;

use advent_graph::grid::{dims_of, neighbors_in, parse_char_grid};
use advent_graph::path::longest_path;
use advent_graph::{Direction, Graph, Location, Weight};
use itertools::Itertools;
use ndarray::Array2;
use tracing::debug;

use crate::error::SolverError;

const FOREST: char = '#';
const PATH: char = '.';

pub fn part_one(input: &str) -> Result<i64, SolverError> {
    let map = parse_char_grid(input)?;
    let (start, dest) = endpoints(&map)?;

    let hike = longest_path(&slope_graph(&map), start, dest);
    if !hike.found() {
        return Err(SolverError::NoPath);
    }
    debug!(tiles = hike.path.len(), "longest hike");

    Ok(hike.distance)
}

pub fn part_two(input: &str) -> Result<i64, SolverError> {
    let map = parse_char_grid(input)?;
    let (start, dest) = endpoints(&map)?;

    let junctions = junction_graph(&map);
    debug!(junctions = junctions.node_count(), corridors = junctions.edge_count(), "compressed maze");

    let index: HashMap<Location, usize> = junctions.nodes()
        .enumerate()
        .map(|(idx, node)| (node, idx))
        .collect();
    let mut adjacency = vec![Vec::new(); index.len()];
    for (from, to, weight) in junctions.edges() {
        // every corridor ends at a junction, so both ends are indexed
        if let (Some(&from), Some(&to)) = (index.get(&from), index.get(&to)) {
            adjacency[from].push((to, weight));
        }
    }

    let (Some(&from), Some(&to)) = (index.get(&start), index.get(&dest)) else {
        return Err(SolverError::NoPath);
    };

    let mut visited = vec![false; index.len()];
    longest_simple_path(&adjacency, from, to, &mut visited).ok_or(SolverError::NoPath)
}

/// The open tiles in the first and last rows.
fn endpoints(map: &Array2<char>) -> Result<(Location, Location), SolverError> {
    let (width, height) = dims_of(map);
    let open_in = |y: usize| (0..width).find(|&x| map[(y, x)] == PATH).map(|x| Location(x, y));

    match (open_in(0), open_in(height - 1)) {
        (Some(start), Some(dest)) if start != dest => Ok((start, dest)),
        _ => Err(SolverError::Unsupported("maze needs an opening in its top and bottom rows")),
    }
}

fn slope(cell: char) -> Option<Direction> {
    match cell {
        '^' => Some(Direction::Up),
        'v' => Some(Direction::Down),
        '<' => Some(Direction::Left),
        '>' => Some(Direction::Right),
        _ => None,
    }
}

/// Every open tile, with unit edges for the moves the slopes allow.
///
/// A slope only lets you off in its own direction, and climbing onto one against its direction is pointless.
fn slope_graph(map: &Array2<char>) -> Graph<Location> {
    let dims = dims_of(map);
    let mut graph = Graph::with_capacity(map.len());

    for (index, &cell) in map.indexed_iter() {
        if cell == FOREST {
            continue;
        }

        let tile = Location::from(index);
        graph.add_node(tile);

        match slope(cell) {
            Some(downhill) => {
                if let Some(next) = tile.step_within(downhill, dims).filter(|next| map[next.as_index()] != FOREST) {
                    graph.add_edge(tile, next, 1);
                }
            }
            None => {
                for (dir, next) in neighbors_in(tile, dims) {
                    let next_cell = map[next.as_index()];
                    if next_cell != FOREST && slope(next_cell) != Some(dir.invert()) {
                        graph.add_edge(tile, next, 1);
                    }
                }
            }
        }
    }

    graph
}

/// The maze with slopes ignored, reduced to its junctions and dead ends joined by corridor lengths.
fn junction_graph(map: &Array2<char>) -> Graph<Location> {
    let dims = dims_of(map);
    let open = |tile: Location| map[tile.as_index()] != FOREST;
    let open_neighbors = |tile: Location| {
        neighbors_in(tile, dims)
            .map(|(_, next)| next)
            .filter(|&next| open(next))
            .collect_vec()
    };

    let junctions = map.indexed_iter()
        .map(|(index, _)| Location::from(index))
        .filter(|&tile| open(tile) && open_neighbors(tile).len() != 2)
        .collect_vec();

    let mut graph = Graph::with_capacity(junctions.len());
    for &junction in &junctions {
        graph.add_node(junction);

        for first in open_neighbors(junction) {
            let (mut prev, mut current) = (junction, first);
            let mut length: Weight = 1;

            loop {
                let ahead = open_neighbors(current);
                if ahead.len() != 2 {
                    break;
                }
                // exactly one way on that isn't back
                let Some(&next) = ahead.iter().find(|&&tile| tile != prev) else {
                    break;
                };
                (prev, current) = (current, next);
                length += 1;
            }

            // a loop of corridor back to the same junction can never be part of a simple path
            if current != junction {
                graph.add_edge(junction, current, length);
            }
        }
    }

    graph
}

/// Length of the longest path from `node` to `dest` that avoids `visited` nodes; `None` if there is none.
fn longest_simple_path(adjacency: &[Vec<(usize, Weight)>], node: usize, dest: usize, visited: &mut [bool]) -> Option<Weight> {
    if node == dest {
        return Some(0);
    }

    visited[node] = true;
    let mut best = None;
    for &(next, weight) in &adjacency[node] {
        if visited[next] {
            continue;
        }
        if let Some(rest) = longest_simple_path(adjacency, next, dest, visited) {
            best = best.max(Some(rest + weight));
        }
    }
    visited[node] = false;

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
#.#####################
#.......#########...###
#######.#########.#.###
###.....#.>.>.###.#.###
###v#####.#v#.###.#.###
###.>...#.#.#.....#...#
###v###.#.#.#########.#
###...#.#.#.......#...#
#####.#.#.#######.#.###
#.....#.#.#.......#...#
#.#####.#.#.#########v#
#.#...#...#...###...>.#
#.#.#v#######v###.###v#
#...#.>.#...>.>.#.###.#
#####v#.#.###v#.#.###.#
#.....#...#...#.#.#...#
#.#########.###.#.#.###
#...###...#...#...#.###
###.###.#.###v#####v###
#...#...#.#.>.>.#.>.###
#.###.###.#.###.#.#v###
#.....###...###...#...#
#####################.#
";

    #[test]
    fn finds_openings() {
        let map = parse_char_grid(SAMPLE).unwrap();
        assert_eq!(endpoints(&map).unwrap(), (Location(1, 0), Location(21, 22)));
    }

    #[test]
    fn slippery_hike() {
        assert_eq!(part_one(SAMPLE).unwrap(), 94);
    }

    #[test]
    fn dry_hike() {
        assert_eq!(part_two(SAMPLE).unwrap(), 154);
    }

    #[test]
    fn slopes_are_one_way() {
        let map = parse_char_grid("#.#\n#v#\n#.#\n").unwrap();
        let graph = slope_graph(&map);
        assert_eq!(graph.weight(Location(1, 1), Location(1, 2)), Some(1));
        assert_eq!(graph.weight(Location(1, 1), Location(1, 0)), None);
        assert_eq!(graph.weight(Location(1, 2), Location(1, 1)), None);
        assert_eq!(graph.weight(Location(1, 0), Location(1, 1)), Some(1));
    }

    #[test]
    fn search_backtracks_through_cycles() {
        // 0 - 1 - 3 and 0 - 2 - 3, with a heavy rung between 1 and 2
        let edges = [(0, 1, 1), (0, 2, 1), (1, 2, 5), (1, 3, 1), (2, 3, 1)];
        let mut adjacency = vec![Vec::new(); 4];
        for (a, b, w) in edges {
            adjacency[a].push((b, w));
            adjacency[b].push((a, w));
        }

        let mut visited = vec![false; 4];
        assert_eq!(longest_simple_path(&adjacency, 0, 3, &mut visited), Some(7));
        assert!(visited.iter().all(|&seen| !seen));

        visited[1] = true;
        visited[2] = true;
        assert_eq!(longest_simple_path(&adjacency, 0, 3, &mut visited), None);
    }

    #[test]
    fn corridor_compresses_to_one_edge() {
        let map = parse_char_grid("#.###\n#...#\n###.#\n").unwrap();
        let graph = junction_graph(&map);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.weight(Location(1, 0), Location(3, 2)), Some(4));
        assert_eq!(part_two("#.###\n#...#\n###.#\n").unwrap(), 4);
    }
}
