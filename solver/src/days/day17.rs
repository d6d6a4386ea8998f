//! Day 17: steer a crucible across a city block grid, minimizing heat loss.
//!
//! A crucible may only turn left or right, and must keep to a minimum and maximum run in a straight line.
//! Each search node is therefore a whole crucible state, not just a location.

use advent_graph::grid::{dims_of, neighbors_in, parse_digit_grid};
use advent_graph::path::{dijkstra_with_dest, INFINITY};
use advent_graph::{Direction, Graph, Location, Weight};
use ndarray::Array2;
use strum::VariantArray;
use tracing::debug;

use crate::error::SolverError;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
enum Crucible {
    /// At the top left corner, before the first move; any heading is allowed from here.
    Start,
    Moving { location: Location, heading: Direction, run: u8 },
    /// Stopped at the bottom right corner.
    Finish,
}

#[derive(Clone, Copy)]
struct Limits {
    min_run: u8,
    max_run: u8,
}

const REGULAR: Limits = Limits { min_run: 1, max_run: 3 };
const ULTRA: Limits = Limits { min_run: 4, max_run: 10 };

pub fn part_one(input: &str) -> Result<i64, SolverError> {
    min_heat_loss(&parse_digit_grid(input)?, REGULAR)
}

pub fn part_two(input: &str) -> Result<i64, SolverError> {
    min_heat_loss(&parse_digit_grid(input)?, ULTRA)
}

fn min_heat_loss(blocks: &Array2<Weight>, limits: Limits) -> Result<i64, SolverError> {
    let graph = crucible_graph(blocks, limits);
    debug!(states = graph.node_count(), "built crucible graph");

    match dijkstra_with_dest(&graph, Crucible::Start, Crucible::Finish) {
        INFINITY => Err(SolverError::NoPath),
        loss => Ok(loss),
    }
}

/// Every crucible state, with an edge for each legal move weighted by the heat lost entering the next block.
fn crucible_graph(blocks: &Array2<Weight>, limits: Limits) -> Graph<Crucible> {
    let dims = dims_of(blocks);
    let dest = Location(dims.0 - 1, dims.1 - 1);
    let heat = |location: Location| blocks[location.as_index()];

    let mut graph = Graph::with_capacity(blocks.len() * Direction::VARIANTS.len() * usize::from(limits.max_run) + 2);
    graph.add_node(Crucible::Start).add_node(Crucible::Finish);

    for (heading, next) in neighbors_in(Location(0, 0), dims) {
        graph.add_edge(Crucible::Start, Crucible::Moving { location: next, heading, run: 1 }, heat(next));
    }

    for (index, _) in blocks.indexed_iter() {
        let location = Location::from(index);

        for &heading in Direction::VARIANTS {
            for run in 1..=limits.max_run {
                let state = Crucible::Moving { location, heading, run };
                graph.add_node(state);

                if location == dest && run >= limits.min_run {
                    graph.add_edge(state, Crucible::Finish, 0);
                }

                if run < limits.max_run {
                    if let Some(next) = location.step_within(heading, dims) {
                        graph.add_edge(state, Crucible::Moving { location: next, heading, run: run + 1 }, heat(next));
                    }
                }

                if run >= limits.min_run {
                    for turn in heading.turns() {
                        if let Some(next) = location.step_within(turn, dims) {
                            graph.add_edge(state, Crucible::Moving { location: next, heading: turn, run: 1 }, heat(next));
                        }
                    }
                }
            }
        }
    }

    graph
}
