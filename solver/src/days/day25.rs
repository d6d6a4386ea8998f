//! Day 25: cut three wires to split the machine's components in two.
//!
//! The wires of a minimum cut carry every shortest path between the two halves, so they have the highest edge betweenness.
//! Removing the top edge and recomputing three times finds them.

use advent_graph::centrality::{edge_betweenness, undirected_edge_scores};
use advent_graph::Graph;
use petgraph::graphmap::UnGraphMap;
use tracing::debug;

use crate::error::SolverError;

const CUT_SIZE: usize = 3;

pub fn part_one(input: &str) -> Result<i64, SolverError> {
    let wiring = parse_wiring(input)?;
    let mut graph = Graph::from_graphmap(&wiring, |_| 1);

    for _ in 0..CUT_SIZE {
        let scores = undirected_edge_scores(&edge_betweenness(&graph));
        let Some((wire, score)) = scores.into_iter().max_by(|a, b| a.1.total_cmp(&b.1)) else {
            return Err(SolverError::NoCut(graph.connected_components().len()));
        };
        debug!(from = wire.0, to = wire.1, score, "cutting wire");
        graph.remove_undirected_edge(wire.0, wire.1);
    }

    let groups = graph.connected_components();
    match groups.as_slice() {
        [a, b] => Ok((a.len() * b.len()) as i64),
        _ => Err(SolverError::NoCut(groups.len())),
    }
}

/// Lines like `jqt: rhn xhk nvd`, each wire connecting the component on the left to one on the right.
fn parse_wiring(input: &str) -> Result<UnGraphMap<&str, ()>, SolverError> {
    let mut wiring = UnGraphMap::new();

    for (idx, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (name, others) = line.split_once(':')
            .ok_or_else(|| SolverError::Malformed { line: idx + 1, reason: "missing ':'".to_string() })?;
        let name = name.trim();
        if name.is_empty() {
            return Err(SolverError::Malformed { line: idx + 1, reason: "missing component name".to_string() });
        }

        wiring.add_node(name);
        for other in others.split_whitespace() {
            wiring.add_edge(name, other, ());
        }
    }

    Ok(wiring)
}
