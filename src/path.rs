//! Single-source path searches over a [`Graph`].
//!
//! Unreachable nodes are reported with sentinel distances ([`INFINITY`] for shortest paths, [`NEG_INFINITY`] for the longest path) rather than errors.
//! Callers compare against the sentinel before using a distance.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::graph::{Graph, NodeId, Weight};
use crate::queue::PriorityQueue;

/// Distance of a node no shortest path reaches.
pub const INFINITY: Weight = Weight::MAX;
/// Distance of a node no longest path reaches.
pub const NEG_INFINITY: Weight = Weight::MIN;

/// Output of [`dijkstra`]: best distances and the predecessor tree they were found along.
#[derive(Clone, Debug)]
pub struct ShortestPaths<N: NodeId> {
    /// Best-known distance of every node with an entry, plus every node reached; [`INFINITY`] if unreached.
    pub distances: HashMap<N, Weight>,
    /// Previous node on the best path to each reached node. The source has none.
    pub predecessors: HashMap<N, N>,
    source: N,
}

impl<N: NodeId> ShortestPaths<N> {
    /// The node the search started from.
    pub fn source(&self) -> N {
        self.source
    }

    /// Distance to `node`, [`INFINITY`] if it was not reached or is not in the graph.
    pub fn distance(&self, node: N) -> Weight {
        self.distances.get(&node).copied().unwrap_or(INFINITY)
    }

    /// Whether `node` was reached at all.
    pub fn reaches(&self, node: N) -> bool {
        self.distance(node) != INFINITY
    }

    /// The nodes on the best path from the source to `dest`, both ends included, or [`None`] if `dest` was not reached.
    pub fn path_to(&self, dest: N) -> Option<Vec<N>> {
        if !self.reaches(dest) {
            return None;
        }

        Some(reconstruct_path(&self.predecessors, self.source, dest))
    }
}

/// Output of [`longest_path`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LongestPath<N> {
    /// Length of the path found, [`NEG_INFINITY`] if the destination was not reached.
    pub distance: Weight,
    /// The path from source to destination, both ends included. Empty if the destination was not reached.
    pub path: Vec<N>,
}

impl<N> LongestPath<N> {
    /// Whether the destination was reached.
    pub fn found(&self) -> bool {
        self.distance != NEG_INFINITY
    }
}

fn initial_distances<N: NodeId>(graph: &Graph<N>, source: N, unreached: Weight) -> HashMap<N, Weight> {
    let mut distances: HashMap<N, Weight> = graph.nodes().map(|node| (node, unreached)).collect();
    distances.insert(source, 0);
    distances
}

/// Dijkstra's algorithm from `source` over the whole graph.
///
/// Edge weights must be non-negative; this is not checked and negative weights give wrong distances.
/// Among equally short paths, which predecessor wins depends on heap order.
pub fn dijkstra<N: NodeId>(graph: &Graph<N>, source: N) -> ShortestPaths<N> {
    debug!(nodes = graph.node_count(), ?source, "dijkstra");

    let mut distances = initial_distances(graph, source, INFINITY);
    let mut predecessors = HashMap::new();

    let mut queue = PriorityQueue::with_capacity(distances.len());
    queue.init(distances.iter().map(|(&node, &dist)| (node, dist)));

    while let Some((node, dist)) = queue.pop() {
        if dist == INFINITY {
            // everything left is unreachable
            break;
        }

        for (neighbor, weight) in graph.neighbors(node) {
            let alt = dist.saturating_add(weight);
            let best = distances.entry(neighbor).or_insert(INFINITY);
            if alt < *best {
                *best = alt;
                queue.update(neighbor, alt);
                predecessors.insert(neighbor, node);
            }
        }
    }

    ShortestPaths { distances, predecessors, source }
}

/// Shortest distance from `source` to `dest`, stopping as soon as `dest` is settled.
///
/// Same answer as `dijkstra(graph, source).distance(dest)`, and the same non-negative weight precondition.
pub fn dijkstra_with_dest<N: NodeId>(graph: &Graph<N>, source: N, dest: N) -> Weight {
    debug!(nodes = graph.node_count(), ?source, ?dest, "dijkstra with destination");

    let mut distances = initial_distances(graph, source, INFINITY);

    let mut queue = PriorityQueue::with_capacity(distances.len());
    for (&node, &dist) in distances.iter() {
        queue.push(node, dist);
    }

    while let Some((node, dist)) = queue.pop() {
        if node == dest {
            trace!(dist, "destination settled");
            break;
        }
        if dist == INFINITY {
            break;
        }

        for (neighbor, weight) in graph.neighbors(node) {
            let alt = dist.saturating_add(weight);
            let best = distances.entry(neighbor).or_insert(INFINITY);
            if alt < *best {
                *best = alt;
                queue.update(neighbor, alt);
            }
        }
    }

    distances.get(&dest).copied().unwrap_or(INFINITY)
}

/// Longest path from `source` to `dest` by greedy relaxation. **This is not a general longest-path algorithm.**
///
/// The search is Dijkstra turned around: a max-ordered queue and a `>` comparison.
/// To keep it from running around cycles, a relaxation `u -> v` is refused whenever `v` is already on the predecessor chain of `u`.
/// That only yields the true longest simple path when the graph is DAG-shaped apart from edges leading straight back to a predecessor,
/// e.g. a maze of one-way slopes joined by corridors. On graphs with real cycles the result is some simple path, not necessarily the longest.
pub fn longest_path<N: NodeId>(graph: &Graph<N>, source: N, dest: N) -> LongestPath<N> {
    debug!(nodes = graph.node_count(), ?source, ?dest, "longest path");

    let mut distances = initial_distances(graph, source, NEG_INFINITY);
    let mut predecessors: HashMap<N, N> = HashMap::new();

    let mut queue = PriorityQueue::max();
    queue.init(distances.iter().map(|(&node, &dist)| (node, dist)));

    while let Some((node, dist)) = queue.pop() {
        if dist == NEG_INFINITY {
            break;
        }

        for (neighbor, weight) in graph.neighbors(node) {
            if neighbor == node || on_predecessor_chain(&predecessors, node, neighbor) {
                continue;
            }

            let alt = dist.saturating_add(weight);
            let best = distances.entry(neighbor).or_insert(NEG_INFINITY);
            if alt > *best {
                *best = alt;
                queue.update(neighbor, alt);
                predecessors.insert(neighbor, node);
            }
        }
    }

    let distance = distances.get(&dest).copied().unwrap_or(NEG_INFINITY);
    let path = if distance == NEG_INFINITY {
        Vec::new()
    } else {
        reconstruct_path(&predecessors, source, dest)
    };

    LongestPath { distance, path }
}

/// Whether `node` is an ancestor of `from` in the predecessor tree.
fn on_predecessor_chain<N: NodeId>(predecessors: &HashMap<N, N>, from: N, node: N) -> bool {
    let mut current = from;
    while let Some(&prev) = predecessors.get(&current) {
        if prev == node {
            return true;
        }
        current = prev;
    }

    false
}

fn reconstruct_path<N: NodeId>(predecessors: &HashMap<N, N>, source: N, dest: N) -> Vec<N> {
    let mut path = vec![dest];
    let mut current = dest;

    while current != source {
        match predecessors.get(&current) {
            Some(&prev) => {
                path.push(prev);
                current = prev;
            }
            None => break,
        }
    }

    path.reverse();
    path
}
