//! Betweenness centrality by [Brandes' algorithm](https://doi.org/10.1080/0022250X.2001.9990249).
//!
//! Shortest paths are found by BFS, so edge weights are ignored and every edge counts as one step.
//! Both functions run one sweep per node, `O(V * E)` overall; fine for graphs of a few thousand nodes, not much more.
//!
//! Scores are not normalized. On an undirected graph stored in both directions every pair of endpoints is counted twice, once from each side.

use std::collections::{HashMap, VecDeque};

use tracing::debug;
use unordered_pair::UnorderedPair;

use crate::graph::{Graph, NodeId};

/// Per-source scratch state, cleared at the start of every sweep.
struct Sweep<N: NodeId> {
    source: N,
    /// Nodes in the order BFS dequeued them; popped in reverse during accumulation.
    order: Vec<N>,
    predecessors: HashMap<N, Vec<N>>,
    sigma: HashMap<N, f64>,
    delta: HashMap<N, f64>,
}

impl<N: NodeId> Sweep<N> {
    #[inline]
    fn sigma(&self, node: N) -> f64 {
        self.sigma.get(&node).copied().unwrap_or(0.0)
    }

    #[inline]
    fn delta(&self, node: N) -> f64 {
        self.delta.get(&node).copied().unwrap_or(0.0)
    }
}

fn brandes<N, F>(graph: &Graph<N>, mut accumulate: F)
where
    N: NodeId,
    F: FnMut(&mut Sweep<N>),
{
    debug!(nodes = graph.node_count(), edges = graph.edge_count(), "brandes");

    let capacity = graph.node_count();
    let mut distance: HashMap<N, usize> = HashMap::with_capacity(capacity);
    let mut queue: VecDeque<N> = VecDeque::with_capacity(capacity);

    for source in graph.nodes() {
        let mut sweep = Sweep {
            source,
            order: Vec::with_capacity(capacity),
            predecessors: HashMap::with_capacity(capacity),
            sigma: HashMap::with_capacity(capacity),
            delta: HashMap::with_capacity(capacity),
        };
        distance.clear();
        queue.clear();

        sweep.sigma.insert(source, 1.0);
        distance.insert(source, 0);
        queue.push_back(source);

        while let Some(v) = queue.pop_front() {
            sweep.order.push(v);
            let next = distance[&v] + 1;
            let sigma_v = sweep.sigma(v);

            for (w, _) in graph.neighbors(v) {
                // found for the first time
                let dist_w = *distance.entry(w).or_insert_with(|| {
                    queue.push_back(w);
                    next
                });

                // v is on a shortest path to w
                if dist_w == next {
                    *sweep.sigma.entry(w).or_insert(0.0) += sigma_v;
                    sweep.predecessors.entry(w).or_default().push(v);
                }
            }
        }

        accumulate(&mut sweep);
    }
}

/// Betweenness of every node: summed over all ordered pairs `(s, t)`, the fraction of shortest `s -> t` paths passing through it.
///
/// Nodes that lie on no shortest path between two others are absent from the result rather than mapped to zero.
pub fn betweenness<N: NodeId>(graph: &Graph<N>) -> HashMap<N, f64> {
    let mut scores = HashMap::new();

    brandes(graph, |sweep| {
        while let Some(w) = sweep.order.pop() {
            let sigma_w = sweep.sigma(w);
            let delta_w = sweep.delta(w);

            if let Some(preds) = sweep.predecessors.get(&w) {
                for &v in preds {
                    *sweep.delta.entry(v).or_insert(0.0) += sweep.sigma.get(&v).copied().unwrap_or(0.0) / sigma_w * (1.0 + delta_w);
                }
            }

            if w != sweep.source && delta_w != 0.0 {
                *scores.entry(w).or_insert(0.0) += delta_w;
            }
        }
    });

    scores
}

/// Betweenness of every directed edge `v -> w` that lies on some shortest path, as `scores[v][w]`.
///
/// An edge is credited in the direction shortest paths travel over it.
/// For an undirected graph, the two directions of one edge together carry its full score; see [`undirected_edge_scores`].
pub fn edge_betweenness<N: NodeId>(graph: &Graph<N>) -> HashMap<N, HashMap<N, f64>> {
    let mut scores: HashMap<N, HashMap<N, f64>> = HashMap::new();

    brandes(graph, |sweep| {
        while let Some(w) = sweep.order.pop() {
            let sigma_w = sweep.sigma(w);
            let delta_w = sweep.delta(w);

            if let Some(preds) = sweep.predecessors.get(&w) {
                for &v in preds {
                    let contribution = sweep.sigma.get(&v).copied().unwrap_or(0.0) / sigma_w * (1.0 + delta_w);
                    *scores.entry(v).or_default().entry(w).or_insert(0.0) += contribution;
                    *sweep.delta.entry(v).or_insert(0.0) += contribution;
                }
            }
        }
    });

    scores
}

/// Fold both directions of every edge in an [`edge_betweenness`] result into one score per unordered pair.
pub fn undirected_edge_scores<N>(scores: &HashMap<N, HashMap<N, f64>>) -> HashMap<UnorderedPair<N>, f64>
where
    N: NodeId + Ord,
{
    let mut folded = HashMap::new();
    for (&v, targets) in scores {
        for (&w, &score) in targets {
            *folded.entry(UnorderedPair::from((v, w))).or_insert(0.0) += score;
        }
    }

    folded
}
