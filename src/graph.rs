//! The adjacency-map graph every search runs on.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use itertools::Itertools;
use petgraph::graphmap::{GraphMap, NodeTrait};
use petgraph::unionfind::UnionFind;
use petgraph::EdgeType;

/// Edge weights and path lengths.
pub type Weight = i64;

/// Constraint on node identities stored in a [`Graph`].
///
/// Anything small enough to copy around and usable as a hash key qualifies: coordinates, `&str`s, composite state keys.
pub trait NodeId: Copy + Eq + Hash + Debug {}

impl<T> NodeId for T where T: Copy + Eq + Hash + Debug {}

/// A directed, weighted graph stored as an adjacency map: node to (neighbor to weight).
///
/// Undirected structure is represented by storing each edge in both directions, see [`Self::add_undirected_edge`].
/// A node may appear as a neighbor without having an entry of its own, in which case it has no outgoing edges.
/// Queries that start from a node (or must report on every node) only see nodes with an entry, so use [`Self::add_node`] for sinks that matter.
#[derive(Clone, Debug)]
pub struct Graph<N: NodeId> {
    adjacency: HashMap<N, HashMap<N, Weight>>,
}

impl<N: NodeId> Graph<N> {
    /// An empty graph.
    pub fn new() -> Self {
        Self { adjacency: HashMap::new() }
    }

    /// An empty graph with room for `node_count` nodes.
    pub fn with_capacity(node_count: usize) -> Self {
        Self { adjacency: HashMap::with_capacity(node_count) }
    }

    /// Make sure `node` has an entry, possibly with no outgoing edges.
    pub fn add_node(&mut self, node: N) -> &mut Self {
        self.adjacency.entry(node).or_default();
        self
    }

    /// Add or overwrite the edge `from -> to`. Only `from` gains an entry.
    pub fn add_edge(&mut self, from: N, to: N, weight: Weight) -> &mut Self {
        self.adjacency.entry(from).or_default().insert(to, weight);
        self
    }

    /// Add `a -> b` and `b -> a` with the same weight.
    pub fn add_undirected_edge(&mut self, a: N, b: N, weight: Weight) -> &mut Self {
        self.add_edge(a, b, weight).add_edge(b, a, weight)
    }

    /// Remove `from -> to`, returning its weight if it existed.
    pub fn remove_edge(&mut self, from: N, to: N) -> Option<Weight> {
        self.adjacency.get_mut(&from).and_then(|neighbors| neighbors.remove(&to))
    }

    /// Remove both directions of the edge between `a` and `b`.
    ///
    /// Returns `true` if either direction was present.
    pub fn remove_undirected_edge(&mut self, a: N, b: N) -> bool {
        let forward = self.remove_edge(a, b).is_some();
        let backward = self.remove_edge(b, a).is_some();
        forward || backward
    }

    /// Weight of `from -> to`, if that edge exists.
    pub fn weight(&self, from: N, to: N) -> Option<Weight> {
        self.adjacency.get(&from).and_then(|neighbors| neighbors.get(&to).copied())
    }

    /// Outgoing edges of `node` as `(neighbor, weight)`. Empty for nodes without an entry.
    pub fn neighbors(&self, node: N) -> impl Iterator<Item=(N, Weight)> + '_ {
        self.adjacency.get(&node)
            .into_iter()
            .flat_map(|neighbors| neighbors.iter().map(|(&n, &w)| (n, w)))
    }

    /// Number of outgoing edges of `node`.
    pub fn degree(&self, node: N) -> usize {
        self.adjacency.get(&node).map_or(0, HashMap::len)
    }

    /// Every node with an entry, in no particular order.
    pub fn nodes(&self) -> impl Iterator<Item=N> + '_ {
        self.adjacency.keys().copied()
    }

    /// Every directed edge as `(from, to, weight)`.
    pub fn edges(&self) -> impl Iterator<Item=(N, N, Weight)> + '_ {
        self.adjacency.iter()
            .flat_map(|(&from, neighbors)| neighbors.iter().map(move |(&to, &w)| (from, to, w)))
    }

    /// Whether `node` has an entry.
    pub fn contains_node(&self, node: N) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// Number of nodes with an entry.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed edges; an undirected edge counts twice.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(HashMap::len).sum()
    }

    /// Group nodes into weakly connected components, treating every edge as undirected.
    ///
    /// Nodes that only ever appear as neighbors are included.
    pub fn connected_components(&self) -> Vec<Vec<N>> {
        let mut indices: HashMap<N, usize> = HashMap::with_capacity(self.adjacency.len());
        for (from, to, _) in self.edges() {
            for node in [from, to] {
                let next = indices.len();
                indices.entry(node).or_insert(next);
            }
        }
        for node in self.nodes() {
            let next = indices.len();
            indices.entry(node).or_insert(next);
        }

        let mut sets = UnionFind::<usize>::new(indices.len());
        for (from, to, _) in self.edges() {
            sets.union(indices[&from], indices[&to]);
        }

        let labels = sets.into_labeling();
        indices.into_iter()
            .map(|(node, idx)| (labels[idx], node))
            .into_group_map()
            .into_values()
            .collect_vec()
    }

    /// Copy a petgraph [`GraphMap`], turning each edge weight into a [`Weight`] with `weight_of`.
    ///
    /// Undirected maps become edges in both directions. Every node of `graph` gets an entry.
    pub fn from_graphmap<E, Ty, F>(graph: &GraphMap<N, E, Ty>, weight_of: F) -> Self
    where
        N: NodeTrait,
        Ty: EdgeType,
        F: Fn(&E) -> Weight,
    {
        let mut ret = Self::with_capacity(graph.node_count());
        for node in graph.nodes() {
            ret.add_node(node);
        }

        for (a, b, e) in graph.all_edges() {
            if Ty::is_directed() {
                ret.add_edge(a, b, weight_of(e));
            } else {
                ret.add_undirected_edge(a, b, weight_of(e));
            }
        }

        ret
    }
}

impl<N: NodeId> Default for Graph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeId> FromIterator<(N, N, Weight)> for Graph<N> {
    /// Collect directed `(from, to, weight)` edges.
    fn from_iter<T: IntoIterator<Item=(N, N, Weight)>>(iter: T) -> Self {
        let mut graph = Self::new();
        for (from, to, weight) in iter {
            graph.add_edge(from, to, weight);
        }
        graph
    }
}
