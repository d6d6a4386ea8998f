#![warn(missing_docs)]

//! # `advent-graph`
//!
//! Graph algorithms and input helpers for daily programming puzzles.
//! Begin by building a [`Graph`] from puzzle input, keyed by whatever identifies a node: a grid [`Location`], a `&str` name, a composite state.
//! Then query it with one of the engines:
//!
//! - [`dijkstra`](path::dijkstra) and [`dijkstra_with_dest`](path::dijkstra_with_dest) for shortest paths,
//! - [`longest_path`](path::longest_path) for the longest path on DAG-like graphs (read its caveats first),
//! - [`betweenness`](centrality::betweenness) and [`edge_betweenness`](centrality::edge_betweenness) for Brandes centrality.
//!
//! Graphs are built once, queried, and discarded; nothing here mutates a graph during a search.
//!
//! # Internals
//! Path searches run on [`PriorityQueue`], a binary heap paired with a table of where each key sits in the heap array.
//! That table lets a search lower (or raise) a queued node's priority in `O(log n)` instead of pushing duplicates.
//!
//! Unreachable nodes are reported with sentinel distances, [`INFINITY`](path::INFINITY) and [`NEG_INFINITY`](path::NEG_INFINITY), never with errors.
//! Errors are reserved for malformed input, see [`error`].

pub use graph::{Graph, NodeId, Weight};
pub use grid::{Direction, Location};
pub use queue::PriorityQueue;

pub mod centrality;
pub mod error;
pub mod graph;
pub mod grid;
pub mod input;
pub mod math;
pub mod path;
pub mod queue;
mod tests;
