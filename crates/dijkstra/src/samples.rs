//! The two fixed graphs used by the demo and the regression tests.
//!
//! Edge lists are in insertion order, and `DirectedGraph` keeps that order
//! per node, so the adjacency dump lists each node's edges oldest first.

use crate::error::Result;
use crate::graph::DirectedGraph;

pub const SMALL_NODE_COUNT: usize = 6;

pub const SMALL_EDGES: [(u32, u32, u64); 10] = [
    (0, 1, 4),
    (0, 2, 1),
    (1, 3, 2),
    (1, 4, 2),
    (2, 1, 1),
    (2, 3, 5),
    (2, 4, 4),
    (3, 5, 4),
    (4, 2, 1),
    (4, 5, 1),
];

pub const MEDIUM_NODE_COUNT: usize = 10;

pub const MEDIUM_EDGES: [(u32, u32, u64); 16] = [
    (0, 1, 2),
    (0, 2, 1),
    (1, 3, 2),
    (2, 5, 10),
    (2, 4, 20),
    (3, 5, 1),
    (3, 6, 10),
    (4, 2, 1),
    (4, 6, 1),
    (4, 9, 1),
    (5, 7, 1),
    (6, 4, 1),
    (6, 8, 1),
    (7, 8, 1),
    (8, 6, 1),
    (8, 7, 1),
];

pub fn small_graph() -> Result<DirectedGraph> {
    DirectedGraph::from_edges(SMALL_NODE_COUNT, &SMALL_EDGES)
}

pub fn medium_graph() -> Result<DirectedGraph> {
    DirectedGraph::from_edges(MEDIUM_NODE_COUNT, &MEDIUM_EDGES)
}
