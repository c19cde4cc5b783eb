use std::fmt;

use crate::error::Result;
use crate::error::check_node;
use crate::error::check_node_count;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Edge {
    pub to: u32,
    pub weight: u64,
}

/// Directed multigraph over nodes `0..vertex_count`.
///
/// Each node owns a contiguous list of its outgoing edges in insertion order.
/// Parallel edges and self loops are kept as given.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DirectedGraph {
    adjacency: Vec<Vec<Edge>>,
    edge_count: usize,
}

impl DirectedGraph {
    /// Graph with `vertex_count` nodes and no edges.
    ///
    /// Panics if `vertex_count` exceeds `u32::MAX`; see [`DirectedGraph::try_new`].
    pub fn new(vertex_count: usize) -> Self {
        match Self::try_new(vertex_count) {
            Ok(graph) => graph,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_new(vertex_count: usize) -> Result<Self> {
        check_node_count(vertex_count)?;
        Ok(Self {
            adjacency: vec![Vec::new(); vertex_count],
            edge_count: 0,
        })
    }

    pub fn from_edges(vertex_count: usize, edges: &[(u32, u32, u64)]) -> Result<Self> {
        let mut graph = Self::try_new(vertex_count)?;
        for &(from, to, weight) in edges {
            graph.insert_link(from as usize, to as usize, weight)?;
        }
        Ok(graph)
    }

    /// Adds the directed edge `head -> tail`. Existing edges between the same
    /// pair are left in place.
    pub fn insert_link(&mut self, head: usize, tail: usize, weight: u64) -> Result<()> {
        let n = self.vertex_count();
        check_node(head, n)?;
        check_node(tail, n)?;
        self.adjacency[head].push(Edge {
            to: tail as u32,
            weight,
        });
        self.edge_count += 1;
        Ok(())
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[inline]
    pub fn out_degree(&self, v: usize) -> usize {
        self.adjacency[v].len()
    }

    /// Outgoing edges of `v`. Each call starts a fresh pass.
    #[inline]
    pub fn out_edges(&self, v: usize) -> OutEdges<'_> {
        OutEdges {
            edges: &self.adjacency[v],
            idx: 0,
        }
    }

    pub fn edges(&self) -> Vec<(u32, u32, u64)> {
        let mut edges = Vec::with_capacity(self.edge_count);
        for u in 0..self.vertex_count() {
            for edge in self.out_edges(u) {
                edges.push((u as u32, edge.to, edge.weight));
            }
        }
        edges
    }
}

impl fmt::Display for DirectedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Graph: -> node_id (weight)")?;
        for u in 0..self.vertex_count() {
            write!(f, "Node {u:>2}:")?;
            for edge in self.out_edges(u) {
                write!(f, " ->{:>2} ({:>2})", edge.to, edge.weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct OutEdges<'a> {
    edges: &'a [Edge],
    idx: usize,
}

impl Iterator for OutEdges<'_> {
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        let edge = *self.edges.get(self.idx)?;
        self.idx += 1;
        Some(edge)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remain = self.edges.len() - self.idx;
        (remain, Some(remain))
    }
}

impl ExactSizeIterator for OutEdges<'_> {}
