use std::fmt;

use crate::error::Result;
use crate::error::check_node;
use crate::graph::DirectedGraph;

/// Best-known distance from the source.
///
/// Variant order matters: every `Finite` value compares below `Unreachable`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Distance {
    Finite(u64),
    Unreachable,
}

impl Distance {
    pub const ZERO: Self = Self::Finite(0);

    #[inline]
    pub fn finite(self) -> Option<u64> {
        match self {
            Self::Finite(d) => Some(d),
            Self::Unreachable => None,
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        matches!(self, Self::Finite(_))
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(d) => fmt::Display::fmt(d, f),
            Self::Unreachable => f.pad("inf"),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Record {
    distance: Distance,
    predecessor: Option<u32>,
}

/// Per-node distance and predecessor table produced by one driver run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShortestPaths {
    source: usize,
    records: Vec<Record>,
}

impl ShortestPaths {
    /// Fresh table for `graph`: the source at zero, every other node
    /// unreachable, no predecessors.
    pub fn new(graph: &DirectedGraph, source: usize) -> Result<Self> {
        let n = graph.vertex_count();
        check_node(source, n)?;
        let mut records = vec![
            Record {
                distance: Distance::Unreachable,
                predecessor: None,
            };
            n
        ];
        records[source].distance = Distance::ZERO;
        Ok(Self { source, records })
    }

    /// Overwrites the record for `node`. Callers check that `distance`
    /// improves on the current value first.
    #[inline]
    pub fn relax(&mut self, node: usize, distance: u64, predecessor: usize) {
        debug_assert!(Distance::Finite(distance) < self.records[node].distance);
        self.records[node] = Record {
            distance: Distance::Finite(distance),
            predecessor: Some(predecessor as u32),
        };
    }

    #[inline]
    pub fn source(&self) -> usize {
        self.source
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[inline]
    pub fn distance(&self, node: usize) -> Distance {
        self.records[node].distance
    }

    #[inline]
    pub fn predecessor(&self, node: usize) -> Option<usize> {
        self.records[node].predecessor.map(|p| p as usize)
    }

    #[inline]
    pub fn is_reachable(&self, node: usize) -> bool {
        self.records[node].distance.is_finite()
    }

    pub fn distances(&self) -> Vec<Distance> {
        self.records.iter().map(|r| r.distance).collect()
    }

    pub fn predecessors(&self) -> Vec<Option<usize>> {
        (0..self.len()).map(|v| self.predecessor(v)).collect()
    }

    /// Nodes on the recorded shortest path from the source to `target`,
    /// source first. `None` when `target` is unreachable.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(target) {
            return None;
        }
        let mut path = vec![target];
        let mut current = target;
        while let Some(pred) = self.predecessor(current) {
            path.push(pred);
            current = pred;
        }
        debug_assert_eq!(current, self.source);
        path.reverse();
        Some(path)
    }

    /// [`ShortestPaths::path_to`] paired with the path's total weight, after
    /// checking that `target` is a node of this table.
    pub fn route(&self, target: usize) -> Result<Option<(Vec<usize>, u64)>> {
        check_node(target, self.len())?;
        let Some(weight) = self.distance(target).finite() else {
            return Ok(None);
        };
        Ok(self.path_to(target).map(|path| (path, weight)))
    }
}

impl fmt::Display for ShortestPaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in 0..self.len() {
            write!(f, "Node {v:>2}: dist = {:>3}, pred = ", self.distance(v))?;
            match self.predecessor(v) {
                Some(p) => writeln!(f, "{p:>2}")?,
                None => writeln!(f, "{:>2}", "-")?,
            }
        }
        Ok(())
    }
}
