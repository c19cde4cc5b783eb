//! Seeded graph families for randomized tests and benchmarks.

use std::collections::HashSet;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::error::Result;
use crate::graph::DirectedGraph;

const C_MAX: u64 = 1_000_000_000;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum GraphCase {
    SparseRandom,
    DenseRandom,
    DenseZero,
    AlmostLine,
    GridRandom,
    WrongDijkstraKiller,
    ParallelEdges,
}

impl GraphCase {
    pub const ALL: [Self; 7] = [
        Self::SparseRandom,
        Self::DenseRandom,
        Self::DenseZero,
        Self::AlmostLine,
        Self::GridRandom,
        Self::WrongDijkstraKiller,
        Self::ParallelEdges,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::SparseRandom => "sparse_random",
            Self::DenseRandom => "dense_random",
            Self::DenseZero => "dense_zero",
            Self::AlmostLine => "almost_line",
            Self::GridRandom => "grid_random",
            Self::WrongDijkstraKiller => "wrong_dijkstra_killer",
            Self::ParallelEdges => "parallel_edges",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|case| case.label() == label)
    }
}

#[derive(Clone, Debug)]
pub struct GeneratedGraph {
    pub graph: DirectedGraph,
    pub source: usize,
    pub target: usize,
}

/// Builds one instance of `case` with roughly `size` nodes (dense cases use
/// about `sqrt(size)` nodes so the edge count stays near `size`).
pub fn generate_case(case: GraphCase, size: usize, seed: u64) -> Result<GeneratedGraph> {
    let mut rng = StdRng::seed_from_u64(seed);
    match case {
        GraphCase::SparseRandom => sparse_random_case(&mut rng, size.max(32), 4),
        GraphCase::DenseRandom => dense_case(&mut rng, size.max(64), false),
        GraphCase::DenseZero => dense_case(&mut rng, size.max(64), true),
        GraphCase::AlmostLine => almost_line_case(&mut rng, size.max(8)),
        GraphCase::GridRandom => grid_random_case(&mut rng, size.max(16)),
        GraphCase::WrongDijkstraKiller => wrong_dijkstra_killer_case(&mut rng, size.max(32)),
        GraphCase::ParallelEdges => parallel_edges_case(&mut rng, size.max(16)),
    }
}

fn sparse_random_case(rng: &mut StdRng, n: usize, edge_factor: usize) -> Result<GeneratedGraph> {
    let m_target = n.saturating_mul(edge_factor).min(complete_edges(n));
    let mut edges = Vec::with_capacity(m_target);
    let mut used = HashSet::with_capacity(m_target * 2 + 1);

    while edges.len() < m_target {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        let w = rng.random_range(0..=C_MAX);
        push_unique_edge(&mut edges, &mut used, u, v, w);
    }

    let (source, target) = random_endpoints(rng, n);
    finish(n, &edges, source, target)
}

fn dense_case(rng: &mut StdRng, size: usize, zero: bool) -> Result<GeneratedGraph> {
    let n = floor_sqrt(size).max(8);
    let mut edges = Vec::with_capacity(complete_edges(n));

    for u in 0..n {
        for v in 0..n {
            if u != v {
                let w = if zero { 0 } else { rng.random_range(0..=C_MAX) };
                edges.push((u as u32, v as u32, w));
            }
        }
    }

    let (source, target) = random_endpoints(rng, n);
    finish(n, &edges, source, target)
}

fn almost_line_case(rng: &mut StdRng, n: usize) -> Result<GeneratedGraph> {
    let mut edges = Vec::with_capacity(n * 2);
    let mut used = HashSet::with_capacity(n * 4);

    for i in 0..(n - 1) {
        push_unique_edge(&mut edges, &mut used, i, i + 1, rng.random_range(0..=C_MAX));
    }

    let m_target = n.saturating_mul(2).min(complete_edges(n));
    while edges.len() < m_target {
        let a = rng.random_range(0..(n - 2));
        let b = (a + rng.random_range(2..=3)).min(n - 1);
        let (u, v) = if rng.random_bool(0.5) { (b, a) } else { (a, b) };
        push_unique_edge(&mut edges, &mut used, u, v, rng.random_range(0..=C_MAX));
    }

    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(rng);
    for edge in &mut edges {
        edge.0 = perm[edge.0 as usize] as u32;
        edge.1 = perm[edge.1 as usize] as u32;
    }
    edges.shuffle(rng);

    finish(n, &edges, perm[0], perm[n - 1])
}

fn grid_random_case(rng: &mut StdRng, size: usize) -> Result<GeneratedGraph> {
    let len = floor_sqrt(size).max(4);
    let n = len * len;
    let index = |i: usize, j: usize| -> u32 { (i * len + j) as u32 };
    let mut edges = Vec::with_capacity(n * 4);

    for i in 0..len {
        for j in 0..len {
            if j + 1 < len {
                edges.push((index(i, j), index(i, j + 1), rng.random_range(0..=C_MAX)));
                edges.push((index(i, j + 1), index(i, j), rng.random_range(0..=C_MAX)));
            }
            if i + 1 < len {
                edges.push((index(i, j), index(i + 1, j), rng.random_range(0..=C_MAX)));
                edges.push((index(i + 1, j), index(i, j), rng.random_range(0..=C_MAX)));
            }
        }
    }

    edges.shuffle(rng);
    let (source, target) = random_endpoints(rng, n);
    finish(n, &edges, source, target)
}

/// Two fans joined at a hub; each fan's cheap first hop leads to the most
/// expensive second hop, so a greedy choice that stops early is wrong.
fn wrong_dijkstra_killer_case(rng: &mut StdRng, size: usize) -> Result<GeneratedGraph> {
    let one = (size / 4).max(8);
    let n = one * 2 + 3;
    let hub = one + 1;
    let mut edges: Vec<(u32, u32, u64)> = Vec::with_capacity(one * 4);

    for i in 0..one {
        edges.push((0, (i + 1) as u32, i as u64));
        edges.push(((i + 1) as u32, hub as u32, ((one - i - 1) * 2) as u64));
        edges.push((hub as u32, (hub + 1 + i) as u32, (2 * i) as u64));
        edges.push(((hub + 1 + i) as u32, (n - 1) as u32, (one - i - 1) as u64));
    }

    edges.shuffle(rng);
    finish(n, &edges, 0, n - 1)
}

/// Sparse random graph where every edge is duplicated a few times with
/// different weights.
fn parallel_edges_case(rng: &mut StdRng, n: usize) -> Result<GeneratedGraph> {
    let mut edges = Vec::with_capacity(n * 8);
    for _ in 0..(n * 2) {
        let u = rng.random_range(0..n) as u32;
        let v = rng.random_range(0..n) as u32;
        for _ in 0..rng.random_range(1..=4) {
            edges.push((u, v, rng.random_range(0..=1_000)));
        }
    }

    edges.shuffle(rng);
    let (source, target) = random_endpoints(rng, n);
    finish(n, &edges, source, target)
}

fn finish(
    n: usize,
    edges: &[(u32, u32, u64)],
    source: usize,
    target: usize,
) -> Result<GeneratedGraph> {
    Ok(GeneratedGraph {
        graph: DirectedGraph::from_edges(n, edges)?,
        source,
        target,
    })
}

fn random_endpoints(rng: &mut StdRng, n: usize) -> (usize, usize) {
    let source = rng.random_range(0..n);
    let mut target = rng.random_range(0..n);
    if source == target {
        target = (target + 1) % n;
    }
    (source, target)
}

#[inline]
fn complete_edges(n: usize) -> usize {
    n.saturating_mul(n.saturating_sub(1))
}

#[inline]
fn floor_sqrt(value: usize) -> usize {
    (value as f64).sqrt().floor() as usize
}

#[inline]
fn push_unique_edge(
    edges: &mut Vec<(u32, u32, u64)>,
    used: &mut HashSet<u64>,
    u: usize,
    v: usize,
    weight: u64,
) -> bool {
    if u == v {
        return false;
    }
    let key = ((u as u64) << 32) | v as u64;
    if used.insert(key) {
        edges.push((u as u32, v as u32, weight));
        true
    } else {
        false
    }
}
