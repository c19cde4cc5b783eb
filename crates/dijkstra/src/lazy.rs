use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::graph::DirectedGraph;
use crate::shortest_paths::Distance;

/// Distances only, using `BinaryHeap` with lazy deletion instead of
/// decrease-key. Stale entries are skipped on pop. Sums saturate at
/// `u64::MAX`. An out-of-range source yields an all-unreachable vector.
pub fn dijkstra_lazy(graph: &DirectedGraph, source: usize) -> Vec<Distance> {
    let n = graph.vertex_count();
    let mut dist = vec![Distance::Unreachable; n];
    if source >= n {
        return dist;
    }

    let mut heap = BinaryHeap::new();
    dist[source] = Distance::ZERO;
    heap.push(Reverse((0_u64, source)));

    while let Some(Reverse((d, u))) = heap.pop() {
        if dist[u] != Distance::Finite(d) {
            continue;
        }

        for edge in graph.out_edges(u) {
            let v = edge.to as usize;
            let cand = d.saturating_add(edge.weight);
            if Distance::Finite(cand) < dist[v] {
                dist[v] = Distance::Finite(cand);
                heap.push(Reverse((cand, v)));
            }
        }
    }

    dist
}
