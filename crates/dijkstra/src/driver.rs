use tracing::debug;
use tracing::debug_span;
use tracing::trace;

use crate::error::Error;
use crate::error::Result;
use crate::graph::DirectedGraph;
use crate::pending_queue::PendingQueue;
use crate::shortest_paths::Distance;
use crate::shortest_paths::ShortestPaths;

/// Single-source shortest paths from `source` over non-negative weights.
///
/// Every node is extracted exactly once; its distance is final at that
/// point, so edges into extracted nodes are skipped.
///
/// A candidate sum that overflows `u64` never improves a distance. The run
/// fails with [`Error::DistanceOverflow`] only when some node is reachable
/// solely through such paths, since its true distance cannot be stored.
pub fn dijkstra(graph: &DirectedGraph, source: usize) -> Result<ShortestPaths> {
    let n = graph.vertex_count();
    let _span = debug_span!("dijkstra", source, nodes = n, edges = graph.edge_count())
        .entered();

    let mut paths = ShortestPaths::new(graph, source)?;
    let mut queue = PendingQueue::new(&paths)?;
    let mut relaxations = 0_usize;
    let mut overflowed = Vec::new();

    while queue.not_empty() {
        let (u, key) = queue.extract_min()?;
        let Distance::Finite(du) = key else {
            trace!(node = u, "extracted unreachable");
            continue;
        };
        trace!(node = u, distance = du, "extracted");

        for edge in graph.out_edges(u) {
            let v = edge.to as usize;
            if !queue.is_pending(v) {
                continue;
            }
            let Some(cand) = du.checked_add(edge.weight) else {
                trace!(from = u, to = v, "candidate overflows");
                overflowed.push(v);
                continue;
            };
            if Distance::Finite(cand) < paths.distance(v) {
                paths.relax(v, cand, u);
                queue.decrease_key(v, cand);
                relaxations += 1;
                trace!(from = u, to = v, distance = cand, "relaxed");
            }
        }
    }

    if let Some(&node) = overflowed.iter().find(|&&v| !paths.is_reachable(v)) {
        return Err(Error::DistanceOverflow { node });
    }

    debug!(
        reachable = (0..n).filter(|&v| paths.is_reachable(v)).count(),
        relaxations, "dijkstra finished"
    );
    Ok(paths)
}

/// Runs [`dijkstra`] and reconstructs the path to `target` together with
/// its total weight. `Ok(None)` when `target` is unreachable.
pub fn shortest_path(
    graph: &DirectedGraph,
    source: usize,
    target: usize,
) -> Result<Option<(Vec<usize>, u64)>> {
    dijkstra(graph, source)?.route(target)
}

#[cfg(test)]
mod tests {
    use super::dijkstra;
    use super::shortest_path;
    use crate::Error;
    use crate::graph::DirectedGraph;
    use crate::shortest_paths::Distance;

    fn finite(values: &[u64]) -> Vec<Distance> {
        values.iter().map(|&d| Distance::Finite(d)).collect()
    }

    #[test]
    fn single_node_graph() {
        let g = DirectedGraph::new(1);
        let sp = dijkstra(&g, 0).unwrap();
        assert_eq!(sp.distances(), vec![Distance::ZERO]);
        assert_eq!(sp.predecessor(0), None);
    }

    #[test]
    fn source_out_of_range() {
        let g = DirectedGraph::new(2);
        assert_eq!(
            dijkstra(&g, 2),
            Err(Error::NodeOutOfRange {
                node: 2,
                node_count: 2
            })
        );
        assert!(shortest_path(&g, 0, 5).is_err());
    }

    #[test]
    fn zero_weights_and_unreachable_nodes() {
        let edges = [(0, 1, 0), (1, 2, 0), (2, 3, 0), (4, 5, 7)];
        let g = DirectedGraph::from_edges(6, &edges).unwrap();
        let sp = dijkstra(&g, 0).unwrap();
        assert_eq!(&sp.distances()[..4], &finite(&[0, 0, 0, 0])[..]);
        assert_eq!(sp.distance(4), Distance::Unreachable);
        assert_eq!(sp.distance(5), Distance::Unreachable);
        assert_eq!(sp.predecessor(5), None);
        assert_eq!(sp.path_to(3), Some(vec![0, 1, 2, 3]));
    }

    #[test]
    fn non_zero_source_ignores_upstream_nodes() {
        let edges = [(0, 1, 1), (1, 2, 2), (2, 3, 3), (3, 1, 1)];
        let g = DirectedGraph::from_edges(4, &edges).unwrap();
        let sp = dijkstra(&g, 2).unwrap();
        assert_eq!(sp.distance(0), Distance::Unreachable);
        assert_eq!(sp.distances()[1..], finite(&[4, 0, 3])[..]);
        assert_eq!(sp.path_to(1), Some(vec![2, 3, 1]));
    }

    #[test]
    fn parallel_edges_pick_the_cheapest() {
        let edges = [(0, 1, 5), (0, 1, 1), (1, 2, 2), (1, 2, 9)];
        let multi = DirectedGraph::from_edges(3, &edges).unwrap();
        let single = DirectedGraph::from_edges(3, &[(0, 1, 1), (1, 2, 2)]).unwrap();
        assert_eq!(dijkstra(&multi, 0), dijkstra(&single, 0));
        assert_eq!(shortest_path(&multi, 0, 2), Ok(Some((vec![0, 1, 2], 3))));
    }

    #[test]
    fn self_loops_are_harmless() {
        let g = DirectedGraph::from_edges(2, &[(0, 0, 0), (0, 1, 3), (1, 1, 1)]).unwrap();
        let sp = dijkstra(&g, 0).unwrap();
        assert_eq!(sp.distances(), finite(&[0, 3]));
        assert_eq!(sp.predecessors(), vec![None, Some(0)]);
    }

    #[test]
    fn overflowing_path_is_reported() {
        let g = DirectedGraph::from_edges(3, &[(0, 1, u64::MAX), (1, 2, 1)]).unwrap();
        assert_eq!(dijkstra(&g, 0), Err(Error::DistanceOverflow { node: 2 }));
    }

    #[test]
    fn overflowing_detour_does_not_abort() {
        let edges = [(0, 1, 1), (0, 2, 10), (1, 2, u64::MAX)];
        let g = DirectedGraph::from_edges(3, &edges).unwrap();
        let sp = dijkstra(&g, 0).unwrap();
        assert_eq!(sp.distances(), finite(&[0, 1, 10]));
        assert_eq!(sp.predecessor(2), Some(0));
        assert_eq!(sp.distances(), crate::dijkstra_lazy(&g, 0));
    }

    #[test]
    fn overflowing_first_reach_is_replaced_by_later_path() {
        // Node 3 is first seen through an overflowing sum from node 1 and
        // then reached cheaply from node 2, which is extracted later.
        let edges = [
            (0, 1, u64::MAX - 5),
            (0, 2, u64::MAX - 3),
            (1, 3, 10),
            (2, 3, 1),
        ];
        let g = DirectedGraph::from_edges(4, &edges).unwrap();
        let sp = dijkstra(&g, 0).unwrap();
        assert_eq!(sp.distance(3), Distance::Finite(u64::MAX - 2));
        assert_eq!(sp.path_to(3), Some(vec![0, 2, 3]));
    }

    #[test]
    fn max_weight_edge_alone_is_fine() {
        let g = DirectedGraph::from_edges(2, &[(0, 1, u64::MAX)]).unwrap();
        let sp = dijkstra(&g, 0).unwrap();
        assert_eq!(sp.distance(1), Distance::Finite(u64::MAX));
        assert!(sp.distance(1) < Distance::Unreachable);
    }

    #[test]
    fn unreachable_target_has_no_path() {
        let g = DirectedGraph::from_edges(3, &[(0, 1, 1)]).unwrap();
        assert_eq!(shortest_path(&g, 0, 2), Ok(None));
        assert_eq!(shortest_path(&g, 0, 0), Ok(Some((vec![0], 0))));
    }
}
