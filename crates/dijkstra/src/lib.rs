mod driver;
mod error;
pub mod generator;
pub mod graph;
mod lazy;
pub mod pending_queue;
pub mod samples;
pub mod shortest_paths;

pub use driver::dijkstra;
pub use driver::shortest_path;
pub use error::Error;
pub use error::Result;
pub use graph::DirectedGraph;
pub use graph::Edge;
pub use lazy::dijkstra_lazy;
pub use pending_queue::PendingQueue;
pub use shortest_paths::Distance;
pub use shortest_paths::ShortestPaths;

#[cfg(test)]
mod tests {
    use rand::Rng;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::dijkstra;
    use crate::dijkstra_lazy;
    use crate::generator::GraphCase;
    use crate::generator::generate_case;
    use crate::graph::DirectedGraph;
    use crate::shortest_paths::Distance;
    use crate::shortest_paths::ShortestPaths;

    fn random_graph(n: usize, m: usize, max_weight: u64, seed: u64) -> DirectedGraph {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut g = DirectedGraph::new(n);
        for _ in 0..m {
            let u = rng.random_range(0..n);
            let v = rng.random_range(0..n);
            g.insert_link(u, v, rng.random_range(0..=max_weight)).unwrap();
        }
        g
    }

    fn bellman_ford(graph: &DirectedGraph, source: usize) -> Vec<Distance> {
        let n = graph.vertex_count();
        let mut dist = vec![Distance::Unreachable; n];
        dist[source] = Distance::ZERO;
        for _ in 0..n {
            let mut changed = false;
            for (u, v, w) in graph.edges() {
                let Distance::Finite(du) = dist[u as usize] else {
                    continue;
                };
                let cand = Distance::Finite(du + w);
                if cand < dist[v as usize] {
                    dist[v as usize] = cand;
                    changed = true;
                }
            }
            if !changed {
                break;
            }
        }
        dist
    }

    fn assert_consistent(graph: &DirectedGraph, sp: &ShortestPaths, context: &str) {
        assert_eq!(sp.distance(sp.source()), Distance::ZERO, "{context}");
        assert_eq!(sp.predecessor(sp.source()), None, "{context}");

        for v in 0..graph.vertex_count() {
            let Some(path) = sp.path_to(v) else {
                assert_eq!(sp.distance(v), Distance::Unreachable, "{context}");
                assert_eq!(sp.predecessor(v), None, "{context}");
                continue;
            };
            assert_eq!(path.first(), Some(&sp.source()), "{context}");
            assert_eq!(path.last(), Some(&v), "{context}");

            let mut total = 0_u64;
            for hop in path.windows(2) {
                let best = graph
                    .out_edges(hop[0])
                    .filter(|e| e.to as usize == hop[1])
                    .map(|e| e.weight)
                    .min();
                let Some(w) = best else {
                    panic!("{context}: missing edge {} -> {}", hop[0], hop[1]);
                };
                total += w;
            }
            assert_eq!(sp.distance(v), Distance::Finite(total), "{context} node={v}");
        }
    }

    #[test]
    fn matches_bellman_ford_random() {
        for seed in 0..40_u64 {
            let n = 1 + (seed as usize * 7) % 48;
            let g = random_graph(n, n * 4, 50, 0xBE11_0000 + seed);
            let src = (seed as usize) % n;
            let sp = dijkstra(&g, src).unwrap();
            assert_eq!(sp.distances(), bellman_ford(&g, src), "seed={seed}");
            assert_consistent(&g, &sp, &format!("seed={seed}"));
        }
    }

    #[test]
    fn sparse_graphs_leave_nodes_unreachable() {
        for seed in 0..10_u64 {
            let g = random_graph(60, 30, 1_000, 0x5A55_0000 + seed);
            let sp = dijkstra(&g, 0).unwrap();
            assert_eq!(sp.distances(), bellman_ford(&g, 0), "seed={seed}");
            assert_consistent(&g, &sp, &format!("seed={seed}"));
        }
    }

    #[test]
    fn matches_lazy_baseline_on_generated_cases() {
        for (i, case) in GraphCase::ALL.into_iter().enumerate() {
            let input = generate_case(case, 1_024, 0x5EED_0000 + i as u64).unwrap();
            let sp = dijkstra(&input.graph, input.source).unwrap();
            assert_eq!(
                sp.distances(),
                dijkstra_lazy(&input.graph, input.source),
                "case={case:?}"
            );
            assert_consistent(&input.graph, &sp, case.label());
        }
    }

    #[test]
    fn repeated_runs_are_identical() {
        let g = random_graph(40, 200, 9, 0x1DE4);
        for src in [0, 17, 39] {
            let first = dijkstra(&g, src).unwrap();
            let second = dijkstra(&g, src).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn parallel_edges_behave_like_cheapest_edge() {
        for seed in 0..10_u64 {
            let mut rng = StdRng::seed_from_u64(0xDA7A_0000 + seed);
            let base = random_graph(30, 90, 100, 0x9A9A_0000 + seed);
            let mut multi = DirectedGraph::new(30);
            for (u, v, w) in base.edges() {
                multi.insert_link(u as usize, v as usize, w).unwrap();
                for _ in 0..rng.random_range(0..3) {
                    let extra = w + rng.random_range(0..50);
                    multi.insert_link(u as usize, v as usize, extra).unwrap();
                }
            }
            let src = (seed as usize) % 30;
            assert_eq!(
                dijkstra(&multi, src).unwrap().distances(),
                dijkstra(&base, src).unwrap().distances(),
                "seed={seed}"
            );
        }
    }
}
