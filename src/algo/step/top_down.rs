use std::sync::atomic::{AtomicU64, Ordering};

use parallel_frontier::prelude::ParallelIterator;
use rayon::prelude::*;

use crate::algo::frontier::Frontier;
use crate::algo::solution::{Solution, NOT_VISITED};
use crate::graph::{CsrGraph, Vertex};

/// Number of frontier vertices handed to one `rayon` task at a time.
///
/// Chunking amortizes the per-task scheduling overhead across several
/// vertices; too large a chunk hurts load balance on skewed-degree graphs.
const GRANULARITY: usize = 256;

/// Expands every vertex in `frontier` (BFS layer `layer`), claiming each
/// unvisited neighbor via CAS on `distance`. Newly claimed vertices are
/// appended to `next_frontier`. Returns the number of directed edges
/// examined, summed across threads.
pub fn step(
    threads: &rayon::ThreadPool,
    graph: &CsrGraph,
    solution: &Solution,
    frontier: &Frontier<Vertex>,
    next_frontier: &Frontier<Vertex>,
    layer: i64,
) -> u64 {
    let edges_examined = AtomicU64::new(0);

    threads.install(|| {
        frontier.par_iter().chunks(GRANULARITY).for_each(|chunk| {
            let mut local_edges = 0u64;
            chunk.into_iter().for_each(|&u| {
                local_edges += graph.degree(u);
                for &v in graph.neighbors(u) {
                    if solution.distance(v) != NOT_VISITED {
                        continue;
                    }
                    if solution.try_claim(v, layer + 1, u) {
                        next_frontier.push(v);
                    }
                }
            });
            edges_examined.fetch_add(local_edges, Ordering::Relaxed);
        });
    });

    edges_examined.load(Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::CsrGraphBuilder;

    #[test]
    fn single_step_expands_one_layer() {
        let mut b = CsrGraphBuilder::new(4).unwrap();
        b.add_edge(0, 1);
        b.add_edge(1, 2);
        b.add_edge(2, 3);
        let graph = b.finalize();

        let solution = Solution::new(4);
        solution.seed(0);

        let threads = rayon::ThreadPoolBuilder::new()
            .num_threads(2)
            .build()
            .unwrap();
        let frontier = Frontier::with_threads(&threads, None);
        threads.install(|| frontier.push(0));
        let next = Frontier::with_threads(&threads, None);

        let edges = step(&threads, &graph, &solution, &frontier, &next, 0);

        assert_eq!(edges, 1);
        assert_eq!(solution.distance(1), 1);
        assert_eq!(solution.parent(1), 0);
        assert_eq!(solution.distance(2), NOT_VISITED);
    }
}
