use std::sync::atomic::{AtomicU64, Ordering};

use rayon::prelude::*;

use crate::algo::frontier::Frontier;
use crate::algo::solution::{Solution, NOT_VISITED};
use crate::graph::{CsrGraph, Vertex};

/// Probes every still-unvisited vertex for a neighbor in BFS layer `layer`.
///
/// The mark and gather phases of the textbook algorithm collapse into a
/// single parallel filter: `into_par_iter().filter(...)` partitions
/// `[0, num_nodes)` across threads and yields only the unvisited ids, so the
/// probe phase that follows costs time proportional to the number of
/// unvisited vertices rather than to the whole graph. Each surviving vertex
/// is owned by exactly one thread for the remainder of the step, so its
/// `distance`/`parent` writes are plain stores (see
/// [`Solution::set_bottom_up`]).
pub fn step(
    threads: &rayon::ThreadPool,
    graph: &CsrGraph,
    solution: &Solution,
    next_frontier: &Frontier<Vertex>,
    layer: i64,
) -> u64 {
    let num_nodes = graph.num_nodes() as Vertex;
    let edges_examined = AtomicU64::new(0);

    threads.install(|| {
        (0..num_nodes)
            .into_par_iter()
            .filter(|&v| solution.distance(v) == NOT_VISITED)
            .for_each(|v| {
                let mut examined = 0u64;
                for &u in graph.neighbors(v) {
                    examined += 1;
                    if solution.distance(u) == layer {
                        solution.set_bottom_up(v, layer + 1, u);
                        next_frontier.push(v);
                        break;
                    }
                }
                edges_examined.fetch_add(examined, Ordering::Relaxed);
            });
    });

    edges_examined.load(Ordering::Relaxed)
}
