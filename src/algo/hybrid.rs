use dsi_progress_logger::ProgressLog;
use parallel_frontier::prelude::ParallelIterator;

use crate::algo::frontier::{self, Frontier};
use crate::algo::solution::Solution;
use crate::algo::step::{bottom_up, top_down};
use crate::error::{Error, Result};
use crate::graph::{CsrGraph, Vertex};

/// Beamer et al.'s direction-switch constant: top-down yields to bottom-up
/// once the frontier's edge mass exceeds `1/ALPHA` of the unexplored edge
/// budget.
pub const ALPHA: u64 = 14;

/// Beamer et al.'s direction-switch constant: bottom-up yields back to
/// top-down once the frontier shrinks below `1/BETA` of the vertex count.
pub const BETA: u64 = 24;

/// Which BFS step(s) a traversal is allowed to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    TopDown,
    BottomUp,
    Hybrid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    TopDown,
    BottomUp,
}

/// Summary statistics of a completed traversal, used for the CLI's
/// `elapsed_ms mteps` output line.
#[derive(Debug, Clone, Copy)]
pub struct Stats {
    pub elapsed: std::time::Duration,
    pub num_undirected_edges: u64,
    pub iterations: u32,
}

/// Runs a full BFS traversal from `source`, using `method` to pick the
/// step(s), and returns the resulting [`Solution`] together with timing
/// and throughput statistics.
///
/// This is the hybrid driver's state machine (§4.F): each iteration
/// recomputes the frontier's edge mass `m_f` and the remaining unexplored
/// edge mass `m_u`, decides top-down vs. bottom-up, runs that step, and
/// swaps frontiers. The loop terminates when the next frontier is empty.
pub fn run(
    graph: &CsrGraph,
    source: Vertex,
    method: Method,
    threads: &rayon::ThreadPool,
    pl: &mut impl ProgressLog,
) -> Result<(Solution, Stats)> {
    if source as usize >= graph.num_nodes() {
        return Err(Error::SourceOutOfRange {
            source,
            num_nodes: graph.num_nodes() as u32,
        });
    }

    let start = std::time::Instant::now();
    let solution = Solution::new(graph.num_nodes());
    solution.seed(source);

    let mut current: Frontier<Vertex> = frontier::new(threads);
    let mut next: Frontier<Vertex> = frontier::new(threads);
    threads.install(|| current.push(source));

    let total_edges = graph.num_edges();
    let mut edges_examined = 0u64;
    let mut direction = Direction::TopDown;
    let mut iteration: u32 = 0;

    while !current.is_empty() {
        let n_f = current.len() as u64;
        let m_f: u64 = threads.install(|| current.par_iter().map(|&u| graph.degree(u)).sum());
        let m_u = total_edges.saturating_sub(edges_examined);

        direction = match method {
            Method::TopDown => Direction::TopDown,
            Method::BottomUp => Direction::BottomUp,
            Method::Hybrid => match direction {
                Direction::TopDown if m_u > 0 && m_f > m_u / ALPHA => Direction::BottomUp,
                Direction::BottomUp if n_f < graph.num_nodes() as u64 / BETA => Direction::TopDown,
                other => other,
            },
        };

        let layer = iteration as i64;
        let step_edges = match direction {
            Direction::TopDown => {
                top_down::step(threads, graph, &solution, &current, &next, layer)
            }
            Direction::BottomUp => bottom_up::step(threads, graph, &solution, &next, layer),
        };
        edges_examined += step_edges;

        log::debug!(
            "iteration {} direction {:?} frontier {} edges_checked {}",
            iteration,
            direction,
            n_f,
            step_edges
        );
        pl.update_with_count(n_f as usize);

        std::mem::swap(&mut current, &mut next);
        next.clear();
        iteration += 1;
    }

    Ok((
        solution,
        Stats {
            elapsed: start.elapsed(),
            num_undirected_edges: total_edges / 2,
            iterations: iteration,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::CsrGraphBuilder;
    use dsi_progress_logger::prelude::*;

    fn path_graph() -> CsrGraph {
        let mut b = CsrGraphBuilder::new(4).unwrap();
        b.add_edge(0, 1);
        b.add_edge(1, 2);
        b.add_edge(2, 3);
        b.finalize()
    }

    #[test]
    fn hybrid_matches_pure_top_down_on_a_path() {
        let graph = path_graph();
        let threads = rayon::ThreadPoolBuilder::new()
            .num_threads(4)
            .build()
            .unwrap();

        let (td, _) = run(&graph, 0, Method::TopDown, &threads, &mut no_logging![]).unwrap();
        let (hy, _) = run(&graph, 0, Method::Hybrid, &threads, &mut no_logging![]).unwrap();
        let (bu, _) = run(&graph, 0, Method::BottomUp, &threads, &mut no_logging![]).unwrap();

        assert_eq!(td.distances(), vec![0, 1, 2, 3]);
        assert_eq!(hy.distances(), td.distances());
        assert_eq!(bu.distances(), td.distances());
    }

    #[test]
    fn out_of_range_source_is_an_input_error() {
        let graph = path_graph();
        let threads = rayon::ThreadPoolBuilder::new()
            .num_threads(1)
            .build()
            .unwrap();
        let result = run(&graph, 99, Method::Hybrid, &threads, &mut no_logging![]);
        assert!(matches!(result, Err(Error::SourceOutOfRange { .. })));
    }
}
