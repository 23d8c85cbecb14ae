use std::sync::atomic::{AtomicU64, Ordering};

use rayon::prelude::*;

use crate::error::{Error, Result};

/// A vertex identifier. Vertex ids live in `[0, num_nodes())`.
pub type Vertex = u32;

/// A Compressed-Sparse-Row adjacency structure for a static, symmetrized, undirected graph.
///
/// For a graph with `N` nodes and `M` directed edges, `offsets` has `N + 1`
/// entries and `neighbors` has exactly `M` entries. For a vertex `v`,
/// `offsets[v]` is the start of `v`'s neighbor list in `neighbors`, and
/// `offsets[v + 1] - offsets[v]` is `v`'s degree.
///
/// Immutable after construction and safe to share across threads: all
/// traversal steps only ever read `offsets`/`neighbors`.
#[derive(Debug)]
pub struct CsrGraph {
    offsets: Box<[u64]>,
    neighbors: Box<[Vertex]>,
}

impl CsrGraph {
    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.offsets.len() - 1
    }

    #[inline]
    pub fn num_edges(&self) -> u64 {
        self.neighbors.len() as u64
    }

    #[inline]
    pub fn degree(&self, v: Vertex) -> u64 {
        let v = v as usize;
        self.offsets[v + 1] - self.offsets[v]
    }

    #[inline]
    pub fn neighbors(&self, v: Vertex) -> &[Vertex] {
        let v = v as usize;
        let start = self.offsets[v] as usize;
        let end = self.offsets[v + 1] as usize;
        &self.neighbors[start..end]
    }
}

/// Accumulates undirected edges and produces an immutable [`CsrGraph`].
///
/// Edges are symmetrized: adding `(u, v)` reserves a slot for `v` in `u`'s
/// adjacency list and for `u` in `v`'s. Duplicate edges and self-loops are
/// accepted; they just waste a CAS attempt during traversal (see
/// [`crate::algo::step::top_down`]).
pub struct CsrGraphBuilder {
    num_nodes: usize,
    edges: Vec<(Vertex, Vertex)>,
}

impl CsrGraphBuilder {
    pub fn new(num_nodes: usize) -> Result<Self> {
        if num_nodes == 0 {
            return Err(Error::EmptyGraph);
        }
        Ok(Self {
            num_nodes,
            edges: Vec::new(),
        })
    }

    pub fn with_edge_capacity(num_nodes: usize, capacity: usize) -> Result<Self> {
        if num_nodes == 0 {
            return Err(Error::EmptyGraph);
        }
        Ok(Self {
            num_nodes,
            edges: Vec::with_capacity(capacity),
        })
    }

    #[inline]
    pub fn add_edge(&mut self, u: Vertex, v: Vertex) {
        self.edges.push((u, v));
    }

    /// Symmetrizes the accumulated edges and packs them into CSR form.
    ///
    /// Degrees are computed in parallel with atomic counters, prefix-summed
    /// into `offsets`, and each edge endpoint is scattered into its reserved
    /// slot using an atomic write cursor seeded from `offsets` itself -
    /// the same counting-sort shape used by CSR builders across this
    /// ecosystem (e.g. `graph_builder`'s `Csr::from`).
    pub fn finalize(self) -> CsrGraph {
        let n = self.num_nodes;
        let degrees: Vec<AtomicU64> = (0..n).map(|_| AtomicU64::new(0)).collect();

        self.edges.par_iter().for_each(|&(u, v)| {
            degrees[u as usize].fetch_add(1, Ordering::Relaxed);
            degrees[v as usize].fetch_add(1, Ordering::Relaxed);
        });

        let mut offsets = vec![0u64; n + 1];
        let mut running = 0u64;
        for (i, degree) in degrees.iter().enumerate() {
            offsets[i] = running;
            running += degree.load(Ordering::Relaxed);
        }
        offsets[n] = running;

        let num_edges = running as usize;
        let cursors: Vec<AtomicU64> = offsets[..n].iter().map(|&o| AtomicU64::new(o)).collect();

        let mut neighbors = vec![0 as Vertex; num_edges];
        let neighbors_ptr = SyncSlicePtr(neighbors.as_mut_ptr());

        self.edges.par_iter().for_each(|&(u, v)| {
            let slot = cursors[u as usize].fetch_add(1, Ordering::Relaxed);
            // SAFETY: each vertex's reserved range [offsets[u], offsets[u+1])
            // is disjoint from every other vertex's range, and the cursor
            // for `u` never hands out the same slot twice, so this write is
            // unique across all threads.
            unsafe { *neighbors_ptr.0.add(slot as usize) = v };

            let slot = cursors[v as usize].fetch_add(1, Ordering::Relaxed);
            unsafe { *neighbors_ptr.0.add(slot as usize) = u };
        });

        CsrGraph {
            offsets: offsets.into_boxed_slice(),
            neighbors: neighbors.into_boxed_slice(),
        }
    }
}

/// A raw pointer wrapper used only to let the parallel scatter loop above
/// write into disjoint slices of the same allocation from multiple threads.
struct SyncSlicePtr(*mut Vertex);
unsafe impl Sync for SyncSlicePtr {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_graph_csr() {
        let mut b = CsrGraphBuilder::new(4).unwrap();
        b.add_edge(0, 1);
        b.add_edge(1, 2);
        b.add_edge(2, 3);
        let g = b.finalize();

        assert_eq!(g.num_nodes(), 4);
        assert_eq!(g.num_edges(), 6);
        assert_eq!(g.degree(0), 1);
        assert_eq!(g.degree(1), 2);
        assert_eq!(g.degree(2), 2);
        assert_eq!(g.degree(3), 1);

        assert_eq!(g.neighbors(0), &[1]);
        let mut n1 = g.neighbors(1).to_vec();
        n1.sort();
        assert_eq!(n1, vec![0, 2]);
    }

    #[test]
    fn duplicate_edges_and_self_loops_are_benign() {
        let mut b = CsrGraphBuilder::new(2).unwrap();
        b.add_edge(0, 1);
        b.add_edge(0, 1);
        b.add_edge(0, 0);
        let g = b.finalize();

        assert_eq!(g.num_nodes(), 2);
        // 0-1 twice (4 directed entries) + 0-0 self loop (2 directed entries)
        assert_eq!(g.num_edges(), 6);
        assert_eq!(g.degree(0), 4);
        assert_eq!(g.degree(1), 2);
    }

    #[test]
    fn zero_nodes_is_rejected() {
        assert!(matches!(CsrGraphBuilder::new(0), Err(Error::EmptyGraph)));
    }
}
