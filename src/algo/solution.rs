use std::sync::atomic::{AtomicI64, Ordering};

use crate::graph::Vertex;

/// Sentinel distance/parent value for a vertex that has not been reached.
pub const NOT_VISITED: i64 = -1;

/// The shared mutable state of a single BFS traversal: a distance and a
/// parent for every vertex.
///
/// `distance` is written only through [`Solution::try_claim`] (top-down, a
/// CAS) or [`Solution::set_bottom_up`] (bottom-up, a plain store under the
/// step's per-vertex exclusivity). `parent` is written exactly once per
/// vertex, right after the corresponding distance write succeeds.
pub struct Solution {
    distance: Vec<AtomicI64>,
    parent: Vec<AtomicI64>,
}

impl Solution {
    /// Allocates a fresh, all-unvisited solution for a graph with `num_nodes` vertices.
    pub fn new(num_nodes: usize) -> Self {
        Self {
            distance: (0..num_nodes).map(|_| AtomicI64::new(NOT_VISITED)).collect(),
            parent: (0..num_nodes).map(|_| AtomicI64::new(NOT_VISITED)).collect(),
        }
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.distance.len()
    }

    /// Relaxed read of `distance[v]`. Used for the top-down quick
    /// pre-check and for bottom-up's "is this neighbor in layer L" probe;
    /// both tolerate a stale `NOT_VISITED` because the authority is either
    /// the CAS (top-down) or the fact that each vertex is only ever written
    /// by one thread per step (bottom-up).
    #[inline]
    pub fn distance(&self, v: Vertex) -> i64 {
        self.distance[v as usize].load(Ordering::Relaxed)
    }

    #[inline]
    pub fn parent(&self, v: Vertex) -> i64 {
        self.parent[v as usize].load(Ordering::Relaxed)
    }

    /// Seeds the source vertex: `distance[s] = 0`, `parent[s] = NOT_VISITED`.
    pub fn seed(&self, source: Vertex) {
        self.distance[source as usize].store(0, Ordering::Release);
    }

    /// Top-down claim: attempts `distance[v]: NOT_VISITED -> new_distance`.
    /// On success, also writes `parent[v] = parent_candidate` and returns
    /// `true`; the caller is the sole writer of `parent[v]` in that case. On
    /// failure (another thread won the race, or `v` was already visited in
    /// an earlier step) returns `false` and touches nothing else.
    #[inline]
    pub fn try_claim(&self, v: Vertex, new_distance: i64, parent_candidate: Vertex) -> bool {
        let won = self.distance[v as usize]
            .compare_exchange(
                NOT_VISITED,
                new_distance,
                Ordering::AcqRel,
                Ordering::Relaxed,
            )
            .is_ok();
        if won {
            self.parent[v as usize].store(parent_candidate as i64, Ordering::Release);
        }
        won
    }

    /// Bottom-up claim: `v` is partitioned to exactly one thread this step,
    /// so both writes are plain stores, not atomic RMWs.
    #[inline]
    pub fn set_bottom_up(&self, v: Vertex, new_distance: i64, parent_candidate: Vertex) {
        self.distance[v as usize].store(new_distance, Ordering::Release);
        self.parent[v as usize].store(parent_candidate as i64, Ordering::Release);
    }

    /// Copies out the final distance array. Intended for callers once the
    /// traversal has terminated.
    pub fn distances(&self) -> Vec<i64> {
        self.distance.iter().map(|d| d.load(Ordering::Acquire)).collect()
    }

    /// Copies out the final parent array. Intended for callers once the
    /// traversal has terminated.
    pub fn parents(&self) -> Vec<i64> {
        self.parent.iter().map(|p| p.load(Ordering::Acquire)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_then_claim() {
        let sol = Solution::new(4);
        sol.seed(0);
        assert_eq!(sol.distance(0), 0);
        assert_eq!(sol.parent(0), NOT_VISITED);

        assert!(sol.try_claim(1, 1, 0));
        assert_eq!(sol.distance(1), 1);
        assert_eq!(sol.parent(1), 0);

        // A second claim attempt on an already-visited vertex must fail and
        // must not clobber the existing parent.
        assert!(!sol.try_claim(1, 1, 2));
        assert_eq!(sol.parent(1), 0);
    }

    #[test]
    fn bottom_up_claim_is_a_plain_store() {
        let sol = Solution::new(3);
        sol.seed(0);
        sol.set_bottom_up(1, 1, 0);
        assert_eq!(sol.distance(1), 1);
        assert_eq!(sol.parent(1), 0);
    }
}
