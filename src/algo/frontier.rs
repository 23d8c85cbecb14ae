//! The per-level frontier buffer.
//!
//! A BFS level's frontier is an append-only collection of vertex ids built
//! up concurrently by many threads. Rather than hand-roll thread-local
//! shards and a parallel prefix-scan merge, this crate reuses
//! [`parallel_frontier::Frontier`], the same building block the teacher
//! crate uses for its own parallel breadth-first visit: each thread appends
//! to its own shard via [`Frontier::push`], and [`Frontier::par_iter`]
//! exposes a merged, contiguous view for the next step to consume.

use crate::graph::Vertex;

pub use parallel_frontier::prelude::Frontier;

/// A fresh, empty frontier bound to `threads`.
pub fn new(threads: &rayon::ThreadPool) -> Frontier<Vertex> {
    Frontier::with_threads(threads, None)
}
