//! Direction-optimizing parallel breadth-first search over a large static
//! undirected graph (Beamer et al., SC'12).
//!
//! The traversal core lives in [`algo`]: a CSR graph ([`graph`]) is read by
//! a top-down step, a bottom-up step, and a hybrid driver that switches
//! between them based on per-iteration frontier density. [`io`] loads CSR
//! graphs from MatrixMarket or edge-list files; it is a collaborator of the
//! core, not part of it.

pub mod algo;
pub mod error;
pub mod graph;
pub mod io;
pub mod utils;

/// Use `use hybrid_bfs::prelude::*;` to import the common types.
pub mod prelude {
    pub use crate::algo::{Method, Solution, Stats, NOT_VISITED};
    pub use crate::error::{Error, Result};
    pub use crate::graph::{CsrGraph, CsrGraphBuilder, Vertex};
}
