//! Error types shared by the graph loaders and the traversal core.

use thiserror::Error;

/// Errors that can surface while loading a graph or validating a traversal request.
///
/// Invariant violations inside a BFS step (capacity overflow, out-of-range
/// vertex produced by the core itself) are programmer bugs and are asserted,
/// not represented here: a well-formed [`crate::graph::CsrGraph`] and a
/// valid source always produce a valid solution.
#[derive(Debug, Error)]
pub enum Error {
    #[error("error while reading graph file")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("{path}:{line}: {message}")]
    Parse {
        path: String,
        line: usize,
        message: String,
    },

    #[error("unsupported graph file suffix: {0}")]
    UnknownSuffix(String),

    #[error("matrix is not square: {rows} rows, {cols} columns")]
    NotSquare { rows: u64, cols: u64 },

    #[error("graph has no vertices")]
    EmptyGraph,

    #[error("{path}:{line}: vertex id {vertex} does not fit in a matrix with {num_nodes} rows/columns")]
    VertexOutOfRange {
        path: String,
        line: usize,
        vertex: u64,
        num_nodes: u64,
    },

    #[error("source vertex {source} is out of range for a graph with {num_nodes} vertices")]
    SourceOutOfRange { source: u32, num_nodes: u32 },

    #[error("unknown bfs method: {0} (expected 0 = top-down, 1 = bottom-up, 2 = hybrid)")]
    UnknownMethod(u8),
}

pub type Result<T> = std::result::Result<T, Error>;
