//! Immutable compressed-sparse-row graph storage.
//!
//! [`CsrGraph`] is the only graph representation this crate carries on the
//! traversal hot path; it is built once by a [`CsrGraphBuilder`] and then
//! shared read-only across however many threads a traversal uses.

mod csr;

pub use csr::{CsrGraph, CsrGraphBuilder, Vertex};
