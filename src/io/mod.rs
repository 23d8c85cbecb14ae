//! Loaders that turn an on-disk graph file into a finished [`crate::graph::CsrGraph`].
//!
//! This is the only contract the traversal core requires of its input: a
//! finished, immutable CSR graph. Everything here - file parsing, format
//! dispatch - is outside the hard core described in `SPEC_FULL.md`.

pub mod edge_list;
pub mod matrix_market;

use std::path::Path;

use crate::error::{Error, Result};
use crate::graph::CsrGraph;

/// Loads a graph from `path`, dispatching on its extension: `.mm` for
/// MatrixMarket, `.txt` for a plain edge list.
pub fn load<P: AsRef<Path>>(path: P) -> Result<CsrGraph> {
    let path = path.as_ref();
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("mm") => matrix_market::load(path),
        Some("txt") => edge_list::load(path),
        other => Err(Error::UnknownSuffix(
            other.unwrap_or_default().to_string(),
        )),
    }
}
