//! MatrixMarket coordinate-format loader.
//!
//! Expects a symmetric coordinate matrix: a `%%MatrixMarket` banner and any
//! number of `%`-comment lines, followed by a single `M N L` header line
//! (`M` rows, `N` columns, `L` non-zero entries), then `L` data lines of
//! `row column [weight]`. The core requires `M == N`. `weight`, if present,
//! is parsed and ignored (this loader does not assert `weight == 1`; see
//! `SPEC_FULL.md` §9 for why). Vertex ids on disk are 1-based; the in-memory
//! graph is allocated with `N + 1` vertices and index `0` is left unused so
//! on-disk ids map directly to [`crate::graph::Vertex`] ids. A data-line id
//! greater than `N`, or a declared `N` of `0`, is rejected rather than
//! handed to the builder.

use std::io::BufRead;
use std::path::Path;

use crate::error::{Error, Result};
use crate::graph::{CsrGraph, CsrGraphBuilder, Vertex};

pub fn load<P: AsRef<Path>>(path: P) -> Result<CsrGraph> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let reader = std::io::BufReader::new(file);
    let path_str = path.display().to_string();

    let mut lines = reader.lines().enumerate();
    let mut header = None;

    for (line_no, line) in &mut lines {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('%') {
            continue;
        }
        header = Some((line_no + 1, trimmed.to_string()));
        break;
    }

    let (header_line, header) = header.ok_or_else(|| Error::Parse {
        path: path_str.clone(),
        line: 0,
        message: "missing M N L header".to_string(),
    })?;

    let mut fields = header.split_whitespace();
    let parse_dim = |field: Option<&str>, name: &str| -> Result<u64> {
        field
            .and_then(|f| f.parse::<u64>().ok())
            .ok_or_else(|| Error::Parse {
                path: path_str.clone(),
                line: header_line,
                message: format!("expected integer {name} in header"),
            })
    };
    let rows = parse_dim(fields.next(), "row count")?;
    let cols = parse_dim(fields.next(), "column count")?;
    let _entries = parse_dim(fields.next(), "entry count")?;

    if rows != cols {
        return Err(Error::NotSquare { rows, cols });
    }
    if rows == 0 {
        return Err(Error::EmptyGraph);
    }

    let mut builder = CsrGraphBuilder::new(rows as usize + 1)?;

    for (line_no, line) in lines {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let mut fields = trimmed.split_whitespace();
        let row = parse_vertex(fields.next(), &path_str, line_no + 1)?;
        let col = parse_vertex(fields.next(), &path_str, line_no + 1)?;
        check_in_range(row, rows, &path_str, line_no + 1)?;
        check_in_range(col, rows, &path_str, line_no + 1)?;
        // The optional weight field is parsed but ignored.
        builder.add_edge(row, col);
    }

    Ok(builder.finalize())
}

fn parse_vertex(field: Option<&str>, path: &str, line: usize) -> Result<Vertex> {
    field
        .and_then(|f| f.parse::<Vertex>().ok())
        .ok_or_else(|| Error::Parse {
            path: path.to_string(),
            line,
            message: "expected an integer vertex id".to_string(),
        })
}

fn check_in_range(vertex: Vertex, rows: u64, path: &str, line: usize) -> Result<()> {
    if vertex as u64 > rows {
        return Err(Error::VertexOutOfRange {
            path: path.to_string(),
            line,
            vertex: vertex as u64,
            num_nodes: rows,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_tmp(contents: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn parses_symmetric_coordinate_matrix() {
        let f = write_tmp(
            "%%MatrixMarket matrix coordinate pattern symmetric\n\
             % a comment\n\
             3 3 2\n\
             1 2 1\n\
             2 3 1\n",
        );
        let graph = load(f.path()).unwrap();
        // N + 1 vertices, index 0 unused.
        assert_eq!(graph.num_nodes(), 4);
        assert_eq!(graph.degree(1), 1);
        assert_eq!(graph.degree(2), 2);
        assert_eq!(graph.degree(3), 1);
    }

    #[test]
    fn non_square_matrix_is_rejected() {
        let f = write_tmp("3 4 0\n");
        let err = load(f.path()).unwrap_err();
        assert!(matches!(err, Error::NotSquare { rows: 3, cols: 4 }));
    }

    #[test]
    fn missing_header_is_rejected() {
        let f = write_tmp("% only comments\n");
        let err = load(f.path()).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn out_of_range_vertex_id_is_rejected() {
        let f = write_tmp("3 3 1\n1 4 1\n");
        let err = load(f.path()).unwrap_err();
        assert!(matches!(
            err,
            Error::VertexOutOfRange {
                vertex: 4,
                num_nodes: 3,
                ..
            }
        ));
    }

    #[test]
    fn empty_matrix_is_rejected() {
        let f = write_tmp("0 0 0\n");
        let err = load(f.path()).unwrap_err();
        assert!(matches!(err, Error::EmptyGraph));
    }
}
