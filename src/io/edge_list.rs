//! Plain edge-list loader.
//!
//! One undirected edge per line as `u v`, 0-based vertex ids. Lines starting
//! with `#`, and blank lines, are skipped. The vertex count is `max(id) + 1`
//! over the whole file.

use std::io::BufRead;
use std::path::Path;

use crate::error::{Error, Result};
use crate::graph::{CsrGraph, CsrGraphBuilder, Vertex};

pub fn load<P: AsRef<Path>>(path: P) -> Result<CsrGraph> {
    let path = path.as_ref();
    let path_str = path.display().to_string();
    let file = std::fs::File::open(path)?;
    let reader = std::io::BufReader::new(file);

    let mut edges = Vec::new();
    let mut max_id: Option<Vertex> = None;

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut fields = trimmed.split_whitespace();
        let u = parse_vertex(fields.next(), &path_str, line_no + 1)?;
        let v = parse_vertex(fields.next(), &path_str, line_no + 1)?;

        max_id = Some(max_id.map_or(u.max(v), |m| m.max(u).max(v)));
        edges.push((u, v));
    }

    let num_nodes = match max_id {
        Some(id) => id as usize + 1,
        None => return Err(Error::EmptyGraph),
    };

    let mut builder = CsrGraphBuilder::with_edge_capacity(num_nodes, edges.len())?;
    for (u, v) in edges {
        builder.add_edge(u, v);
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
    fn parses_edges_and_skips_comments() {
        let f = write_tmp(
            "# a path graph\n\
             0 1\n\
             \n\
             1 2\n\
             2 3\n",
        );
        let graph = load(f.path()).unwrap();
        assert_eq!(graph.num_nodes(), 4);
        assert_eq!(graph.degree(0), 1);
        assert_eq!(graph.degree(1), 2);
    }

    #[test]
    fn empty_file_is_rejected() {
        let f = write_tmp("# nothing but comments\n");
        let err = load(f.path()).unwrap_err();
        assert!(matches!(err, Error::EmptyGraph));
    }

    #[test]
    fn malformed_line_is_rejected() {
        let f = write_tmp("0 not-a-number\n");
        let err = load(f.path()).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }
}
