// src/output/edge_list.rs
// =============================================================================
// Reading and writing the edge-list file.
//
// Format:
//   <vertex count>
//   <source>  <target>
//   <source>  <target>
//   ...
//
// Lines end with the platform terminator. The reader accepts both "\n" and
// "\r\n" so files move between machines.
// =============================================================================

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::crawl::Edge;
use crate::error::{CrawlError, Result};

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

const SEPARATOR: &str = "  ";

pub fn write_edge_list<W: Write>(mut writer: W, vertex_count: usize, edges: &[Edge]) -> Result<()> {
    write!(writer, "{vertex_count}{LINE_ENDING}")?;
    for edge in edges {
        write!(writer, "{edge}{LINE_ENDING}")?;
    }
    writer.flush()?;
    Ok(())
}

// Creates (or truncates) `path` and writes the edge list into it
pub fn save_edge_list(path: &Path, vertex_count: usize, edges: &[Edge]) -> Result<()> {
    let file = File::create(path)?;
    write_edge_list(BufWriter::new(file), vertex_count, edges)
}

/// Parses an edge list back into its vertex count and edges.
pub fn read_edge_list<R: BufRead>(reader: R) -> Result<(usize, Vec<Edge>)> {
    let mut lines = reader.lines();

    let header = lines.next().transpose()?.ok_or_else(|| CrawlError::EdgeList {
        line: 1,
        reason: "missing vertex count".to_string(),
    })?;
    let vertex_count = header
        .trim_end_matches('\r')
        .parse::<usize>()
        .map_err(|e| CrawlError::EdgeList {
            line: 1,
            reason: format!("bad vertex count {header:?}: {e}"),
        })?;

    let mut edges = Vec::new();
    for (i, line) in lines.enumerate() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        let (source, target) = line.split_once(SEPARATOR).ok_or_else(|| CrawlError::EdgeList {
            line: i + 2,
            reason: format!("expected '<source>  <target>', got {line:?}"),
        })?;
        edges.push(Edge::new(source, target));
    }

    Ok((vertex_count, edges))
}

pub fn load_edge_list(path: &Path) -> Result<(usize, Vec<Edge>)> {
    read_edge_list(BufReader::new(File::open(path)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edges() -> Vec<Edge> {
        vec![
            Edge::new("/wiki/Seed", "/wiki/A"),
            Edge::new("/wiki/Seed", "/wiki/B"),
            Edge::new("/wiki/A", "/wiki/C_(disambiguation)"),
        ]
    }

    #[test]
    fn test_written_format() {
        let mut buf = Vec::new();
        write_edge_list(&mut buf, 5, &edges()[..2]).unwrap();
        let expected = format!("5{LINE_ENDING}/wiki/Seed  /wiki/A{LINE_ENDING}/wiki/Seed  /wiki/B{LINE_ENDING}");
        assert_eq!(String::from_utf8(buf).unwrap(), expected);
    }

    #[test]
    fn test_file_reconstructs_edges_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.txt");

        save_edge_list(&path, 100, &edges()).unwrap();
        let (vertex_count, read_back) = load_edge_list(&path).unwrap();

        assert_eq!(vertex_count, 100);
        assert_eq!(read_back, edges());
    }

    #[test]
    fn test_reads_crlf_files() {
        let text = "3\r\n/wiki/S  /wiki/A\r\n/wiki/S  /wiki/B\r\n";
        let (vertex_count, edges) = read_edge_list(text.as_bytes()).unwrap();
        assert_eq!(vertex_count, 3);
        assert_eq!(
            edges,
            vec![Edge::new("/wiki/S", "/wiki/A"), Edge::new("/wiki/S", "/wiki/B")]
        );
    }

    #[test]
    fn test_empty_graph() {
        let (vertex_count, edges) = read_edge_list("1\n".as_bytes()).unwrap();
        assert_eq!(vertex_count, 1);
        assert!(edges.is_empty());
    }

    #[test]
    fn test_rejects_bad_lines() {
        assert!(matches!(
            read_edge_list("".as_bytes()),
            Err(CrawlError::EdgeList { line: 1, .. })
        ));
        assert!(matches!(
            read_edge_list("many\n".as_bytes()),
            Err(CrawlError::EdgeList { line: 1, .. })
        ));
        assert!(matches!(
            read_edge_list("2\n/wiki/A /wiki/B\n".as_bytes()),
            Err(CrawlError::EdgeList { line: 2, .. })
        ));
    }
}
