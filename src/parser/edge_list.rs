//! Parser for `go mod graph` edge lists.
//!
//! Each line of the input names one direct requirement as
//! `<parent> <child>`. Tokens are kept verbatim; splitting a token into
//! module path and version is left to the caller.

use std::fs;
use std::io::Read;
use std::path::Path;

/// Errors that can occur while reading an edge list.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Failed to read the input from disk or stdin.
    #[error("Failed to read edge list: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for parser operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// A single `parent child` pair from the edge list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<'a> {
    /// The requiring module token (first column)
    pub parent: &'a str,
    /// The required module token (second column)
    pub child: &'a str,
}

impl<'a> Edge<'a> {
    /// Creates a new edge.
    pub fn new(parent: &'a str, child: &'a str) -> Self {
        Self { parent, child }
    }

    /// Returns true if the edge points back at its own parent.
    pub fn is_self_edge(&self) -> bool {
        self.parent == self.child
    }
}

/// Parses one line into an edge.
///
/// The line is split on single spaces. Lines with fewer than two tokens
/// yield `None`; tokens after the second are ignored.
///
/// # Example
///
/// ```
/// use modtree::parser::parse_line;
///
/// let edge = parse_line("example.com/app golang.org/x/text@v0.3.0").unwrap();
/// assert_eq!(edge.parent, "example.com/app");
/// assert_eq!(edge.child, "golang.org/x/text@v0.3.0");
///
/// assert!(parse_line("").is_none());
/// assert!(parse_line("lonely-token").is_none());
/// ```
pub fn parse_line(line: &str) -> Option<Edge<'_>> {
    let mut tokens = line.split(' ');
    let parent = tokens.next()?;
    let child = tokens.next()?;
    Some(Edge::new(parent, child))
}

/// Parses a whole edge list, silently dropping malformed lines.
///
/// # Example
///
/// ```
/// use modtree::parser::parse_edges;
///
/// let edges = parse_edges("A B\nA C\n\nB D\n");
/// assert_eq!(edges.len(), 3);
/// assert_eq!(edges[2].parent, "B");
/// ```
pub fn parse_edges(content: &str) -> Vec<Edge<'_>> {
    content.split('\n').filter_map(parse_line).collect()
}

/// Reads an edge list from a file.
pub fn read_file(path: &Path) -> ParseResult<String> {
    Ok(fs::read_to_string(path)?)
}

/// Reads an edge list from any reader (typically stdin).
pub fn read_from<R: Read>(mut reader: R) -> ParseResult<String> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_basic() {
        let edge = parse_line("A B").unwrap();
        assert_eq!(edge, Edge::new("A", "B"));
        assert!(!edge.is_self_edge());
    }

    #[test]
    fn test_parse_line_keeps_tokens_verbatim() {
        let edge = parse_line("github.com/foo/bar github.com/baz/qux@v1.2.3").unwrap();
        assert_eq!(edge.parent, "github.com/foo/bar");
        assert_eq!(edge.child, "github.com/baz/qux@v1.2.3");
    }

    #[test]
    fn test_parse_line_ignores_extra_columns() {
        let edge = parse_line("A B C").unwrap();
        assert_eq!(edge, Edge::new("A", "B"));
    }

    #[test]
    fn test_parse_line_too_few_tokens() {
        assert!(parse_line("").is_none());
        assert!(parse_line("A").is_none());
    }

    #[test]
    fn test_parse_line_splits_on_single_space() {
        // A doubled separator produces an empty second token
        let edge = parse_line("A  B").unwrap();
        assert_eq!(edge.parent, "A");
        assert_eq!(edge.child, "");
    }

    #[test]
    fn test_parse_line_self_edge() {
        assert!(parse_line("A A").unwrap().is_self_edge());
    }

    #[test]
    fn test_parse_edges_skips_malformed_lines() {
        let edges = parse_edges("A B\n\nsingle\nB C\n\n");
        assert_eq!(edges, vec![Edge::new("A", "B"), Edge::new("B", "C")]);
    }

    #[test]
    fn test_parse_edges_empty_input() {
        assert!(parse_edges("").is_empty());
    }

    #[test]
    fn test_read_from_reader() {
        let content = read_from("A B\n".as_bytes()).unwrap();
        assert_eq!(content, "A B\n");
    }

    #[test]
    fn test_read_file_missing() {
        let result = read_file(Path::new("/nonexistent/edges.txt"));
        assert!(matches!(result, Err(ParseError::IoError(_))));
    }
}
