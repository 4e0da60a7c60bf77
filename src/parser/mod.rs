//! Parser module for module-graph edge lists.
//!
//! This module turns the line-oriented output of `go mod graph` into
//! [`Edge`] pairs for the graph builder.
//!
//! # Example
//!
//! ```
//! use modtree::parser::parse_edges;
//!
//! let edges = parse_edges("example.com/app rsc.io/quote@v1.5.2\n");
//! assert_eq!(edges.len(), 1);
//! assert_eq!(edges[0].child, "rsc.io/quote@v1.5.2");
//! ```

pub mod edge_list;

pub use edge_list::{parse_edges, parse_line, read_file, read_from, Edge, ParseError, ParseResult};
