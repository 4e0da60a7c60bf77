//! modtree - Go module dependency trees from `go mod graph`
//!
//! This crate rebuilds the dependency forest described by a flat
//! `parent child` edge list and renders it as nested JSON or as a
//! text tree.
//!
//! # Example
//!
//! ```
//! use modtree::export::to_json_string;
//! use modtree::graph::ModuleGraph;
//! use modtree::tree::serialize_forest;
//!
//! let graph = ModuleGraph::from_edge_list("A B\nA C\nB D\n");
//! let json = to_json_string(&serialize_forest(&graph)).unwrap();
//!
//! let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
//! assert_eq!(parsed[0]["name"], "A");
//! assert!(parsed[0]["dependencies"][1]["dependencies"].is_null());
//! ```

pub mod export;
pub mod graph;
pub mod parser;
pub mod source;
pub mod tree;

use export::{ExportFormat, ExportResult};
use tree::{serialize_with_options, SerializeOptions};

/// Builds the graph from `edge_list` and renders it in one pass.
pub fn render(
    edge_list: &str,
    format: ExportFormat,
    options: &SerializeOptions,
) -> ExportResult<String> {
    let graph = graph::ModuleGraph::from_edge_list(edge_list);
    let forest = serialize_with_options(&graph, &graph.roots(), options);
    export::export_to_string(format, &forest)
}
