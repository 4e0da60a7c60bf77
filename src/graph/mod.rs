//! Graph module for module requirement modeling.
//!
//! This module provides the [`ModuleGraph`] struct for building a
//! directed graph from `go mod graph` edges and finding its roots.
//!
//! # Example
//!
//! ```rust
//! use modtree::graph::ModuleGraph;
//!
//! let mut graph = ModuleGraph::new();
//! graph.add_edge("example.com/app", "rsc.io/quote@v1.5.2");
//! graph.add_edge("rsc.io/quote@v1.5.2", "rsc.io/sampler@v1.3.0");
//!
//! assert_eq!(graph.node_count(), 3);
//! assert_eq!(graph.edge_count(), 2);
//! assert_eq!(graph.roots().len(), 1);
//! ```

mod module_graph;

pub use module_graph::{split_token, ModuleGraph, ModuleNode};
