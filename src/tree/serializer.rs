//! Conversion of the module graph into an acyclic forest.
//!
//! The walk is a depth-first pre-order from each root. One visited set is
//! shared by the whole forest: a module reachable through several paths is
//! expanded under the first path that reaches it and left out everywhere
//! else. The same set stops the walk on cycles.

use petgraph::graph::NodeIndex;
use std::collections::HashSet;

use super::DependencyTree;
use crate::graph::{split_token, ModuleGraph, ModuleNode};

/// Options controlling how graph nodes are projected into output nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Display `path@version` tokens as separate name and version.
    ///
    /// Only applies to nodes with no stored version.
    pub split_version: bool,
}

impl SerializeOptions {
    /// Options that split tokens into name and version.
    pub fn split_versions() -> Self {
        Self {
            split_version: true,
        }
    }

    fn display(&self, node: &ModuleNode) -> (String, String) {
        if self.split_version && !node.has_version() {
            let (name, version) = split_token(&node.identity);
            (name.to_string(), version.to_string())
        } else {
            (node.identity.clone(), node.version.clone())
        }
    }
}

/// Serializes the whole graph, starting from [`ModuleGraph::roots`].
///
/// # Example
///
/// ```
/// use modtree::graph::ModuleGraph;
/// use modtree::tree::serialize_forest;
///
/// let graph = ModuleGraph::from_edge_list("A B\nA C\nB D\n");
/// let forest = serialize_forest(&graph);
///
/// assert_eq!(forest.len(), 1);
/// assert_eq!(forest[0].name, "A");
/// assert_eq!(forest[0].children().len(), 2);
/// ```
pub fn serialize_forest(graph: &ModuleGraph) -> Vec<DependencyTree> {
    serialize_roots(graph, &graph.roots())
}

/// Serializes the subtrees reachable from `roots`, in the given order.
pub fn serialize_roots(graph: &ModuleGraph, roots: &[NodeIndex]) -> Vec<DependencyTree> {
    serialize_with_options(graph, roots, &SerializeOptions::default())
}

/// Serializes from `roots` with explicit projection options.
pub fn serialize_with_options(
    graph: &ModuleGraph,
    roots: &[NodeIndex],
    options: &SerializeOptions,
) -> Vec<DependencyTree> {
    let mut visited = HashSet::with_capacity(graph.node_count());
    convert(graph, roots, &mut visited, options)
}

fn convert(
    graph: &ModuleGraph,
    nodes: &[NodeIndex],
    visited: &mut HashSet<NodeIndex>,
    options: &SerializeOptions,
) -> Vec<DependencyTree> {
    let mut result = Vec::new();

    for &idx in nodes {
        if !visited.insert(idx) {
            continue;
        }
        let Some(node) = graph.node(idx) else {
            continue;
        };

        let (name, version) = options.display(node);
        let dependencies = convert(graph, &graph.children(idx), visited, options);
        result.push(DependencyTree::new(name, version, dependencies));
    }

    result
}
