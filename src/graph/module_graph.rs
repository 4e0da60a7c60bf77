//! Module graph implementation using petgraph.
//!
//! Provides a directed graph of module tokens built from `go mod graph`
//! edges, with lookup by raw token and root detection.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::HashMap;

use crate::parser::{parse_edges, Edge};

/// Represents a node in the module graph.
///
/// The identity is the raw token exactly as it appeared in the edge list
/// (usually `path@version`). It is never split at build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleNode {
    /// Raw token from the edge list (e.g., "golang.org/x/text@v0.3.0")
    pub identity: String,
    /// Version, empty unless the node was pre-populated with one
    pub version: String,
}

impl ModuleNode {
    /// Creates a new node without a version.
    ///
    /// # Example
    ///
    /// ```rust
    /// use modtree::graph::ModuleNode;
    ///
    /// let node = ModuleNode::new("rsc.io/quote@v1.5.2");
    /// assert_eq!(node.identity, "rsc.io/quote@v1.5.2");
    /// assert!(node.version.is_empty());
    /// ```
    pub fn new(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            version: String::new(),
        }
    }

    /// Creates a new node carrying a version.
    pub fn with_version(identity: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            version: version.into(),
        }
    }

    /// Returns true if this node carries a version.
    pub fn has_version(&self) -> bool {
        !self.version.is_empty()
    }
}

/// Splits a raw token into module path and version at the last `@`.
///
/// Tokens without `@` (typically the main module) return an empty
/// version.
///
/// # Example
///
/// ```rust
/// use modtree::graph::split_token;
///
/// assert_eq!(split_token("golang.org/x/text@v0.3.0"), ("golang.org/x/text", "v0.3.0"));
/// assert_eq!(split_token("example.com/app"), ("example.com/app", ""));
/// ```
pub fn split_token(token: &str) -> (&str, &str) {
    token.rsplit_once('@').unwrap_or((token, ""))
}

/// A directed graph of module requirements.
///
/// Edges point from the requiring module to the required one. Exactly
/// one node exists per distinct token; the first occurrence creates it
/// and later references reuse it.
///
/// # Example
///
/// ```rust
/// use modtree::graph::ModuleGraph;
///
/// let graph = ModuleGraph::from_edge_list("A B\nA C\nB D\n");
///
/// assert_eq!(graph.node_count(), 4);
/// assert_eq!(graph.edge_count(), 3);
///
/// let roots = graph.roots();
/// assert_eq!(roots.len(), 1);
/// assert_eq!(graph.node(roots[0]).unwrap().identity, "A");
/// ```
#[derive(Debug, Clone)]
pub struct ModuleGraph {
    /// The underlying directed graph
    graph: DiGraph<ModuleNode, ()>,
    /// Maps raw tokens to their node indices for O(1) lookup
    node_indices: HashMap<String, NodeIndex>,
}

impl Default for ModuleGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleGraph {
    /// Creates a new empty module graph.
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_indices: HashMap::new(),
        }
    }

    /// Creates a new graph with pre-allocated capacity.
    ///
    /// # Arguments
    ///
    /// * `nodes` - Expected number of nodes
    /// * `edges` - Expected number of edges
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            graph: DiGraph::with_capacity(nodes, edges),
            node_indices: HashMap::with_capacity(nodes),
        }
    }

    /// Builds a graph from raw edge-list text.
    ///
    /// Malformed lines are skipped; this never fails.
    pub fn from_edge_list(content: &str) -> Self {
        Self::from_edges(&parse_edges(content))
    }

    /// Builds a graph from already-parsed edges.
    pub fn from_edges(edges: &[Edge<'_>]) -> Self {
        let mut graph = Self::with_capacity(edges.len(), edges.len());
        for edge in edges {
            graph.add_edge(edge.parent, edge.child);
        }
        graph
    }

    /// Adds a module to the graph, or returns the existing node.
    ///
    /// # Returns
    ///
    /// The `NodeIndex` of the added or existing node.
    pub fn add_module(&mut self, token: &str) -> NodeIndex {
        if let Some(&idx) = self.node_indices.get(token) {
            return idx;
        }

        let idx = self.graph.add_node(ModuleNode::new(token));
        self.node_indices.insert(token.to_string(), idx);
        idx
    }

    /// Adds a module carrying a version.
    ///
    /// If the token already exists, its node is returned unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use modtree::graph::ModuleGraph;
    ///
    /// let mut graph = ModuleGraph::new();
    /// graph.add_module_with_version("A", "1.0");
    /// graph.add_module_with_version("A", "2.0"); // first occurrence wins
    ///
    /// assert_eq!(graph.get_node("A").unwrap().version, "1.0");
    /// ```
    pub fn add_module_with_version(&mut self, token: &str, version: &str) -> NodeIndex {
        if let Some(&idx) = self.node_indices.get(token) {
            return idx;
        }

        let idx = self.graph.add_node(ModuleNode::with_version(token, version));
        self.node_indices.insert(token.to_string(), idx);
        idx
    }

    /// Appends `child` to the children of `parent`.
    ///
    /// Both nodes are created if missing. Cycles, self edges and
    /// duplicate edges are all accepted as-is.
    pub fn add_edge(&mut self, parent: &str, child: &str) {
        let parent_idx = self.add_module(parent);
        let child_idx = self.add_module(child);
        self.graph.add_edge(parent_idx, child_idx, ());
    }

    /// Gets a reference to a node by its raw token.
    pub fn get_node(&self, token: &str) -> Option<&ModuleNode> {
        self.node_indices
            .get(token)
            .and_then(|&idx| self.graph.node_weight(idx))
    }

    /// Gets the index of a node by its raw token.
    pub fn node_index(&self, token: &str) -> Option<NodeIndex> {
        self.node_indices.get(token).copied()
    }

    /// Gets a reference to a node by index.
    pub fn node(&self, idx: NodeIndex) -> Option<&ModuleNode> {
        self.graph.node_weight(idx)
    }

    /// Returns the children of a node in the order their edges were added.
    ///
    /// # Example
    ///
    /// ```rust
    /// use modtree::graph::ModuleGraph;
    ///
    /// let graph = ModuleGraph::from_edge_list("A B\nA C\nA D\n");
    /// let a = graph.node_index("A").unwrap();
    /// let names: Vec<_> = graph
    ///     .children(a)
    ///     .into_iter()
    ///     .filter_map(|idx| graph.node(idx))
    ///     .map(|node| node.identity.as_str())
    ///     .collect();
    ///
    /// assert_eq!(names, vec!["B", "C", "D"]);
    /// ```
    pub fn children(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        // petgraph walks outgoing edges newest first
        let mut edges: Vec<_> = self.graph.edges_directed(idx, Direction::Outgoing).collect();
        edges.sort_by_key(|edge| edge.id());
        edges.into_iter().map(|edge| edge.target()).collect()
    }

    /// Returns the root nodes in first-seen order.
    ///
    /// A node is a root when no other node lists it as a child. A self
    /// edge alone does not make a node a non-root.
    pub fn roots(&self) -> Vec<NodeIndex> {
        self.graph
            .node_indices()
            .filter(|&idx| {
                self.graph
                    .edges_directed(idx, Direction::Incoming)
                    .all(|edge| edge.source() == idx)
            })
            .collect()
    }

    /// Returns the number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Checks if the graph is empty.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Checks if a token exists in the graph.
    pub fn contains(&self, token: &str) -> bool {
        self.node_indices.contains_key(token)
    }
}
