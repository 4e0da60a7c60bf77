//! Output tree structures.
//!
//! Provides `DependencyTree`, the serializable projection of the module
//! graph, and `FlattenedNode` for rendering a forest line by line.

use serde::Serialize;

/// A node in the rendered dependency tree.
///
/// Field order is part of the output contract: `name`, `version`,
/// `dependencies`. A node without children carries `None`, which
/// encodes as `null` rather than an empty array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyTree {
    /// Module name (the raw token unless versions are split)
    pub name: String,
    /// Module version, empty when unknown
    pub version: String,
    /// Child dependencies, `None` when there are none
    pub dependencies: Option<Vec<DependencyTree>>,
}

impl DependencyTree {
    /// Create a new tree node from its parts.
    ///
    /// An empty child list is stored as `None`.
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        dependencies: Vec<DependencyTree>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            dependencies: if dependencies.is_empty() {
                None
            } else {
                Some(dependencies)
            },
        }
    }

    /// Create a node with no dependencies
    pub fn leaf(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self::new(name, version, Vec::new())
    }

    /// Check if this node has children
    pub fn has_dependencies(&self) -> bool {
        self.dependencies.as_ref().is_some_and(|deps| !deps.is_empty())
    }

    /// Direct children, empty when there are none
    pub fn children(&self) -> &[DependencyTree] {
        self.dependencies.as_deref().unwrap_or_default()
    }

    /// Total number of nodes in this subtree, including itself
    pub fn node_count(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(DependencyTree::node_count)
            .sum::<usize>()
    }

    /// Flatten the tree into a pre-order list for rendering
    pub fn flatten(&self) -> Vec<FlattenedNode> {
        let mut result = Vec::new();
        let mut ancestors = Vec::new();
        self.flatten_recursive(&mut result, 0, true, &mut ancestors);
        result
    }

    fn flatten_recursive(
        &self,
        result: &mut Vec<FlattenedNode>,
        depth: usize,
        is_last: bool,
        ancestors: &mut Vec<bool>,
    ) {
        result.push(FlattenedNode {
            name: self.name.clone(),
            version: self.version.clone(),
            depth,
            is_last_child: is_last,
            ancestors_last: ancestors.clone(),
        });

        // Roots draw no connector, so they contribute no column
        if depth > 0 {
            ancestors.push(is_last);
        }

        let children = self.children();
        let child_count = children.len();
        for (i, child) in children.iter().enumerate() {
            child.flatten_recursive(result, depth + 1, i + 1 == child_count, ancestors);
        }

        if depth > 0 {
            ancestors.pop();
        }
    }
}

/// Flatten a whole forest, root after root.
pub fn flatten_forest(forest: &[DependencyTree]) -> Vec<FlattenedNode> {
    forest.iter().flat_map(DependencyTree::flatten).collect()
}

/// A flattened representation of a tree node for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenedNode {
    /// Module name
    pub name: String,
    /// Module version
    pub version: String,
    /// Depth in the tree (0 = root)
    pub depth: usize,
    /// Whether this is the last child of its parent
    pub is_last_child: bool,
    /// For each non-root ancestor, whether it was the last child
    pub ancestors_last: Vec<bool>,
}

impl FlattenedNode {
    /// Build the tree prefix (indentation and branch lines)
    pub fn tree_prefix(&self) -> String {
        let mut prefix = String::new();

        for &is_last in &self.ancestors_last {
            if is_last {
                prefix.push_str("    ");
            } else {
                prefix.push_str("│   ");
            }
        }

        if self.depth > 0 {
            if self.is_last_child {
                prefix.push_str("└── ");
            } else {
                prefix.push_str("├── ");
            }
        }

        prefix
    }

    /// Label shown for this node: the name, then the version if any
    pub fn label(&self) -> String {
        if self.version.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.name, self.version)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> DependencyTree {
        DependencyTree::new(
            "A",
            "1.0",
            vec![
                DependencyTree::new("B", "1.0", vec![DependencyTree::leaf("D", "1.0")]),
                DependencyTree::leaf("C", "1.0"),
            ],
        )
    }

    #[test]
    fn test_empty_children_become_none() {
        let node = DependencyTree::new("A", "", Vec::new());
        assert_eq!(node.dependencies, None);
        assert!(!node.has_dependencies());
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_node_count() {
        assert_eq!(sample_tree().node_count(), 4);
        assert_eq!(DependencyTree::leaf("x", "").node_count(), 1);
    }

    #[test]
    fn test_flatten_preorder() {
        let flat = sample_tree().flatten();
        let names: Vec<&str> = flat.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "D", "C"]);

        let depths: Vec<usize> = flat.iter().map(|n| n.depth).collect();
        assert_eq!(depths, vec![0, 1, 2, 1]);
    }

    #[test]
    fn test_tree_prefix() {
        let flat = sample_tree().flatten();
        let prefixes: Vec<String> = flat.iter().map(|n| n.tree_prefix()).collect();
        assert_eq!(prefixes, vec!["", "├── ", "│   └── ", "└── "]);
    }

    #[test]
    fn test_tree_prefix_last_branch_indent() {
        let tree = DependencyTree::new(
            "A",
            "",
            vec![DependencyTree::new("B", "", vec![DependencyTree::leaf("C", "")])],
        );
        let flat = tree.flatten();
        assert_eq!(flat[2].tree_prefix(), "    └── ");
    }

    #[test]
    fn test_label() {
        let flat = sample_tree().flatten();
        assert_eq!(flat[0].label(), "A 1.0");

        let unversioned = DependencyTree::leaf("example.com/app", "").flatten();
        assert_eq!(unversioned[0].label(), "example.com/app");
    }

    #[test]
    fn test_flatten_forest() {
        let forest = vec![DependencyTree::leaf("X", ""), sample_tree()];
        let flat = flatten_forest(&forest);
        assert_eq!(flat.len(), 5);
        assert_eq!(flat[0].name, "X");
        assert_eq!(flat[1].name, "A");
        assert_eq!(flat[1].depth, 0);
    }
}
