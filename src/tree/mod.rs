//! Tree serialization for module graphs.
//!
//! Turns a possibly cyclic [`ModuleGraph`](crate::graph::ModuleGraph) into
//! a forest of [`DependencyTree`] values that can be encoded or rendered.

pub mod dependency_tree;
pub mod serializer;

pub use dependency_tree::{flatten_forest, DependencyTree, FlattenedNode};
pub use serializer::{serialize_forest, serialize_roots, serialize_with_options, SerializeOptions};
