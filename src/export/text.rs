//! Plain-text tree export.
//!
//! Renders each root followed by its descendants, one per line, using
//! box-drawing connectors.

use super::{ExportResult, Exporter};
use crate::tree::{flatten_forest, DependencyTree};
use std::io::Write;

/// Text tree exporter implementation.
pub struct TextExporter;

impl Exporter for TextExporter {
    fn export<W: Write>(&self, forest: &[DependencyTree], writer: &mut W) -> ExportResult<()> {
        for node in flatten_forest(forest) {
            writeln!(writer, "{}{}", node.tree_prefix(), node.label())?;
        }
        Ok(())
    }
}
