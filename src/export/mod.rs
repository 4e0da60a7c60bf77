//! Export functionality for serialized dependency forests.
//!
//! This module provides exporters for writing a forest of
//! [`DependencyTree`] values as JSON or as a plain-text tree.

pub mod json;
pub mod text;

pub use json::to_json_string;

use crate::tree::DependencyTree;
use std::io::{self, Write};

/// Errors that can occur while exporting a forest.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The forest could not be encoded.
    #[error("Failed to encode dependency tree: {0}")]
    Encode(#[from] serde_json::Error),

    /// The encoded document could not be written.
    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// JSON format - nested machine-readable trees
    #[default]
    Json,
    /// Text format - indented tree for terminals
    Text,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "text" | "txt" | "tree" => Ok(ExportFormat::Text),
            _ => Err(format!(
                "Unknown export format: '{}'. Valid formats: json, text",
                s
            )),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Text => write!(f, "text"),
        }
    }
}

/// Trait for exporters.
pub trait Exporter {
    /// Export the forest to the given writer.
    fn export<W: Write>(&self, forest: &[DependencyTree], writer: &mut W) -> ExportResult<()>;
}

/// Export a forest in the specified format.
pub fn export<W: Write>(
    format: ExportFormat,
    forest: &[DependencyTree],
    writer: &mut W,
) -> ExportResult<()> {
    match format {
        ExportFormat::Json => json::JsonExporter.export(forest, writer),
        ExportFormat::Text => text::TextExporter.export(forest, writer),
    }
}

/// Export a forest to a string.
pub fn export_to_string(format: ExportFormat, forest: &[DependencyTree]) -> ExportResult<String> {
    let mut buffer = Vec::new();
    export(format, forest, &mut buffer)?;
    String::from_utf8(buffer)
        .map_err(|e| ExportError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_format_from_str() {
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("text".parse::<ExportFormat>().unwrap(), ExportFormat::Text);
        assert_eq!("tree".parse::<ExportFormat>().unwrap(), ExportFormat::Text);
        assert!("csv".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_export_format_display() {
        assert_eq!(format!("{}", ExportFormat::Json), "json");
        assert_eq!(format!("{}", ExportFormat::Text), "text");
        assert_eq!(ExportFormat::default(), ExportFormat::Json);
    }

    #[test]
    fn test_export_to_string_dispatches() {
        let forest = vec![DependencyTree::new(
            "A",
            "",
            vec![DependencyTree::leaf("B", "")],
        )];

        let json = export_to_string(ExportFormat::Json, &forest).unwrap();
        assert!(json.starts_with('['));
        assert!(json.ends_with("]\n"));

        let text = export_to_string(ExportFormat::Text, &forest).unwrap();
        assert_eq!(text, "A\n└── B\n");
    }

    #[test]
    fn test_write_failure_is_reported() {
        struct FailingWriter;

        impl Write for FailingWriter {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let forest = vec![DependencyTree::leaf("A", "")];
        let result = export(ExportFormat::Json, &forest, &mut FailingWriter);
        assert!(matches!(result, Err(ExportError::Io(_))));
    }
}
