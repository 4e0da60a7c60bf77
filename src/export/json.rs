//! JSON export implementation.
//!
//! Encodes a forest with four-space indentation and the key order
//! `name`, `version`, `dependencies`. Missing children and an empty
//! forest both encode as `null`.

use super::{ExportResult, Exporter};
use crate::tree::DependencyTree;
use serde::ser::Error as _;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io::Write;

const INDENT: &[u8] = b"    ";

/// JSON exporter implementation.
pub struct JsonExporter;

/// Encodes the forest as an indented JSON document without a trailing newline.
///
/// # Example
///
/// ```
/// use modtree::export::to_json_string;
/// use modtree::tree::DependencyTree;
///
/// let json = to_json_string(&[DependencyTree::leaf("A", "")]).unwrap();
/// assert!(json.contains("\"dependencies\": null"));
///
/// assert_eq!(to_json_string(&[]).unwrap(), "null");
/// ```
pub fn to_json_string(forest: &[DependencyTree]) -> ExportResult<String> {
    let document = if forest.is_empty() { None } else { Some(forest) };

    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    document.serialize(&mut serializer)?;

    let json = String::from_utf8(buffer).map_err(serde_json::Error::custom)?;
    Ok(json)
}

impl Exporter for JsonExporter {
    fn export<W: Write>(&self, forest: &[DependencyTree], writer: &mut W) -> ExportResult<()> {
        let json = to_json_string(forest)?;
        writeln!(writer, "{}", json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::ModuleGraph;
    use crate::tree::serialize_forest;

    #[test]
    fn test_reference_document() {
        let mut graph = ModuleGraph::new();
        graph.add_module_with_version("A", "1.0");
        graph.add_module_with_version("B", "1.0");
        graph.add_module_with_version("C", "1.0");
        graph.add_module_with_version("D", "1.0");
        graph.add_edge("A", "B");
        graph.add_edge("A", "C");
        graph.add_edge("B", "D");

        let json = to_json_string(&serialize_forest(&graph)).unwrap();

        let expected = r#"[
    {
        "name": "A",
        "version": "1.0",
        "dependencies": [
            {
                "name": "B",
                "version": "1.0",
                "dependencies": [
                    {
                        "name": "D",
                        "version": "1.0",
                        "dependencies": null
                    }
                ]
            },
            {
                "name": "C",
                "version": "1.0",
                "dependencies": null
            }
        ]
    }
]"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_empty_forest_is_null() {
        assert_eq!(to_json_string(&[]).unwrap(), "null");
    }

    #[test]
    fn test_field_order() {
        let json = to_json_string(&[DependencyTree::leaf("A", "v1")]).unwrap();
        let name = json.find("\"name\"").unwrap();
        let version = json.find("\"version\"").unwrap();
        let deps = json.find("\"dependencies\"").unwrap();
        assert!(name < version && version < deps);
    }

    #[test]
    fn test_diamond_document() {
        let graph = ModuleGraph::from_edge_list("A B\nA C\nB D\nC D\n");
        let json = to_json_string(&serialize_forest(&graph)).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        let a = &parsed[0];
        assert_eq!(a["name"], "A");
        assert_eq!(a["version"], "");
        assert_eq!(a["dependencies"][0]["name"], "B");
        assert_eq!(a["dependencies"][0]["dependencies"][0]["name"], "D");
        assert_eq!(a["dependencies"][1]["name"], "C");
        assert!(a["dependencies"][1]["dependencies"].is_null());
        assert_eq!(json.matches("\"D\"").count(), 1);
    }

    #[test]
    fn test_self_loop_document() {
        let graph = ModuleGraph::from_edge_list("A A\n");
        let json = to_json_string(&serialize_forest(&graph)).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.as_array().unwrap().len(), 1);
        assert_eq!(parsed[0]["name"], "A");
        assert!(parsed[0]["dependencies"].is_null());
    }

    #[test]
    fn test_exporter_appends_newline() {
        let mut output = Vec::new();
        JsonExporter
            .export(&[DependencyTree::leaf("A", "")], &mut output)
            .unwrap();

        let json_str = String::from_utf8(output).unwrap();
        assert!(json_str.ends_with("}\n]\n"));

        let result: Result<serde_json::Value, _> = serde_json::from_str(&json_str);
        assert!(result.is_ok());
    }
}
