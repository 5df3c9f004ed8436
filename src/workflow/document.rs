use super::conversion::IntoWorkflow;
use super::definition::*;
use crate::error::{TranspileError, WorkflowConversionError};
use serde::Deserialize;

/// The only document version the transpiler understands.
pub const SUPPORTED_VERSION: f64 = 0.4;

// --- JSON Deserialization Structs (Input Format Specific) ---
// These mirror the editor's saved workflow file and are only used for conversion.

/// A workflow document as saved by the node editor.
#[derive(Deserialize, Debug, Clone)]
pub struct WorkflowDocument {
    pub version: f64,
    #[serde(default)]
    nodes: Vec<RawNode>,
    #[serde(default)]
    links: Vec<RawLink>,
}

#[derive(Deserialize, Debug, Clone)]
struct RawNode {
    id: NodeId,
    #[serde(rename = "type")]
    node_type: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    outputs: Option<Vec<RawOutput>>,
    #[serde(default)]
    inputs: Option<Vec<RawInput>>,
    #[serde(default)]
    widgets_values: Option<Vec<serde_json::Value>>,
}

#[derive(Deserialize, Debug, Clone)]
struct RawOutput {
    #[serde(default)]
    name: String,
    #[serde(rename = "type", default)]
    output_type: String,
    #[serde(default)]
    slot_index: Option<u32>,
    // The editor writes `null` for outputs that were never connected.
    #[serde(default)]
    links: Option<Vec<LinkId>>,
}

#[derive(Deserialize, Debug, Clone)]
struct RawInput {
    #[serde(default)]
    name: String,
    #[serde(default)]
    link: Option<LinkId>,
}

/// `[id, source_node, source_slot, target_node, target_slot, type]`
#[derive(Deserialize, Debug, Clone)]
struct RawLink(LinkId, NodeId, u32, NodeId, u32, serde_json::Value);

impl WorkflowDocument {
    /// Parses a workflow document and asserts its version tag.
    pub fn from_json(json: &str) -> Result<Self, TranspileError> {
        let document = Self::from_json_unchecked(json)?;
        document.check_version()?;
        Ok(document)
    }

    /// Parses a workflow document without looking at its version tag.
    pub fn from_json_unchecked(json: &str) -> Result<Self, TranspileError> {
        serde_json::from_str(json).map_err(|e| TranspileError::JsonParseError(e.to_string()))
    }

    pub fn check_version(&self) -> Result<(), TranspileError> {
        if self.version != SUPPORTED_VERSION {
            return Err(TranspileError::UnsupportedVersion {
                found: self.version,
                expected: SUPPORTED_VERSION,
            });
        }
        Ok(())
    }
}

// --- Converter Implementation ---

impl IntoWorkflow for WorkflowDocument {
    fn into_workflow(self) -> Result<WorkflowDefinition, WorkflowConversionError> {
        let nodes = self
            .nodes
            .into_iter()
            .map(|raw| {
                if raw.node_type.trim().is_empty() {
                    return Err(WorkflowConversionError::ValidationError(format!(
                        "node {} has an empty type",
                        raw.id
                    )));
                }
                Ok(WorkflowNode {
                    id: raw.id,
                    node_type: raw.node_type,
                    title: raw.title,
                    outputs: raw.outputs.map(|outputs| {
                        outputs
                            .into_iter()
                            .map(|o| WorkflowOutput {
                                name: o.name,
                                output_type: o.output_type,
                                slot_index: o.slot_index,
                                links: o.links.unwrap_or_default(),
                            })
                            .collect()
                    }),
                    inputs: raw.inputs.map(|inputs| {
                        inputs
                            .into_iter()
                            .map(|i| WorkflowInput {
                                name: i.name,
                                link: i.link,
                            })
                            .collect()
                    }),
                    widgets_values: raw
                        .widgets_values
                        .map(|values| values.into_iter().map(WidgetValue::from).collect()),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let links = self
            .links
            .into_iter()
            .map(|RawLink(id, source_node, source_slot, target_node, target_slot, ty)| {
                let link_type = match ty {
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                };
                WorkflowLink {
                    id,
                    source_node,
                    source_slot,
                    target_node,
                    target_slot,
                    link_type,
                }
            })
            .collect();

        Ok(WorkflowDefinition { nodes, links })
    }
}
