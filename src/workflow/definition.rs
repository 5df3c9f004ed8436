use std::fmt;

/// Identifier of a node instance, unique within a workflow.
pub type NodeId = i64;
/// Identifier of a link, unique within a workflow.
pub type LinkId = i64;

/// The complete, canonical definition of a workflow, ready for transpilation.
/// This is the target structure for any custom data model conversion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkflowDefinition {
    pub nodes: Vec<WorkflowNode>,
    pub links: Vec<WorkflowLink>,
}

/// A single node instance. Becomes exactly one statement in the generated script.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowNode {
    pub id: NodeId,
    /// Maps to the callable invoked by the generated statement.
    pub node_type: String,
    /// Display name, used as a prefix when naming output variables.
    pub title: Option<String>,
    pub outputs: Option<Vec<WorkflowOutput>>,
    pub inputs: Option<Vec<WorkflowInput>>,
    pub widgets_values: Option<Vec<WidgetValue>>,
}

impl WorkflowNode {
    /// Creates a bare node with no slots, title or widget values.
    pub fn new(id: NodeId, node_type: impl Into<String>) -> Self {
        Self {
            id,
            node_type: node_type.into(),
            title: None,
            outputs: None,
            inputs: None,
            widgets_values: None,
        }
    }
}

/// An output slot of a node.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowOutput {
    pub name: String,
    pub output_type: String,
    /// Absent for outputs that have never been connected.
    pub slot_index: Option<u32>,
    pub links: Vec<LinkId>,
}

/// An input slot of a node. `link` is `None` when nothing is connected.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowInput {
    pub name: String,
    pub link: Option<LinkId>,
}

/// A directed data dependency from an output slot to an input slot.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowLink {
    pub id: LinkId,
    pub source_node: NodeId,
    pub source_slot: u32,
    pub target_node: NodeId,
    pub target_slot: u32,
    pub link_type: String,
}

impl WorkflowLink {
    pub fn new(
        id: LinkId,
        source_node: NodeId,
        source_slot: u32,
        target_node: NodeId,
        target_slot: u32,
        link_type: impl Into<String>,
    ) -> Self {
        Self {
            id,
            source_node,
            source_slot,
            target_node,
            target_slot,
            link_type: link_type.into(),
        }
    }
}

/// A literal configured directly on a node.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetValue {
    Str(String),
    Int(i64),
    /// Integers above `i64::MAX`, such as 64-bit seeds.
    UInt(u64),
    Float(f64),
    Bool(bool),
    Null,
    /// Anything the workflow editor stores that is not a scalar.
    Other(serde_json::Value),
}

impl From<serde_json::Value> for WidgetValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => WidgetValue::Str(s),
            serde_json::Value::Bool(b) => WidgetValue::Bool(b),
            serde_json::Value::Null => WidgetValue::Null,
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    WidgetValue::Int(i)
                } else if let Some(u) = n.as_u64() {
                    WidgetValue::UInt(u)
                } else {
                    n.as_f64()
                        .map(WidgetValue::Float)
                        .unwrap_or(WidgetValue::Other(serde_json::Value::Number(n)))
                }
            }
            other => WidgetValue::Other(other),
        }
    }
}

impl From<&str> for WidgetValue {
    fn from(value: &str) -> Self {
        WidgetValue::Str(value.to_string())
    }
}

impl From<i64> for WidgetValue {
    fn from(value: i64) -> Self {
        WidgetValue::Int(value)
    }
}

impl From<f64> for WidgetValue {
    fn from(value: f64) -> Self {
        WidgetValue::Float(value)
    }
}

impl fmt::Display for WidgetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::ident::widget_literal(self))
    }
}
