use crate::workflow::{LinkId, NodeId};
use thiserror::Error;

/// Errors that can occur while turning a workflow into a script.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TranspileError {
    #[error("Failed to parse workflow JSON: {0}")]
    JsonParseError(String),

    #[error("Unsupported workflow version {found}, expected {expected}")]
    UnsupportedVersion { found: f64, expected: f64 },

    #[error("Cannot derive an identifier from an empty or whitespace-only string")]
    EmptyIdentifier,

    #[error("Node '{missing_node_id}' not found, which is referenced by link {link_id}")]
    NodeNotFound {
        missing_node_id: NodeId,
        link_id: LinkId,
    },

    #[error("Node '{node_id}' has an input connected to link {link_id}, which does not exist")]
    LinkNotFound { node_id: NodeId, link_id: LinkId },

    #[error(
        "Link {link_id} reads output slot {slot} of node '{source_node_id}', but that slot was never assigned"
    )]
    MissingOutput {
        source_node_id: NodeId,
        slot: u32,
        link_id: LinkId,
    },

    #[error("Workflow graph contains a cycle through nodes {remaining:?}")]
    CyclicGraph { remaining: Vec<NodeId> },

    #[error(transparent)]
    Conversion(#[from] WorkflowConversionError),
}

/// Errors that can occur when converting a custom user format into a `WorkflowDefinition`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkflowConversionError {
    #[error("Invalid custom data: {0}")]
    ValidationError(String),
}
