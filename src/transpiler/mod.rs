use crate::error::TranspileError;
use crate::graph::WorkflowGraph;
use crate::workflow::{IntoWorkflow, NodeId, WorkflowDefinition, WorkflowDocument};
use ahash::AHashMap;
use tracing::debug;

mod emitter;
pub mod naming;
pub mod statement;

use emitter::StatementEmitter;
pub use naming::{DISCARD_ID, NamingScope};
pub use statement::{DEFAULT_DEAD_CODE_MARKER, Statement};

/// Converts a workflow graph into a flat script of call statements.
///
/// The graph is built once. Every call to [`to_script`](Self::to_script) or
/// [`statements`](Self::statements) starts from a fresh naming scope, so
/// repeated calls produce identical output.
#[derive(Debug, Clone)]
pub struct WorkflowToScriptTranspiler {
    graph: WorkflowGraph,
    dead_code_marker: String,
    class_mapping: AHashMap<String, String>,
}

pub struct TranspilerBuilder {
    workflow: WorkflowDefinition,
    dead_code_marker: String,
    class_mapping: AHashMap<String, String>,
}

impl TranspilerBuilder {
    pub fn new(workflow: WorkflowDefinition) -> Self {
        Self {
            workflow,
            dead_code_marker: DEFAULT_DEAD_CODE_MARKER.to_string(),
            class_mapping: AHashMap::new(),
        }
    }

    /// Sets the prefix that comments out statements whose outputs are all unused.
    pub fn with_dead_code_marker(mut self, marker: &str) -> Self {
        self.dead_code_marker = marker.to_string();
        self
    }

    /// Calls `class_id` for nodes of `node_type` instead of deriving a name from the type.
    pub fn with_class_mapping(mut self, node_type: &str, class_id: &str) -> Self {
        self.class_mapping
            .insert(node_type.to_string(), class_id.to_string());
        self
    }

    pub fn build(self) -> Result<WorkflowToScriptTranspiler, TranspileError> {
        Ok(WorkflowToScriptTranspiler {
            graph: WorkflowGraph::build(self.workflow)?,
            dead_code_marker: self.dead_code_marker,
            class_mapping: self.class_mapping,
        })
    }
}

impl WorkflowToScriptTranspiler {
    pub fn builder(workflow: WorkflowDefinition) -> TranspilerBuilder {
        TranspilerBuilder::new(workflow)
    }

    pub fn new(workflow: WorkflowDefinition) -> Result<Self, TranspileError> {
        TranspilerBuilder::new(workflow).build()
    }

    /// Parses a saved workflow document, rejecting unsupported versions.
    pub fn from_json(json: &str) -> Result<Self, TranspileError> {
        Self::new(WorkflowDocument::from_json(json)?.into_workflow()?)
    }

    /// Like [`from_json`](Self::from_json), but accepts any version tag.
    pub fn from_json_unchecked(json: &str) -> Result<Self, TranspileError> {
        Self::new(WorkflowDocument::from_json_unchecked(json)?.into_workflow()?)
    }

    pub fn graph(&self) -> &WorkflowGraph {
        &self.graph
    }

    /// The node ids in the order their statements are emitted.
    pub fn emission_order(&self) -> Result<Vec<NodeId>, TranspileError> {
        Ok(self
            .graph
            .topological_order()?
            .into_iter()
            .map(|node| node.id)
            .collect())
    }

    /// Generates one statement per node, producers before consumers.
    pub fn statements(&self) -> Result<Vec<Statement>, TranspileError> {
        let order = self.graph.topological_order()?;
        debug!(nodes = order.len(), "emitting statements");

        let mut emitter = StatementEmitter::new(&self.graph, &self.class_mapping);
        order.into_iter().map(|node| emitter.emit(node)).collect()
    }

    /// Generates the script body: one newline-terminated statement per node,
    /// with no imports or other boilerplate around it.
    pub fn to_script(&self) -> Result<String, TranspileError> {
        let mut script = String::new();
        for statement in self.statements()? {
            script.push_str(&statement.render(&self.dead_code_marker));
            script.push('\n');
        }
        Ok(script)
    }
}
