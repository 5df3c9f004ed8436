use super::naming::{DISCARD_ID, NamingScope};
use super::statement::Statement;
use crate::error::TranspileError;
use crate::graph::{Edge, WorkflowGraph};
use crate::ident::{str_to_class_id, str_to_var_id, widget_literal};
use crate::workflow::{NodeId, WorkflowNode, WorkflowOutput};
use ahash::AHashMap;
use itertools::Itertools;
use tracing::debug;

/// Outputs that were never connected carry no slot index and sort last.
const UNLINKED_SLOT: u32 = u32::MAX;

/// Turns nodes into statements, one at a time, in dependency order.
///
/// Holds the naming scope and the identifiers assigned to each node's outputs.
/// A node's entry in `output_ids` is written once, when its statement is
/// emitted, and only read afterwards by the nodes it feeds.
pub(super) struct StatementEmitter<'a> {
    graph: &'a WorkflowGraph,
    class_mapping: &'a AHashMap<String, String>,
    scope: NamingScope,
    output_ids: AHashMap<NodeId, AHashMap<u32, String>>,
}

impl<'a> StatementEmitter<'a> {
    pub(super) fn new(
        graph: &'a WorkflowGraph,
        class_mapping: &'a AHashMap<String, String>,
    ) -> Self {
        Self {
            graph,
            class_mapping,
            scope: NamingScope::new(),
            output_ids: AHashMap::new(),
        }
    }

    pub(super) fn emit(&mut self, node: &WorkflowNode) -> Result<Statement, TranspileError> {
        let (targets, used) = self.assign_outputs(node)?;
        let mut args = self.resolve_inputs(node)?;
        if let Some(values) = &node.widgets_values {
            args.extend(values.iter().map(widget_literal));
        }
        let callee = self.declare_callee(node)?;

        let dead = !targets.is_empty() && !used;
        if dead {
            debug!(node = node.id, callee = %callee, "all outputs unused, marking statement dead");
        }
        Ok(Statement {
            node_id: node.id,
            targets,
            callee,
            args,
            dead,
        })
    }

    /// Allocates a variable for every linked output and `_` for the rest.
    /// Returns the targets in slot order and whether any output is read.
    fn assign_outputs(&mut self, node: &WorkflowNode) -> Result<(Vec<String>, bool), TranspileError> {
        let Some(outputs) = &node.outputs else {
            return Ok((Vec::new(), false));
        };

        let mut targets = Vec::with_capacity(outputs.len());
        let mut used = false;
        for output in outputs
            .iter()
            .sorted_by_key(|o| o.slot_index.unwrap_or(UNLINKED_SLOT))
        {
            match output.slot_index {
                // Outputs linked once before keep their slot index but lose their links.
                Some(slot) if !output.links.is_empty() => {
                    let id = self
                        .scope
                        .assign_id(&str_to_var_id(&output_seed(node, output))?);
                    self.output_ids
                        .entry(node.id)
                        .or_default()
                        .insert(slot, id.clone());
                    targets.push(id);
                    used = true;
                }
                _ => targets.push(DISCARD_ID.to_string()),
            }
        }
        Ok((targets, used))
    }

    /// Looks up, in destination slot order, the variables feeding each connected input.
    fn resolve_inputs(&self, node: &WorkflowNode) -> Result<Vec<String>, TranspileError> {
        let Some(inputs) = &node.inputs else {
            return Ok(Vec::new());
        };

        let edges: Vec<&Edge> = inputs
            .iter()
            .filter_map(|input| input.link)
            .map(|link_id| {
                self.graph
                    .edge(link_id)
                    .ok_or(TranspileError::LinkNotFound {
                        node_id: node.id,
                        link_id,
                    })
            })
            .collect::<Result<_, _>>()?;

        edges
            .into_iter()
            .sorted_by_key(|edge| edge.target_slot)
            .map(|edge| {
                self.output_ids
                    .get(&edge.source)
                    .and_then(|slots| slots.get(&edge.source_slot))
                    .cloned()
                    .ok_or(TranspileError::MissingOutput {
                        source_node_id: edge.source,
                        slot: edge.source_slot,
                        link_id: edge.link_id,
                    })
            })
            .collect()
    }

    fn declare_callee(&mut self, node: &WorkflowNode) -> Result<String, TranspileError> {
        let class_id = match self.class_mapping.get(&node.node_type) {
            Some(mapped) => mapped.clone(),
            None => str_to_class_id(&node.node_type)?,
        };
        Ok(self.scope.declare_id(&class_id))
    }
}

/// `title + name` for named outputs, the output type otherwise.
fn output_seed(node: &WorkflowNode, output: &WorkflowOutput) -> String {
    if output.name.is_empty() {
        output.output_type.clone()
    } else {
        format!("{}{}", node.title.as_deref().unwrap_or(""), output.name)
    }
}
