//! The dependency graph built from a workflow's node and link lists.
//!
//! Nodes are kept in declaration order and edges are keyed by link id, so two
//! links between the same pair of nodes stay two distinct edges.

use crate::error::TranspileError;
use crate::workflow::{LinkId, NodeId, WorkflowDefinition, WorkflowNode};
use ahash::AHashMap;
use std::collections::BTreeSet;
use tracing::{debug, trace};

/// A directed edge carrying one link's slot wiring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub link_id: LinkId,
    pub source: NodeId,
    pub source_slot: u32,
    pub target: NodeId,
    pub target_slot: u32,
    pub link_type: String,
}

/// Attributed directed multigraph over a workflow's nodes.
#[derive(Debug, Clone)]
pub struct WorkflowGraph {
    nodes: Vec<WorkflowNode>,
    index: AHashMap<NodeId, usize>,
    edges: AHashMap<LinkId, Edge>,
    /// Per node position, positions of the nodes it feeds (one entry per edge).
    successors: Vec<Vec<usize>>,
}

impl WorkflowGraph {
    /// Builds the graph. Every link must connect two declared nodes.
    pub fn build(definition: WorkflowDefinition) -> Result<Self, TranspileError> {
        let mut nodes: Vec<WorkflowNode> = Vec::with_capacity(definition.nodes.len());
        let mut index: AHashMap<NodeId, usize> = AHashMap::new();
        for node in definition.nodes {
            // A repeated id updates the node in place, keeping its first position.
            match index.get(&node.id) {
                Some(&pos) => nodes[pos] = node,
                None => {
                    index.insert(node.id, nodes.len());
                    nodes.push(node);
                }
            }
        }

        let mut edges: AHashMap<LinkId, Edge> = AHashMap::with_capacity(definition.links.len());
        for link in definition.links {
            for endpoint in [link.source_node, link.target_node] {
                if !index.contains_key(&endpoint) {
                    return Err(TranspileError::NodeNotFound {
                        missing_node_id: endpoint,
                        link_id: link.id,
                    });
                }
            }
            edges.insert(
                link.id,
                Edge {
                    link_id: link.id,
                    source: link.source_node,
                    source_slot: link.source_slot,
                    target: link.target_node,
                    target_slot: link.target_slot,
                    link_type: link.link_type,
                },
            );
        }

        let mut successors = vec![Vec::new(); nodes.len()];
        for edge in edges.values() {
            successors[index[&edge.source]].push(index[&edge.target]);
        }

        debug!(nodes = nodes.len(), edges = edges.len(), "built workflow graph");
        Ok(Self {
            nodes,
            index,
            edges,
            successors,
        })
    }

    pub fn nodes(&self) -> &[WorkflowNode] {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> Option<&WorkflowNode> {
        self.index.get(&id).map(|&pos| &self.nodes[pos])
    }

    pub fn edge(&self, link_id: LinkId) -> Option<&Edge> {
        self.edges.get(&link_id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Orders nodes so that every producer precedes its consumers.
    ///
    /// Uses Kahn's algorithm; among nodes that are ready at the same time the
    /// one declared first wins, so the order is reproducible.
    pub fn topological_order(&self) -> Result<Vec<&WorkflowNode>, TranspileError> {
        let mut in_degree = vec![0usize; self.nodes.len()];
        for targets in &self.successors {
            for &target in targets {
                in_degree[target] += 1;
            }
        }

        let mut ready: BTreeSet<usize> = in_degree
            .iter()
            .enumerate()
            .filter(|(_, deg)| **deg == 0)
            .map(|(pos, _)| pos)
            .collect();
        let mut order = Vec::with_capacity(self.nodes.len());

        while let Some(pos) = ready.pop_first() {
            order.push(&self.nodes[pos]);
            for &target in &self.successors[pos] {
                in_degree[target] -= 1;
                if in_degree[target] == 0 {
                    ready.insert(target);
                }
            }
        }

        if order.len() != self.nodes.len() {
            let remaining: Vec<NodeId> = in_degree
                .iter()
                .enumerate()
                .filter(|(_, deg)| **deg > 0)
                .map(|(pos, _)| self.nodes[pos].id)
                .collect();
            return Err(TranspileError::CyclicGraph { remaining });
        }

        trace!(order = ?order.iter().map(|n| n.id).collect::<Vec<_>>(), "topological order");
        Ok(order)
    }
}
