//! Tests for graph construction and topological ordering.
use comfyscript::prelude::*;

fn definition(node_ids: &[NodeId], links: &[(LinkId, NodeId, NodeId)]) -> WorkflowDefinition {
    WorkflowDefinition {
        nodes: node_ids
            .iter()
            .map(|&id| WorkflowNode::new(id, "Node"))
            .collect(),
        links: links
            .iter()
            .map(|&(id, u, v)| WorkflowLink::new(id, u, 0, v, 0, "ANY"))
            .collect(),
    }
}

fn order_ids(graph: &WorkflowGraph) -> Vec<NodeId> {
    graph
        .topological_order()
        .unwrap()
        .iter()
        .map(|n| n.id)
        .collect()
}

#[test]
fn test_keeps_parallel_links_as_distinct_edges() {
    let graph = WorkflowGraph::build(definition(&[1, 2], &[(10, 1, 2), (11, 1, 2)])).unwrap();
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.edge(11).unwrap().target, 2);
    assert_eq!(order_ids(&graph), vec![1, 2]);
}

#[test]
fn test_producers_come_before_consumers() {
    // Declared consumer-first on purpose.
    let graph = WorkflowGraph::build(definition(&[3, 2, 1], &[(1, 1, 2), (2, 2, 3)])).unwrap();
    assert_eq!(order_ids(&graph), vec![1, 2, 3]);
}

#[test]
fn test_independent_nodes_keep_declaration_order() {
    let graph = WorkflowGraph::build(definition(&[5, 9, 7], &[])).unwrap();
    assert_eq!(order_ids(&graph), vec![5, 9, 7]);
}

#[test]
fn test_rejects_links_to_unknown_nodes() {
    let err = WorkflowGraph::build(definition(&[1], &[(4, 1, 2)])).unwrap_err();
    assert_eq!(
        err,
        TranspileError::NodeNotFound {
            missing_node_id: 2,
            link_id: 4
        }
    );
}

#[test]
fn test_reports_cycles() {
    let graph =
        WorkflowGraph::build(definition(&[4, 1, 2, 3], &[(1, 1, 2), (2, 2, 1), (3, 2, 3)]))
            .unwrap();
    match graph.topological_order() {
        // Node 3 is stuck behind the cycle, node 4 is not.
        Err(TranspileError::CyclicGraph { remaining }) => assert_eq!(remaining, vec![1, 2, 3]),
        other => panic!("expected a cycle error, got {:?}", other),
    }
}
