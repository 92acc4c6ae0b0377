// SPDX-FileCopyrightText: 2026 Statewalk Contributors
// SPDX-License-Identifier: MIT

use std::collections::BTreeSet;

use crate::format::mermaid::ident::{END_NODE_ID, START_NODE_ID};
use crate::model::graph::{DiagramEdge, DiagramNode, NodeKind};
use crate::model::ids::NodeId;

/// First outgoing edge from `node_id` in stored order. Traversal is defined
/// by this first-matching-edge rule, not by any search.
pub fn first_outgoing_edge<'a>(
    edges: &'a [DiagramEdge],
    node_id: &NodeId,
) -> Option<&'a DiagramEdge> {
    edges.iter().find(|edge| edge.source() == node_id)
}

/// First incoming edge into `node_id` in stored order.
pub fn first_incoming_edge<'a>(
    edges: &'a [DiagramEdge],
    node_id: &NodeId,
) -> Option<&'a DiagramEdge> {
    edges.iter().find(|edge| edge.target() == node_id)
}

/// The node a fresh simulation enters on: the reserved `start` id, or any
/// node of `Input` kind.
pub fn entry_node(nodes: &[DiagramNode]) -> Option<&DiagramNode> {
    nodes
        .iter()
        .find(|node| node.id().as_str() == START_NODE_ID || node.kind() == NodeKind::Input)
}

/// Whether forward traversal is over at this node: the reserved `end` id, or
/// any node of `Output` kind.
pub fn is_terminal_node(node: &DiagramNode) -> bool {
    node.id().as_str() == END_NODE_ID || node.kind() == NodeKind::Output
}

/// The path a forward-only simulation takes: from the entry node, follow the
/// first outgoing edge until a terminal node, a dead end, or a repeat
/// (cycles would otherwise never terminate).
pub fn default_walk(nodes: &[DiagramNode], edges: &[DiagramEdge]) -> Vec<NodeId> {
    let mut path = Vec::new();
    let Some(entry) = entry_node(nodes) else {
        return path;
    };

    let mut seen: BTreeSet<NodeId> = BTreeSet::new();
    let mut current = entry.id().clone();
    loop {
        if !seen.insert(current.clone()) {
            break;
        }
        path.push(current.clone());

        let Some(node) = nodes.iter().find(|node| node.id() == &current) else {
            break;
        };
        if is_terminal_node(node) {
            break;
        }
        let Some(edge) = first_outgoing_edge(edges, &current) else {
            break;
        };
        current = edge.target().clone();
    }

    path
}

#[cfg(test)]
mod tests {
    use super::{default_walk, entry_node, first_incoming_edge, first_outgoing_edge};
    use crate::model::fixtures;

    #[test]
    fn first_matching_edge_wins_on_branches() {
        let diagram = fixtures::branching();
        let triage = diagram.node("triage").expect("triage").id().clone();

        let out = first_outgoing_edge(diagram.edges(), &triage).expect("outgoing");
        assert_eq!(out.target().as_str(), "accepted");

        let end = diagram.node("end").expect("end").id().clone();
        let incoming = first_incoming_edge(diagram.edges(), &end).expect("incoming");
        assert_eq!(incoming.source().as_str(), "accepted");
    }

    #[test]
    fn entry_node_prefers_start_or_input_kind() {
        let diagram = fixtures::linear_chain();
        let entry = entry_node(diagram.nodes()).expect("entry");
        assert_eq!(entry.id().as_str(), "start");
    }

    #[test]
    fn default_walk_follows_first_edges_to_the_end() {
        let diagram = fixtures::branching();
        let walk = default_walk(diagram.nodes(), diagram.edges());
        let path: Vec<&str> = walk.iter().map(|id| id.as_str()).collect();
        assert_eq!(path, ["start", "triage", "accepted", "end"]);
    }

    #[test]
    fn default_walk_is_empty_without_an_entry() {
        let diagram = crate::model::StateDiagram::default();
        assert!(default_walk(diagram.nodes(), diagram.edges()).is_empty());
    }
}
