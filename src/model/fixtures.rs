// SPDX-FileCopyrightText: 2026 Statewalk Contributors
// SPDX-License-Identifier: MIT

use super::graph::{DiagramEdge, DiagramNode, NodeKind, StateDiagram};
use super::ids::NodeId;

fn nid(value: &str) -> NodeId {
    NodeId::new(value).expect("node id")
}

/// `start -> draft -> review -> end`, the shape every forward walk follows.
pub(crate) fn linear_chain() -> StateDiagram {
    let mut diagram = StateDiagram::default();

    diagram.insert_node(DiagramNode::new_with(nid("start"), NodeKind::Input, "Start"));
    diagram.insert_node(DiagramNode::new(nid("draft"), "Draft"));
    diagram.insert_node(DiagramNode::new(nid("review"), "Review"));
    diagram.insert_node(DiagramNode::new_with(nid("end"), NodeKind::Output, "End"));

    diagram.push_edge(DiagramEdge::new(nid("start"), nid("draft")));
    diagram.push_edge(DiagramEdge::new(nid("draft"), nid("review")));
    diagram.push_edge(DiagramEdge::new(nid("review"), nid("end")));

    diagram
}

/// A branch node with two outgoing edges; traversal must take the first.
pub(crate) fn branching() -> StateDiagram {
    let mut diagram = StateDiagram::default();

    diagram.insert_node(DiagramNode::new_with(nid("start"), NodeKind::Input, "Start"));
    diagram.insert_node(DiagramNode::new(nid("triage"), "Triage"));
    diagram.insert_node(DiagramNode::new(nid("accepted"), "Accepted"));
    diagram.insert_node(DiagramNode::new(nid("rejected"), "Rejected"));
    diagram.insert_node(DiagramNode::new_with(nid("end"), NodeKind::Output, "End"));

    diagram.push_edge(DiagramEdge::new(nid("start"), nid("triage")));
    diagram.push_edge(DiagramEdge::new(nid("triage"), nid("accepted")));
    diagram.push_edge(DiagramEdge::new(nid("triage"), nid("rejected")));
    diagram.push_edge(DiagramEdge::new(nid("accepted"), nid("end")));
    diagram.push_edge(DiagramEdge::new(nid("rejected"), nid("end")));

    diagram
}
