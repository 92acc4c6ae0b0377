// SPDX-FileCopyrightText: 2026 Statewalk Contributors
// SPDX-License-Identifier: MIT

use std::fmt;

use super::ids::{EdgeId, NodeId};

/// Role of a node inside a state diagram.
///
/// Every non-empty diagram carries exactly one `Input` (start) and one
/// `Output` (end) node; the parser synthesizes them when the text does not
/// declare `[*]` boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Input,
    Output,
    Normal,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Output => "output",
            Self::Normal => "normal",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-node simulation status driving the visual state of a node.
///
/// The parser always emits `Pending`; only the simulation store mutates the
/// status afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeStatus {
    Pending,
    Active,
    Done,
    Error,
}

impl NodeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Done => "done",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 2D coordinate assigned by the cascade layout pass at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    x: i32,
    y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramNode {
    id: NodeId,
    kind: NodeKind,
    label: String,
    position: Position,
    status: NodeStatus,
}

impl DiagramNode {
    pub fn new(id: NodeId, label: impl Into<String>) -> Self {
        Self::new_with(id, NodeKind::Normal, label)
    }

    pub fn new_with(id: NodeId, kind: NodeKind, label: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            label: label.into(),
            position: Position::default(),
            status: NodeStatus::Pending,
        }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub fn status(&self) -> NodeStatus {
        self.status
    }

    pub fn set_status(&mut self, status: NodeStatus) {
        self.status = status;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramEdge {
    id: EdgeId,
    source: NodeId,
    target: NodeId,
    animated: bool,
}

impl DiagramEdge {
    /// Edge ids are deterministic from the endpoint pair, `e-<source>-<target>`.
    /// Duplicate transitions therefore share the same edge id.
    pub fn new(source: NodeId, target: NodeId) -> Self {
        let id = EdgeId::new(format!("e-{source}-{target}")).expect("valid edge id");
        Self {
            id,
            source,
            target,
            animated: false,
        }
    }

    pub fn id(&self) -> &EdgeId {
        &self.id
    }

    pub fn source(&self) -> &NodeId {
        &self.source
    }

    pub fn target(&self) -> &NodeId {
        &self.target
    }

    pub fn animated(&self) -> bool {
        self.animated
    }

    pub fn set_animated(&mut self, animated: bool) {
        self.animated = animated;
    }
}

/// A parsed state diagram: nodes in creation order plus edges in discovery
/// order.
///
/// Node ids are unique; inserting a node under an existing id replaces the
/// entry in place, keeping its creation-order slot. Edges are an ordered
/// sequence and are deliberately not deduplicated, so duplicate transition
/// lines stay observable. Traversal always uses first-matching-edge
/// semantics over this order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StateDiagram {
    nodes: Vec<DiagramNode>,
    edges: Vec<DiagramEdge>,
}

impl StateDiagram {
    pub fn nodes(&self) -> &[DiagramNode] {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut [DiagramNode] {
        &mut self.nodes
    }

    pub fn edges(&self) -> &[DiagramEdge] {
        &self.edges
    }

    pub fn node(&self, id: &str) -> Option<&DiagramNode> {
        self.nodes.iter().find(|node| node.id().as_str() == id)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut DiagramNode> {
        self.nodes.iter_mut().find(|node| node.id().as_str() == id)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    /// Insert a node, replacing any existing node with the same id in place.
    pub fn insert_node(&mut self, node: DiagramNode) {
        match self.node_mut(node.id().as_str()) {
            Some(existing) => *existing = node,
            None => self.nodes.push(node),
        }
    }

    pub fn push_edge(&mut self, edge: DiagramEdge) {
        self.edges.push(edge);
    }

    pub fn prepend_edge(&mut self, edge: DiagramEdge) {
        self.edges.insert(0, edge);
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    pub fn into_parts(self) -> (Vec<DiagramNode>, Vec<DiagramEdge>) {
        (self.nodes, self.edges)
    }
}
