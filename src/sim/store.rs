// SPDX-FileCopyrightText: 2026 Statewalk Contributors
// SPDX-License-Identifier: MIT

use crate::model::graph::{DiagramEdge, DiagramNode, NodeStatus, StateDiagram};
use crate::model::ids::NodeId;
use crate::query;

use super::snapshot::SimulationSnapshot;

/// Observable lifecycle of a simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationPhase {
    /// No current node; nothing visited yet.
    Idle,
    /// A current node exists and stepping is allowed.
    Running,
    /// Terminal: `stop_simulation` was invoked; only `reset_simulation` or
    /// `load_diagram` leave this phase.
    Stopped,
}

/// Owns the loaded diagram plus traversal state, and funnels every mutation
/// through its command methods.
///
/// Commands are plain no-ops when their preconditions are unmet; nothing in
/// here panics or returns an error. Callers consult `can_go_forward` /
/// `can_go_backward` instead of catching failures. The store is the single
/// writer; a multi-threaded host must serialize access (mutex or an
/// actor-style single owner), since no internal locking is provided.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulationStore {
    nodes: Vec<DiagramNode>,
    edges: Vec<DiagramEdge>,
    current_node_id: Option<NodeId>,
    // Visited ids in step order; the tail is always the current node, so
    // backward traversal is a pop.
    visited: Vec<NodeId>,
    stopped: bool,
    source: Option<String>,
}

impl SimulationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the active diagram and clear all simulation state.
    pub fn load_diagram(&mut self, nodes: Vec<DiagramNode>, edges: Vec<DiagramEdge>) {
        self.nodes = nodes;
        self.edges = edges;
        self.current_node_id = None;
        self.visited.clear();
        self.stopped = false;
    }

    /// Convenience for loading a parse result wholesale.
    pub fn load(&mut self, diagram: StateDiagram) {
        let (nodes, edges) = diagram.into_parts();
        self.load_diagram(nodes, edges);
    }

    /// The raw text the loaded diagram was parsed from, if the caller chose
    /// to retain it.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn set_source(&mut self, source: Option<String>) {
        self.source = source;
    }

    pub fn nodes(&self) -> &[DiagramNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[DiagramEdge] {
        &self.edges
    }

    pub fn current_node_id(&self) -> Option<&NodeId> {
        self.current_node_id.as_ref()
    }

    pub fn visited_node_ids(&self) -> &[NodeId] {
        &self.visited
    }

    pub fn stopped(&self) -> bool {
        self.stopped
    }

    pub fn phase(&self) -> SimulationPhase {
        if self.stopped {
            SimulationPhase::Stopped
        } else if self.current_node_id.is_some() {
            SimulationPhase::Running
        } else {
            SimulationPhase::Idle
        }
    }

    pub fn node_by_id(&self, node_id: &str) -> Option<&DiagramNode> {
        self.nodes.iter().find(|node| node.id().as_str() == node_id)
    }

    /// Status of a node, `Pending` for ids the diagram does not contain.
    pub fn node_status(&self, node_id: &str) -> NodeStatus {
        self.node_by_id(node_id)
            .map_or(NodeStatus::Pending, DiagramNode::status)
    }

    pub fn snapshot(&self) -> SimulationSnapshot {
        SimulationSnapshot::capture(self)
    }

    /// Advance the token one step.
    ///
    /// From idle this enters the diagram's entry node; while running it
    /// follows the first outgoing edge of the current node, marking the old
    /// node done, the new one active, and the traversed edge animated.
    /// No-op while stopped, with no entry node, or with no outgoing edge.
    pub fn next_state(&mut self) {
        if self.stopped {
            return;
        }

        let Some(current_id) = self.current_node_id.clone() else {
            let Some(entry_id) = query::entry_node(&self.nodes).map(|node| node.id().clone())
            else {
                return;
            };
            for node in &mut self.nodes {
                let status = if *node.id() == entry_id {
                    NodeStatus::Active
                } else {
                    NodeStatus::Pending
                };
                node.set_status(status);
            }
            self.visited = vec![entry_id.clone()];
            self.current_node_id = Some(entry_id);
            return;
        };

        let Some(next_id) =
            query::first_outgoing_edge(&self.edges, &current_id).map(|edge| edge.target().clone())
        else {
            return;
        };
        if self.node_by_id(next_id.as_str()).is_none() {
            return;
        }

        for node in &mut self.nodes {
            if *node.id() == current_id {
                node.set_status(NodeStatus::Done);
            } else if *node.id() == next_id {
                node.set_status(NodeStatus::Active);
            }
        }
        for edge in &mut self.edges {
            edge.set_animated(*edge.source() == current_id && *edge.target() == next_id);
        }

        self.visited.push(next_id.clone());
        self.current_node_id = Some(next_id);
    }

    /// Rewind the token one step.
    ///
    /// With no current node, or with only the entry node visited, this
    /// degrades to a full `reset_simulation`. Otherwise it follows the first
    /// incoming edge of the current node back, returning the current node to
    /// pending and popping it off the visited stack. No-op while stopped or
    /// with no incoming edge.
    pub fn previous_state(&mut self) {
        if self.stopped {
            return;
        }

        let Some(current_id) = self.current_node_id.clone() else {
            self.reset_simulation();
            return;
        };
        if self.visited.len() <= 1 {
            self.reset_simulation();
            return;
        }

        let Some(prev_id) =
            query::first_incoming_edge(&self.edges, &current_id).map(|edge| edge.source().clone())
        else {
            return;
        };
        if self.node_by_id(prev_id.as_str()).is_none() {
            return;
        }

        for node in &mut self.nodes {
            if *node.id() == current_id {
                node.set_status(NodeStatus::Pending);
            } else if *node.id() == prev_id {
                node.set_status(NodeStatus::Active);
            }
        }
        for edge in &mut self.edges {
            edge.set_animated(*edge.source() == prev_id && *edge.target() == current_id);
        }

        self.visited.pop();
        self.current_node_id = Some(prev_id);
    }

    /// Mark the current node as errored and freeze the simulation. Requires
    /// a current node; terminal until reset or a new diagram is loaded.
    pub fn stop_simulation(&mut self) {
        let Some(current_id) = self.current_node_id.clone() else {
            return;
        };
        if let Some(node) = self
            .nodes
            .iter_mut()
            .find(|node| *node.id() == current_id)
        {
            node.set_status(NodeStatus::Error);
        }
        self.stopped = true;
    }

    /// Return to idle: every node pending, every edge un-animated, visited
    /// stack emptied, stop flag cleared. The loaded diagram is kept.
    pub fn reset_simulation(&mut self) {
        self.current_node_id = None;
        self.visited.clear();
        self.stopped = false;
        for node in &mut self.nodes {
            node.set_status(NodeStatus::Pending);
        }
        for edge in &mut self.edges {
            edge.set_animated(false);
        }
    }

    /// False while stopped; from idle, true iff the diagram has any node;
    /// while running, false on the output node and true iff the current node
    /// has an outgoing edge.
    pub fn can_go_forward(&self) -> bool {
        if self.stopped {
            return false;
        }
        let Some(current_id) = &self.current_node_id else {
            return !self.nodes.is_empty();
        };
        match self.node_by_id(current_id.as_str()) {
            Some(node) if query::is_terminal_node(node) => false,
            _ => query::first_outgoing_edge(&self.edges, current_id).is_some(),
        }
    }

    /// True iff a current node exists and more than one node has been
    /// visited so far.
    pub fn can_go_backward(&self) -> bool {
        self.current_node_id.is_some() && self.visited.len() > 1
    }
}
