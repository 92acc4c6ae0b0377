// SPDX-FileCopyrightText: 2026 Statewalk Contributors
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

use super::store::SimulationStore;

/// Wire view of one node, status and layout included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    pub id: String,
    pub label: String,
    pub kind: String,
    pub status: String,
    pub x: i32,
    pub y: i32,
}

/// Wire view of one edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSnapshot {
    pub id: String,
    pub source: String,
    pub target: String,
    pub animated: bool,
}

/// The pull-based read surface for rendering collaborators: the full node
/// and edge lists plus the simulation predicates, captured as a pure
/// function of store state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationSnapshot {
    pub nodes: Vec<NodeSnapshot>,
    pub edges: Vec<EdgeSnapshot>,
    pub current_node_id: Option<String>,
    pub stopped: bool,
    pub can_go_forward: bool,
    pub can_go_backward: bool,
}

impl SimulationSnapshot {
    pub fn capture(store: &SimulationStore) -> Self {
        let nodes = store
            .nodes()
            .iter()
            .map(|node| NodeSnapshot {
                id: node.id().to_string(),
                label: node.label().to_owned(),
                kind: node.kind().as_str().to_owned(),
                status: node.status().as_str().to_owned(),
                x: node.position().x(),
                y: node.position().y(),
            })
            .collect();
        let edges = store
            .edges()
            .iter()
            .map(|edge| EdgeSnapshot {
                id: edge.id().to_string(),
                source: edge.source().to_string(),
                target: edge.target().to_string(),
                animated: edge.animated(),
            })
            .collect();

        Self {
            nodes,
            edges,
            current_node_id: store.current_node_id().map(ToString::to_string),
            stopped: store.stopped(),
            can_go_forward: store.can_go_forward(),
            can_go_backward: store.can_go_backward(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SimulationSnapshot;
    use crate::model::fixtures;
    use crate::sim::SimulationStore;

    #[test]
    fn snapshot_reflects_store_state_and_round_trips_as_json() {
        let mut store = SimulationStore::new();
        store.load(fixtures::linear_chain());
        store.next_state();
        store.next_state();

        let snapshot = store.snapshot();
        assert_eq!(snapshot.current_node_id.as_deref(), Some("draft"));
        assert!(snapshot.can_go_forward);
        assert!(snapshot.can_go_backward);
        assert!(!snapshot.stopped);

        let start = snapshot.nodes.iter().find(|n| n.id == "start").expect("start");
        assert_eq!(start.kind, "input");
        assert_eq!(start.status, "done");
        let draft = snapshot.nodes.iter().find(|n| n.id == "draft").expect("draft");
        assert_eq!(draft.status, "active");

        let animated: Vec<&str> = snapshot
            .edges
            .iter()
            .filter(|e| e.animated)
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(animated, ["e-start-draft"]);

        let json = serde_json::to_string(&snapshot).expect("serialize");
        let back: SimulationSnapshot = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, snapshot);
    }
}
