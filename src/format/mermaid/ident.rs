// SPDX-FileCopyrightText: 2026 Statewalk Contributors
// SPDX-License-Identifier: MIT

use crate::model::ids::{IdError, NodeId};

/// Reserved boundary marker: `[*]` as a transition source denotes the start
/// node, `[*]` as a transition target denotes the end node. The same literal
/// serves both roles; disambiguation is purely positional.
pub const BOUNDARY_MARKER: &str = "[*]";

pub const START_NODE_ID: &str = "start";
pub const END_NODE_ID: &str = "end";

pub fn start_node_id() -> NodeId {
    NodeId::new(START_NODE_ID).expect("valid start id")
}

pub fn end_node_id() -> NodeId {
    NodeId::new(END_NODE_ID).expect("valid end id")
}

/// Derive a node id from a display label.
///
/// The label is lowercased and runs of whitespace collapse to a single `-`,
/// so `StateOne` and `state one` both derive `state-one`. The boundary
/// marker derives the start id; callers decide positionally whether the
/// marker means start or end.
///
/// A label with no non-whitespace characters has no derivable id; the parser
/// skips such lines.
pub fn derive_node_id(label: &str) -> Result<NodeId, IdError> {
    if label == BOUNDARY_MARKER {
        return Ok(start_node_id());
    }

    let mut id = String::with_capacity(label.len());
    let mut pending_gap = false;
    for ch in label.trim().chars() {
        if ch.is_whitespace() {
            pending_gap = true;
            continue;
        }
        if pending_gap {
            id.push('-');
            pending_gap = false;
        }
        for lower in ch.to_lowercase() {
            id.push(lower);
        }
    }

    NodeId::new(id)
}
