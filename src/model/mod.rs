// SPDX-FileCopyrightText: 2026 Statewalk Contributors
// SPDX-License-Identifier: MIT

//! Core data model.
//!
//! A diagram is an ordered node/edge graph produced by the parser; the
//! simulation store owns a loaded copy and mutates per-node status and
//! per-edge animation flags as a token walks the edges.

#[cfg(test)]
pub(crate) mod fixtures;
pub mod graph;
pub mod ids;

pub use graph::{DiagramEdge, DiagramNode, NodeKind, NodeStatus, Position, StateDiagram};
pub use ids::{EdgeId, Id, IdError, NodeId};
