// SPDX-FileCopyrightText: 2026 Statewalk Contributors
// SPDX-License-Identifier: MIT

//! Step-through simulation over a parsed diagram.
//!
//! The store owns the active graph and walks a token forward/backward along
//! its edges; collaborators read node status and edge animation back out,
//! either directly or via the serde snapshot.

pub mod snapshot;
pub mod store;

pub use snapshot::{EdgeSnapshot, NodeSnapshot, SimulationSnapshot};
pub use store::{SimulationPhase, SimulationStore};
