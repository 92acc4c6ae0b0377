// SPDX-FileCopyrightText: 2026 Statewalk Contributors
// SPDX-License-Identifier: MIT

//! Statewalk — state-diagram text parsing and step-through simulation.
//!
//! The parser turns the Mermaid `stateDiagram-v2` transition subset into a
//! node/edge graph; the simulation store walks a token along that graph with
//! per-node status and per-edge animation for rendering collaborators.

pub mod format;
pub mod layout;
pub mod model;
pub mod query;
pub mod sim;
