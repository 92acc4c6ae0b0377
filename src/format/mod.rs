// SPDX-FileCopyrightText: 2026 Statewalk Contributors
// SPDX-License-Identifier: MIT

//! Text formats understood by statewalk.
//!
//! Currently the single supported notation is the Mermaid `stateDiagram-v2`
//! transition subset.

pub mod mermaid;

pub use mermaid::parse_state_diagram;
