// SPDX-FileCopyrightText: 2026 Statewalk Contributors
// SPDX-License-Identifier: MIT

//! Mermaid-ish parsing for the state-diagram subset.

pub mod ident;
pub mod state;

pub use ident::{derive_node_id, BOUNDARY_MARKER, END_NODE_ID, START_NODE_ID};
pub use state::{parse_state_diagram, COMMENT_MARKER, DIAGRAM_HEADER};
