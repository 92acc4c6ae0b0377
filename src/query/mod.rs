// SPDX-FileCopyrightText: 2026 Statewalk Contributors
// SPDX-License-Identifier: MIT

//! Read-only queries over diagram graphs.
//!
//! These power the simulation store's traversal and the control surface's
//! derived views; none of them mutate the graph.

pub mod walk;

pub use walk::{
    default_walk, entry_node, first_incoming_edge, first_outgoing_edge, is_terminal_node,
};
