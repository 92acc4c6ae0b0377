// SPDX-FileCopyrightText: 2026 Statewalk Contributors
// SPDX-License-Identifier: MIT

use crate::format::mermaid::ident::{END_NODE_ID, START_NODE_ID};
use crate::model::graph::{DiagramNode, Position};

pub const CASCADE_ORIGIN_X: i32 = 50;
pub const CASCADE_ROW_Y: i32 = 50;
pub const CASCADE_STEP_X: i32 = 200;

/// Single-row left-to-right cascade.
///
/// The start node (if present) takes the leftmost slot, every other
/// non-boundary node advances by a fixed horizontal step in creation order,
/// and the end node (if present) is placed after all others. The vertical
/// coordinate is constant.
///
/// Without a start node the first slot stays unused; the cascade still
/// advances before each placement, matching the original placement rule.
pub fn layout_cascade(nodes: &mut [DiagramNode]) {
    let mut x = CASCADE_ORIGIN_X;

    if let Some(start) = nodes
        .iter_mut()
        .find(|node| node.id().as_str() == START_NODE_ID)
    {
        start.set_position(Position::new(x, CASCADE_ROW_Y));
    }

    for node in nodes.iter_mut() {
        if matches!(node.id().as_str(), START_NODE_ID | END_NODE_ID) {
            continue;
        }
        x += CASCADE_STEP_X;
        node.set_position(Position::new(x, CASCADE_ROW_Y));
    }

    if let Some(end) = nodes
        .iter_mut()
        .find(|node| node.id().as_str() == END_NODE_ID)
    {
        x += CASCADE_STEP_X;
        end.set_position(Position::new(x, CASCADE_ROW_Y));
    }
}
