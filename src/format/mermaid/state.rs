// SPDX-FileCopyrightText: 2026 Statewalk Contributors
// SPDX-License-Identifier: MIT

use std::sync::OnceLock;

use regex::Regex;

use super::ident::{
    derive_node_id, end_node_id, start_node_id, BOUNDARY_MARKER, END_NODE_ID, START_NODE_ID,
};
use crate::layout::layout_cascade;
use crate::model::graph::{DiagramEdge, DiagramNode, NodeKind, StateDiagram};

/// Header line that opens a diagram; lines before it are ignored.
pub const DIAGRAM_HEADER: &str = "stateDiagram-v2";

/// Comment marker; such lines are skipped inside a diagram.
pub const COMMENT_MARKER: &str = "//";

fn transition_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(.+?)\s*-->\s*(.+?)$").expect("valid transition pattern"))
}

/// Parse the `stateDiagram-v2` transition-arrow subset into a node/edge graph.
///
/// Recognized:
/// - a header line whose trimmed content is exactly `stateDiagram-v2`
/// - transition lines `<source> --> <target>` (whitespace around the arrow
///   is tolerated)
/// - `[*]` as source/target for the start/end boundary
/// - blank lines and `//` comments
///
/// The grammar is permissive by design: this never fails. Input with no
/// header yields an empty diagram, and unrecognized lines are silently
/// skipped. After parsing, missing boundaries are synthesized and the
/// single-row cascade layout assigns every node a deterministic position.
///
/// Known ambiguity, preserved on purpose: a state literally labeled "Start"
/// or "End" derives the same id as the synthetic boundary node, so
/// `[*] --> Start` produces a self-edge on the start node rather than a
/// renamed state.
pub fn parse_state_diagram(input: &str) -> StateDiagram {
    let mut diagram = StateDiagram::default();
    let mut saw_header = false;
    let mut has_start = false;
    let mut has_end = false;

    for raw_line in input.lines() {
        let trimmed = raw_line.trim();

        if trimmed == DIAGRAM_HEADER {
            saw_header = true;
            continue;
        }
        if !saw_header {
            continue;
        }
        if trimmed.is_empty() || trimmed.starts_with(COMMENT_MARKER) {
            continue;
        }

        let Some(caps) = transition_pattern().captures(trimmed) else {
            continue;
        };
        let source_label = caps.get(1).map_or("", |m| m.as_str());
        let target_label = caps.get(2).map_or("", |m| m.as_str());

        let source_id = if source_label == BOUNDARY_MARKER {
            start_node_id()
        } else {
            match derive_node_id(source_label) {
                Ok(id) => id,
                Err(_) => continue,
            }
        };
        let target_id = if target_label == BOUNDARY_MARKER {
            end_node_id()
        } else {
            match derive_node_id(target_label) {
                Ok(id) => id,
                Err(_) => continue,
            }
        };

        if !diagram.contains_node(source_id.as_str()) {
            let node = if source_label == BOUNDARY_MARKER {
                has_start = true;
                DiagramNode::new_with(start_node_id(), NodeKind::Input, "Start")
            } else {
                DiagramNode::new(source_id.clone(), source_label)
            };
            diagram.insert_node(node);
        }

        if !diagram.contains_node(target_id.as_str()) {
            let node = if target_label == BOUNDARY_MARKER {
                has_end = true;
                DiagramNode::new_with(end_node_id(), NodeKind::Output, "End")
            } else {
                DiagramNode::new(target_id.clone(), target_label)
            };
            diagram.insert_node(node);
        }

        diagram.push_edge(DiagramEdge::new(source_id, target_id));
    }

    synthesize_boundaries(&mut diagram, has_start, has_end);
    layout_cascade(diagram.nodes_mut());

    diagram
}

/// When transitions exist but the text never declared a `[*]` boundary,
/// synthesize one: a start node wired to the first edge's source, and an end
/// node wired from the last edge's target. Synthesis overwrites a same-id
/// node in place, so a plain state that happens to derive the boundary id is
/// promoted rather than duplicated.
fn synthesize_boundaries(diagram: &mut StateDiagram, has_start: bool, has_end: bool) {
    if diagram.edges().is_empty() {
        return;
    }

    if !has_start {
        let first_source = diagram.edges()[0].source().clone();
        if first_source.as_str() != START_NODE_ID {
            diagram.insert_node(DiagramNode::new_with(
                start_node_id(),
                NodeKind::Input,
                "Start",
            ));
            diagram.prepend_edge(DiagramEdge::new(start_node_id(), first_source));
        }
    }

    if !has_end {
        let last_target = diagram
            .edges()
            .last()
            .map(|edge| edge.target().clone())
            .expect("edges checked non-empty");
        if last_target.as_str() != END_NODE_ID {
            diagram.insert_node(DiagramNode::new_with(end_node_id(), NodeKind::Output, "End"));
            diagram.push_edge(DiagramEdge::new(last_target, end_node_id()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::parse_state_diagram;
    use crate::layout::{CASCADE_ORIGIN_X, CASCADE_ROW_Y, CASCADE_STEP_X};
    use crate::model::graph::{NodeKind, NodeStatus};

    fn node_ids(diagram: &crate::model::StateDiagram) -> Vec<&str> {
        diagram.nodes().iter().map(|n| n.id().as_str()).collect()
    }

    fn edge_pairs(diagram: &crate::model::StateDiagram) -> Vec<(&str, &str)> {
        diagram
            .edges()
            .iter()
            .map(|e| (e.source().as_str(), e.target().as_str()))
            .collect()
    }

    #[test]
    fn input_without_header_yields_empty_diagram() {
        for text in ["", "   \n\n", "A --> B", "graph TD\nA --> B"] {
            let diagram = parse_state_diagram(text);
            assert!(diagram.is_empty(), "expected empty diagram for {text:?}");
        }
    }

    #[test]
    fn header_with_zero_transitions_yields_empty_diagram() {
        let diagram = parse_state_diagram("stateDiagram-v2\n// just a comment\n");
        assert!(diagram.is_empty());
    }

    #[test]
    fn lines_before_the_header_are_ignored() {
        let diagram = parse_state_diagram("A --> B\nstateDiagram-v2\nC --> D\n");
        assert_eq!(edge_pairs(&diagram), [("start", "c"), ("c", "d"), ("d", "end")]);
    }

    #[test]
    fn chain_without_boundaries_synthesizes_start_and_end() {
        let diagram = parse_state_diagram("stateDiagram-v2\nA --> B\nB --> C\n");

        assert_eq!(node_ids(&diagram), ["a", "b", "c", "start", "end"]);
        assert_eq!(
            edge_pairs(&diagram),
            [("start", "a"), ("a", "b"), ("b", "c"), ("c", "end")]
        );

        let start = diagram.node("start").expect("start node");
        assert_eq!(start.kind(), NodeKind::Input);
        assert_eq!(start.label(), "Start");
        let end = diagram.node("end").expect("end node");
        assert_eq!(end.kind(), NodeKind::Output);
        assert_eq!(end.label(), "End");
        assert!(diagram
            .nodes()
            .iter()
            .all(|node| node.status() == NodeStatus::Pending));
    }

    #[test]
    fn explicit_boundaries_are_not_resynthesized() {
        let diagram = parse_state_diagram("stateDiagram-v2\n[*] --> Draft\nDraft --> [*]\n");

        assert_eq!(node_ids(&diagram), ["start", "draft", "end"]);
        assert_eq!(edge_pairs(&diagram), [("start", "draft"), ("draft", "end")]);
    }

    #[test]
    fn label_spellings_normalizing_to_same_id_share_a_node() {
        let diagram =
            parse_state_diagram("stateDiagram-v2\nStateOne --> StateTwo\nstateone --> State Three\n");

        assert_eq!(
            node_ids(&diagram),
            ["stateone", "statetwo", "state-three", "start", "end"]
        );
        // First occurrence defines the stored label.
        assert_eq!(diagram.node("stateone").map(|n| n.label()), Some("StateOne"));
    }

    #[test]
    fn duplicate_transitions_produce_duplicate_edges() {
        let diagram = parse_state_diagram("stateDiagram-v2\nA --> B\nA --> B\n");

        assert_eq!(
            edge_pairs(&diagram),
            [("start", "a"), ("a", "b"), ("a", "b"), ("b", "end")]
        );
        assert_eq!(diagram.edges()[1].id(), diagram.edges()[2].id());
    }

    #[test]
    fn comments_and_unrecognized_lines_are_skipped() {
        let text = "stateDiagram-v2\n// note\nA --> B\nnot a transition\nstate C\n\nB --> C\n";
        let diagram = parse_state_diagram(text);

        assert_eq!(edge_pairs(&diagram), [("start", "a"), ("a", "b"), ("b", "c"), ("c", "end")]);
    }

    #[test]
    fn arrow_whitespace_is_tolerated() {
        let diagram = parse_state_diagram("stateDiagram-v2\nA-->B\nB   -->   C\n");
        assert_eq!(edge_pairs(&diagram), [("start", "a"), ("a", "b"), ("b", "c"), ("c", "end")]);
    }

    #[test]
    fn cascade_positions_follow_creation_order() {
        let diagram = parse_state_diagram("stateDiagram-v2\nA --> B\nB --> C\n");

        let xs: Vec<(String, i32, i32)> = diagram
            .nodes()
            .iter()
            .map(|n| (n.id().to_string(), n.position().x(), n.position().y()))
            .collect();

        // start sits at the origin, normal nodes cascade in creation order,
        // end comes last.
        let step = CASCADE_STEP_X;
        let expected = vec![
            ("a".to_owned(), CASCADE_ORIGIN_X + step, CASCADE_ROW_Y),
            ("b".to_owned(), CASCADE_ORIGIN_X + 2 * step, CASCADE_ROW_Y),
            ("c".to_owned(), CASCADE_ORIGIN_X + 3 * step, CASCADE_ROW_Y),
            ("start".to_owned(), CASCADE_ORIGIN_X, CASCADE_ROW_Y),
            ("end".to_owned(), CASCADE_ORIGIN_X + 4 * step, CASCADE_ROW_Y),
        ];
        assert_eq!(xs, expected);
    }

    // Pins the documented grammar ambiguity: a state literally labeled
    // "Start" collides with the synthetic start node id, so `[*] --> Start`
    // yields a self-edge on `start` instead of a distinct state.
    #[test]
    fn literal_start_label_collides_with_boundary_node() {
        let text = "stateDiagram-v2\n[*] --> Start\nStart --> Process\nProcess --> Done\nDone --> [*]";
        let diagram = parse_state_diagram(text);

        assert_eq!(node_ids(&diagram), ["start", "process", "done", "end"]);
        assert_eq!(
            edge_pairs(&diagram),
            [("start", "start"), ("start", "process"), ("process", "done"), ("done", "end")]
        );
        // The `[*]` occurrence created the node first, so the boundary label
        // and kind win over the literal "Start" state.
        let start = diagram.node("start").expect("start node");
        assert_eq!(start.kind(), NodeKind::Input);
        assert_eq!(start.label(), "Start");
    }

    // Symmetric collision via synthesis: a target labeled "Start" becomes a
    // normal node first, then the start-synthesis pass promotes it in place.
    #[test]
    fn synthesized_start_overwrites_colliding_state_in_place() {
        let diagram = parse_state_diagram("stateDiagram-v2\nA --> Start\n");

        assert_eq!(node_ids(&diagram), ["a", "start", "end"]);
        assert_eq!(
            edge_pairs(&diagram),
            [("start", "a"), ("a", "start"), ("start", "end")]
        );
        assert_eq!(diagram.node("start").map(|n| n.kind()), Some(NodeKind::Input));
    }
}
