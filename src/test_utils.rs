//! Reference fixtures for tests and benchmarks.
//!
//! This module is only compiled for tests and with the `test-utils` feature.

use crate::scope::{ChildNode, InclusionState, ParentNode, Selections};

/// Three parents with children:
///
/// ```text
/// parentA            HIERARCHICALLY_INCLUDED
///   childA           NOT_INCLUDED
///   childB           INCLUDED
///   childC           NOT_INCLUDED
/// parentB            NOT_INCLUDED
///   childA           NOT_INCLUDED
/// parentC            INCLUDED
///   childA           INCLUDED
///   childB           HIERARCHICALLY_INCLUDED
/// ```
pub fn computed_input() -> Vec<ParentNode> {
    use InclusionState::*;

    vec![
        ParentNode::new("37e37fbe", "parentA", HierarchicallyIncluded)
            .with_child(ChildNode::new("0b129f84", "childA", NotIncluded))
            .with_child(ChildNode::new("0b129f85", "childB", Included))
            .with_child(ChildNode::new("0b129f86", "childC", NotIncluded)),
        ParentNode::new("37e37fbc", "parentB", NotIncluded)
            .with_child(ChildNode::new("72f3cc63", "childA", NotIncluded)),
        ParentNode::new("37e37fba", "parentC", Included)
            .with_child(ChildNode::new("4a560d7c", "childA", Included))
            .with_child(ChildNode::new("4a560d7a", "childB", HierarchicallyIncluded)),
    ]
}

/// Selections for [`computed_input`], including stale `parentD` and
/// `childB` under `parentB`.
pub fn selected_input() -> Selections {
    Selections::default()
        .with_parent("parentC")
        .with_parent("parentD")
        .with_child("childB", "parentA")
        .with_child("childB", "parentB")
        .with_child("childA", "parentC")
}

pub fn expected_lines_two_state() -> Vec<String> {
    to_lines(&[
        "37e37fbe aria-level=1 aria-posinset=1 aria-setsize=3 + - parentA",
        "0b129f84 aria-level=2 aria-posinset=1 aria-setsize=0 - - childA",
        "0b129f85 aria-level=2 aria-posinset=2 aria-setsize=0 + + childB",
        "0b129f86 aria-level=2 aria-posinset=3 aria-setsize=0 - - childC",
        "37e37fbc aria-level=1 aria-posinset=2 aria-setsize=1 - - parentB",
        "72f3cc63 aria-level=2 aria-posinset=1 aria-setsize=0 - - childA",
        "37e37fba aria-level=1 aria-posinset=3 aria-setsize=2 + + parentC",
        "4a560d7c aria-level=2 aria-posinset=1 aria-setsize=0 + + childA",
        "4a560d7a aria-level=2 aria-posinset=2 aria-setsize=0 + - childB",
    ])
}

pub fn expected_lines_three_state() -> Vec<String> {
    to_lines(&[
        "37e37fbe aria-level=1 aria-posinset=1 aria-setsize=3 * - parentA",
        "0b129f84 aria-level=2 aria-posinset=1 aria-setsize=0 - - childA",
        "0b129f85 aria-level=2 aria-posinset=2 aria-setsize=0 + + childB",
        "0b129f86 aria-level=2 aria-posinset=3 aria-setsize=0 - - childC",
        "37e37fbc aria-level=1 aria-posinset=2 aria-setsize=1 - - parentB",
        "72f3cc63 aria-level=2 aria-posinset=1 aria-setsize=0 - - childA",
        "37e37fba aria-level=1 aria-posinset=3 aria-setsize=2 + + parentC",
        "4a560d7c aria-level=2 aria-posinset=1 aria-setsize=0 + + childA",
        "4a560d7a aria-level=2 aria-posinset=2 aria-setsize=0 * - childB",
    ])
}

/// A wide scope with `parents` parents of `children` children each.
pub fn generated_scope(parents: usize, children: usize) -> Vec<ParentNode> {
    const STATES: [InclusionState; 3] = [
        InclusionState::Included,
        InclusionState::HierarchicallyIncluded,
        InclusionState::NotIncluded,
    ];

    (0..parents)
        .map(|p| {
            let mut parent = ParentNode::new(
                format!("p{:06}", p),
                format!("parent{}", p),
                STATES[p % STATES.len()],
            );
            for c in 0..children {
                parent = parent.with_child(ChildNode::new(
                    format!("c{:06}-{:04}", p, c),
                    format!("child{}", c),
                    STATES[(p + c) % STATES.len()],
                ));
            }
            parent
        })
        .collect()
}

fn to_lines(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|l| l.to_string()).collect()
}
