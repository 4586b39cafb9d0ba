//! Tests for frontier node types and child generation

use queenswalk::board::Assignment;
use queenswalk::search::frontier::{BoundedNode, CostNode, ScoredNode, expand};

#[test]
fn test_expand_generates_one_child_per_file_in_order() {
    let root = Assignment::new();
    let children = expand(&root, 4);

    assert_eq!(children.len(), 4);
    for (col, child) in children.iter().enumerate() {
        assert_eq!(child.columns(), vec![col]);
    }
}

#[test]
fn test_expand_appends_to_the_next_rank() {
    let parent = Assignment::new().child(1);
    let children = expand(&parent, 3);

    for child in &children {
        assert_eq!(child.len(), 2);
        assert_eq!(child.placements().last().map(|p| p.row), Some(1));
    }
    // The parent is shared source material, not mutated
    assert_eq!(parent.len(), 1);
}

#[test]
fn test_expand_with_zero_files_yields_no_children() {
    assert!(expand(&Assignment::new(), 0).is_empty());
}

#[test]
fn test_scored_node_score_adds_cost_and_heuristic() {
    let node = ScoredNode {
        assignment: Assignment::new(),
        cost: 3,
        heuristic: 0.25,
    };
    assert!((node.score() - 3.25).abs() < f64::EPSILON);
}

#[test]
fn test_node_metadata_round_trips() {
    let cost_node = CostNode {
        assignment: Assignment::new().child(0),
        cost: 1,
    };
    let bounded_node = BoundedNode {
        assignment: Assignment::new().child(2),
        depth: 1,
    };

    assert_eq!(cost_node.cost, cost_node.assignment.len());
    assert_eq!(bounded_node.depth, bounded_node.assignment.len());
}
