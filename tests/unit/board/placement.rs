//! Tests for placements and assignment construction

use queenswalk::board::{Assignment, Placement};

#[test]
fn test_child_places_a_queen_on_the_next_rank() {
    let root = Assignment::new();
    let first = root.child(3);
    let second = first.child(1);

    assert_eq!(
        second.placements(),
        &[
            Placement { row: 0, col: 3 },
            Placement { row: 1, col: 1 },
        ]
    );
    assert_eq!(second.len(), 2);
}

#[test]
fn test_child_leaves_the_parent_untouched() {
    let parent = Assignment::new().child(0);
    let _sibling_a = parent.child(1);
    let _sibling_b = parent.child(2);

    assert_eq!(parent.len(), 1);
    assert_eq!(parent.columns(), vec![0]);
}

#[test]
fn test_from_pairs_preserves_order() {
    let assignment = Assignment::from_pairs(&[(0, 1), (1, 3), (2, 0), (3, 2)]);

    assert_eq!(assignment.len(), 4);
    assert_eq!(assignment.columns(), vec![1, 3, 0, 2]);
}

#[test]
fn test_empty_assignment() {
    let assignment = Assignment::new();

    assert!(assignment.is_empty());
    assert_eq!(assignment.len(), 0);
    assert_eq!(assignment, Assignment::default());
}

#[test]
fn test_cache_key_lists_placements_in_rank_order() {
    let assignment = Assignment::from_pairs(&[(0, 2), (1, 0)]);

    assert_eq!(assignment.cache_key(), "0,2;1,0");
    assert_eq!(Assignment::new().cache_key(), "");
}

#[test]
fn test_from_placement_vector() {
    let queens = vec![
        Placement { row: 2, col: 0 },
        Placement { row: 3, col: 2 },
    ];
    let assignment = Assignment::from(queens);

    // Ranks need not start at zero; the greedy builder relies on this
    assert_eq!(assignment.placements().first().map(|p| p.row), Some(2));
    assert_eq!(assignment.len(), 2);
}
