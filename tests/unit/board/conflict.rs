//! Tests for the conflict predicate and the greedy conflict counter

use queenswalk::board::{Assignment, Placement, conflict, count_conflicts};

#[test]
fn test_shared_rank_conflicts() {
    let assignment = Assignment::from_pairs(&[(0, 0), (0, 3)]);
    assert!(conflict(&assignment));
}

#[test]
fn test_shared_file_conflicts() {
    let assignment = Assignment::from_pairs(&[(0, 2), (3, 2)]);
    assert!(conflict(&assignment));
}

#[test]
fn test_shared_diagonals_conflict() {
    // Falling diagonal
    assert!(conflict(&Assignment::from_pairs(&[(0, 0), (2, 2)])));
    // Rising diagonal
    assert!(conflict(&Assignment::from_pairs(&[(0, 3), (3, 0)])));
}

#[test]
fn test_known_solution_is_conflict_free() {
    let assignment = Assignment::from_pairs(&[(0, 1), (1, 3), (2, 0), (3, 2)]);
    assert!(!conflict(&assignment));
}

#[test]
fn test_empty_and_single_assignments_never_conflict() {
    assert!(!conflict(&Assignment::new()));
    assert!(!conflict(&Assignment::from_pairs(&[(0, 0)])));
}

// The predicate is pure: repeated calls on the same assignment agree
#[test]
fn test_conflict_is_idempotent() {
    let clashing = Assignment::from_pairs(&[(0, 0), (1, 1)]);
    let clean = Assignment::from_pairs(&[(0, 1), (1, 3)]);

    assert_eq!(conflict(&clashing), conflict(&clashing));
    assert_eq!(conflict(&clean), conflict(&clean));
}

#[test]
fn test_count_conflicts_counts_files_and_both_diagonals() {
    let placed = [
        Placement { row: 0, col: 0 },
        Placement { row: 1, col: 2 },
    ];

    // (2, 0): shares the file with (0,0)
    assert_eq!(count_conflicts(&placed, 2, 0), 1);
    // (2, 2): falling diagonal from (0,0) and the file of (1,2)
    assert_eq!(count_conflicts(&placed, 2, 2), 2);
    // (2, 1): rising diagonal from (1,2)
    assert_eq!(count_conflicts(&placed, 2, 1), 1);
}

#[test]
fn test_count_conflicts_ignores_shared_ranks() {
    // A queen on the same rank but a different file and diagonal
    let placed = [Placement { row: 2, col: 0 }];
    assert_eq!(count_conflicts(&placed, 2, 3), 0);
}

#[test]
fn test_count_conflicts_with_no_queens_placed() {
    assert_eq!(count_conflicts(&[], 0, 0), 0);
}
