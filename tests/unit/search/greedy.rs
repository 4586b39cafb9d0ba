//! Tests for the constructive greedy strategy

use queenswalk::board::{Assignment, conflict};
use queenswalk::search::greedy;

#[test]
fn test_records_at_most_one_board() {
    for size in 1..=9_i64 {
        assert!(greedy::solve(size).len() <= 1, "count for size {size}");
    }
}

#[test]
fn test_non_positive_sizes_yield_no_solutions() {
    assert!(greedy::solve(0).is_empty());
    assert!(greedy::solve(-3).is_empty());
}

#[test]
fn test_single_square_board() {
    let solutions = greedy::solve(1);
    assert_eq!(
        solutions.first().map(Assignment::columns),
        Some(vec![0])
    );
}

// Each rank appends its minimum-conflict file even when conflicts remain,
// so the two-rank board stacks both queens on file 0 and is still recorded
#[test]
fn test_two_rank_board_is_recorded_despite_conflicts() {
    let solutions = greedy::solve(2);
    assert_eq!(
        solutions.first().map(Assignment::columns),
        Some(vec![0, 0])
    );
    assert!(conflict(solutions.first().unwrap()));
}

#[test]
fn test_four_rank_board_matches_the_hand_traced_result() {
    let solutions = greedy::solve(4);
    assert_eq!(
        solutions.first().map(Assignment::columns),
        Some(vec![0, 2, 0, 1])
    );
}

#[test]
fn test_five_rank_board_is_a_true_solution() {
    let solutions = greedy::solve(5);
    let board = solutions.first().unwrap();
    assert_eq!(board.columns(), vec![0, 2, 4, 1, 3]);
    assert!(!conflict(board));
}
