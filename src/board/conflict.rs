//! Conflict detection shared by every search strategy

use crate::board::placement::{Assignment, Placement};

/// Test whether any two placements in an assignment attack each other
///
/// Two queens conflict when they share a rank, a file, or a diagonal
/// (equal rank distance and file distance). Pure pairwise scan over all
/// unordered pairs, quadratic in the number of placements.
pub fn conflict(assignment: &Assignment) -> bool {
    let placements = assignment.placements();
    placements
        .iter()
        .enumerate()
        .any(|(i, later)| placements.iter().take(i).any(|earlier| attacks(*later, *earlier)))
}

/// Check a single pair for a shared rank, file, or diagonal
fn attacks(a: Placement, b: Placement) -> bool {
    a.row == b.row || a.col == b.col || a.row.abs_diff(b.row) == a.col.abs_diff(b.col)
}

/// Count placed queens attacking the square (`row`, `col`)
///
/// Used by the greedy solver while choosing a file for the next rank. A
/// placed queen counts when it shares the file or one of the two diagonals
/// through the square. Rank collisions are not counted; the greedy scan
/// fills each rank at most once, so they cannot occur.
pub fn count_conflicts(placed: &[Placement], row: usize, col: usize) -> usize {
    placed
        .iter()
        .filter(|queen| {
            // Falling diagonal: queen.row - queen.col == row - col, in unsigned form
            queen.col == col
                || queen.row + col == row + queen.col
                || queen.row + queen.col == row + col
        })
        .count()
}
