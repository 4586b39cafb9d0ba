//! Depth-first enumeration of queen placements

use crate::board::{Assignment, conflict};
use crate::search::{SolutionSet, checked_size, frontier};

/// Enumerate every solution depth-first
///
/// The frontier is a stack seeded with the empty assignment. Conflicting
/// candidates are discarded when popped; complete boards are recorded and
/// never expanded further. Children are pushed in increasing file order,
/// so popping explores the highest file first — changing that order
/// changes discovery order, not the solution set.
pub fn solve(size: i64) -> SolutionSet {
    let Some(dimension) = checked_size(size) else {
        return SolutionSet::new();
    };

    let mut solutions = SolutionSet::new();
    let mut stack = vec![Assignment::new()];

    while let Some(assignment) = stack.pop() {
        if conflict(&assignment) {
            continue;
        }
        if assignment.len() == dimension {
            solutions.push(assignment);
            continue;
        }
        stack.extend(frontier::expand(&assignment, dimension));
    }

    solutions
}
