//! Breadth-first enumeration of queen placements

use std::collections::VecDeque;

use crate::board::{Assignment, conflict};
use crate::search::{SolutionSet, checked_size, frontier};

/// Enumerate every solution breadth-first
///
/// Same generation rule as the depth-first solve, but the frontier is a
/// queue: candidates are popped from the front and children pushed to the
/// back, so exploration proceeds by increasing depth. Solutions therefore
/// appear in increasing file order of their leading ranks.
pub fn solve(size: i64) -> SolutionSet {
    let Some(dimension) = checked_size(size) else {
        return SolutionSet::new();
    };

    let mut solutions = SolutionSet::new();
    let mut queue = VecDeque::from([Assignment::new()]);

    while let Some(assignment) = queue.pop_front() {
        if conflict(&assignment) {
            continue;
        }
        if assignment.len() == dimension {
            solutions.push(assignment);
            continue;
        }
        queue.extend(frontier::expand(&assignment, dimension));
    }

    solutions
}
