//! Uniform-cost enumeration of queen placements

use std::collections::VecDeque;

use crate::board::{Assignment, conflict};
use crate::search::frontier::{self, CostNode};
use crate::search::{SolutionSet, checked_size};

/// Enumerate every solution in uniform-cost order
///
/// Each placement costs one unit, so a node's cost always equals its
/// depth. After every expansion the whole frontier is stably re-sorted
/// ascending by cost before the next pop. With all nodes at a given depth
/// sharing one cost, the ordering degenerates to breadth-first with
/// insertion-order tie-breaks; the full re-sort is kept so the iteration
/// sequence matches the stated discipline exactly.
pub fn solve(size: i64) -> SolutionSet {
    let Some(dimension) = checked_size(size) else {
        return SolutionSet::new();
    };

    let mut solutions = SolutionSet::new();
    let mut queue = VecDeque::from([CostNode {
        assignment: Assignment::new(),
        cost: 0,
    }]);

    while let Some(node) = queue.pop_front() {
        if conflict(&node.assignment) {
            continue;
        }
        if node.assignment.len() == dimension {
            solutions.push(node.assignment);
            continue;
        }

        let next_cost = node.cost + 1;
        queue.extend(
            frontier::expand(&node.assignment, dimension)
                .into_iter()
                .map(|assignment| CostNode {
                    assignment,
                    cost: next_cost,
                }),
        );
        queue.make_contiguous().sort_by_key(|entry| entry.cost);
    }

    solutions
}
