//! Iterative-deepening depth-first enumeration of queen placements

use crate::board::{Assignment, conflict};
use crate::search::frontier::{self, BoundedNode};
use crate::search::{SolutionSet, checked_size};

/// Enumerate solutions with iteratively deepened depth-first sweeps
///
/// Runs one depth-bounded sweep per bound 0, 1, 2, … and stops at the
/// first bound that yields solutions, or once the bound exceeds the board
/// size. A node's depth counts expansions from the empty root, which
/// equals the number of placed queens, so a complete board only surfaces
/// once the bound reaches the board size; every earlier sweep comes back
/// empty by construction.
pub fn solve(size: i64) -> SolutionSet {
    let Some(dimension) = checked_size(size) else {
        return SolutionSet::new();
    };

    let mut solutions = SolutionSet::new();
    let mut bound = 0;
    while solutions.is_empty() && bound <= dimension {
        solutions = bounded_sweep(dimension, bound);
        bound += 1;
    }

    solutions
}

/// One depth-bounded depth-first sweep
///
/// Identical to the unbounded depth-first solve except that nodes whose
/// depth exceeds the bound are discarded unexpanded.
fn bounded_sweep(dimension: usize, bound: usize) -> SolutionSet {
    let mut solutions = SolutionSet::new();
    let mut stack = vec![BoundedNode {
        assignment: Assignment::new(),
        depth: 0,
    }];

    while let Some(node) = stack.pop() {
        if node.depth > bound {
            continue;
        }
        if conflict(&node.assignment) {
            continue;
        }
        if node.assignment.len() == dimension {
            solutions.push(node.assignment);
            continue;
        }

        let next_depth = node.depth + 1;
        stack.extend(
            frontier::expand(&node.assignment, dimension)
                .into_iter()
                .map(|assignment| BoundedNode {
                    assignment,
                    depth: next_depth,
                }),
        );
    }

    solutions
}
