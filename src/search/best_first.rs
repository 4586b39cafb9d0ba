//! Randomized best-first enumeration of queen placements

use std::collections::{HashSet, VecDeque};

use crate::board::{Assignment, conflict};
use crate::search::frontier::{self, ScoredNode};
use crate::search::heuristic::RandomHeuristic;
use crate::search::{SolutionSet, checked_size};

/// Enumerate solutions best-first under a randomized score
///
/// Every node is scored `cost + heuristic`, where the heuristic is drawn
/// uniformly from [0, 1) at node creation and never depends on the board.
/// The whole open list is stably re-sorted ascending by score before
/// every pop. Because a draw never reaches 1, every node of depth `k`
/// scores below every node of depth `k + 1`, so exploration proceeds
/// level by level with a random shuffle inside each level. The score is
/// not a remaining-work estimate, so no optimality claim attaches to the
/// discovery order.
///
/// Keys of popped conflict-free assignments are recorded in a closed set.
/// Ranks increase strictly along every path, so no assignment can be
/// generated twice; the set is write-only bookkeeping and is never
/// consulted.
// The closed set is retained as write-only bookkeeping
#[allow(clippy::collection_is_never_read)]
pub fn solve(size: i64, seed: u64) -> SolutionSet {
    let Some(dimension) = checked_size(size) else {
        return SolutionSet::new();
    };

    let mut heuristic = RandomHeuristic::new(seed);
    let mut solutions = SolutionSet::new();
    let mut closed: HashSet<String> = HashSet::new();
    let root_draw = heuristic.sample();
    let mut open = VecDeque::from([ScoredNode {
        assignment: Assignment::new(),
        cost: 0,
        heuristic: root_draw,
    }]);

    while !open.is_empty() {
        open.make_contiguous()
            .sort_by(|a, b| a.score().total_cmp(&b.score()));
        let Some(node) = open.pop_front() else {
            break;
        };

        if conflict(&node.assignment) {
            continue;
        }
        if node.assignment.len() == dimension {
            solutions.push(node.assignment);
            continue;
        }

        let next_cost = node.cost + 1;
        for assignment in frontier::expand(&node.assignment, dimension) {
            let draw = heuristic.sample();
            open.push_back(ScoredNode {
                assignment,
                cost: next_cost,
                heuristic: draw,
            });
        }
        closed.insert(node.assignment.cache_key());
    }

    solutions
}
