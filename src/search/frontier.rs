//! Frontier node types and the shared child-generation rule

use crate::board::Assignment;

/// Generate every child of a partial assignment
///
/// Appends one queen on the next rank for each file `0..size`, in
/// increasing file order. Each child is an independent copy of the parent;
/// conflicting children are generated too and rejected when popped.
pub fn expand(assignment: &Assignment, size: usize) -> Vec<Assignment> {
    (0..size).map(|col| assignment.child(col)).collect()
}

/// Frontier entry carrying the accumulated path cost
///
/// Every placement costs one unit, so the cost always equals the depth.
#[derive(Clone, Debug)]
pub struct CostNode {
    /// Partial assignment under construction
    pub assignment: Assignment,
    /// Accumulated cost, one unit per placement
    pub cost: usize,
}

/// Frontier entry carrying cost plus a randomized heuristic
#[derive(Clone, Debug)]
pub struct ScoredNode {
    /// Partial assignment under construction
    pub assignment: Assignment,
    /// Accumulated cost, one unit per placement
    pub cost: usize,
    /// Value drawn uniformly from [0, 1) when the node was created
    pub heuristic: f64,
}

impl ScoredNode {
    /// Ordering score: accumulated cost plus the heuristic draw
    pub fn score(&self) -> f64 {
        self.cost as f64 + self.heuristic
    }
}

/// Frontier entry carrying the expansion depth for bounded sweeps
#[derive(Clone, Debug)]
pub struct BoundedNode {
    /// Partial assignment under construction
    pub assignment: Assignment,
    /// Expansions from the root: the empty root is 0, each child adds one
    pub depth: usize,
}
