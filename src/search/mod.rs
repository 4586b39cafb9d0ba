//! The six search strategies and their shared frontier machinery
//!
//! Five strategies explore a frontier of partial assignments and differ
//! only in how the frontier is ordered and popped; the greedy solver
//! constructs candidate boards directly. All of them reuse the same
//! conflict predicate from [`crate::board`].

/// Randomized best-first enumeration ("A*" with a random heuristic)
pub mod best_first;
/// Breadth-first enumeration
pub mod bfs;
/// Depth-first enumeration
pub mod dfs;
/// Frontier node types and the shared child-generation rule
pub mod frontier;
/// Constructive greedy placement by local conflict minimization
pub mod greedy;
/// Seedable randomness source for the best-first heuristic
pub mod heuristic;
/// Iterative-deepening depth-first enumeration
pub mod iterative;
/// Uniform-cost enumeration
pub mod ucs;

use crate::board::Assignment;

/// Complete assignments recorded by one strategy, in discovery order
///
/// Discovery order depends on the strategy's frontier discipline and is
/// not comparable across strategies.
pub type SolutionSet = Vec<Assignment>;

/// The six available search strategies
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// LIFO frontier, explores the deepest candidate first
    DepthFirst,
    /// FIFO frontier, explores by increasing depth
    BreadthFirst,
    /// Frontier re-sorted by accumulated cost after every expansion
    UniformCost,
    /// Frontier re-sorted by cost plus a randomized heuristic before every pop
    BestFirst,
    /// One constructive candidate per starting rank, no frontier
    Greedy,
    /// Depth-bounded sweeps with an increasing bound
    IterativeDeepening,
}

impl Strategy {
    /// Every strategy in the fixed reporting order
    pub const ALL: [Self; 6] = [
        Self::DepthFirst,
        Self::BreadthFirst,
        Self::UniformCost,
        Self::BestFirst,
        Self::Greedy,
        Self::IterativeDeepening,
    ];

    /// Short display label used in reports
    pub const fn label(self) -> &'static str {
        match self {
            Self::DepthFirst => "DFS",
            Self::BreadthFirst => "BFS",
            Self::UniformCost => "UCS",
            Self::BestFirst => "A*",
            Self::Greedy => "Greedy",
            Self::IterativeDeepening => "IDDFS",
        }
    }

    /// Run this strategy for the given board size
    ///
    /// The seed feeds the best-first heuristic; the other strategies are
    /// deterministic and ignore it. Non-positive sizes yield an empty set
    /// for every strategy.
    pub fn solve(self, size: i64, seed: u64) -> SolutionSet {
        match self {
            Self::DepthFirst => dfs::solve(size),
            Self::BreadthFirst => bfs::solve(size),
            Self::UniformCost => ucs::solve(size),
            Self::BestFirst => best_first::solve(size, seed),
            Self::Greedy => greedy::solve(size),
            Self::IterativeDeepening => iterative::solve(size),
        }
    }
}

/// Convert a requested board size into a usable dimension
///
/// Returns `None` for sizes below one; callers then report an empty
/// solution set instead of searching.
pub fn checked_size(size: i64) -> Option<usize> {
    usize::try_from(size).ok().filter(|&dimension| dimension > 0)
}
