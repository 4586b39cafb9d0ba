//! Queen placements and partially filled board assignments

/// A queen standing on a specific board square
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Zero-based rank, counted from the top of the board
    pub row: usize,
    /// Zero-based file, counted from the left of the board
    pub col: usize,
}

/// An ordered sequence of placements, one per rank
///
/// The length doubles as the search depth: during frontier search, rank `k`
/// is assigned by the `k`-th placement. Extending an assignment with
/// [`Assignment::child`] always produces an independent copy, so frontier
/// nodes never share mutable state. An assignment under construction may
/// transiently contain attacking pairs; such candidates are discarded when
/// the conflict predicate rejects them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Assignment {
    placements: Vec<Placement>,
}

impl Assignment {
    /// Create an assignment with no queens placed
    pub const fn new() -> Self {
        Self {
            placements: Vec::new(),
        }
    }

    /// Build an assignment from explicit (rank, file) pairs
    pub fn from_pairs(pairs: &[(usize, usize)]) -> Self {
        let placements = pairs
            .iter()
            .map(|&(row, col)| Placement { row, col })
            .collect();
        Self { placements }
    }

    /// Number of ranks filled so far
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Check whether no queen has been placed yet
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// The placements in rank order
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Extend into a fresh assignment with a queen on the next rank
    ///
    /// The new queen's rank is the current length, keeping ranks assigned
    /// consecutively from the top. The receiver is left untouched.
    pub fn child(&self, col: usize) -> Self {
        let mut placements = Vec::with_capacity(self.placements.len() + 1);
        placements.extend_from_slice(&self.placements);
        placements.push(Placement {
            row: self.placements.len(),
            col,
        });
        Self { placements }
    }

    /// File of each placement in rank order
    ///
    /// A compact form for comparing discovery orders across strategies.
    pub fn columns(&self) -> Vec<usize> {
        self.placements.iter().map(|placement| placement.col).collect()
    }

    /// Stable textual key identifying this assignment
    pub fn cache_key(&self) -> String {
        let pairs: Vec<String> = self
            .placements
            .iter()
            .map(|placement| format!("{},{}", placement.row, placement.col))
            .collect();
        pairs.join(";")
    }
}

impl From<Vec<Placement>> for Assignment {
    fn from(placements: Vec<Placement>) -> Self {
        Self { placements }
    }
}
