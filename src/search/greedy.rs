//! Constructive greedy placement by local conflict minimization

use crate::board::{Assignment, Placement, count_conflicts};
use crate::search::{SolutionSet, checked_size};

/// Build one candidate board per starting rank and keep the full ones
///
/// For each starting rank `s`, ranks `s..size` are filled in order by
/// choosing the file with the fewest conflicts against already-placed
/// queens (first minimum wins on ties) and appending it even when
/// conflicts remain. Ranks above `s` are never filled, so only `s = 0`
/// can produce a board with one queen per rank; the shorter candidates
/// are dropped by the length check. Recorded boards are not re-checked
/// against the conflict predicate, so a recorded board may still contain
/// attacking pairs. Both properties are structural to this strategy and
/// are kept as-is.
pub fn solve(size: i64) -> SolutionSet {
    let Some(dimension) = checked_size(size) else {
        return SolutionSet::new();
    };

    let mut solutions = SolutionSet::new();
    for start_row in 0..dimension {
        let candidate = place_from(dimension, start_row);
        if candidate.len() == dimension {
            solutions.push(candidate);
        }
    }

    solutions
}

/// Fill ranks `start_row..dimension` by local conflict minimization
fn place_from(dimension: usize, start_row: usize) -> Assignment {
    let mut queens: Vec<Placement> = Vec::new();

    for row in start_row..dimension {
        let mut min_conflicts = dimension;
        let mut chosen_col = None;
        for col in 0..dimension {
            let conflicts = count_conflicts(&queens, row, col);
            if conflicts < min_conflicts {
                min_conflicts = conflicts;
                chosen_col = Some(col);
            }
        }
        if let Some(col) = chosen_col {
            queens.push(Placement { row, col });
        }
    }

    Assignment::from(queens)
}
